use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An authenticated user as reported by the identity provider.
///
/// Never persisted by this service; it only lives for the duration of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub email: Option<String>,
}

impl Identity {
    pub fn new(id: Uuid, email: Option<String>) -> Self {
        Self { id, email }
    }
}
