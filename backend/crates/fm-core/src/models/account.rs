//! Account entity - the tenant that owns ships and fuel data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A tenant, either a personal account or a team account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    /// URL-safe unique identifier (team accounts only)
    pub slug: Option<String>,
    pub is_personal_account: bool,
    pub created_at: DateTime<Utc>,
}

impl Account {
    pub fn new_team(name: String, slug: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            slug: Some(slug),
            is_personal_account: false,
            created_at: Utc::now(),
        }
    }

    pub fn new_personal(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            slug: None,
            is_personal_account: true,
            created_at: Utc::now(),
        }
    }
}
