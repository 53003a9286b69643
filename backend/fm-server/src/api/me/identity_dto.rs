use fm_core::Identity;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct IdentityDto {
    pub id: String,
    pub email: Option<String>,
}

impl From<Identity> for IdentityDto {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id.to_string(),
            email: identity.email,
        }
    }
}
