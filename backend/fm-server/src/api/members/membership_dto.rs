use fm_core::Membership;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MembershipDto {
    pub account_id: String,
    pub user_id: String,
    pub role: String,
    pub created_at: i64,
}

impl From<Membership> for MembershipDto {
    fn from(m: Membership) -> Self {
        Self {
            account_id: m.account_id.to_string(),
            user_id: m.user_id.to_string(),
            role: m.role.as_str().to_string(),
            created_at: m.created_at.timestamp(),
        }
    }
}
