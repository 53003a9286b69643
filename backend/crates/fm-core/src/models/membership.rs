use crate::Role;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Grants a user a role within an account. One row per (account, user).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    pub account_id: Uuid,
    pub user_id: Uuid,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl Membership {
    pub fn new(account_id: Uuid, user_id: Uuid, role: Role) -> Self {
        Self {
            account_id,
            user_id,
            role,
            created_at: Utc::now(),
        }
    }

    pub fn is_owner(&self) -> bool {
        self.role == Role::Owner
    }
}
