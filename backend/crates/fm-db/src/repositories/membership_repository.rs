use crate::rows::{parse_role, parse_timestamp, parse_uuid};
use crate::{DbError, Result as DbErrorResult};

use fm_auth::{AuthError, MembershipStore, Result as AuthErrorResult};
use fm_core::Membership;

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct MembershipRow {
    account_id: String,
    user_id: String,
    role: String,
    created_at: i64,
}

impl TryFrom<MembershipRow> for Membership {
    type Error = DbError;

    fn try_from(row: MembershipRow) -> DbErrorResult<Self> {
        Ok(Membership {
            account_id: parse_uuid(&row.account_id, "accounts_memberships.account_id")?,
            user_id: parse_uuid(&row.user_id, "accounts_memberships.user_id")?,
            role: parse_role(&row.role, "accounts_memberships.role")?,
            created_at: parse_timestamp(row.created_at, "accounts_memberships.created_at")?,
        })
    }
}

/// Read access to `accounts_memberships`, plus the writes used when
/// provisioning accounts.
#[derive(Clone)]
pub struct MembershipRepository {
    pool: SqlitePool,
}

impl MembershipRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, membership: &Membership) -> DbErrorResult<()> {
        sqlx::query(
            r#"
            INSERT INTO accounts_memberships (account_id, user_id, role, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(membership.account_id.to_string())
        .bind(membership.user_id.to_string())
        .bind(membership.role.as_str())
        .bind(membership.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find(&self, account_id: Uuid, user_id: Uuid) -> DbErrorResult<Option<Membership>> {
        let row = sqlx::query_as::<_, MembershipRow>(
            r#"
            SELECT account_id, user_id, role, created_at
            FROM accounts_memberships
            WHERE account_id = ? AND user_id = ?
            "#,
        )
        .bind(account_id.to_string())
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Membership::try_from).transpose()
    }

    pub async fn find_by_account(&self, account_id: Uuid) -> DbErrorResult<Vec<Membership>> {
        let rows = sqlx::query_as::<_, MembershipRow>(
            r#"
            SELECT account_id, user_id, role, created_at
            FROM accounts_memberships
            WHERE account_id = ?
            ORDER BY created_at ASC, user_id ASC
            "#,
        )
        .bind(account_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Membership::try_from).collect()
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> DbErrorResult<Vec<Membership>> {
        let rows = sqlx::query_as::<_, MembershipRow>(
            r#"
            SELECT account_id, user_id, role, created_at
            FROM accounts_memberships
            WHERE user_id = ?
            ORDER BY created_at ASC, account_id ASC
            "#,
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Membership::try_from).collect()
    }
}

#[async_trait]
impl MembershipStore for MembershipRepository {
    async fn find_membership(
        &self,
        account_id: Uuid,
        user_id: Uuid,
    ) -> AuthErrorResult<Option<Membership>> {
        self.find(account_id, user_id)
            .await
            .map_err(|e| AuthError::MembershipLookup {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
