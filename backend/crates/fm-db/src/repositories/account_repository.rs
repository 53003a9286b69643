use crate::rows::{parse_timestamp, parse_uuid};
use crate::{DbError, Result as DbErrorResult};

use fm_core::Account;

use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct AccountRow {
    id: String,
    name: String,
    slug: Option<String>,
    is_personal_account: bool,
    created_at: i64,
}

impl TryFrom<AccountRow> for Account {
    type Error = DbError;

    fn try_from(row: AccountRow) -> DbErrorResult<Self> {
        Ok(Account {
            id: parse_uuid(&row.id, "accounts.id")?,
            name: row.name,
            slug: row.slug,
            is_personal_account: row.is_personal_account,
            created_at: parse_timestamp(row.created_at, "accounts.created_at")?,
        })
    }
}

pub struct AccountRepository {
    pool: SqlitePool,
}

impl AccountRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, account: &Account) -> DbErrorResult<()> {
        sqlx::query(
            r#"
            INSERT INTO accounts (id, name, slug, is_personal_account, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(account.id.to_string())
        .bind(&account.name)
        .bind(&account.slug)
        .bind(account.is_personal_account)
        .bind(account.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, name, slug, is_personal_account, created_at
            FROM accounts
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Account::try_from).transpose()
    }
}
