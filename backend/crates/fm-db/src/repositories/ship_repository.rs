use crate::rows::{parse_timestamp, parse_uuid};
use crate::{DbError, Result as DbErrorResult};

use fm_core::Ship;

use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct ShipRow {
    id: String,
    account_id: String,
    name: String,
    imo_number: Option<String>,
    created_at: i64,
    created_by: String,
}

impl TryFrom<ShipRow> for Ship {
    type Error = DbError;

    fn try_from(row: ShipRow) -> DbErrorResult<Self> {
        Ok(Ship {
            id: parse_uuid(&row.id, "ships.id")?,
            account_id: parse_uuid(&row.account_id, "ships.account_id")?,
            name: row.name,
            imo_number: row.imo_number,
            created_at: parse_timestamp(row.created_at, "ships.created_at")?,
            created_by: parse_uuid(&row.created_by, "ships.created_by")?,
        })
    }
}

pub struct ShipRepository {
    pool: SqlitePool,
}

impl ShipRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, ship: &Ship) -> DbErrorResult<()> {
        sqlx::query(
            r#"
            INSERT INTO ships (id, account_id, name, imo_number, created_at, created_by)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(ship.id.to_string())
        .bind(ship.account_id.to_string())
        .bind(&ship.name)
        .bind(&ship.imo_number)
        .bind(ship.created_at.timestamp())
        .bind(ship.created_by.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Ship>> {
        let row = sqlx::query_as::<_, ShipRow>(
            r#"
            SELECT id, account_id, name, imo_number, created_at, created_by
            FROM ships
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Ship::try_from).transpose()
    }

    pub async fn find_by_account(&self, account_id: Uuid) -> DbErrorResult<Vec<Ship>> {
        let rows = sqlx::query_as::<_, ShipRow>(
            r#"
            SELECT id, account_id, name, imo_number, created_at, created_by
            FROM ships
            WHERE account_id = ?
            ORDER BY name ASC
            "#,
        )
        .bind(account_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Ship::try_from).collect()
    }

    /// Deletes the ship only if it belongs to `account_id`.
    /// Returns whether a row was removed.
    pub async fn delete(&self, account_id: Uuid, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM ships
            WHERE id = ? AND account_id = ?
            "#,
        )
        .bind(id.to_string())
        .bind(account_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
