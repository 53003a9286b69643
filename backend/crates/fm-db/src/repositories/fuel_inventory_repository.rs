use crate::rows::{parse_timestamp, parse_uuid};
use crate::{DbError, Result as DbErrorResult};

use fm_core::FuelInventoryRecord;

use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct FuelInventoryRow {
    id: String,
    account_id: String,
    ship_id: String,
    fuel_type_id: String,
    volume_m3: f64,
    density_kg_m3: f64,
    temperature_c: f64,
    mass_mt: f64,
    recorded_at: i64,
    created_by: String,
}

impl TryFrom<FuelInventoryRow> for FuelInventoryRecord {
    type Error = DbError;

    fn try_from(row: FuelInventoryRow) -> DbErrorResult<Self> {
        Ok(FuelInventoryRecord {
            id: parse_uuid(&row.id, "fuel_inventory.id")?,
            account_id: parse_uuid(&row.account_id, "fuel_inventory.account_id")?,
            ship_id: parse_uuid(&row.ship_id, "fuel_inventory.ship_id")?,
            fuel_type_id: parse_uuid(&row.fuel_type_id, "fuel_inventory.fuel_type_id")?,
            volume_m3: row.volume_m3,
            density_kg_m3: row.density_kg_m3,
            temperature_c: row.temperature_c,
            mass_mt: row.mass_mt,
            recorded_at: parse_timestamp(row.recorded_at, "fuel_inventory.recorded_at")?,
            created_by: parse_uuid(&row.created_by, "fuel_inventory.created_by")?,
        })
    }
}

pub struct FuelInventoryRepository {
    pool: SqlitePool,
}

impl FuelInventoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, record: &FuelInventoryRecord) -> DbErrorResult<()> {
        sqlx::query(
            r#"
            INSERT INTO fuel_inventory (
                id, account_id, ship_id, fuel_type_id,
                volume_m3, density_kg_m3, temperature_c, mass_mt,
                recorded_at, created_by
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.id.to_string())
        .bind(record.account_id.to_string())
        .bind(record.ship_id.to_string())
        .bind(record.fuel_type_id.to_string())
        .bind(record.volume_m3)
        .bind(record.density_kg_m3)
        .bind(record.temperature_c)
        .bind(record.mass_mt)
        .bind(record.recorded_at.timestamp())
        .bind(record.created_by.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Newest first.
    pub async fn find_by_ship(
        &self,
        account_id: Uuid,
        ship_id: Uuid,
    ) -> DbErrorResult<Vec<FuelInventoryRecord>> {
        let rows = sqlx::query_as::<_, FuelInventoryRow>(
            r#"
            SELECT id, account_id, ship_id, fuel_type_id,
                   volume_m3, density_kg_m3, temperature_c, mass_mt,
                   recorded_at, created_by
            FROM fuel_inventory
            WHERE account_id = ? AND ship_id = ?
            ORDER BY recorded_at DESC, rowid DESC
            "#,
        )
        .bind(account_id.to_string())
        .bind(ship_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(FuelInventoryRecord::try_from).collect()
    }
}
