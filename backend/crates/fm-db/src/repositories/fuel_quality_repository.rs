use crate::rows::{parse_timestamp, parse_uuid};
use crate::{DbError, Result as DbErrorResult};

use fm_core::FuelQualityRecord;

use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct FuelQualityRow {
    id: String,
    account_id: String,
    ship_id: String,
    fuel_type_id: String,
    density_15c_kg_m3: f64,
    viscosity_cst: Option<f64>,
    sulphur_pct: Option<f64>,
    water_pct: Option<f64>,
    sampled_at: i64,
    created_by: String,
}

impl TryFrom<FuelQualityRow> for FuelQualityRecord {
    type Error = DbError;

    fn try_from(row: FuelQualityRow) -> DbErrorResult<Self> {
        Ok(FuelQualityRecord {
            id: parse_uuid(&row.id, "fuel_quality.id")?,
            account_id: parse_uuid(&row.account_id, "fuel_quality.account_id")?,
            ship_id: parse_uuid(&row.ship_id, "fuel_quality.ship_id")?,
            fuel_type_id: parse_uuid(&row.fuel_type_id, "fuel_quality.fuel_type_id")?,
            density_15c_kg_m3: row.density_15c_kg_m3,
            viscosity_cst: row.viscosity_cst,
            sulphur_pct: row.sulphur_pct,
            water_pct: row.water_pct,
            sampled_at: parse_timestamp(row.sampled_at, "fuel_quality.sampled_at")?,
            created_by: parse_uuid(&row.created_by, "fuel_quality.created_by")?,
        })
    }
}

pub struct FuelQualityRepository {
    pool: SqlitePool,
}

impl FuelQualityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, record: &FuelQualityRecord) -> DbErrorResult<()> {
        sqlx::query(
            r#"
            INSERT INTO fuel_quality (
                id, account_id, ship_id, fuel_type_id,
                density_15c_kg_m3, viscosity_cst, sulphur_pct, water_pct,
                sampled_at, created_by
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.id.to_string())
        .bind(record.account_id.to_string())
        .bind(record.ship_id.to_string())
        .bind(record.fuel_type_id.to_string())
        .bind(record.density_15c_kg_m3)
        .bind(record.viscosity_cst)
        .bind(record.sulphur_pct)
        .bind(record.water_pct)
        .bind(record.sampled_at.timestamp())
        .bind(record.created_by.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Newest first, optionally narrowed to one ship.
    pub async fn find_by_account(
        &self,
        account_id: Uuid,
        ship_id: Option<Uuid>,
    ) -> DbErrorResult<Vec<FuelQualityRecord>> {
        let rows = sqlx::query_as::<_, FuelQualityRow>(
            r#"
            SELECT id, account_id, ship_id, fuel_type_id,
                   density_15c_kg_m3, viscosity_cst, sulphur_pct, water_pct,
                   sampled_at, created_by
            FROM fuel_quality
            WHERE account_id = ?1 AND (?2 IS NULL OR ship_id = ?2)
            ORDER BY sampled_at DESC, rowid DESC
            "#,
        )
        .bind(account_id.to_string())
        .bind(ship_id.map(|id| id.to_string()))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(FuelQualityRecord::try_from).collect()
    }
}
