use crate::rows::parse_uuid;
use crate::{DbError, Result as DbErrorResult};

use fm_core::FuelType;

use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct FuelTypeRow {
    id: String,
    code: String,
    name: String,
    reference_density_kg_m3: f64,
}

impl TryFrom<FuelTypeRow> for FuelType {
    type Error = DbError;

    fn try_from(row: FuelTypeRow) -> DbErrorResult<Self> {
        Ok(FuelType {
            id: parse_uuid(&row.id, "fuel_types.id")?,
            code: row.code,
            name: row.name,
            reference_density_kg_m3: row.reference_density_kg_m3,
        })
    }
}

/// Global fuel type catalog. Seeded by migration, read-only at runtime.
pub struct FuelTypeRepository {
    pool: SqlitePool,
}

impl FuelTypeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<FuelType>> {
        let rows = sqlx::query_as::<_, FuelTypeRow>(
            r#"
            SELECT id, code, name, reference_density_kg_m3
            FROM fuel_types
            ORDER BY code ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(FuelType::try_from).collect()
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<FuelType>> {
        let row = sqlx::query_as::<_, FuelTypeRow>(
            r#"
            SELECT id, code, name, reference_density_kg_m3
            FROM fuel_types
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(FuelType::try_from).transpose()
    }

    pub async fn find_by_code(&self, code: &str) -> DbErrorResult<Option<FuelType>> {
        let row = sqlx::query_as::<_, FuelTypeRow>(
            r#"
            SELECT id, code, name, reference_density_kg_m3
            FROM fuel_types
            WHERE code = ?
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        row.map(FuelType::try_from).transpose()
    }
}
