use crate::rows::{parse_timestamp, parse_uuid};
use crate::{DbError, Result as DbErrorResult};

use fm_core::PricePrediction;

use chrono::NaiveDate;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct PricePredictionRow {
    id: String,
    account_id: String,
    fuel_type_id: String,
    port: String,
    predicted_price_usd_mt: f64,
    prediction_date: NaiveDate,
    created_at: i64,
}

impl TryFrom<PricePredictionRow> for PricePrediction {
    type Error = DbError;

    fn try_from(row: PricePredictionRow) -> DbErrorResult<Self> {
        Ok(PricePrediction {
            id: parse_uuid(&row.id, "price_predictions.id")?,
            account_id: parse_uuid(&row.account_id, "price_predictions.account_id")?,
            fuel_type_id: parse_uuid(&row.fuel_type_id, "price_predictions.fuel_type_id")?,
            port: row.port,
            predicted_price_usd_mt: row.predicted_price_usd_mt,
            prediction_date: row.prediction_date,
            created_at: parse_timestamp(row.created_at, "price_predictions.created_at")?,
        })
    }
}

pub struct PricePredictionRepository {
    pool: SqlitePool,
}

impl PricePredictionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, prediction: &PricePrediction) -> DbErrorResult<()> {
        sqlx::query(
            r#"
            INSERT INTO price_predictions (
                id, account_id, fuel_type_id, port,
                predicted_price_usd_mt, prediction_date, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(prediction.id.to_string())
        .bind(prediction.account_id.to_string())
        .bind(prediction.fuel_type_id.to_string())
        .bind(&prediction.port)
        .bind(prediction.predicted_price_usd_mt)
        .bind(prediction.prediction_date)
        .bind(prediction.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Ordered by prediction date. `fuel_type_code` matches the catalog code
    /// (e.g. `VLSFO`), `port` is matched case-insensitively.
    pub async fn find_by_account(
        &self,
        account_id: Uuid,
        fuel_type_code: Option<&str>,
        port: Option<&str>,
    ) -> DbErrorResult<Vec<PricePrediction>> {
        let rows = sqlx::query_as::<_, PricePredictionRow>(
            r#"
            SELECT p.id, p.account_id, p.fuel_type_id, p.port,
                   p.predicted_price_usd_mt, p.prediction_date, p.created_at
            FROM price_predictions p
            JOIN fuel_types f ON f.id = p.fuel_type_id
            WHERE p.account_id = ?1
              AND (?2 IS NULL OR f.code = ?2)
              AND (?3 IS NULL OR p.port = ?3 COLLATE NOCASE)
            ORDER BY p.prediction_date ASC, p.port ASC
            "#,
        )
        .bind(account_id.to_string())
        .bind(fuel_type_code)
        .bind(port)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(PricePrediction::try_from).collect()
    }
}
