use fm_core::{FuelInventoryRecord, FuelQualityRecord, PricePrediction, Ship};

use chrono::{Duration, NaiveDate, Utc};
use uuid::Uuid;

pub fn create_test_ship(account_id: Uuid, user_id: Uuid, name: &str) -> Ship {
    Ship::new(account_id, name.to_string(), Some("9074729".to_string()), user_id)
}

/// Inventory record `minutes_ago` minutes in the past
pub fn create_test_inventory(
    account_id: Uuid,
    ship_id: Uuid,
    fuel_type_id: Uuid,
    user_id: Uuid,
    minutes_ago: i64,
) -> FuelInventoryRecord {
    FuelInventoryRecord {
        id: Uuid::new_v4(),
        account_id,
        ship_id,
        fuel_type_id,
        volume_m3: 100.0,
        density_kg_m3: 991.0,
        temperature_c: 15.0,
        mass_mt: 99.1,
        recorded_at: Utc::now() - Duration::minutes(minutes_ago),
        created_by: user_id,
    }
}

pub fn create_test_quality(
    account_id: Uuid,
    ship_id: Uuid,
    fuel_type_id: Uuid,
    user_id: Uuid,
    minutes_ago: i64,
) -> FuelQualityRecord {
    FuelQualityRecord {
        id: Uuid::new_v4(),
        account_id,
        ship_id,
        fuel_type_id,
        density_15c_kg_m3: 950.5,
        viscosity_cst: Some(380.0),
        sulphur_pct: Some(0.48),
        water_pct: None,
        sampled_at: Utc::now() - Duration::minutes(minutes_ago),
        created_by: user_id,
    }
}

pub fn create_test_prediction(
    account_id: Uuid,
    fuel_type_id: Uuid,
    port: &str,
    date: NaiveDate,
) -> PricePrediction {
    PricePrediction {
        id: Uuid::new_v4(),
        account_id,
        fuel_type_id,
        port: port.to_string(),
        predicted_price_usd_mt: 612.25,
        prediction_date: date,
        created_at: Utc::now(),
    }
}
