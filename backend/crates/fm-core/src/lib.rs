pub mod error;
pub mod fuel;
pub mod models;

pub use error::{CoreError, Result};
pub use fuel::{FuelReading, calculate_mass};
pub use models::account::Account;
pub use models::fuel_inventory::FuelInventoryRecord;
pub use models::fuel_quality::FuelQualityRecord;
pub use models::fuel_type::FuelType;
pub use models::identity::Identity;
pub use models::membership::Membership;
pub use models::price_prediction::PricePrediction;
pub use models::role::Role;
pub use models::ship::Ship;

#[cfg(test)]
mod tests;
