pub mod connection;
pub mod error;
pub mod repositories;
mod rows;

pub use connection::{open_pool, run_migrations};
pub use error::{DbError, Result};
pub use repositories::account_repository::AccountRepository;
pub use repositories::fuel_inventory_repository::FuelInventoryRepository;
pub use repositories::fuel_quality_repository::FuelQualityRepository;
pub use repositories::fuel_type_repository::FuelTypeRepository;
pub use repositories::membership_repository::MembershipRepository;
pub use repositories::price_prediction_repository::PricePredictionRepository;
pub use repositories::ship_repository::ShipRepository;
