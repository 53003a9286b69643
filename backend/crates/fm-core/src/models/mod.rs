pub mod account;
pub mod fuel_inventory;
pub mod fuel_quality;
pub mod fuel_type;
pub mod identity;
pub mod membership;
pub mod price_prediction;
pub mod role;
pub mod ship;
