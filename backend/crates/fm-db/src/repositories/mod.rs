pub mod account_repository;
pub mod fuel_inventory_repository;
pub mod fuel_quality_repository;
pub mod fuel_type_repository;
pub mod membership_repository;
pub mod price_prediction_repository;
pub mod ship_repository;
