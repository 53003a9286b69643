pub mod delete_response;
pub mod error;
pub mod extractors;
pub mod fuel_inventory;
pub mod fuel_quality;
pub mod me;
pub mod members;
pub mod price_predictions;
pub mod resolve;
pub mod ships;
