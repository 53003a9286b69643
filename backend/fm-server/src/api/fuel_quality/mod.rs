pub mod create_fuel_quality_request;
pub mod fuel_quality;
pub mod fuel_quality_dto;
pub mod fuel_quality_list_response;
pub mod fuel_quality_response;
pub mod list_fuel_quality_query;
