pub mod calculate_and_save_request;
pub mod fuel_inventory;
pub mod fuel_inventory_dto;
pub mod fuel_inventory_list_response;
pub mod fuel_inventory_response;
pub mod fuel_type_dto;
pub mod fuel_type_list_response;
