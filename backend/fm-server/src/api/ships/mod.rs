pub mod create_ship_request;
pub mod ship_dto;
pub mod ship_list_response;
pub mod ship_response;
pub mod ships;
