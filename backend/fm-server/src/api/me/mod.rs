pub mod identity_dto;
pub mod me;
pub mod me_response;
