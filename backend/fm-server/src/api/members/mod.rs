pub mod member_list_response;
pub mod members;
pub mod membership_dto;
