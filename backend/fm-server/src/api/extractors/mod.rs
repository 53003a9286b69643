pub mod account_member;
pub mod authenticated_user;
pub mod valid_json;
pub mod valid_query;
