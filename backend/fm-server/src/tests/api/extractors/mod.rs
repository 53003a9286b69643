mod account_member;
mod authenticated_user;
mod valid_json;
mod valid_query;
