pub mod api;
pub mod app_state;
pub mod authorizer;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::{
        account_member::{AccountMember, AccountOwner},
        authenticated_user::AuthenticatedUser,
        valid_json::ValidJson,
        valid_query::ValidQuery,
    },
    fuel_inventory::{
        calculate_and_save_request::CalculateAndSaveRequest,
        fuel_inventory::{calculate_and_save, list_fuel_types, list_ship_inventory},
        fuel_inventory_dto::FuelInventoryDto,
        fuel_inventory_list_response::FuelInventoryListResponse,
        fuel_inventory_response::FuelInventoryResponse,
        fuel_type_dto::FuelTypeDto,
        fuel_type_list_response::FuelTypeListResponse,
    },
    fuel_quality::{
        create_fuel_quality_request::CreateFuelQualityRequest,
        fuel_quality::{create_fuel_quality, list_fuel_quality},
        fuel_quality_dto::FuelQualityDto,
        fuel_quality_list_response::FuelQualityListResponse,
        fuel_quality_response::FuelQualityResponse,
        list_fuel_quality_query::ListFuelQualityQuery,
    },
    me::{identity_dto::IdentityDto, me::get_me, me_response::MeResponse},
    members::{
        member_list_response::MemberListResponse, members::list_members,
        membership_dto::MembershipDto,
    },
    price_predictions::{
        list_price_predictions_query::ListPricePredictionsQuery,
        price_prediction_dto::PricePredictionDto,
        price_prediction_list_response::PricePredictionListResponse,
        price_predictions::list_price_predictions,
    },
    ships::{
        create_ship_request::CreateShipRequest,
        ship_dto::ShipDto,
        ship_list_response::ShipListResponse,
        ship_response::ShipResponse,
        ships::{create_ship, delete_ship, get_ship, list_ships},
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
