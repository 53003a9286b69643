pub mod list_price_predictions_query;
pub mod price_prediction_dto;
pub mod price_prediction_list_response;
pub mod price_predictions;
