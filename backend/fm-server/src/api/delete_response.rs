use serde::Serialize;

/// Response for successful delete operations
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted_id: String,
}
