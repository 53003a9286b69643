use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateShipRequest {
    /// Ship name (required)
    pub name: String,

    /// Seven digit IMO number
    #[serde(default)]
    pub imo_number: Option<String>,
}
