use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListFuelQualityQuery {
    /// Restrict to one ship
    pub ship_id: Option<String>,
}
