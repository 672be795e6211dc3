use serde::Deserialize;

use crate::types::model::place::{PlaceRecord, Rating};

#[derive(Deserialize, Debug)]
pub struct NearbySearchResponse {
    pub status: String,
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<NearbyPlace>,
    pub next_page_token: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct NearbyPlace {
    pub name: String,
    pub vicinity: Option<String>,
    pub rating: Option<f64>,
}

impl From<NearbyPlace> for PlaceRecord {
    fn from(place: NearbyPlace) -> Self {
        Self {
            name: place.name,
            address: place.vicinity,
            rating: Rating::from(place.rating),
        }
    }
}
