//! The mapping-provider boundary: the two operations the rest of the tool
//! consumes, a typed HTTP client implementing them, and the error taxonomy
//! for everything that can go wrong at that boundary.

pub mod client;
pub mod error;

pub use client::MapsClient;
pub use error::MapsError;

use async_trait::async_trait;

use crate::types::dto::geocoding::{GeocodeResult, LatLng};
use crate::types::dto::places::NearbyPlace;

/// Parameters of a nearby-places search, shared by every page request.
#[derive(Debug, Clone)]
pub struct NearbySearch {
    pub location: LatLng,
    pub radius: u32,
    pub keyword: String,
    pub place_type: String,
    pub language: String,
}

/// One page of nearby-search results. A present token means the provider
/// holds more pages.
#[derive(Debug)]
pub struct NearbyPage {
    pub results: Vec<NearbyPlace>,
    pub next_page_token: Option<String>,
}

#[async_trait]
pub trait PlacesApi {
    async fn geocode(&self, query: &str, language: &str)
        -> Result<Vec<GeocodeResult>, MapsError>;

    async fn nearby_page(
        &self,
        search: &NearbySearch,
        page_token: Option<&str>,
    ) -> Result<NearbyPage, MapsError>;
}
