use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::maps::{MapsError, NearbyPage, NearbySearch, PlacesApi};
use crate::types::dto::geocoding::{GeocodeResponse, GeocodeResult};
use crate::types::dto::places::NearbySearchResponse;

const GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";
const NEARBY_SEARCH_URL: &str = "https://maps.googleapis.com/maps/api/place/nearbysearch/json";

/// Typed binding to the Google Maps web services, holding the HTTP client
/// and the API key. Constructed once and passed by reference.
pub struct MapsClient {
    http: Client,
    api_key: String,
}

impl MapsClient {
    pub fn new(http: Client, api_key: String) -> Self {
        Self { http, api_key }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<T, MapsError> {
        let response = self
            .http
            .get(url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// "ZERO_RESULTS" is an answer, not an error; everything else but "OK" is a
/// provider-level rejection.
fn ensure_ok(status: String, message: Option<String>) -> Result<(), MapsError> {
    if matches!(status.as_str(), "OK" | "ZERO_RESULTS") {
        Ok(())
    } else {
        Err(MapsError::Api { status, message })
    }
}

#[async_trait]
impl PlacesApi for MapsClient {
    async fn geocode(
        &self,
        query: &str,
        language: &str,
    ) -> Result<Vec<GeocodeResult>, MapsError> {
        info!(query = %query, "geocoding");
        let response: GeocodeResponse = self
            .get_json(GEOCODE_URL, &[("address", query), ("language", language)])
            .await?;
        ensure_ok(response.status, response.error_message)?;
        Ok(response.results)
    }

    async fn nearby_page(
        &self,
        search: &NearbySearch,
        page_token: Option<&str>,
    ) -> Result<NearbyPage, MapsError> {
        info!(
            keyword = %search.keyword,
            radius = search.radius,
            continuing = page_token.is_some(),
            "searching nearby places"
        );
        let location = format!("{},{}", search.location.lat, search.location.lng);
        let radius = search.radius.to_string();
        let mut params = vec![
            ("location", location.as_str()),
            ("radius", radius.as_str()),
            ("keyword", search.keyword.as_str()),
            ("type", search.place_type.as_str()),
            ("language", search.language.as_str()),
        ];
        if let Some(token) = page_token {
            params.push(("pagetoken", token));
        }
        let response: NearbySearchResponse = self.get_json(NEARBY_SEARCH_URL, &params).await?;
        ensure_ok(response.status, response.error_message)?;
        Ok(NearbyPage {
            results: response.results,
            next_page_token: response.next_page_token,
        })
    }
}
