use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::maps::{MapsError, NearbyPage, NearbySearch, PlacesApi};
use crate::types::dto::geocoding::{AddressComponent, GeocodeResult, Geometry, LatLng};
use crate::types::dto::places::NearbyPlace;

/// Provider double replaying scripted outcomes in order. A call with no
/// outcome left is a test bug and panics.
pub struct ScriptedProvider {
    geocode_outcomes: Mutex<VecDeque<Result<Vec<GeocodeResult>, MapsError>>>,
    page_outcomes: Mutex<VecDeque<Result<NearbyPage, MapsError>>>,
    pub geocode_calls: AtomicUsize,
    pub nearby_calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn new(
        geocode_outcomes: Vec<Result<Vec<GeocodeResult>, MapsError>>,
        page_outcomes: Vec<Result<NearbyPage, MapsError>>,
    ) -> Self {
        Self {
            geocode_outcomes: Mutex::new(VecDeque::from(geocode_outcomes)),
            page_outcomes: Mutex::new(VecDeque::from(page_outcomes)),
            geocode_calls: AtomicUsize::new(0),
            nearby_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl PlacesApi for ScriptedProvider {
    async fn geocode(
        &self,
        _query: &str,
        _language: &str,
    ) -> Result<Vec<GeocodeResult>, MapsError> {
        self.geocode_calls.fetch_add(1, Ordering::SeqCst);
        self.geocode_outcomes
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted geocode call")
    }

    async fn nearby_page(
        &self,
        _search: &NearbySearch,
        _page_token: Option<&str>,
    ) -> Result<NearbyPage, MapsError> {
        self.nearby_calls.fetch_add(1, Ordering::SeqCst);
        self.page_outcomes
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted nearby_page call")
    }
}

pub fn geocode_result(
    address: &str,
    postal_code: Option<&str>,
    lat: f64,
    lng: f64,
) -> GeocodeResult {
    let mut address_components = vec![AddressComponent {
        long_name: "信義區".to_string(),
        types: vec!["administrative_area_level_3".to_string(), "political".to_string()],
    }];
    if let Some(code) = postal_code {
        address_components.push(AddressComponent {
            long_name: code.to_string(),
            types: vec!["postal_code".to_string()],
        });
    }
    GeocodeResult {
        formatted_address: address.to_string(),
        address_components,
        geometry: Geometry {
            location: LatLng { lat, lng },
        },
    }
}

pub fn place(name: &str, vicinity: Option<&str>, rating: Option<f64>) -> NearbyPlace {
    NearbyPlace {
        name: name.to_string(),
        vicinity: vicinity.map(str::to_string),
        rating,
    }
}

pub fn page(results: Vec<NearbyPlace>, next_page_token: Option<&str>) -> NearbyPage {
    NearbyPage {
        results,
        next_page_token: next_page_token.map(str::to_string),
    }
}

pub fn taipei_101_search(keyword: &str) -> NearbySearch {
    NearbySearch {
        location: LatLng {
            lat: 25.033976,
            lng: 121.564539,
        },
        radius: 500,
        keyword: keyword.to_string(),
        place_type: "point_of_interest".to_string(),
        language: "zh-TW".to_string(),
    }
}

pub fn api_error() -> MapsError {
    MapsError::Api {
        status: "OVER_QUERY_LIMIT".to_string(),
        message: Some("quota exceeded".to_string()),
    }
}

/// A fresh per-test output directory under the system temp dir.
pub fn temp_output_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("place-scout-{tag}-{}", std::process::id()));
    if dir.exists() {
        fs::remove_dir_all(&dir).unwrap();
    }
    fs::create_dir_all(&dir).unwrap();
    dir
}
