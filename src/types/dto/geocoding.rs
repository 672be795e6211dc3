use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct GeocodeResponse {
    pub status: String,
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GeocodeResult {
    pub formatted_address: String,
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
    pub geometry: Geometry,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AddressComponent {
    pub long_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}
