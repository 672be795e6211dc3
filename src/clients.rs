use std::env;
use std::time::Duration;

use color_eyre::eyre::{Result, WrapErr};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::maps::MapsClient;

pub const API_KEY_VAR: &str = "PLACE_SCOUT_GOOGLE_API_KEY";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub fn maps_client_from_env() -> Result<MapsClient> {
    let api_key = env::var(API_KEY_VAR).wrap_err_with(|| format!("{API_KEY_VAR} is not set"))?;
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(concat!("place-scout/", env!("CARGO_PKG_VERSION"))),
    );
    let http = reqwest::Client::builder()
        .default_headers(headers)
        .timeout(REQUEST_TIMEOUT)
        .build()?;
    Ok(MapsClient::new(http, api_key))
}
