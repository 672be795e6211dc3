use tracing::instrument;

use crate::maps::{MapsError, PlacesApi};
use crate::types::model::landmark::Landmark;

/// Resolve a free-text landmark name through the geocoder. `Ok(None)` means
/// the provider knows no such place; the first result wins otherwise.
#[instrument(skip(provider))]
pub async fn resolve_landmark(
    provider: &impl PlacesApi,
    name: &str,
    language: &str,
) -> Result<Option<Landmark>, MapsError> {
    let results = provider.geocode(name, language).await?;
    let Some(first) = results.into_iter().next() else {
        return Ok(None);
    };
    let postal_code = first
        .address_components
        .iter()
        .find(|component| component.types.iter().any(|kind| kind == "postal_code"))
        .map(|component| component.long_name.clone());
    Ok(Some(Landmark {
        address: first.formatted_address,
        postal_code,
        location: first.geometry.location,
    }))
}
