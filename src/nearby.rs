use std::time::Duration;

use tokio::time::sleep;
use tracing::instrument;

use crate::maps::{MapsError, NearbySearch, PlacesApi};
use crate::types::model::place::PlaceRecord;

/// Everything a paged nearby search produced. When a page fetch fails the
/// sweep keeps what it already collected and carries the error alongside,
/// so partial results stay usable.
#[derive(Debug)]
pub struct NearbySweep {
    pub places: Vec<PlaceRecord>,
    pub interrupted: Option<MapsError>,
}

/// Walk the paged nearby search to exhaustion, accumulating records in
/// provider order. `pacing` is slept between pages; the provider needs a
/// moment before a freshly issued token becomes valid.
#[instrument(skip(provider))]
pub async fn collect_nearby(
    provider: &impl PlacesApi,
    search: &NearbySearch,
    pacing: Duration,
) -> NearbySweep {
    let mut places = Vec::new();
    let mut page_token: Option<String> = None;
    loop {
        let page = match provider.nearby_page(search, page_token.as_deref()).await {
            Ok(page) => page,
            Err(error) => {
                return NearbySweep {
                    places,
                    interrupted: Some(error),
                }
            }
        };
        places.extend(page.results.into_iter().map(PlaceRecord::from));
        match page.next_page_token {
            Some(token) => {
                sleep(pacing).await;
                page_token = Some(token);
            }
            None => {
                return NearbySweep {
                    places,
                    interrupted: None,
                }
            }
        }
    }
}
