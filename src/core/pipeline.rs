use crate::core::{filters::filter_and_truncate, matcher::match_best};
use crate::models::SearchOutcome;
use crate::services::{GeocoderClient, OverpassClient, OverpassError};
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced at the pipeline boundary. All of them are recoverable:
/// the user retries with different inputs, nothing is retried automatically.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("could not resolve place: {0}")]
    PlaceNotFound(String),

    #[error("map-data query failed: {0}")]
    QueryService(#[from] OverpassError),

    #[error("no restaurants matched either cuisine")]
    EmptyShortlist,
}

/// The search pipeline: geocode -> fetch -> match -> filter.
///
/// Stages run strictly in sequence; a geocoding failure terminates the run
/// before any map-data query is issued.
#[derive(Clone)]
pub struct SearchPipeline {
    geocoder: Arc<GeocoderClient>,
    overpass: Arc<OverpassClient>,
}

impl SearchPipeline {
    pub fn new(geocoder: Arc<GeocoderClient>, overpass: Arc<OverpassClient>) -> Self {
        Self { geocoder, overpass }
    }

    /// Run one full search.
    ///
    /// Any geocoder failure (network, timeout, zero results) collapses to
    /// `PlaceNotFound`. An empty shortlist is not an error here; it is
    /// reported as an outcome and only becomes `EmptyShortlist` when the
    /// caller tries to settle on it.
    pub async fn run(
        &self,
        city: &str,
        cuisine_a: &str,
        cuisine_b: &str,
        radius_km: f64,
    ) -> Result<SearchOutcome, SearchError> {
        let center = self.geocoder.geocode(city).await.map_err(|e| {
            tracing::info!("Geocoding failed for {:?}: {}", city, e);
            SearchError::PlaceNotFound(city.to_string())
        })?;

        tracing::debug!(
            "Resolved {:?} to ({}, {})",
            city,
            center.latitude,
            center.longitude
        );

        let nearby = self.overpass.fetch_nearby(&center, radius_km).await?;

        tracing::debug!(
            "Fetched {} restaurants, {} distinct cuisine tags",
            nearby.restaurants.len(),
            nearby.universe.len()
        );

        let matched_a = match_best(cuisine_a, &nearby.universe);
        let matched_b = match_best(cuisine_b, &nearby.universe);

        let shortlist = filter_and_truncate(
            nearby.restaurants,
            matched_a.as_deref(),
            matched_b.as_deref(),
        );

        Ok(SearchOutcome {
            cuisines: nearby.universe,
            matched_a,
            matched_b,
            shortlist,
        })
    }
}
