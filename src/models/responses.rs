use crate::models::domain::{Restaurant, SearchOutcome};
use serde::{Deserialize, Serialize};

/// One restaurant as presented to the client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantView {
    pub name: String,
    pub cuisines: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&Restaurant> for RestaurantView {
    fn from(restaurant: &Restaurant) -> Self {
        Self {
            name: restaurant.name.clone(),
            cuisines: restaurant.cuisines_joined(),
            address: restaurant.address.clone(),
            latitude: restaurant.coordinate.latitude,
            longitude: restaurant.coordinate.longitude,
        }
    }
}

/// Response for the search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// All distinct cuisine tags found in the area, sorted
    pub cuisines: Vec<String>,
    #[serde(rename = "matchedA")]
    pub matched_a: Option<String>,
    #[serde(rename = "matchedB")]
    pub matched_b: Option<String>,
    pub shortlist: Vec<RestaurantView>,
}

impl From<&SearchOutcome> for SearchResponse {
    fn from(outcome: &SearchOutcome) -> Self {
        Self {
            cuisines: outcome.cuisines.iter().cloned().collect(),
            matched_a: outcome.matched_a.clone(),
            matched_b: outcome.matched_b.clone(),
            shortlist: outcome.shortlist.iter().map(RestaurantView::from).collect(),
        }
    }
}

/// Response for the settle endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettleResponse {
    pub pick: RestaurantView,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
