use crate::models::Coordinate;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while geocoding a place name
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("geocoding service returned error: {0}")]
    ApiError(String),

    #[error("no results for place: {0}")]
    NoResults(String),

    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

/// Nominatim search result item. Nominatim serializes coordinates as
/// strings, not numbers.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

/// Client for the Nominatim geocoding API
///
/// Resolves a free-text place name to a coordinate. One request per search,
/// bounded by a fixed timeout, no retries.
pub struct GeocoderClient {
    endpoint: String,
    client: Client,
}

impl GeocoderClient {
    /// Create a new geocoder client.
    ///
    /// Nominatim's usage policy requires an identifying User-Agent.
    pub fn new(endpoint: String, user_agent: &str, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()
            .expect("Failed to create HTTP client");

        Self { endpoint, client }
    }

    /// Resolve a place name to its first/best coordinate
    pub async fn geocode(&self, place: &str) -> Result<Coordinate, GeocodeError> {
        let url = format!(
            "{}/search?q={}&format=json&limit=1",
            self.endpoint.trim_end_matches('/'),
            urlencoding::encode(place)
        );

        tracing::debug!("Geocoding {:?} via {}", place, self.endpoint);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(GeocodeError::ApiError(format!(
                "geocode request returned {}",
                response.status()
            )));
        }

        let places: Vec<NominatimPlace> = response
            .json()
            .await
            .map_err(|e| GeocodeError::InvalidResponse(format!("not a result array: {}", e)))?;

        let first = places
            .into_iter()
            .next()
            .ok_or_else(|| GeocodeError::NoResults(place.to_string()))?;

        let latitude: f64 = first
            .lat
            .parse()
            .map_err(|_| GeocodeError::InvalidResponse(format!("bad latitude: {}", first.lat)))?;
        let longitude: f64 = first
            .lon
            .parse()
            .map_err(|_| GeocodeError::InvalidResponse(format!("bad longitude: {}", first.lon)))?;

        Ok(Coordinate::new(latitude, longitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = GeocoderClient::new(
            "https://nominatim.openstreetmap.org".to_string(),
            "settled/0.1",
            5,
        );

        assert_eq!(client.endpoint, "https://nominatim.openstreetmap.org");
    }

    #[test]
    fn test_parse_nominatim_place() {
        let json = r#"[{"lat": "39.7990175", "lon": "-89.6439575", "display_name": "Springfield"}]"#;
        let places: Vec<NominatimPlace> = serde_json::from_str(json).unwrap();

        assert_eq!(places.len(), 1);
        assert_eq!(places[0].lat, "39.7990175");
    }
}
