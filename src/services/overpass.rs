use crate::models::{Coordinate, NearbyRestaurants, Restaurant};
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

/// Placeholder for entities without a name tag
const UNNAMED: &str = "Unnamed";

/// Placeholder for entities with no address components
const NO_ADDRESS: &str = "N/A";

/// Errors that can occur while querying the Overpass API
#[derive(Debug, Error)]
pub enum OverpassError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Overpass returned error: {0}")]
    ApiError(String),

    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

/// OSM element kind. Nodes carry a point coordinate; ways and relations
/// carry a computed centroid when the query asks for `out center`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ElementKind {
    Node,
    Way,
    Relation,
}

#[derive(Debug, Deserialize)]
struct OverpassCenter {
    lat: f64,
    lon: f64,
}

/// One raw element from the Overpass response, validated into typed fields
/// at this boundary so no untyped maps escape the service.
#[derive(Debug, Deserialize)]
struct OverpassElement {
    #[serde(rename = "type")]
    kind: ElementKind,
    lat: Option<f64>,
    lon: Option<f64>,
    center: Option<OverpassCenter>,
    #[serde(default)]
    tags: HashMap<String, String>,
}

impl OverpassElement {
    /// Resolve the element's position: a node's own point, or the computed
    /// centroid for ways and relations. Elements with neither are dropped
    /// by the caller.
    fn position(&self) -> Option<Coordinate> {
        match self.kind {
            ElementKind::Node => match (self.lat, self.lon) {
                (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
                _ => None,
            },
            ElementKind::Way | ElementKind::Relation => self
                .center
                .as_ref()
                .map(|c| Coordinate::new(c.lat, c.lon)),
        }
    }

    /// Cuisine tokens split from the semicolon-delimited tag. An absent tag
    /// yields a single empty-string token, matching the source data shape.
    fn cuisine_tokens(&self) -> Vec<String> {
        self.tags
            .get("cuisine")
            .map(String::as_str)
            .unwrap_or("")
            .split(';')
            .map(str::to_string)
            .collect()
    }

    fn name(&self) -> String {
        self.tags
            .get("name")
            .cloned()
            .unwrap_or_else(|| UNNAMED.to_string())
    }

    /// Assemble an address from whichever components are tagged,
    /// comma-joined, or the placeholder when none are.
    fn address(&self) -> String {
        let parts: Vec<&str> = ["addr:housenumber", "addr:street", "addr:suburb", "addr:city"]
            .iter()
            .filter_map(|key| self.tags.get(*key))
            .map(String::as_str)
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            NO_ADDRESS.to_string()
        } else {
            parts.join(", ")
        }
    }
}

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    elements: Vec<OverpassElement>,
}

/// Client for the Overpass map-data query API
///
/// Issues one query per search for all restaurant-tagged entities within
/// a radius of the center, and normalizes the response into flat
/// `Restaurant` records plus the cuisine universe.
pub struct OverpassClient {
    endpoint: String,
    client: Client,
}

impl OverpassClient {
    pub fn new(endpoint: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { endpoint, client }
    }

    /// Fetch all restaurants within `radius_km` of the center.
    ///
    /// Cuisine tokens are accumulated into the universe before the
    /// coordinate check, so entities later dropped for a missing coordinate
    /// still contribute their tags.
    pub async fn fetch_nearby(
        &self,
        center: &Coordinate,
        radius_km: f64,
    ) -> Result<NearbyRestaurants, OverpassError> {
        let query = build_query(center, radius_km);

        tracing::debug!("Querying Overpass at {} (radius {}km)", self.endpoint, radius_km);

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(format!("data={}", urlencoding::encode(&query)))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(OverpassError::ApiError(format!(
                "query returned {}",
                response.status()
            )));
        }

        let body: OverpassResponse = response
            .json()
            .await
            .map_err(|e| OverpassError::InvalidResponse(format!("not an element set: {}", e)))?;

        Ok(normalize_elements(body.elements))
    }
}

/// Overpass QL selecting restaurant-tagged nodes, ways, and relations
/// around the center, with tags and computed centers.
fn build_query(center: &Coordinate, radius_km: f64) -> String {
    let radius_m = (radius_km * 1000.0) as i64;
    let (lat, lon) = (center.latitude, center.longitude);

    format!(
        r#"[out:json];
(
  node["amenity"="restaurant"](around:{radius_m},{lat},{lon});
  way["amenity"="restaurant"](around:{radius_m},{lat},{lon});
  relation["amenity"="restaurant"](around:{radius_m},{lat},{lon});
);
out center tags;"#
    )
}

fn normalize_elements(elements: Vec<OverpassElement>) -> NearbyRestaurants {
    let mut nearby = NearbyRestaurants::default();

    for element in elements {
        let tokens = element.cuisine_tokens();
        nearby.universe.extend(tokens.iter().cloned());

        // Entities with no resolvable coordinate never become a record,
        // but their tokens above stay in the universe.
        let coordinate = match element.position() {
            Some(c) => c,
            None => continue,
        };

        nearby.restaurants.push(Restaurant {
            name: element.name(),
            cuisines: tokens,
            address: element.address(),
            coordinate,
        });
    }

    nearby
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Vec<OverpassElement> {
        let response: OverpassResponse = serde_json::from_str(json).unwrap();
        response.elements
    }

    #[test]
    fn test_build_query_converts_radius_to_meters() {
        let query = build_query(&Coordinate::new(39.8, -89.64), 3.0);

        assert!(query.contains("around:3000,39.8,-89.64"));
        assert!(query.contains(r#"node["amenity"="restaurant"]"#));
        assert!(query.contains(r#"relation["amenity"="restaurant"]"#));
        assert!(query.contains("out center tags;"));
    }

    #[test]
    fn test_node_with_full_tags() {
        let elements = parse(
            r#"{"elements": [{
                "type": "node", "lat": 39.8, "lon": -89.6,
                "tags": {
                    "name": "Luigi's", "cuisine": "italian;pizza",
                    "addr:housenumber": "12", "addr:street": "Main St",
                    "addr:city": "Springfield"
                }
            }]}"#,
        );

        let nearby = normalize_elements(elements);

        assert_eq!(nearby.restaurants.len(), 1);
        let r = &nearby.restaurants[0];
        assert_eq!(r.name, "Luigi's");
        assert_eq!(r.cuisines, vec!["italian", "pizza"]);
        assert_eq!(r.address, "12, Main St, Springfield");
        assert!(nearby.universe.contains("italian"));
        assert!(nearby.universe.contains("pizza"));
    }

    #[test]
    fn test_way_uses_centroid() {
        let elements = parse(
            r#"{"elements": [{
                "type": "way",
                "center": {"lat": 39.81, "lon": -89.61},
                "tags": {"name": "Thai Garden", "cuisine": "thai"}
            }]}"#,
        );

        let nearby = normalize_elements(elements);

        assert_eq!(nearby.restaurants.len(), 1);
        assert_eq!(nearby.restaurants[0].coordinate, Coordinate::new(39.81, -89.61));
    }

    #[test]
    fn test_missing_coordinate_drops_record_but_keeps_tokens() {
        let elements = parse(
            r#"{"elements": [{
                "type": "relation",
                "tags": {"name": "Ghost Diner", "cuisine": "mexican"}
            }]}"#,
        );

        let nearby = normalize_elements(elements);

        assert!(nearby.restaurants.is_empty());
        assert!(nearby.universe.contains("mexican"));
    }

    #[test]
    fn test_missing_tags_get_placeholders() {
        let elements = parse(r#"{"elements": [{"type": "node", "lat": 39.8, "lon": -89.6}]}"#);

        let nearby = normalize_elements(elements);

        assert_eq!(nearby.restaurants.len(), 1);
        let r = &nearby.restaurants[0];
        assert_eq!(r.name, "Unnamed");
        assert_eq!(r.address, "N/A");
        // Absent cuisine tag yields a single empty token
        assert_eq!(r.cuisines, vec![String::new()]);
        assert!(nearby.universe.contains(""));
    }

    #[test]
    fn test_empty_address_components_skipped() {
        let elements = parse(
            r#"{"elements": [{
                "type": "node", "lat": 39.8, "lon": -89.6,
                "tags": {"addr:street": "Main St", "addr:suburb": ""}
            }]}"#,
        );

        let nearby = normalize_elements(elements);
        assert_eq!(nearby.restaurants[0].address, "Main St");
    }
}
