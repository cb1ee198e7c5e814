use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to run a restaurant search
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "city", rename = "city")]
    pub city: String,
    #[serde(default)]
    #[serde(alias = "cuisine_a", rename = "cuisineA")]
    pub cuisine_a: String,
    #[serde(default)]
    #[serde(alias = "cuisine_b", rename = "cuisineB")]
    pub cuisine_b: String,
    /// Search radius in kilometers, bounded to the UI slider range
    #[validate(range(min = 1.0, max = 10.0))]
    #[serde(default = "default_radius_km")]
    #[serde(alias = "radius_km", rename = "radiusKm")]
    pub radius_km: f64,
}

fn default_radius_km() -> f64 {
    3.0
}
