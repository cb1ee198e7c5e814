//! Settled - restaurant settling service
//!
//! This library implements the pipeline behind the Settled app: geocode a
//! place name, fetch nearby restaurants from OpenStreetMap data, fuzzy-match
//! two cuisine preferences against the cuisines actually present, filter to
//! a shortlist, and randomly settle on one.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{haversine_km, match_best, SearchError, SearchPipeline, SHORTLIST_LIMIT};
pub use crate::models::{Coordinate, CuisineUniverse, Restaurant, SearchOutcome, SearchSession};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let a = Coordinate::new(40.7128, -74.0060);
        let b = Coordinate::new(40.73, -74.0);
        assert!(haversine_km(&a, &b) > 0.0);
    }
}
