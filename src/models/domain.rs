use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A point on the globe in decimal degrees. Never mutated after creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// One restaurant entity normalized from the map-data response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    /// Cuisine tags split from the semicolon-delimited source field.
    /// An entity without a cuisine tag yields a single empty-string element.
    pub cuisines: Vec<String>,
    pub address: String,
    pub coordinate: Coordinate,
}

impl Restaurant {
    /// The comma-joined cuisine display string used for filtering and output
    pub fn cuisines_joined(&self) -> String {
        self.cuisines.join(", ")
    }
}

/// All distinct cuisine tokens observed across one fetch.
///
/// A BTreeSet so iteration order is fixed, which makes the matcher's
/// tie-break deterministic (lexicographically first candidate wins).
pub type CuisineUniverse = BTreeSet<String>;

/// Output of one nearby-restaurant fetch: the cuisine universe plus the
/// restaurants that survived coordinate resolution. Tokens from entities
/// dropped for missing coordinates stay in the universe.
#[derive(Debug, Clone, Default)]
pub struct NearbyRestaurants {
    pub universe: CuisineUniverse,
    pub restaurants: Vec<Restaurant>,
}

/// Result of one full pipeline run
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub cuisines: CuisineUniverse,
    pub matched_a: Option<String>,
    pub matched_b: Option<String>,
    /// At most SHORTLIST_LIMIT restaurants, in fetch order
    pub shortlist: Vec<Restaurant>,
}

/// The mutable state of one search session, owned by the route layer.
///
/// Replaced wholesale on every new search; a new search always discards
/// the previous random pick. The pick alone is replaced on every settle.
#[derive(Debug, Clone)]
pub struct SearchSession {
    pub outcome: SearchOutcome,
    pub pick: Option<Restaurant>,
}

impl SearchSession {
    pub fn new(outcome: SearchOutcome) -> Self {
        Self {
            outcome,
            pick: None,
        }
    }
}
