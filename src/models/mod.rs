// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Coordinate, CuisineUniverse, NearbyRestaurants, Restaurant, SearchOutcome, SearchSession};
pub use requests::SearchRequest;
pub use responses::{ErrorResponse, HealthResponse, RestaurantView, SearchResponse, SettleResponse};
