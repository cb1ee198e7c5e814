// Core pipeline exports
pub mod distance;
pub mod filters;
pub mod matcher;
pub mod pipeline;

pub use distance::haversine_km;
pub use filters::{filter_and_truncate, settle_randomly, SHORTLIST_LIMIT};
pub use matcher::match_best;
pub use pipeline::{SearchError, SearchPipeline};
