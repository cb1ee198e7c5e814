// Service exports
pub mod geocoder;
pub mod overpass;

pub use geocoder::{GeocodeError, GeocoderClient};
pub use overpass::{OverpassClient, OverpassError};
