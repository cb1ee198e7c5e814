use crate::models::Coordinate;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine (great-circle) distance between two points
/// in kilometers.
///
/// Pure and symmetric; returns 0 for identical points. Not used by the
/// search pipeline itself, but kept as the primitive any distance-based
/// ranking would build on.
#[inline]
pub fn haversine_km(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat_a_rad = a.latitude.to_radians();
    let lat_b_rad = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat_a_rad.cos() * lat_b_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}
