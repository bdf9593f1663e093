use crate::models::GeoPoint;

/// Mean Earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance in meters between two coordinates given in degrees
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();

    let s1 = (dphi / 2.0).sin();
    let s2 = (dlambda / 2.0).sin();
    let h = s1 * s1 + phi1.cos() * phi2.cos() * s2 * s2;

    // Rounding can push h slightly past 1 for antipodal points
    2.0 * EARTH_RADIUS_M * h.clamp(0.0, 1.0).sqrt().asin()
}

/// [`distance`] between two points
pub fn distance_between(a: GeoPoint, b: GeoPoint) -> f64 {
    distance(a.latitude, a.longitude, b.latitude, b.longitude)
}
