//! Distances on the globe

use crate::location::Location;

/// Mean earth radius used for all distances
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two locations in kilometres
///
/// Uses the haversine formula on a sphere of radius [`EARTH_RADIUS_KM`].
pub fn distance(from: &Location, to: &Location) -> f64 {
    let phi_1 = from.lat.to_radians();
    let phi_2 = to.lat.to_radians();
    let delta_phi = (to.lat - from.lat).to_radians();
    let delta_lambda = (to.lon - from.lon).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    // Rounding can push `a` slightly above 1 for antipodal points
    let c = 2.0 * a.sqrt().min(1.0).asin();

    EARTH_RADIUS_KM * c
}
