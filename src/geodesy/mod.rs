use crate::countries::models::Country;
use consts::{EARTH_RADIUS_KM, MAX_DISTANCE_KM};

pub mod consts;

/// Great-circle distance in kilometers between two points given in degrees (haversine).
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi_1 = lat1.to_radians();
    let phi_2 = lat2.to_radians();
    let delta_phi = (lat2 - lat1).to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();
    let a = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * (a.sqrt().atan2((1.0 - a).sqrt()));
    EARTH_RADIUS_KM * c
}

pub fn distance_between(a: &Country, b: &Country) -> f64 {
    distance(a.latitude, a.longitude, b.latitude, b.longitude)
}

/// Finite latitude in `[-90, 90]` and longitude in `[-180, 180]`.
pub fn is_valid_point(lat: f64, lon: f64) -> bool {
    (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)
}

/// Finite and no farther than two points on the sphere can be apart.
pub fn is_valid_distance(km: f64) -> bool {
    (0.0..=MAX_DISTANCE_KM).contains(&km)
}
