use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct NearestQueryParams {
    pub lat: f64,
    pub lng: f64,
    /// Kilometers; missing asks for the closest country.
    pub distance: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceQueryParams {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TriangulateRequest {
    pub guesses: Vec<GuessRequest>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GuessRequest {
    pub country: String,
    /// Reported distance in kilometers; negative or missing means "warmer".
    #[serde(default)]
    pub distance: Option<f64>,
}
