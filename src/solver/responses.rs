use crate::countries::models::Country;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountriesResponse {
    pub error: bool,
    pub countries: Vec<Country>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<SolverErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<Country>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<SolverErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unknown_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriangulateResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<SolverErrorCode>,
    /// The name that could not be matched, if `error_code` is `countryNotFound`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unknown_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<Country>,
    /// Distance between the latest guess and the recommended country.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_from_last_guess_km: Option<f64>,
}

impl TriangulateResponse {
    pub fn failure(error_code: SolverErrorCode) -> Self {
        Self {
            error: true,
            error_code: Some(error_code),
            unknown_country: None,
            country: None,
            distance_from_last_guess_km: None,
        }
    }
}

/// All reasons a solver query can come back empty or be refused.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SolverErrorCode {
    CountryNotFound,
    EmptyPool,
    NoEligibleCandidate,
    InvalidCoordinates,
}
