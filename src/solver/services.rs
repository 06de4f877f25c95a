use crate::app_context::AppContext;
use crate::countries::models::DistanceSignal;
use crate::geodesy::{distance_between, is_valid_distance, is_valid_point};
use crate::logging::consts::TRIANGULATION_MARKER;
use crate::solver::requests::{DistanceQueryParams, NearestQueryParams, TriangulateRequest};
use crate::solver::responses::{
    CountriesResponse, CountryResponse, DistanceResponse, SolverErrorCode, TriangulateResponse,
};
use axum::http::StatusCode;

pub struct SolverHttpHandler {
    app_context: AppContext,
}

impl SolverHttpHandler {
    pub fn new(app_context: AppContext) -> Self {
        Self { app_context }
    }

    pub fn countries(&self) -> CountriesResponse {
        CountriesResponse {
            error: false,
            countries: self.app_context.ranker.countries().to_vec(),
        }
    }

    pub fn lookup(&self, name: &str) -> (StatusCode, CountryResponse) {
        match self.app_context.ranker.lookup(name) {
            Some(country) => (
                StatusCode::OK,
                CountryResponse {
                    error: false,
                    error_code: None,
                    country: Some(country.clone()),
                },
            ),
            None => (
                StatusCode::NOT_FOUND,
                CountryResponse {
                    error: true,
                    error_code: Some(SolverErrorCode::CountryNotFound),
                    country: None,
                },
            ),
        }
    }

    pub fn nearest(&self, query: &NearestQueryParams) -> (StatusCode, CountryResponse) {
        let distance_is_valid = query.distance.map_or(true, is_valid_distance);
        if !is_valid_point(query.lat, query.lng) || !distance_is_valid {
            return (
                StatusCode::BAD_REQUEST,
                CountryResponse {
                    error: true,
                    error_code: Some(SolverErrorCode::InvalidCoordinates),
                    country: None,
                },
            );
        }
        let ranker = &self.app_context.ranker;
        let nearest = match query.distance {
            Some(km) => ranker.nearest_to_distance(query.lat, query.lng, km),
            None => ranker.closest_to(query.lat, query.lng),
        };
        match nearest {
            Some(country) => (
                StatusCode::OK,
                CountryResponse {
                    error: false,
                    error_code: None,
                    country: Some(country.clone()),
                },
            ),
            None => (
                StatusCode::NOT_FOUND,
                CountryResponse {
                    error: true,
                    error_code: Some(SolverErrorCode::EmptyPool),
                    country: None,
                },
            ),
        }
    }

    pub fn distance(&self, query: &DistanceQueryParams) -> (StatusCode, DistanceResponse) {
        let ranker = &self.app_context.ranker;
        let unknown = |name: &str| {
            (
                StatusCode::NOT_FOUND,
                DistanceResponse {
                    error: true,
                    error_code: Some(SolverErrorCode::CountryNotFound),
                    unknown_country: Some(name.to_string()),
                    distance_km: None,
                },
            )
        };
        let Some(from) = ranker.lookup(&query.from) else {
            return unknown(&query.from);
        };
        let Some(to) = ranker.lookup(&query.to) else {
            return unknown(&query.to);
        };
        (
            StatusCode::OK,
            DistanceResponse {
                error: false,
                error_code: None,
                unknown_country: None,
                distance_km: Some(distance_between(from, to)),
            },
        )
    }

    pub fn triangulate(&self, request: &TriangulateRequest) -> (StatusCode, TriangulateResponse) {
        let ranker = &self.app_context.ranker;
        let signals = request
            .guesses
            .iter()
            .map(|guess| match guess.distance {
                Some(km) => DistanceSignal::checked(km),
                None => Some(DistanceSignal::Warmer),
            })
            .collect::<Option<Vec<_>>>();
        let Some(signals) = signals else {
            return (
                StatusCode::BAD_REQUEST,
                TriangulateResponse::failure(SolverErrorCode::InvalidCoordinates),
            );
        };
        if ranker.is_empty() {
            return (
                StatusCode::NOT_FOUND,
                TriangulateResponse::failure(SolverErrorCode::EmptyPool),
            );
        }

        let guesses = request
            .guesses
            .iter()
            .zip(signals)
            .map(|(guess, signal)| (guess.country.as_str(), signal));
        let history = match ranker.resolve(guesses) {
            Ok(history) => history,
            Err(unknown) => {
                return (
                    StatusCode::NOT_FOUND,
                    TriangulateResponse {
                        unknown_country: Some(unknown.0),
                        ..TriangulateResponse::failure(SolverErrorCode::CountryNotFound)
                    },
                )
            }
        };

        let Some(recommendation) = ranker.triangulate(&history) else {
            tracing::info!(
                task = TRIANGULATION_MARKER,
                guesses = history.len(),
                "Every country has already been guessed."
            );
            return (
                StatusCode::NOT_FOUND,
                TriangulateResponse::failure(SolverErrorCode::NoEligibleCandidate),
            );
        };
        let distance_from_last_guess_km = history
            .last()
            .map(|entry| distance_between(&entry.country, recommendation));
        tracing::info!(
            task = TRIANGULATION_MARKER,
            guesses = history.len(),
            recommendation = %recommendation.name,
        );

        (
            StatusCode::OK,
            TriangulateResponse {
                error: false,
                error_code: None,
                unknown_country: None,
                country: Some(recommendation.clone()),
                distance_from_last_guess_km,
            },
        )
    }
}
