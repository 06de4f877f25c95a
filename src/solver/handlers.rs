use crate::app_context::AppContext;
use crate::solver::requests::{DistanceQueryParams, NearestQueryParams, TriangulateRequest};
use crate::solver::responses::{
    CountriesResponse, CountryResponse, DistanceResponse, TriangulateResponse,
};
use crate::solver::services::SolverHttpHandler;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;

#[axum::debug_handler]
pub async fn countries(State(app_context): State<AppContext>) -> Json<CountriesResponse> {
    Json(SolverHttpHandler::new(app_context).countries())
}

#[axum::debug_handler]
pub async fn country(
    Path(name): Path<String>,
    State(app_context): State<AppContext>,
) -> (StatusCode, Json<CountryResponse>) {
    let (status, response) = SolverHttpHandler::new(app_context).lookup(&name);
    (status, Json(response))
}

#[axum::debug_handler]
pub async fn nearest(
    Query(query): Query<NearestQueryParams>,
    State(app_context): State<AppContext>,
) -> (StatusCode, Json<CountryResponse>) {
    let (status, response) = SolverHttpHandler::new(app_context).nearest(&query);
    (status, Json(response))
}

#[axum::debug_handler]
pub async fn distance(
    Query(query): Query<DistanceQueryParams>,
    State(app_context): State<AppContext>,
) -> (StatusCode, Json<DistanceResponse>) {
    let (status, response) = SolverHttpHandler::new(app_context).distance(&query);
    (status, Json(response))
}

#[axum::debug_handler]
pub async fn triangulate(
    State(app_context): State<AppContext>,
    Json(request): Json<TriangulateRequest>,
) -> (StatusCode, Json<TriangulateResponse>) {
    let (status, response) = SolverHttpHandler::new(app_context).triangulate(&request);
    (status, Json(response))
}
