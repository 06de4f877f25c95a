use crate::app_context::AppContext;
use crate::countries::models::Country;
use crate::http::tests::test_server;
use crate::ranker::Ranker;
use crate::solver::requests::{GuessRequest, NearestQueryParams, TriangulateRequest};
use crate::solver::responses::{
    CountriesResponse, CountryResponse, DistanceResponse, SolverErrorCode, TriangulateResponse,
};
use crate::solver::services::SolverHttpHandler;
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_list_countries() {
    let server = test_server();

    let response = server.get("/countries").await;

    response.assert_status_ok();
    let body = response.json::<CountriesResponse>();
    assert!(!body.error);
    assert_eq!(body.countries.len(), 196);
    assert_eq!(body.countries[0], Country::new("Afghanistan", 34.5289, 69.1725));
}

#[tokio::test]
async fn test_lookup_country() {
    let server = test_server();

    let response = server.get("/countries/aNdOrRa").await;

    response.assert_status_ok();
    response.assert_json(&CountryResponse {
        error: false,
        error_code: None,
        country: Some(Country::new("Andorra", 42.5078, 1.5211)),
    });
}

#[tokio::test]
async fn test_lookup_unknown_country() {
    let server = test_server();

    let response = server.get("/countries/Atlantis").await;

    response.assert_status_not_found();
    response.assert_json(&CountryResponse {
        error: true,
        error_code: Some(SolverErrorCode::CountryNotFound),
        country: None,
    });
}

#[tokio::test]
async fn test_nearest_to_distance() {
    let server = test_server();

    let response = server
        .get("/geo/nearest")
        .add_query_param("lat", 31.415)
        .add_query_param("lng", 21.724)
        .add_query_param("distance", 2169)
        .await;

    response.assert_status_ok();
    let body = response.json::<CountryResponse>();
    assert_eq!(body.country.map(|country| country.name), Some(String::from("Andorra")));
}

#[tokio::test]
async fn test_closest_country_by_default() {
    let server = test_server();

    let response = server
        .get("/geo/nearest")
        .add_query_param("lat", 42.5)
        .add_query_param("lng", 1.52)
        .await;

    response.assert_status_ok();
    let body = response.json::<CountryResponse>();
    assert_eq!(body.country.map(|country| country.name), Some(String::from("Andorra")));
}

#[tokio::test]
async fn test_distance_between_countries() {
    let server = test_server();

    let response = server
        .get("/geo/distance")
        .add_query_param("from", "andorra")
        .add_query_param("to", "Spain")
        .await;

    response.assert_status_ok();
    let km = response.json::<DistanceResponse>().distance_km.unwrap();
    assert!((km - 493.4).abs() < 1.0, "got {km}");
}

#[tokio::test]
async fn test_distance_with_unknown_country() {
    let server = test_server();

    let response = server
        .get("/geo/distance")
        .add_query_param("from", "Spain")
        .add_query_param("to", "Narnia")
        .await;

    response.assert_status_not_found();
    response.assert_json(&DistanceResponse {
        error: true,
        error_code: Some(SolverErrorCode::CountryNotFound),
        unknown_country: Some(String::from("Narnia")),
        distance_km: None,
    });
}

#[tokio::test]
async fn test_triangulate() {
    let server = test_server();

    let response = server
        .post("/solver/triangulate")
        .json(&json!({
            "guesses": [
                {"country": "Japan", "distance": 5000.0},
                {"country": "australia", "distance": null},
            ]
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<TriangulateResponse>();
    assert!(!body.error);
    assert_eq!(body.country.map(|country| country.name), Some(String::from("Nepal")));
    assert!(body.distance_from_last_guess_km.unwrap() > 0.0);
}

#[tokio::test]
async fn test_triangulate_without_guesses() {
    let server = test_server();

    let response = server
        .post("/solver/triangulate")
        .json(&json!({"guesses": []}))
        .await;

    response.assert_status_ok();
    response.assert_json(&TriangulateResponse {
        error: false,
        error_code: None,
        unknown_country: None,
        country: Some(Country::new("Afghanistan", 34.5289, 69.1725)),
        distance_from_last_guess_km: None,
    });
}

#[tokio::test]
async fn test_triangulate_with_unknown_country() {
    let server = test_server();

    let response = server
        .post("/solver/triangulate")
        .json(&json!({
            "guesses": [
                {"country": "Spain", "distance": 1000.0},
                {"country": "Atlantis", "distance": -1.0},
            ]
        }))
        .await;

    response.assert_status_not_found();
    response.assert_json(&TriangulateResponse {
        error: true,
        error_code: Some(SolverErrorCode::CountryNotFound),
        unknown_country: Some(String::from("Atlantis")),
        country: None,
        distance_from_last_guess_km: None,
    });
}

#[test]
fn test_triangulate_exhausted_pool() {
    let app_context = AppContext::new(Ranker::new(vec![Country::new("Andorra", 42.5078, 1.5211)]));
    let request = TriangulateRequest {
        guesses: vec![GuessRequest {
            country: String::from("Andorra"),
            distance: Some(0.0),
        }],
    };

    let (status, response) = SolverHttpHandler::new(app_context).triangulate(&request);

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.error_code,
        Some(SolverErrorCode::NoEligibleCandidate)
    );
}

#[test]
fn test_nearest_on_empty_pool() {
    let handler = SolverHttpHandler::new(AppContext::default());
    for distance in [None, Some(0.0), Some(500.0)] {
        let query = NearestQueryParams {
            lat: 0.0,
            lng: 0.0,
            distance,
        };

        let (status, response) = handler.nearest(&query);

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(response.error_code, Some(SolverErrorCode::EmptyPool));
    }
}

#[test]
fn test_triangulate_on_empty_pool() {
    let handler = SolverHttpHandler::new(AppContext::default());
    let requests = [
        TriangulateRequest { guesses: vec![] },
        TriangulateRequest {
            guesses: vec![GuessRequest {
                country: String::from("Andorra"),
                distance: Some(100.0),
            }],
        },
    ];

    for request in requests {
        let (status, response) = handler.triangulate(&request);

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(response, TriangulateResponse::failure(SolverErrorCode::EmptyPool));
    }
}

#[tokio::test]
async fn test_nearest_rejects_invalid_coordinates() {
    let server = test_server();
    let queries = [
        ("NaN", "inf", None),
        ("91", "0", None),
        ("0", "-180.5", None),
        ("42.5", "1.52", Some("-10")),
        ("42.5", "1.52", Some("inf")),
        ("42.5", "1.52", Some("30000")),
    ];

    for (lat, lng, distance) in queries {
        let mut request = server
            .get("/geo/nearest")
            .add_query_param("lat", lat)
            .add_query_param("lng", lng);
        if let Some(distance) = distance {
            request = request.add_query_param("distance", distance);
        }

        let response = request.await;

        response.assert_status_bad_request();
        response.assert_json(&CountryResponse {
            error: true,
            error_code: Some(SolverErrorCode::InvalidCoordinates),
            country: None,
        });
    }
}

#[tokio::test]
async fn test_triangulate_rejects_impossible_distance() {
    let server = test_server();

    let response = server
        .post("/solver/triangulate")
        .json(&json!({
            "guesses": [
                {"country": "Spain", "distance": 1000.0},
                {"country": "Japan", "distance": 30000.0},
            ]
        }))
        .await;

    response.assert_status_bad_request();
    response.assert_json(&TriangulateResponse::failure(
        SolverErrorCode::InvalidCoordinates,
    ));
}
