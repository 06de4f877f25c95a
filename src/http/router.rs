use crate::app_context::AppContext;
use crate::http::{cors_layer, middleware};
use crate::{health, solver};
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;

pub fn new(allowed_origins: &[String], app_context: AppContext) -> Router {
    let cors_policy = cors_layer(allowed_origins);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let countries_routes = Router::new()
        .route("/", get(solver::handlers::countries))
        .route("/:name", get(solver::handlers::country));
    let geo_routes = Router::new()
        .route("/nearest", get(solver::handlers::nearest))
        .route("/distance", get(solver::handlers::distance));
    let solver_routes =
        Router::new().route("/triangulate", post(solver::handlers::triangulate));

    Router::new()
        .nest("/health", health_routes)
        .nest("/countries", countries_routes)
        .nest("/geo", geo_routes)
        .nest("/solver", solver_routes)
        .with_state(app_context)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::tracing))
                .layer(cors_policy),
        )
}
