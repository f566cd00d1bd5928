use axum::{routing::get, Router};

use crate::forecast::handlers as forecast_handlers;
use crate::openapi::swagger_ui;
use crate::search;
use crate::weather::handlers as weather_handlers;
use crate::AppState;

/// Build the current-weather routes
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/weather", get(weather_handlers::get_weather))
        .route("/weather/{city}", get(weather_handlers::get_weather))
}

/// Build the forecast routes
fn forecast_routes() -> Router<AppState> {
    Router::new()
        .route("/forecast", get(forecast_handlers::get_forecast))
        .route("/forecast/{city}", get(forecast_handlers::get_forecast))
}

/// Build the combined search routes
fn search_routes() -> Router<AppState> {
    Router::new()
        .route("/search", get(search::search))
        .route("/search/{city}", get(search::search))
}

/// Build all API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(weather_routes())
        .merge(forecast_routes())
        .merge(search_routes())
}

/// Build the complete application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check at root level
        .route("/", get(weather_handlers::health))
        .route("/health", get(weather_handlers::health))
        // API v1 routes
        .nest("/api/v1", api_v1_routes())
        // Swagger UI for API documentation
        .merge(swagger_ui())
        .with_state(state)
}
