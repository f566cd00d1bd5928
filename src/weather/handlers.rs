use axum::{extract::State, Json};
use serde::Serialize;

use super::models::CurrentWeather;
use crate::error::WeatherError;
use crate::extractors::{LocationParam, UnitsParam};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Get current weather
///
/// GET /api/v1/weather?city=Pune&units=metric
/// GET /api/v1/weather/{city}
/// GET /api/v1/weather?lat=18.52&lon=73.86
pub async fn get_weather(
    State(state): State<AppState>,
    location: LocationParam,
    units: UnitsParam,
) -> Result<Json<CurrentWeather>, WeatherError> {
    let location = location.or_default(&state.config.default_city);
    let units = units.or_default(state.config.units);

    let weather = state.weather_service.current(&location, units).await?;
    Ok(Json(weather))
}
