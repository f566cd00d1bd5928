use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::WeatherError;
use crate::extractors::{LocationParam, UnitsParam};
use crate::forecast::models::ForecastResponse;
use crate::weather::models::CurrentWeather;
use crate::AppState;

/// Current conditions and the daily forecast for one location
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResponse {
    pub current: CurrentWeather,
    pub forecast: ForecastResponse,
}

/// Get current weather and the five-day forecast in one call
///
/// GET /api/v1/search?city=Pune&units=metric
/// GET /api/v1/search/{city}
///
/// The two provider fetches are independent, so they are issued
/// concurrently; if either side fails the whole request fails.
pub async fn search(
    State(state): State<AppState>,
    location: LocationParam,
    units: UnitsParam,
) -> Result<Json<SearchResponse>, WeatherError> {
    let location = location.or_default(&state.config.default_city);
    let units = units.or_default(state.config.units);

    let (current, forecast) = tokio::try_join!(
        state.weather_service.current(&location, units),
        state.forecast_service.daily(&location, units),
    )?;

    Ok(Json(SearchResponse { current, forecast }))
}
