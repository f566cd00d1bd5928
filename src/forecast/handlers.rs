use axum::{extract::State, Json};

use super::models::ForecastResponse;
use crate::error::WeatherError;
use crate::extractors::{LocationParam, UnitsParam};
use crate::AppState;

/// Get the five-day daily forecast
///
/// GET /api/v1/forecast?city=Pune&units=metric
/// GET /api/v1/forecast/{city}
/// GET /api/v1/forecast?lat=18.52&lon=73.86
pub async fn get_forecast(
    State(state): State<AppState>,
    location: LocationParam,
    units: UnitsParam,
) -> Result<Json<ForecastResponse>, WeatherError> {
    let location = location.or_default(&state.config.default_city);
    let units = units.or_default(state.config.units);

    let forecast = state.forecast_service.daily(&location, units).await?;
    Ok(Json(forecast))
}
