use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::error::ErrorResponse;
use crate::forecast::models::{DailyForecast, ForecastResponse};
use crate::search::SearchResponse;
use crate::weather::models::CurrentWeather;

/// OpenAPI documentation for the Skycast API
///
/// This provides basic schema documentation. Full path annotations
/// can be added incrementally to handlers as needed.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Skycast API",
        version = "1.0.0",
        description = "Weather resolution and forecast API backed by OpenWeatherMap. Provides current conditions, five-day daily forecasts, and a combined search."
    ),
    tags(
        (name = "weather", description = "Current weather data"),
        (name = "forecast", description = "Five-day daily forecast"),
        (name = "search", description = "Combined current weather and forecast")
    ),
    components(
        schemas(
            ErrorResponse,
            CurrentWeather,
            ForecastResponse,
            DailyForecast,
            SearchResponse,
        )
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI router
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
