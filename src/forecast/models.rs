use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::units::Units;

// ============================================================================
// Raw provider response (internal)
// The `forecast` endpoint returns a 5-day series at 3-hour steps
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ForecastPayload {
    pub list: Vec<ForecastSample>,
    pub city: ForecastCity,
}

/// One 3-hour point reading from the provider's forecast series
#[derive(Debug, Deserialize)]
pub struct ForecastSample {
    pub dt: i64,
    pub main: SampleMain,
    pub weather: Vec<SampleCondition>,
    pub clouds: SampleClouds,
    pub wind: SampleWind,
    /// Precipitation probability, 0.0-1.0
    #[serde(default)]
    pub pop: f64,
}

#[derive(Debug, Deserialize)]
pub struct SampleMain {
    pub temp: f64,
    pub humidity: u32,
    pub pressure: u32,
}

#[derive(Debug, Deserialize)]
pub struct SampleCondition {
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Deserialize)]
pub struct SampleClouds {
    pub all: u32,
}

#[derive(Debug, Deserialize)]
pub struct SampleWind {
    pub speed: f64,
    pub deg: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct ForecastCity {
    pub name: String,
    pub country: String,
    /// UTC offset in seconds for the location
    pub timezone: i32,
}

// ============================================================================
// API response models (external - what we return to clients)
// ============================================================================

#[derive(Debug, Serialize, ToSchema)]
pub struct ForecastResponse {
    pub city: String,
    pub country: String,
    pub units: Units,
    pub wind_speed_unit: &'static str,
    pub days: Vec<DailyForecast>,
}

/// One-day summary: the noon-adjacent representative reading plus the
/// temperature range across every sample of that day
#[derive(Debug, Serialize, ToSchema)]
pub struct DailyForecast {
    /// Provider-local calendar date, YYYY-MM-DD
    pub date: String,
    /// Timestamp of the representative sample
    pub timestamp: i64,
    pub min_temp: f64,
    pub max_temp: f64,
    pub description: String,
    pub icon: String,
    pub humidity: u32,
    pub pressure: u32,
    pub wind_speed: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_direction: Option<u32>,
    pub cloudiness: u32,
    /// Chance of precipitation, 0-100
    pub precipitation_probability: u8,
}
