use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============================================================================
// Raw provider response (internal)
// These structs deserialize the `weather` endpoint payload; not all fields
// the provider sends are kept
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CurrentConditions {
    pub name: String,
    pub sys: SysInfo,
    pub main: MainInfo,
    pub weather: Vec<ConditionInfo>,
    pub wind: WindInfo,
    pub clouds: CloudsInfo,
    /// Visibility in meters
    pub visibility: Option<u32>,
    /// UTC offset in seconds for the location
    pub timezone: i32,
}

#[derive(Debug, Deserialize)]
pub struct SysInfo {
    pub country: String,
    pub sunrise: i64,
    pub sunset: i64,
}

#[derive(Debug, Deserialize)]
pub struct MainInfo {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u32,
    pub pressure: u32,
}

#[derive(Debug, Deserialize)]
pub struct ConditionInfo {
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Deserialize)]
pub struct WindInfo {
    pub speed: f64,
    pub deg: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct CloudsInfo {
    pub all: u32,
}

// ============================================================================
// API response model (external - what we return to clients)
// ============================================================================

/// Stable current-weather schema returned to clients
#[derive(Debug, Serialize, ToSchema)]
pub struct CurrentWeather {
    pub city: String,
    pub country: String,
    /// Rounded to the nearest whole degree
    pub temperature: f64,
    /// Rounded to the nearest whole degree
    pub feels_like: f64,
    pub description: String,
    pub icon: String,
    pub humidity: u32,
    pub pressure: u32,
    pub wind_speed: f64,
    pub wind_speed_unit: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_direction: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility_km: Option<f64>,
    pub cloudiness: u32,
    pub sunrise: i64,
    pub sunset: i64,
    /// UTC offset in seconds for the location
    pub timezone_offset: i32,
}
