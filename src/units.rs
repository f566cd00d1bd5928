use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Measurement system requested by the client and passed through to
/// OpenWeatherMap unchanged. This service never converts values itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    Metric,
    Imperial,
}

impl Units {
    /// Value for the provider's `units` query parameter.
    pub fn as_query_value(self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    /// Display label for wind speed in normalized responses.
    pub fn wind_speed_unit(self) -> &'static str {
        match self {
            Units::Metric => "m/s",
            Units::Imperial => "mph",
        }
    }
}

impl Default for Units {
    fn default() -> Self {
        Units::Metric
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_query_value())
    }
}
