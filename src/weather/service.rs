use std::sync::Arc;

use super::models::{CurrentConditions, CurrentWeather};
use crate::cache::ResolutionCache;
use crate::error::WeatherError;
use crate::resolver::{LocationQuery, Resolver};
use crate::units::Units;
use crate::upstream::OwmClient;

pub struct WeatherService {
    upstream: OwmClient,
    resolver: Resolver,
}

impl WeatherService {
    pub fn new(upstream: OwmClient, cache: Arc<ResolutionCache>) -> Self {
        Self {
            upstream,
            resolver: Resolver::new(cache),
        }
    }

    /// Current conditions for a location, resolved through the candidate
    /// fallback sequence and mapped into the stable client schema.
    pub async fn current(
        &self,
        location: &LocationQuery,
        units: Units,
    ) -> Result<CurrentWeather, WeatherError> {
        tracing::debug!(location = ?location, units = %units, "Fetching current weather");

        let data = self
            .resolver
            .resolve(location, |query| {
                self.upstream.current_conditions(query, units)
            })
            .await?;

        let weather = Self::normalize(data, units)?;

        tracing::info!(
            city = %weather.city,
            temp = %weather.temperature,
            "Current weather fetched"
        );

        Ok(weather)
    }

    /// Field-for-field mapping from the raw provider payload. Temperatures
    /// are rounded half-away-from-zero; visibility converts meters to
    /// kilometers; everything else passes through.
    fn normalize(data: CurrentConditions, units: Units) -> Result<CurrentWeather, WeatherError> {
        let condition = data.weather.first().ok_or_else(|| {
            WeatherError::InvalidResponse("No weather conditions in response".to_string())
        })?;

        Ok(CurrentWeather {
            city: data.name,
            country: data.sys.country,
            temperature: data.main.temp.round(),
            feels_like: data.main.feels_like.round(),
            description: condition.description.clone(),
            icon: condition.icon.clone(),
            humidity: data.main.humidity,
            pressure: data.main.pressure,
            wind_speed: data.wind.speed,
            wind_speed_unit: units.wind_speed_unit(),
            wind_direction: data.wind.deg,
            visibility_km: data.visibility.map(|meters| f64::from(meters) / 1000.0),
            cloudiness: data.clouds.all,
            sunrise: data.sys.sunrise,
            sunset: data.sys.sunset,
            timezone_offset: data.timezone,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn conditions(temp: f64, feels_like: f64) -> CurrentConditions {
        serde_json::from_value(json!({
            "name": "Pune",
            "sys": { "country": "IN", "sunrise": 1685581020, "sunset": 1685629260 },
            "main": { "temp": temp, "feels_like": feels_like, "humidity": 74, "pressure": 1008 },
            "weather": [{ "description": "scattered clouds", "icon": "03d" }],
            "wind": { "speed": 4.6, "deg": 250 },
            "clouds": { "all": 40 },
            "visibility": 6000,
            "timezone": 19800
        }))
        .expect("valid payload")
    }

    #[test]
    fn test_normalize_maps_all_fields() {
        let weather = WeatherService::normalize(conditions(28.3, 30.1), Units::Metric).unwrap();

        assert_eq!(weather.city, "Pune");
        assert_eq!(weather.country, "IN");
        assert_eq!(weather.description, "scattered clouds");
        assert_eq!(weather.icon, "03d");
        assert_eq!(weather.humidity, 74);
        assert_eq!(weather.pressure, 1008);
        assert_eq!(weather.wind_speed, 4.6);
        assert_eq!(weather.wind_direction, Some(250));
        assert_eq!(weather.cloudiness, 40);
        assert_eq!(weather.sunrise, 1685581020);
        assert_eq!(weather.sunset, 1685629260);
        assert_eq!(weather.timezone_offset, 19800);
    }

    #[test]
    fn test_normalize_rounds_temperatures_half_away_from_zero() {
        let weather = WeatherService::normalize(conditions(28.5, -0.5), Units::Metric).unwrap();
        assert_eq!(weather.temperature, 29.0);
        assert_eq!(weather.feels_like, -1.0);

        let weather = WeatherService::normalize(conditions(28.4, 28.6), Units::Metric).unwrap();
        assert_eq!(weather.temperature, 28.0);
        assert_eq!(weather.feels_like, 29.0);
    }

    #[test]
    fn test_normalize_converts_visibility_to_km() {
        let weather = WeatherService::normalize(conditions(20.0, 20.0), Units::Metric).unwrap();
        assert_eq!(weather.visibility_km, Some(6.0));
    }

    #[test]
    fn test_normalize_wind_unit_follows_units() {
        let metric = WeatherService::normalize(conditions(20.0, 20.0), Units::Metric).unwrap();
        assert_eq!(metric.wind_speed_unit, "m/s");

        let imperial = WeatherService::normalize(conditions(68.0, 68.0), Units::Imperial).unwrap();
        assert_eq!(imperial.wind_speed_unit, "mph");
    }

    #[test]
    fn test_normalize_rejects_missing_conditions() {
        let mut data = conditions(20.0, 20.0);
        data.weather.clear();
        let err = WeatherService::normalize(data, Units::Metric).unwrap_err();
        assert!(matches!(err, WeatherError::InvalidResponse(_)));
    }

    #[test]
    fn test_normalize_missing_optional_fields() {
        let data: CurrentConditions = serde_json::from_value(json!({
            "name": "Alert",
            "sys": { "country": "CA", "sunrise": 0, "sunset": 0 },
            "main": { "temp": -18.2, "feels_like": -24.9, "humidity": 80, "pressure": 1021 },
            "weather": [{ "description": "clear sky", "icon": "01d" }],
            "wind": { "speed": 1.1 },
            "clouds": { "all": 0 },
            "timezone": -14400
        }))
        .expect("valid payload");

        let weather = WeatherService::normalize(data, Units::Metric).unwrap();
        assert_eq!(weather.wind_direction, None);
        assert_eq!(weather.visibility_km, None);
        assert_eq!(weather.temperature, -18.0);
    }
}
