use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::WeatherError;
use crate::forecast::models::ForecastPayload;
use crate::units::Units;
use crate::weather::models::CurrentConditions;

/// One query against the provider: a candidate city string or exact
/// coordinates.
#[derive(Debug, Clone)]
pub enum UpstreamQuery {
    City(String),
    Coordinates { lat: f64, lon: f64 },
}

/// Error body returned by OpenWeatherMap, e.g.
/// `{"cod":"404","message":"city not found"}`
#[derive(Debug, Deserialize)]
struct OwmErrorBody {
    message: String,
}

/// Thin client for the OpenWeatherMap data API. Holds the shared pooled
/// HTTP client plus the key and base URL injected from configuration.
#[derive(Clone)]
pub struct OwmClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OwmClient {
    pub fn new(client: Client, api_key: &str, base_url: &str) -> Self {
        Self {
            client,
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Current conditions from the `weather` endpoint.
    pub async fn current_conditions(
        &self,
        query: UpstreamQuery,
        units: Units,
    ) -> Result<CurrentConditions, WeatherError> {
        self.fetch("weather", &query, units).await
    }

    /// Five-day/3-hour forecast from the `forecast` endpoint.
    pub async fn forecast(
        &self,
        query: UpstreamQuery,
        units: Units,
    ) -> Result<ForecastPayload, WeatherError> {
        self.fetch("forecast", &query, units).await
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &UpstreamQuery,
        units: Units,
    ) -> Result<T, WeatherError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        // Use query builder for proper URL encoding - handles spaces and special chars
        let mut params: Vec<(&str, String)> = vec![
            ("appid", self.api_key.clone()),
            ("units", units.as_query_value().to_string()),
        ];
        match query {
            UpstreamQuery::City(city) => params.push(("q", city.clone())),
            UpstreamQuery::Coordinates { lat, lon } => {
                params.push(("lat", lat.to_string()));
                params.push(("lon", lon.to_string()));
            }
        }

        let response = self.client.get(&url).query(&params).send().await?;

        let status = response.status();
        tracing::debug!(endpoint = %endpoint, status = %status, "Received provider response");

        if !status.is_success() {
            let message = response
                .json::<OwmErrorBody>()
                .await
                .map(|body| body.message)
                .unwrap_or_else(|_| format!("HTTP {}", status));
            return Err(classify_failure(status, message));
        }

        Ok(response.json().await?)
    }
}

/// Map a non-success provider status onto the error taxonomy.
fn classify_failure(status: StatusCode, message: String) -> WeatherError {
    match status {
        StatusCode::NOT_FOUND => WeatherError::NotFound(message),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => WeatherError::Unauthorized(message),
        StatusCode::TOO_MANY_REQUESTS => WeatherError::RateLimited(message),
        _ => WeatherError::InvalidResponse(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_not_found() {
        let err = classify_failure(StatusCode::NOT_FOUND, "city not found".to_string());
        assert!(matches!(err, WeatherError::NotFound(_)));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_classify_auth_failures() {
        assert!(matches!(
            classify_failure(StatusCode::UNAUTHORIZED, "invalid key".to_string()),
            WeatherError::Unauthorized(_)
        ));
        assert!(matches!(
            classify_failure(StatusCode::FORBIDDEN, "blocked key".to_string()),
            WeatherError::Unauthorized(_)
        ));
    }

    #[test]
    fn test_classify_rate_limited() {
        assert!(matches!(
            classify_failure(StatusCode::TOO_MANY_REQUESTS, "slow down".to_string()),
            WeatherError::RateLimited(_)
        ));
    }

    #[test]
    fn test_classify_other_statuses() {
        assert!(matches!(
            classify_failure(StatusCode::INTERNAL_SERVER_ERROR, "HTTP 500".to_string()),
            WeatherError::InvalidResponse(_)
        ));
        assert!(matches!(
            classify_failure(StatusCode::BAD_REQUEST, "bad query".to_string()),
            WeatherError::InvalidResponse(_)
        ));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = OwmClient::new(Client::new(), "key", "https://example.test/data/2.5/");
        assert_eq!(client.base_url, "https://example.test/data/2.5");
    }
}
