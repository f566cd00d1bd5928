use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Standard error response format for all API errors
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
}

/// Error taxonomy for everything that can go wrong talking to the weather
/// provider. The resolver recovers `NotFound` across candidate queries;
/// every other variant propagates immediately.
#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Location not found: {0}")]
    NotFound(String),

    #[error("Weather provider rejected API credentials: {0}")]
    Unauthorized(String),

    #[error("Weather provider rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Failed to reach weather provider: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

impl WeatherError {
    /// Whether this is a not-found-class error, the only class the
    /// resolver retries with another candidate query.
    pub fn is_not_found(&self) -> bool {
        matches!(self, WeatherError::NotFound(_))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::BAD_GATEWAY,
            Self::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            Self::Network(_) => StatusCode::BAD_GATEWAY,
            Self::InvalidResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "LOCATION_NOT_FOUND",
            Self::Unauthorized(_) => "UPSTREAM_AUTH_FAILED",
            Self::RateLimited(_) => "UPSTREAM_RATE_LIMITED",
            Self::Network(_) => "UPSTREAM_UNREACHABLE",
            Self::InvalidResponse(_) => "INVALID_UPSTREAM_RESPONSE",
        }
    }
}

// Implement IntoResponse for WeatherError - Axum best practice
// This allows handlers to return Result<T, WeatherError> directly
impl IntoResponse for WeatherError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();
        let message = self.to_string();

        tracing::error!(
            error = %message,
            status = %status,
            code = %code,
            "Weather API error"
        );

        (
            status,
            Json(ErrorResponse {
                error: message,
                code: Some(code),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        assert!(WeatherError::NotFound("pune".to_string()).is_not_found());
        assert!(!WeatherError::Unauthorized("bad key".to_string()).is_not_found());
        assert!(!WeatherError::RateLimited("slow down".to_string()).is_not_found());
        assert!(!WeatherError::InvalidResponse("garbage".to_string()).is_not_found());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            WeatherError::NotFound("x".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            WeatherError::Unauthorized("x".to_string()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            WeatherError::RateLimited("x".to_string()).status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            WeatherError::InvalidResponse("x".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
