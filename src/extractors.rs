use axum::{
    extract::{FromRequestParts, Path, Query},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::error::ErrorResponse;
use crate::resolver::LocationQuery;
use crate::units::Units;

/// Location parameters accepted on weather/forecast/search requests
#[derive(Debug, Deserialize)]
struct LocationQueryParams {
    city: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct UnitsQueryParams {
    units: Option<Units>,
}

/// Extracts the requested location from the path or query parameters.
///
/// Precedence: path `{city}`, then `?city=`, then `?lat=&lon=` (both or
/// neither, ranges validated). Carries `None` when nothing was provided so
/// the handler can fall back to the configured default city.
#[derive(Debug)]
pub struct LocationParam(pub Option<LocationQuery>);

impl LocationParam {
    /// Get the location or fall back to a default city name
    pub fn or_default(self, default_city: &str) -> LocationQuery {
        self.0.unwrap_or_else(|| LocationQuery::city(default_city))
    }
}

impl<S> FromRequestParts<S> for LocationParam
where
    S: Send + Sync,
{
    type Rejection = ParamRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Try to extract city from path first
        if let Ok(Path(city)) = Path::<String>::from_request_parts(parts, state).await {
            if !city.is_empty() {
                return Ok(LocationParam(Some(LocationQuery::city(city))));
            }
        }

        let Ok(Query(params)) =
            Query::<LocationQueryParams>::from_request_parts(parts, state).await
        else {
            return Err(ParamRejection(
                "Invalid location parameters: city must be a string, lat/lon numbers".to_string(),
            ));
        };

        if let Some(city) = params.city.filter(|c| !c.is_empty()) {
            return Ok(LocationParam(Some(LocationQuery::city(city))));
        }

        match (params.lat, params.lon) {
            (Some(lat), Some(lon)) => {
                let location = LocationQuery::coordinates(lat, lon)
                    .map_err(|err| ParamRejection(err.to_string()))?;
                Ok(LocationParam(Some(location)))
            }
            (None, None) => Ok(LocationParam(None)),
            _ => Err(ParamRejection(
                "lat and lon must be provided together".to_string(),
            )),
        }
    }
}

/// Extracts the measurement units from the query string
#[derive(Debug)]
pub struct UnitsParam(pub Option<Units>);

impl UnitsParam {
    /// Get the units value or use a default
    pub fn or_default(self, default: Units) -> Units {
        self.0.unwrap_or(default)
    }
}

impl<S> FromRequestParts<S> for UnitsParam
where
    S: Send + Sync,
{
    type Rejection = ParamRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<UnitsQueryParams>::from_request_parts(parts, state).await {
            Ok(Query(query)) => Ok(UnitsParam(query.units)),
            Err(_) => Err(ParamRejection(
                "units must be 'metric' or 'imperial'".to_string(),
            )),
        }
    }
}

/// Rejection type for request parameter extraction failures
#[derive(Debug)]
pub struct ParamRejection(pub String);

impl IntoResponse for ParamRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: self.0,
                code: Some("INVALID_PARAMETER"),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_param_default_fallback() {
        let param = LocationParam(None);
        assert_eq!(
            param.or_default("Mumbai"),
            LocationQuery::city("Mumbai")
        );

        let param = LocationParam(Some(LocationQuery::city("Pune")));
        assert_eq!(param.or_default("Mumbai"), LocationQuery::city("Pune"));
    }

    #[test]
    fn test_units_param_default_fallback() {
        assert_eq!(UnitsParam(None).or_default(Units::Metric), Units::Metric);
        assert_eq!(
            UnitsParam(Some(Units::Imperial)).or_default(Units::Metric),
            Units::Imperial
        );
    }
}
