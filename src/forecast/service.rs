use std::sync::Arc;

use super::aggregate;
use super::models::ForecastResponse;
use crate::cache::ResolutionCache;
use crate::error::WeatherError;
use crate::resolver::{LocationQuery, Resolver};
use crate::units::Units;
use crate::upstream::OwmClient;

pub struct ForecastService {
    upstream: OwmClient,
    resolver: Resolver,
}

impl ForecastService {
    pub fn new(upstream: OwmClient, cache: Arc<ResolutionCache>) -> Self {
        Self {
            upstream,
            resolver: Resolver::new(cache),
        }
    }

    /// Five-day daily forecast for a location: the raw 3-hour series is
    /// fetched through the candidate fallback sequence, then collapsed to
    /// one summary per provider-local calendar day.
    pub async fn daily(
        &self,
        location: &LocationQuery,
        units: Units,
    ) -> Result<ForecastResponse, WeatherError> {
        tracing::debug!(location = ?location, units = %units, "Fetching forecast");

        let payload = self
            .resolver
            .resolve(location, |query| self.upstream.forecast(query, units))
            .await?;

        let days = aggregate::daily_summaries(&payload.list, payload.city.timezone);

        tracing::info!(
            city = %payload.city.name,
            days = days.len(),
            "Forecast fetched"
        );

        Ok(ForecastResponse {
            city: payload.city.name,
            country: payload.city.country,
            units,
            wind_speed_unit: units.wind_speed_unit(),
            days,
        })
    }
}
