use std::future::Future;
use std::sync::Arc;

use thiserror::Error;

use crate::cache::ResolutionCache;
use crate::error::WeatherError;
use crate::upstream::UpstreamQuery;

/// A client-supplied location: free text or exact coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    City(String),
    Coordinates { lat: f64, lon: f64 },
}

#[derive(Debug, Error)]
#[error("Coordinates out of range: lat {lat}, lon {lon}")]
pub struct InvalidCoordinates {
    pub lat: f64,
    pub lon: f64,
}

impl LocationQuery {
    pub fn city(name: impl Into<String>) -> Self {
        LocationQuery::City(name.into())
    }

    /// Coordinates validated against the WGS84 ranges.
    pub fn coordinates(lat: f64, lon: f64) -> Result<Self, InvalidCoordinates> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(InvalidCoordinates { lat, lon });
        }
        Ok(LocationQuery::Coordinates { lat, lon })
    }
}

/// Ordered candidate queries for a free-text city name.
///
/// The provider disambiguates colliding city names with a comma-delimited
/// country qualifier. Short queries that carry no qualifier are most often
/// domestic city names, so the country-qualified forms are appended after
/// the verbatim query. Queries that already contain a comma, or run longer
/// than two words, are tried as-is only.
pub fn candidate_queries(city: &str) -> Vec<String> {
    let mut candidates = vec![city.to_string()];
    if !city.contains(',') && city.split_whitespace().count() <= 2 {
        candidates.push(format!("{city},India"));
        candidates.push(format!("{city},IN"));
    }
    candidates
}

/// Resolves a location against the provider by trying candidate queries in
/// order until one succeeds.
pub struct Resolver {
    cache: Arc<ResolutionCache>,
}

impl Resolver {
    pub fn new(cache: Arc<ResolutionCache>) -> Self {
        Self { cache }
    }

    /// Resolve `location`, invoking `fetch` once per attempt.
    ///
    /// Coordinates go out as a single call with no expansion. Free text runs
    /// the candidate sequence strictly in order, stopping at the first
    /// success. Only a not-found answer moves on to the next candidate;
    /// auth, rate-limit, and transport errors are not query-shape-dependent
    /// and propagate immediately. When every candidate misses, the error
    /// from the last (most qualified) attempt is surfaced.
    pub async fn resolve<T, F, Fut>(
        &self,
        location: &LocationQuery,
        fetch: F,
    ) -> Result<T, WeatherError>
    where
        F: Fn(UpstreamQuery) -> Fut,
        Fut: Future<Output = Result<T, WeatherError>>,
    {
        match location {
            LocationQuery::Coordinates { lat, lon } => {
                fetch(UpstreamQuery::Coordinates {
                    lat: *lat,
                    lon: *lon,
                })
                .await
            }
            LocationQuery::City(city) => self.resolve_city(city, fetch).await,
        }
    }

    async fn resolve_city<T, F, Fut>(&self, city: &str, fetch: F) -> Result<T, WeatherError>
    where
        F: Fn(UpstreamQuery) -> Fut,
        Fut: Future<Output = Result<T, WeatherError>>,
    {
        // Fast path: a candidate that already resolved for this query.
        if let Some(candidate) = self.cache.get(city) {
            match fetch(UpstreamQuery::City(candidate.clone())).await {
                Ok(payload) => {
                    tracing::debug!(city = %city, candidate = %candidate, "Resolution cache hit");
                    return Ok(payload);
                }
                Err(err) if err.is_not_found() => {
                    tracing::debug!(
                        city = %city,
                        candidate = %candidate,
                        "Cached candidate no longer resolves, re-running fallback sequence"
                    );
                    self.cache.invalidate(city);
                }
                Err(err) => return Err(err),
            }
        }

        let mut last_error = None;
        for candidate in candidate_queries(city) {
            match fetch(UpstreamQuery::City(candidate.clone())).await {
                Ok(payload) => {
                    if candidate != city {
                        tracing::info!(
                            city = %city,
                            candidate = %candidate,
                            "Resolved via fallback candidate"
                        );
                    }
                    self.cache.insert(city, &candidate);
                    return Ok(payload);
                }
                Err(err) if err.is_not_found() => {
                    tracing::debug!(candidate = %candidate, "Candidate not found, trying next");
                    last_error = Some(err);
                }
                Err(err) => return Err(err),
            }
        }

        Err(last_error.unwrap_or_else(|| WeatherError::NotFound(city.to_string())))
    }
}
