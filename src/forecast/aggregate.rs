use chrono::{DateTime, Timelike};
use indexmap::IndexMap;
use std::ops::RangeInclusive;

use super::models::{DailyForecast, ForecastSample};

/// Days emitted per forecast
pub const MAX_FORECAST_DAYS: usize = 5;

/// Local-hour window whose first sample represents the whole day. Midday
/// conditions are what a daily icon/description should show.
const REPRESENTATIVE_HOURS: RangeInclusive<u32> = 11..=13;

struct DayGroup<'a> {
    first: &'a ForecastSample,
    representative: Option<&'a ForecastSample>,
    min_temp: f64,
    max_temp: f64,
}

/// Collapse a 3-hour forecast series into one summary per provider-local
/// calendar day, capped at [`MAX_FORECAST_DAYS`] days in first-seen order.
///
/// `utc_offset_secs` is the provider's UTC offset for the location; day
/// boundaries and the noon window are evaluated in that local time, so the
/// buckets line up with the dates the provider's clients display.
pub fn daily_summaries(samples: &[ForecastSample], utc_offset_secs: i32) -> Vec<DailyForecast> {
    let mut days: IndexMap<String, DayGroup> = IndexMap::new();

    for sample in samples {
        let Some(local) = DateTime::from_timestamp(sample.dt + i64::from(utc_offset_secs), 0)
        else {
            tracing::warn!(dt = sample.dt, "Skipping sample with unrepresentable timestamp");
            continue;
        };
        let date = local.format("%Y-%m-%d").to_string();
        let hour = local.hour();

        let group = days.entry(date).or_insert_with(|| DayGroup {
            first: sample,
            representative: None,
            min_temp: sample.main.temp,
            max_temp: sample.main.temp,
        });

        group.min_temp = group.min_temp.min(sample.main.temp);
        group.max_temp = group.max_temp.max(sample.main.temp);
        if group.representative.is_none() && REPRESENTATIVE_HOURS.contains(&hour) {
            group.representative = Some(sample);
        }
    }

    days.into_iter()
        .take(MAX_FORECAST_DAYS)
        .map(|(date, group)| {
            let sample = group.representative.unwrap_or(group.first);
            let condition = sample.weather.first();
            DailyForecast {
                date,
                timestamp: sample.dt,
                min_temp: group.min_temp,
                max_temp: group.max_temp,
                description: condition.map(|c| c.description.clone()).unwrap_or_default(),
                icon: condition.map(|c| c.icon.clone()).unwrap_or_default(),
                humidity: sample.main.humidity,
                pressure: sample.main.pressure,
                wind_speed: sample.wind.speed,
                wind_direction: sample.wind.deg,
                cloudiness: sample.clouds.all,
                precipitation_probability: (sample.pop * 100.0).round() as u8,
            }
        })
        .collect()
}
