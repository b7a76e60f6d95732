pub mod errors;
pub mod models;

use std::collections::BTreeMap;
use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;
use crate::forecast_cleaner::errors::CleanError;
use crate::forecast_cleaner::models::{CleanedForecast, DailyRecord, HourlyRecord};
use crate::manager_openmeteo::models::{DailySeries, HourlySeries, RawForecast};
use crate::perceived_temperature::perceived_temperature;
use crate::weather_codes::describe_opt;

/// Number of hourly slots kept, starting at the current hour
pub const HOURS_AHEAD: usize = 12;

/// Returns the hour of day (0-23) of `now` in the given timezone
///
/// # Arguments
///
/// * 'tz' - reference timezone, the same one the provider aligned its timestamps to
/// * 'now' - current instant
pub fn current_hour(tz: &Tz, now: DateTime<Utc>) -> usize {
    now.with_timezone(tz).hour() as usize
}

/// Reshapes the provider's parallel arrays into records keyed by timestamp.
///
/// The daily pass skips the provider's last day. The hourly pass keeps the
/// [`HOURS_AHEAD`] slots starting at `current_hour`, which assumes the hourly
/// series starts at local midnight. Any array too short for the range being
/// read fails the whole operation, no partial result is returned.
///
/// # Arguments
///
/// * 'raw' - forecast as fetched from the provider
/// * 'current_hour' - local hour of day, see [`current_hour`]
pub fn clean(raw: &RawForecast, current_hour: usize) -> Result<CleanedForecast, CleanError> {
    Ok(CleanedForecast {
        daily: clean_daily(&raw.daily)?,
        hourly: clean_hourly(&raw.hourly, current_hour)?,
    })
}

fn clean_daily(daily: &DailySeries) -> Result<BTreeMap<String, DailyRecord>, CleanError> {
    let mut result = BTreeMap::new();

    // the provider's last day is never included
    for i in 0..daily.time.len().saturating_sub(1) {
        let record = DailyRecord {
            max_temp: at(&daily.temperature_2m_max, i, "daily.temperature_2m_max")?,
            min_temp: at(&daily.temperature_2m_min, i, "daily.temperature_2m_min")?,
            precipitation: at(&daily.precipitation_sum, i, "daily.precipitation_sum")?,
            condition: describe_opt(at(&daily.weathercode, i, "daily.weathercode")?),
            wind_speed: at(&daily.windspeed_10m_max, i, "daily.windspeed_10m_max")?,
            wind_direction: at(&daily.winddirection_10m_dominant, i, "daily.winddirection_10m_dominant")?,
        };
        result.insert(daily.time[i].clone(), record);
    }

    Ok(result)
}

fn clean_hourly(hourly: &HourlySeries, current_hour: usize) -> Result<BTreeMap<String, HourlyRecord>, CleanError> {
    let mut result = BTreeMap::new();

    for i in current_hour..current_hour + HOURS_AHEAD {
        let time = at(&hourly.time, i, "hourly.time")?;
        let temp = at(&hourly.temperature_2m, i, "hourly.temperature_2m")?;
        let wind_speed = at(&hourly.windspeed_10m, i, "hourly.windspeed_10m")?;
        let humidity = at(&hourly.relativehumidity_2m, i, "hourly.relativehumidity_2m")?;

        let record = HourlyRecord {
            temp,
            precipitation: at(&hourly.precipitation, i, "hourly.precipitation")?,
            condition: describe_opt(at(&hourly.weathercode, i, "hourly.weathercode")?),
            wind_speed,
            wind_direction: at(&hourly.winddirection_10m, i, "hourly.winddirection_10m")?,
            pressure: at(&hourly.pressure_msl, i, "hourly.pressure_msl")?,
            humidity,
            perceived_temp: perceived_temperature(temp, humidity, wind_speed),
        };
        result.insert(time, record);
    }

    Ok(result)
}

fn at<T: Clone>(values: &[T], index: usize, field: &str) -> Result<T, CleanError> {
    values.get(index).cloned().ok_or_else(|| {
        CleanError(format!("index {} out of range for {} with length {}", index, field, values.len()))
    })
}
