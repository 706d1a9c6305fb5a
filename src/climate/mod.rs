//! Query service shared by the REST handlers and the one-shot commands.
//!
//! Each operation runs one or two storage queries, applies the date-window
//! arithmetic, and shapes the rows into JSON-ready collections.

mod error;
mod window;

use std::collections::BTreeMap;

use crate::storage::{DailyReading, Storage, TemperatureSummary};

pub use error::ClimateError;
pub use window::{
    QueryWindows, DEFAULT_END_OFFSET_DAYS, DEFAULT_START_OFFSET_DAYS, DEFAULT_YEAR_DAYS,
};
use window::{parse_route_date, shift_back};

/// Date (ISO text) to reading; serializes in ascending date order.
pub type DailySeries = BTreeMap<String, Option<f64>>;

/// Precipitation for the `year_days` days ending at the latest measurement.
///
/// The day exactly `year_days` before the latest date is not included.
pub fn precipitation<S: Storage + ?Sized>(
    storage: &S,
    windows: &QueryWindows,
) -> Result<DailySeries, ClimateError> {
    let Some(latest) = storage.latest_measurement_date()? else {
        log::debug!("No measurements recorded; precipitation series is empty");
        return Ok(DailySeries::new());
    };
    let after = shift_back(latest, windows.year_days)?;
    let rows = storage.list_precipitation_after(after)?;
    Ok(into_series(rows))
}

pub fn stations<S: Storage + ?Sized>(storage: &S) -> Result<Vec<String>, ClimateError> {
    Ok(storage.list_station_ids()?)
}

/// Temperature observations of the most active station over the rolling year.
pub fn tobs<S: Storage + ?Sized>(
    storage: &S,
    windows: &QueryWindows,
) -> Result<DailySeries, ClimateError> {
    let Some(latest) = storage.latest_measurement_date()? else {
        return Ok(DailySeries::new());
    };
    let after = shift_back(latest, windows.year_days)?;

    let Some(active) = storage.most_active_station()? else {
        return Ok(DailySeries::new());
    };
    log::debug!(
        "Most active station {} with {} observations",
        active.station,
        active.observations
    );

    let rows = storage.list_temperatures_after(&active.station, after)?;
    Ok(into_series(rows))
}

/// Min/avg/max temperature after the offset-adjusted `start`, up to and
/// including the offset-adjusted `end`.
///
/// Always a single-element list. A window whose end precedes its start
/// yields a summary of nulls.
pub fn temperature_range<S: Storage + ?Sized>(
    storage: &S,
    windows: &QueryWindows,
    start: &str,
    end: Option<&str>,
) -> Result<Vec<TemperatureSummary>, ClimateError> {
    let start = shift_back(parse_route_date(start)?, windows.start_offset_days)?;
    let end = end
        .map(|raw| shift_back(parse_route_date(raw)?, windows.end_offset_days))
        .transpose()?;

    let summary = storage.temperature_summary(start, end)?;
    Ok(vec![summary])
}

fn into_series(rows: Vec<DailyReading>) -> DailySeries {
    // Later rows for the same date replace earlier ones.
    rows.into_iter()
        .map(|row| (row.date.format("%Y-%m-%d").to_string(), row.value))
        .collect()
}
