//! Normalization of raw location entries into flat forecast records.
//!
//! Each location reports three independent per-date series under
//! `weatherElements`: the condition text (`Wx.daily[].weather`) and the
//! two temperature extremes (`MinT.daily[].temperature`,
//! `MaxT.daily[].temperature`). The series do not promise to cover the
//! same dates, so they are merged by `dataDate` key into one composite
//! per date; a date seen by only one series still yields a record, with
//! the other fields absent.

use std::collections::HashMap;

use serde_json::Value;

use crate::model::{
    DailyComposite, ExtractError, ForecastRecord, ELEMENT_CONDITION, ELEMENT_MAX_TEMP,
    ELEMENT_MIN_TEMP, UNKNOWN_LOCATION,
};
use crate::navigate;

// ---------------------------------------------------------------------------
// Series access
// ---------------------------------------------------------------------------

/// Reads the daily point list of one named element under a location.
///
/// A missing element, missing `daily` key, or non-array value all default
/// to the empty list. Partial coverage is expected, never an error.
fn daily_points<'a>(location: &'a Value, element: &str) -> &'a [Value] {
    location
        .get("weatherElements")
        .and_then(|e| e.get(element))
        .and_then(|e| e.get("daily"))
        .and_then(|d| d.as_array())
        .map(|a| a.as_slice())
        .unwrap_or(&[])
}

/// Pulls a point's value field as an owned string. The feed emits both
/// string and numeric temperatures depending on the element, so numbers
/// are rendered verbatim rather than rejected.
fn point_value(point: &Value, field: &str) -> Option<String> {
    match point.get(field) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Series Merger
// ---------------------------------------------------------------------------

/// Merges the three series of one location into per-date composites.
///
/// Points without a `dataDate` cannot be keyed and are skipped. A date
/// repeated within a series is last-write-wins for that field. Iteration
/// order of the result is arbitrary — ordering is the table assembler's
/// job, not ours.
pub fn merge_series(location: &Value) -> HashMap<String, DailyComposite> {
    let mut daily: HashMap<String, DailyComposite> = HashMap::new();

    for point in daily_points(location, ELEMENT_CONDITION) {
        if let Some(date) = point.get("dataDate").and_then(|d| d.as_str()) {
            daily.entry(date.to_string()).or_default().condition = point_value(point, "weather");
        }
    }

    for point in daily_points(location, ELEMENT_MIN_TEMP) {
        if let Some(date) = point.get("dataDate").and_then(|d| d.as_str()) {
            daily.entry(date.to_string()).or_default().min_temp =
                point_value(point, "temperature");
        }
    }

    for point in daily_points(location, ELEMENT_MAX_TEMP) {
        if let Some(date) = point.get("dataDate").and_then(|d| d.as_str()) {
            daily.entry(date.to_string()).or_default().max_temp =
                point_value(point, "temperature");
        }
    }

    daily
}

// ---------------------------------------------------------------------------
// Record Normalizer
// ---------------------------------------------------------------------------

/// Navigates the whole document and flattens every location's composites
/// into forecast records, unsorted.
///
/// Distinguishes three fatal cases for the caller: a broken navigation
/// path (`Structure`), a present-but-empty location list (`EmptyResult`,
/// raised by the navigator), and locations that exist but collectively
/// yield no dated data (`NoRecords`).
pub fn extract_records(doc: &Value) -> Result<Vec<ForecastRecord>, ExtractError> {
    let locations = navigate::locations(doc)?;

    let mut records = Vec::new();
    for location in locations {
        let name = location
            .get("locationName")
            .and_then(|n| n.as_str())
            .unwrap_or(UNKNOWN_LOCATION);

        for (date, composite) in merge_series(location) {
            records.push(ForecastRecord::from_composite(name, &date, composite));
        }
    }

    if records.is_empty() {
        return Err(ExtractError::NoRecords);
    }

    Ok(records)
}
