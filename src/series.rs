//! Checked lookups into the raw JMA forecast document.
//!
//! The document is an array of reports, each report holds a `timeSeries` array and each
//! series holds `timeDefines` plus an `areas` array with value arrays aligned by index to
//! `timeDefines`. Nothing in here assumes any key is present; missing or oddly typed parts
//! simply come back empty.

use serde_json::{Map, Value};

/// Returns the report at the given index, if the document is an array that long
///
/// # Arguments
///
/// * 'raw' - the full forecast document
/// * 'index' - report index, 0 is the short range report
pub fn report(raw: &Value, index: usize) -> Option<&Value> {
    raw.as_array().and_then(|reports| reports.get(index))
}

/// Returns all series of a report, or an empty slice
///
/// # Arguments
///
/// * 'report' - the report to get series from
pub fn series_of(report: &Value) -> &[Value] {
    report
        .get("timeSeries")
        .and_then(Value::as_array)
        .map(|s| s.as_slice())
        .unwrap_or(&[])
}

/// Returns the timestamps of a series, non-string entries are kept as empty strings so that
/// indexes stay aligned with the value arrays
///
/// # Arguments
///
/// * 'series' - the series to get timestamps from
pub fn time_defines(series: &Value) -> Vec<&str> {
    series
        .get("timeDefines")
        .and_then(Value::as_array)
        .map(|t| t.iter().map(|v| v.as_str().unwrap_or("")).collect())
        .unwrap_or_default()
}

/// Returns the first area object of a series
///
/// # Arguments
///
/// * 'series' - the series to get the area from
pub fn first_area(series: &Value) -> Option<&Map<String, Value>> {
    series
        .get("areas")
        .and_then(Value::as_array)
        .and_then(|a| a.first())
        .and_then(Value::as_object)
}

/// Checks whether the first area of a series carries any of the given value arrays
///
/// # Arguments
///
/// * 'series' - the series to check
/// * 'keys' - value array names, e.g. "tempsMin"
pub fn has_any(series: &Value, keys: &[&str]) -> bool {
    first_area(series).is_some_and(|area| keys.iter().any(|k| area.contains_key(*k)))
}

/// Returns the value array with the given name from the first area of a series.
///
/// Values are returned as strings since that is how JMA delivers them, numbers are
/// accepted and rendered as strings, anything else becomes None.
///
/// # Arguments
///
/// * 'series' - the series to read from
/// * 'key' - value array name
pub fn values(series: &Value, key: &str) -> Vec<Option<String>> {
    first_area(series)
        .and_then(|area| area.get(key))
        .and_then(Value::as_array)
        .map(|vals| vals.iter().map(value_as_string).collect())
        .unwrap_or_default()
}

fn value_as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
