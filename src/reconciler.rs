use std::collections::BTreeMap;
use log::debug;
use serde_json::Value;
use crate::day_key::DayKey;
use crate::models::forecast::ForecastEntry;
use crate::series;

/// Base url for JMA weather icons, the weather code plus ".svg" is appended to it
pub const ICON_BASE_URL: &str = "https://www.jma.go.jp/bosai/forecast/img/";

/// Weather code used when the short range report has fewer codes than timestamps
const DEFAULT_WEATHER_CODE: &str = "100";

/// Merges the reports of one JMA forecast document into one entry per day.
///
/// JMA publishes the same period in several reports. The first report (short range) decides
/// which days exist and their weather, the second report (weekly) contributes min/max
/// temperatures, and whatever max temperatures are still missing after that are taken from
/// the intraday temperature samples of the first report.
pub struct Reconciler {
    icon_base_url: String,
}

impl Default for Reconciler {
    fn default() -> Self {
        Reconciler::new(ICON_BASE_URL)
    }
}

impl Reconciler {
    /// Returns a reconciler building icon references from the given base url
    ///
    /// # Arguments
    ///
    /// * 'icon_base_url' - base url for weather icons
    pub fn new(icon_base_url: &str) -> Reconciler {
        Reconciler { icon_base_url: icon_base_url.to_string() }
    }

    /// Reconciles a raw forecast document into entries sorted by date.
    ///
    /// Never fails, any part of the document that is missing or malformed just doesn't
    /// contribute anything. A document without a locatable weather series gives an empty result.
    ///
    /// # Arguments
    ///
    /// * 'raw' - the forecast document as parsed from JSON
    pub fn reconcile(&self, raw: &Value) -> Vec<ForecastEntry> {
        let Some(short_range) = series::report(raw, 0) else {
            debug!("forecast document holds no reports");
            return Vec::new();
        };

        let mut days = self.baseline(short_range);
        if days.is_empty() {
            debug!("no weather series found in short range report");
            return Vec::new();
        }

        match series::report(raw, 1) {
            Some(weekly) => weekly_override(weekly, &mut days),
            None => debug!("no weekly report, min/max left to intraday samples"),
        }

        intraday_max(short_range, &mut days);

        debug!("reconciled forecast for {} days", days.len());
        days.into_values().collect()
    }

    /// Builds one entry per day from the first series in the short range report that carries
    /// weather codes or texts. Later timestamps on the same day replace earlier ones.
    ///
    /// # Arguments
    ///
    /// * 'short_range' - the first report of the document
    fn baseline(&self, short_range: &Value) -> BTreeMap<DayKey, ForecastEntry> {
        let mut days: BTreeMap<DayKey, ForecastEntry> = BTreeMap::new();

        let Some(weather) = series::series_of(short_range)
            .iter()
            .find(|s| series::has_any(s, &["weatherCodes", "weathers"])) else {
            return days;
        };

        let codes = series::values(weather, "weatherCodes");
        let texts = series::values(weather, "weathers");

        for (i, ts) in series::time_defines(weather).into_iter().enumerate() {
            let key = DayKey::from_timestamp(ts);
            let code = codes.get(i).cloned().flatten().unwrap_or_else(|| DEFAULT_WEATHER_CODE.to_string());
            let text = texts.get(i).cloned().flatten().unwrap_or_default();

            days.insert(key.clone(), ForecastEntry::new(key, text, code, &self.icon_base_url));
        }

        days
    }
}

/// Convenience for reconciling with the standard JMA icon base url
///
/// # Arguments
///
/// * 'raw' - the forecast document as parsed from JSON
pub fn reconcile(raw: &Value) -> Vec<ForecastEntry> {
    Reconciler::default().reconcile(raw)
}

/// Overlays min/max temperatures from every weekly series carrying them, in series order.
/// Only days already known from the baseline are touched, and empty or unparsable values
/// never overwrite. JMA sends whole degrees here, anything else is rounded.
///
/// # Arguments
///
/// * 'weekly' - the second report of the document
/// * 'days' - entries to update
fn weekly_override(weekly: &Value, days: &mut BTreeMap<DayKey, ForecastEntry>) {
    let temp_series = series::series_of(weekly)
        .iter()
        .filter(|s| series::has_any(s, &["tempsMin", "tempsMax"]))
        .collect::<Vec<&Value>>();

    if temp_series.is_empty() {
        debug!("weekly report has no min/max temperature series");
    }

    for ts in temp_series {
        let mins = series::values(ts, "tempsMin");
        let maxs = series::values(ts, "tempsMax");

        for (i, t) in series::time_defines(ts).into_iter().enumerate() {
            if let Some(entry) = days.get_mut(&DayKey::from_timestamp(t)) {
                if let Some(min) = mins.get(i).and_then(|v| parse_temp(v.as_deref())) {
                    entry.min = Some(min.round() as i32);
                }
                if let Some(max) = maxs.get(i).and_then(|v| parse_temp(v.as_deref())) {
                    entry.max = Some(max.round() as i32);
                }
            }
        }
    }
}

/// Sets max temperature for days still missing one, using the highest intraday sample of
/// that day. Min temperature is left alone since samples for a day already under way can't
/// tell what the low was.
///
/// # Arguments
///
/// * 'short_range' - the first report of the document
/// * 'days' - entries to update
fn intraday_max(short_range: &Value, days: &mut BTreeMap<DayKey, ForecastEntry>) {
    let Some(samples) = series::series_of(short_range)
        .iter()
        .skip(2)
        .find(|s| series::has_any(s, &["temps"])) else {
        debug!("no intraday temperature series in short range report");
        return;
    };

    let temps = series::values(samples, "temps");
    let mut day_max: BTreeMap<DayKey, f64> = BTreeMap::new();

    for (i, t) in series::time_defines(samples).into_iter().enumerate() {
        if let Some(temp) = temps.get(i).and_then(|v| parse_temp(v.as_deref())) {
            day_max.entry(DayKey::from_timestamp(t))
                .and_modify(|m| *m = m.max(temp))
                .or_insert(temp);
        }
    }

    for (key, max) in day_max {
        if let Some(entry) = days.get_mut(&key) {
            if entry.max.is_none() {
                entry.max = Some(max.floor() as i32);
            }
        }
    }
}

/// Parses a temperature value, empty, non-numeric and values not fitting an i32 count as missing
///
/// # Arguments
///
/// * 'value' - raw value from the document
fn parse_temp(value: Option<&str>) -> Option<f64> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| *v >= i32::MIN as f64 && *v <= i32::MAX as f64)
}
