use std::fmt;
use std::fmt::Formatter;
use serde::{Deserialize, Serialize};
use crate::day_key::DayKey;

/// Reconciled forecast for one day
///
/// Temperatures are whole degrees Celsius, None means that no report contributed a value.
/// Weekly report values are rounded to whole degrees, intraday maximums are floored.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ForecastEntry {
    pub date: DayKey,
    pub weather: String,
    pub weather_code: String,
    pub icon: String,
    pub min: Option<i32>,
    pub max: Option<i32>,
}

impl ForecastEntry {
    /// Returns a new entry with unknown temperatures
    ///
    /// # Arguments
    ///
    /// * 'date' - the day the entry is for
    /// * 'weather' - weather description
    /// * 'weather_code' - JMA weather code
    /// * 'icon_base_url' - base url that the icon file name is appended to
    pub fn new(date: DayKey, weather: String, weather_code: String, icon_base_url: &str) -> ForecastEntry {
        let icon = format!("{}{}.svg", icon_base_url, weather_code);
        ForecastEntry { date, weather, weather_code, icon, min: None, max: None }
    }
}

/// Implementation of the Display Trait for pretty print, unknown temperatures show as "-"
impl fmt::Display for ForecastEntry {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}  {:>3}/{:<3}°C  {}  {}",
               self.date,
               temp_str(self.min), temp_str(self.max),
               self.weather, self.icon)
    }
}

fn temp_str(temp: Option<i32>) -> String {
    temp.map_or("-".to_string(), |t| t.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_reference_format() {
        let entry = ForecastEntry::new(
            DayKey::from_timestamp("2024-05-01"),
            "晴れ".to_string(),
            "100".to_string(),
            "https://www.jma.go.jp/bosai/forecast/img/");

        assert_eq!(entry.icon, "https://www.jma.go.jp/bosai/forecast/img/100.svg");
        assert_eq!(entry.min, None);
        assert_eq!(entry.max, None);
    }

    #[test]
    fn test_display_shows_dash_for_unknown() {
        let mut entry = ForecastEntry::new(
            DayKey::from_timestamp("2024-05-01"), "くもり".to_string(), "200".to_string(), "img/");
        entry.min = Some(0);

        let line = entry.to_string();
        assert!(line.starts_with("2024-05-01"));
        assert!(line.contains("0/-"));
        assert!(line.ends_with("img/200.svg"));
    }
}
