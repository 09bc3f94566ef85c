use std::fmt;
use std::fmt::Formatter;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// ISO 8601 variants with an offset that RFC 3339 parsing doesn't accept
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%d %H:%M:%S%.f%:z"];

/// ISO 8601 variants without offset
const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"];

/// Calendar date identity of a forecast entry, always `YYYY-MM-DD` when the
/// timestamp it came from could be parsed.
///
/// Ordering is plain string ordering, which for the fixed width date format
/// equals chronological ordering.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct DayKey(String);

impl DayKey {
    /// Truncates a provider timestamp to its calendar date.
    ///
    /// Timestamps carrying an offset (`2024-05-01T11:00:00+09:00`) keep the date as seen
    /// in that offset, i.e. no conversion to UTC is done. If the string can't be parsed at all
    /// it is kept as is, which still works as a grouping key although not a pretty one.
    ///
    /// # Arguments
    ///
    /// * 'timestamp' - timestamp string as given by the provider
    pub fn from_timestamp(timestamp: &str) -> DayKey {
        let trimmed = timestamp.trim();

        let date = DateTime::parse_from_rfc3339(trimmed).ok().map(|dt| dt.date_naive())
            .or_else(|| OFFSET_FORMATS.iter()
                .find_map(|f| DateTime::parse_from_str(trimmed, f).ok())
                .map(|dt| dt.date_naive()))
            .or_else(|| NAIVE_FORMATS.iter()
                .find_map(|f| NaiveDateTime::parse_from_str(trimmed, f).ok())
                .map(|dt| dt.date()))
            .or_else(|| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok());

        match date {
            Some(d) => DayKey(d.format("%Y-%m-%d").to_string()),
            None => DayKey(timestamp.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_timestamp_keeps_local_date() {
        let key = DayKey::from_timestamp("2024-05-01T00:00:00+09:00");
        assert_eq!(key.as_str(), "2024-05-01");
    }

    #[test]
    fn test_naive_timestamp_and_plain_date() {
        assert_eq!(DayKey::from_timestamp("2024-05-02T21:00:00").as_str(), "2024-05-02");
        assert_eq!(DayKey::from_timestamp("2024-05-03").as_str(), "2024-05-03");
    }

    #[test]
    fn test_timestamps_without_seconds() {
        assert_eq!(DayKey::from_timestamp("2024-05-01T11:00+09:00").as_str(), "2024-05-01");
        assert_eq!(DayKey::from_timestamp("2024-05-01T23:30").as_str(), "2024-05-01");
    }

    #[test]
    fn test_fractional_seconds_and_space_separator() {
        assert_eq!(DayKey::from_timestamp("2024-05-01T11:00:00.250").as_str(), "2024-05-01");
        assert_eq!(DayKey::from_timestamp("2024-05-01 11:00:00").as_str(), "2024-05-01");
        assert_eq!(DayKey::from_timestamp("2024-05-01 11:00:00+09:00").as_str(), "2024-05-01");
    }

    #[test]
    fn test_same_day_different_hours_share_key() {
        let a = DayKey::from_timestamp("2024-05-01T06:00:00+09:00");
        let b = DayKey::from_timestamp("2024-05-01T21:00:00+09:00");
        assert_eq!(a, b);
    }

    #[test]
    fn test_malformed_timestamp_passes_through() {
        assert_eq!(DayKey::from_timestamp("not a date").as_str(), "not a date");
        assert_eq!(DayKey::from_timestamp("").as_str(), "");
    }

    #[test]
    fn test_ordering_is_chronological() {
        let mut keys = vec![
            DayKey::from_timestamp("2024-05-10T00:00:00+09:00"),
            DayKey::from_timestamp("2024-04-30T00:00:00+09:00"),
            DayKey::from_timestamp("2024-05-02T00:00:00+09:00"),
        ];
        keys.sort();
        let keys = keys.iter().map(|k| k.as_str()).collect::<Vec<&str>>();
        assert_eq!(keys, vec!["2024-04-30", "2024-05-02", "2024-05-10"]);
    }
}
