use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use glob::glob;
use log::{debug, warn};
use crate::day_key::DayKey;
use crate::errors::StoreError;
use crate::models::forecast::ForecastEntry;

const FILE_SUFFIX: &str = "_forecast.json";

/// File backed forecast store keyed by area code and date, one JSON file per area
pub struct ForecastStore {
    store_dir: String,
}

impl ForecastStore {
    /// Returns a store keeping its files in the given directory
    ///
    /// # Arguments
    ///
    /// * 'store_dir' - the directory to keep files in, file names are appended as is
    pub fn new(store_dir: &str) -> ForecastStore {
        ForecastStore { store_dir: store_dir.to_string() }
    }

    /// Saves forecasts for an area. Stored entries for the same dates are replaced,
    /// entries for other dates are kept.
    ///
    /// # Arguments
    ///
    /// * 'area_code' - area the forecasts are for
    /// * 'forecasts' - entries to save
    pub fn save_forecasts(&self, area_code: &str, forecasts: &[ForecastEntry]) -> Result<(), StoreError> {
        let previous = match self.get_forecasts(area_code) {
            Ok(forecasts) => forecasts,
            Err(StoreError::Document(e)) => {
                warn!("stored forecasts for area {} unreadable, replacing them: {}", area_code, e);
                Vec::new()
            },
            Err(e) => return Err(e),
        };

        let mut stored = previous
            .into_iter()
            .map(|f| (f.date.clone(), f))
            .collect::<BTreeMap<DayKey, ForecastEntry>>();

        for f in forecasts {
            stored.insert(f.date.clone(), f.clone());
        }

        let entries = stored.into_values().collect::<Vec<ForecastEntry>>();
        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(self.file_path(area_code), json)?;
        debug!("saved {} forecasts for area {}", forecasts.len(), area_code);

        Ok(())
    }

    /// Loads stored forecasts for an area sorted by date, empty if nothing is stored
    ///
    /// # Arguments
    ///
    /// * 'area_code' - area to load forecasts for
    pub fn get_forecasts(&self, area_code: &str) -> Result<Vec<ForecastEntry>, StoreError> {
        let file_path = self.file_path(area_code);

        if Path::new(&file_path).exists() {
            let json = fs::read_to_string(file_path)?;
            let mut forecasts: Vec<ForecastEntry> = serde_json::from_str(&json)?;
            forecasts.sort_by(|a, b| a.date.cmp(&b.date));
            Ok(forecasts)
        } else {
            Ok(Vec::new())
        }
    }

    /// Returns the area codes that have stored forecasts, sorted
    ///
    pub fn stored_areas(&self) -> Result<Vec<String>, StoreError> {
        let pattern = format!("{}*{}", self.store_dir, FILE_SUFFIX);
        let mut areas: Vec<String> = Vec::new();

        for entry in glob(&pattern)? {
            match entry {
                Ok(path) => {
                    if let Some(filename) = path.file_name().and_then(|n| n.to_str()) {
                        if let Some(area) = filename.strip_suffix(FILE_SUFFIX) {
                            areas.push(area.to_string());
                        }
                    }
                },
                Err(e) => warn!("unreadable store entry: {}", e),
            }
        }

        areas.sort();
        Ok(areas)
    }

    fn file_path(&self, area_code: &str) -> String {
        format!("{}{}{}", self.store_dir, area_code, FILE_SUFFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry(date: &str, code: &str, min: Option<i32>, max: Option<i32>) -> ForecastEntry {
        let mut e = ForecastEntry::new(DayKey::from_timestamp(date), format!("weather {}", code), code.to_string(), "img/");
        e.min = min;
        e.max = max;
        e
    }

    fn store(dir: &TempDir) -> ForecastStore {
        ForecastStore::new(&format!("{}/", dir.path().display()))
    }

    #[test]
    fn test_get_forecasts_for_unknown_area_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(store(&dir).get_forecasts("130000").unwrap().is_empty());
    }

    #[test]
    fn test_save_and_get_sorted() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        store.save_forecasts("130000", &[
            entry("2024-05-02", "100", None, Some(20)),
            entry("2024-05-01", "200", Some(12), None),
        ]).unwrap();

        let loaded = store.get_forecasts("130000").unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].date.as_str(), "2024-05-01");
        assert_eq!(loaded[0].min, Some(12));
        assert_eq!(loaded[0].max, None);
        assert_eq!(loaded[1].date.as_str(), "2024-05-02");
        assert_eq!(loaded[1].max, Some(20));
    }

    #[test]
    fn test_save_replaces_same_date_and_keeps_others() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        store.save_forecasts("130000", &[
            entry("2024-05-01", "200", None, None),
            entry("2024-05-02", "100", None, None),
        ]).unwrap();
        store.save_forecasts("130000", &[
            entry("2024-05-02", "300", Some(15), Some(22)),
            entry("2024-05-03", "101", None, None),
        ]).unwrap();

        let loaded = store.get_forecasts("130000").unwrap();
        let codes = loaded.iter().map(|e| e.weather_code.as_str()).collect::<Vec<&str>>();
        assert_eq!(codes, vec!["200", "300", "101"]);
        assert_eq!(loaded[1].min, Some(15));
        assert_eq!(loaded[1].max, Some(22));
    }

    #[test]
    fn test_save_replaces_unreadable_file() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        fs::write(dir.path().join("130000_forecast.json"), "{truncated").unwrap();

        assert!(store.get_forecasts("130000").is_err());

        store.save_forecasts("130000", &[entry("2024-05-01", "100", Some(3), Some(14))]).unwrap();

        let loaded = store.get_forecasts("130000").unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].min, Some(3));
        assert_eq!(loaded[0].max, Some(14));
    }

    #[test]
    fn test_areas_are_kept_apart() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        store.save_forecasts("270000", &[entry("2024-05-01", "100", None, None)]).unwrap();
        store.save_forecasts("130000", &[entry("2024-05-01", "300", None, None)]).unwrap();

        assert_eq!(store.get_forecasts("270000").unwrap()[0].weather_code, "100");
        assert_eq!(store.get_forecasts("130000").unwrap()[0].weather_code, "300");
        assert_eq!(store.stored_areas().unwrap(), vec!["130000", "270000"]);
    }
}
