use std::fs;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;
use crate::reconciler::ICON_BASE_URL;

const FORECAST_URL: &str = "https://www.jma.go.jp/bosai/forecast/data/forecast/{area_code}.json";

#[derive(Deserialize)]
pub struct JmaParameters {
    #[serde(default = "default_forecast_url")]
    pub forecast_url: String,
    #[serde(default = "default_icon_base_url")]
    pub icon_base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    pub area_codes: Vec<String>,
}

#[derive(Deserialize)]
pub struct Files {
    pub store_dir: String,
}

#[derive(Deserialize)]
pub struct General {
    pub log_path: String,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

#[derive(Deserialize)]
pub struct Config {
    pub jma: JmaParameters,
    pub files: Files,
    pub general: General,
}

fn default_forecast_url() -> String { FORECAST_URL.to_string() }
fn default_icon_base_url() -> String { ICON_BASE_URL.to_string() }
fn default_timeout_secs() -> u64 { 30 }

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {
    let toml = fs::read_to_string(config_path)?;
    let mut config: Config = toml::from_str(&toml)?;

    if !config.jma.forecast_url.contains("{area_code}") {
        return Err(ConfigError::from("forecast_url must contain an {area_code} placeholder"));
    }
    if config.jma.area_codes.is_empty() {
        return Err(ConfigError::from("no area codes configured"));
    }

    // Store files are named by simple concatenation
    if !config.files.store_dir.ends_with('/') {
        config.files.store_dir.push('/');
    }

    Ok(config)
}
