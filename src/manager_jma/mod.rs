pub mod errors;

use std::time::Duration;
use log::{debug, info};
use serde_json::Value;
use ureq::Agent;
use crate::config::JmaParameters;
use crate::manager_jma::errors::JmaError;
use crate::models::forecast::ForecastEntry;
use crate::reconciler::Reconciler;

/// Struct for fetching forecasts from the Japan Meteorological Agency
pub struct Jma {
    agent: Agent,
    forecast_url: String,
    reconciler: Reconciler,
}

impl Jma {
    /// Returns a Jma struct ready for fetching and reconciling forecasts
    ///
    /// # Arguments
    ///
    /// * 'config' - JMA configuration
    pub fn new(config: &JmaParameters) -> Self {
        let agent_config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            .build();

        let agent = agent_config.into();

        Self {
            agent,
            forecast_url: config.forecast_url.to_string(),
            reconciler: Reconciler::new(&config.icon_base_url),
        }
    }

    /// Retrieves the forecast document for an area and reconciles its reports into one
    /// entry per day, sorted by date.
    ///
    /// Only the request itself and JSON parsing can fail, a document that parses but
    /// lacks expected parts gives fewer (or no) entries.
    ///
    /// # Arguments
    ///
    /// * 'area_code' - JMA office code, e.g. "130000" for Tokyo
    pub fn get_forecast(&self, area_code: &str) -> Result<Vec<ForecastEntry>, JmaError> {
        let url = forecast_url(&self.forecast_url, area_code);
        debug!("fetching {}", url);

        let json = self.agent
            .get(&url)
            .call()
            .and_then(|mut res| res.body_mut().read_to_string())
            .map_err(|e| JmaError::http(area_code, e))?;

        let raw: Value = serde_json::from_str(&json)
            .map_err(|e| JmaError::document(area_code, e))?;
        let forecast = self.reconciler.reconcile(&raw);
        info!("area {}: {} forecast days", area_code, forecast.len());

        Ok(forecast)
    }
}

/// Substitutes the area code into the forecast url template
///
/// # Arguments
///
/// * 'template' - url with an {area_code} placeholder
/// * 'area_code' - JMA office code
fn forecast_url(template: &str, area_code: &str) -> String {
    template.replace("{area_code}", area_code.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_url() {
        let url = forecast_url("https://www.jma.go.jp/bosai/forecast/data/forecast/{area_code}.json", " 130000");
        assert_eq!(url, "https://www.jma.go.jp/bosai/forecast/data/forecast/130000.json");
    }
}
