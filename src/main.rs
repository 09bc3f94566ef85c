use std::env;
use anyhow::{Context, Result};
use log::{error, info};
use tenki::config::load_config;
use tenki::logging::setup_logger;
use tenki::manager_jma::Jma;
use tenki::store::ForecastStore;

fn main() {
    if let Err(e) = run() {
        eprintln!("tenki error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config_path = env::args().nth(1)
        .or_else(|| env::var("CONFIG_PATH").ok())
        .context("no config path given, pass it as argument or set CONFIG_PATH")?;

    let config = load_config(&config_path)
        .with_context(|| format!("loading config from {}", config_path))?;
    setup_logger(&config.general).context("setting up logging")?;

    info!("tenki version: {}", env!("CARGO_PKG_VERSION"));

    let jma = Jma::new(&config.jma);
    let store = ForecastStore::new(&config.files.store_dir);

    for area_code in &config.jma.area_codes {
        if let Err(e) = update_area(&jma, &store, area_code) {
            error!("area {}: {:#}", area_code, e);
        }
    }

    match store.stored_areas() {
        Ok(areas) => info!("store holds forecasts for areas: {}", areas.join(", ")),
        Err(e) => error!("listing stored areas: {}", e),
    }

    Ok(())
}

/// Fetches and saves the forecast for one area, then prints what the store holds for it.
/// A failed fetch only means stored data is shown.
///
/// # Arguments
///
/// * 'jma' - JMA client
/// * 'store' - forecast store
/// * 'area_code' - area to update
fn update_area(jma: &Jma, store: &ForecastStore, area_code: &str) -> Result<()> {
    match jma.get_forecast(area_code) {
        Ok(forecast) if !forecast.is_empty() => {
            store.save_forecasts(area_code, &forecast)
                .context("saving forecasts")?;
        },
        Ok(_) => info!("area {}: no forecast data, showing stored data", area_code),
        Err(e) => error!("{}, showing stored data", e),
    }

    let stored = store.get_forecasts(area_code).context("loading forecasts")?;

    let caption = format!("{} ", area_code);
    println!("{:=<80}", caption);
    for f in &stored {
        println!("{}", f);
    }

    Ok(())
}
