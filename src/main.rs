use anyhow::{Context, Result};
use std::fs;
use macropoint_tracker::{
    config::Config,
    logging::setup_tracing,
    models::Shipment,
    request::build_tracking_request,
};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {:#}", e);
            std::process::exit(1);
        }
    };

    let path = std::env::args()
        .nth(1)
        .context("Usage: macropoint-tracker <shipment.json>")?;

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read shipment file {}", path))?;
    let shipment: Shipment = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse shipment file {}", path))?;

    let request =
        build_tracking_request(&config, &shipment.order, &shipment.pickup, &shipment.dropoff)
            .with_context(|| format!("Cannot track job {}", shipment.order.job_uuid))?;

    println!("{}", serde_json::to_string_pretty(&request)?);

    Ok(())
}
