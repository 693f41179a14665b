use anyhow::{Context, Result, bail};
use chrono::Duration;
use std::env;
use std::str::FromStr;

use crate::models::VehicleType;

pub const DEFAULT_START_TIME_OFFSET_MINUTES: i64 = -60;
pub const DEFAULT_TRACK_DURATION_OFFSET_HOURS: i64 = 4;
pub const DEFAULT_TRACK_INTERVAL_MINUTES: u32 = 15;

/// Fixed values every tracking request is built with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub partner_mpid: String,
    pub start_time_offset: Duration,
    pub track_duration_offset: Duration,
    pub track_interval_minutes: u32,
    pub vehicle_type: VehicleType,
}

impl Config {
    pub fn new(partner_mpid: impl Into<String>) -> Self {
        Config {
            partner_mpid: partner_mpid.into(),
            start_time_offset: Duration::minutes(DEFAULT_START_TIME_OFFSET_MINUTES),
            track_duration_offset: Duration::hours(DEFAULT_TRACK_DURATION_OFFSET_HOURS),
            track_interval_minutes: DEFAULT_TRACK_INTERVAL_MINUTES,
            vehicle_type: VehicleType::DryVan,
        }
    }

    pub fn with_start_time_offset(mut self, offset: Duration) -> Self {
        self.start_time_offset = offset;
        self
    }

    pub fn with_track_duration_offset(mut self, offset: Duration) -> Self {
        self.track_duration_offset = offset;
        self
    }

    pub fn with_track_interval_minutes(mut self, minutes: u32) -> Self {
        self.track_interval_minutes = minutes;
        self
    }

    pub fn with_vehicle_type(mut self, vehicle_type: VehicleType) -> Self {
        self.vehicle_type = vehicle_type;
        self
    }

    /// Load configuration from environment variables
    ///
    /// # Environment Variables
    /// - `MACROPOINT_PARTNER_MPID`: Required - Partner id issued by Macropoint
    /// - `MACROPOINT_START_TIME_OFFSET_MINUTES`: Optional - Shift of pickup start (default: -60)
    /// - `MACROPOINT_TRACK_DURATION_OFFSET_HOURS`: Optional - Signed trip span buffer (default: 4)
    /// - `MACROPOINT_TRACK_INTERVAL_MINUTES`: Optional - Ping interval (default: 15)
    /// - `MACROPOINT_VEHICLE_TYPE`: Optional - Vehicle type name (default: DryVan)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Parse partner id (required)
        let partner_mpid = lookup("MACROPOINT_PARTNER_MPID")
            .context("MACROPOINT_PARTNER_MPID not set")?;

        if partner_mpid.trim().is_empty() {
            bail!("MACROPOINT_PARTNER_MPID cannot be empty");
        }

        let mut config = Config::new(partner_mpid);

        let start_offset = parse_var::<i64, _>(&lookup, "MACROPOINT_START_TIME_OFFSET_MINUTES")?;
        if let Some(minutes) = start_offset {
            config.start_time_offset = Duration::try_minutes(minutes)
                .context("MACROPOINT_START_TIME_OFFSET_MINUTES out of range")?;
        }

        let duration_offset =
            parse_var::<i64, _>(&lookup, "MACROPOINT_TRACK_DURATION_OFFSET_HOURS")?;
        if let Some(hours) = duration_offset {
            config.track_duration_offset = Duration::try_hours(hours)
                .context("MACROPOINT_TRACK_DURATION_OFFSET_HOURS out of range")?;
        }

        if let Some(minutes) = parse_var::<u32, _>(&lookup, "MACROPOINT_TRACK_INTERVAL_MINUTES")? {
            if minutes == 0 {
                bail!("MACROPOINT_TRACK_INTERVAL_MINUTES must be greater than zero");
            }
            config.track_interval_minutes = minutes;
        }

        let vehicle_type = parse_var::<VehicleType, _>(&lookup, "MACROPOINT_VEHICLE_TYPE")?;
        if let Some(vehicle_type) = vehicle_type {
            config.vehicle_type = vehicle_type;
        }

        Ok(config)
    }
}

fn parse_var<T, F>(lookup: &F, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| anyhow::anyhow!("Invalid {}: {}", name, e)),
        _ => Ok(None),
    }
}
