use chrono::{DateTime, Duration, Utc};

use crate::error::{TrackingError, TrackingResult};
use crate::models::{Address, StopAddress};

/// Wire format Macropoint expects for every date-time field
pub const MACROPOINT_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

pub fn to_provider_timestamp(time: DateTime<Utc>) -> String {
    time.format(MACROPOINT_TIMESTAMP_FORMAT).to_string()
}

/// Shifts `time` by a signed offset, failing when the result leaves chrono's range.
pub fn offset_timestamp(time: DateTime<Utc>, offset: Duration) -> TrackingResult<DateTime<Utc>> {
    time.checked_add_signed(offset).ok_or_else(|| {
        TrackingError::InvalidTimestamp(format!(
            "{} shifted by {}s is out of range",
            time,
            offset.num_seconds()
        ))
    })
}

pub fn to_stop_address(address: &Address) -> StopAddress {
    StopAddress::from(address)
}

impl From<&Address> for StopAddress {
    fn from(address: &Address) -> Self {
        StopAddress {
            postal_code: address.postal_code.clone(),
            line1: address.address.clone(),
            city: address.city.clone(),
            state_or_province: address.state.clone(),
            country_code: address.country.clone(),
        }
    }
}
