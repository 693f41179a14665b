use tracing::debug;

use crate::config::Config;
use crate::error::{TrackingError, TrackingResult};
use crate::mapper::{offset_timestamp, to_provider_timestamp, to_stop_address};
use crate::models::{
    Address, CarrierData, Notification, Notifications, Number, OrderRecord, StopData, StopType,
    StopsData, TrackViaData, TrackingRequest, TripSheetData, VehicleData,
};

pub const PICKUP_STOP_NAME: &str = "Stop1";
pub const DROPOFF_STOP_NAME: &str = "Stop2";
pub const PICKUP_STOP_ID: u32 = 1;
pub const DROPOFF_STOP_ID: u32 = 2;
pub const VEHICLE_ID_NUMBER_TYPE: &str = "VehicleID";

/// Derives the Macropoint tracking request for `order`.
///
/// Tracking starts at pickup start shifted by the configured start offset and
/// lasts from pickup start to dropoff end plus the duration offset, truncated
/// to whole hours. Stops are always pickup then dropoff.
pub fn build_tracking_request(
    config: &Config,
    order: &OrderRecord,
    pickup_address: &Address,
    dropoff_address: &Address,
) -> TrackingResult<TrackingRequest> {
    let pickup_start = order
        .pickup_start_time
        .ok_or(TrackingError::MissingRequiredField("pickup_start_time"))?;
    let dropoff_end = order
        .dropoff_end_time
        .ok_or(TrackingError::MissingRequiredField("dropoff_end_time"))?;

    let track_start = offset_timestamp(pickup_start, config.start_time_offset)?;

    let tracking_duration = (dropoff_end - pickup_start)
        .checked_add(&config.track_duration_offset)
        .ok_or_else(|| TrackingError::InvalidTimestamp("track duration overflow".to_string()))?;
    // num_hours truncates toward zero
    let track_duration_in_hours = tracking_duration.num_hours();
    if track_duration_in_hours < 0 {
        return Err(TrackingError::InvalidTrackWindow {
            job_uuid: order.job_uuid.clone(),
            hours: track_duration_in_hours,
        });
    }

    let carrier_id = order.carrier_dot_number.clone();
    let carrier_name = order.carrier_name.clone().or_else(|| carrier_id.clone());

    let stops = vec![
        StopData {
            stop_name: PICKUP_STOP_NAME.to_string(),
            stop_type: StopType::Pickup,
            stop_id: PICKUP_STOP_ID,
            address: to_stop_address(pickup_address),
            start_date_time: Some(to_provider_timestamp(pickup_start)),
            end_date_time: order.pickup_end_time.map(to_provider_timestamp),
        },
        StopData {
            stop_name: DROPOFF_STOP_NAME.to_string(),
            stop_type: StopType::DropOff,
            stop_id: DROPOFF_STOP_ID,
            address: to_stop_address(dropoff_address),
            start_date_time: order.dropoff_start_time.map(to_provider_timestamp),
            end_date_time: Some(to_provider_timestamp(dropoff_end)),
        },
    ];

    debug!(
        job_uuid = %order.job_uuid,
        track_duration_in_hours,
        vehicle_type = %config.vehicle_type,
        "Built tracking request"
    );

    Ok(TrackingRequest {
        track_start_date_time: to_provider_timestamp(track_start),
        notifications: Notifications {
            notification: Notification {
                partner_mpid: config.partner_mpid.clone(),
                id_number: order.job_uuid.clone(),
                track_duration_in_hours,
                track_interval_in_minutes: config.track_interval_minutes,
            },
        },
        carrier: CarrierData {
            carrier_id,
            carrier_name,
        },
        vehicle: VehicleData {
            vehicle_type: config.vehicle_type,
        },
        trip_sheet: TripSheetData {
            stops: StopsData { stop: stops },
        },
        track_via: TrackViaData {
            number: Number {
                number_type: VEHICLE_ID_NUMBER_TYPE.to_string(),
                asset_number: order.truck_number.clone(),
            },
        },
    })
}
