#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use macropoint_tracker::models::{Address, OrderRecord, Shipment, TrackingResponse};

pub const JOB_UUID: &str = "5d1f2a86-7d7b-4c1e-9a43-0f2b8e6c1a10";
pub const TRUCK_NUMBER: &str = "TRK-4471";
pub const DOT_NUMBER: &str = "3051187";
pub const PARTNER_MPID: &str = "MP-PARTNER-01";

pub fn pickup_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 14, 8, 0, 0).unwrap()
}

/// Pickup T..T+2h, dropoff T+10h..T+12h
pub fn order_data() -> OrderRecord {
    let t = pickup_start();
    OrderRecord {
        job_uuid: JOB_UUID.to_string(),
        load_uuid: Some(JOB_UUID.to_string()),
        truck_number: Some(TRUCK_NUMBER.to_string()),
        carrier_uuid: Some("c2b3e0f4-1111-4c2a-8d1e-2c3d4e5f6a7b".to_string()),
        carrier_dot_number: Some(DOT_NUMBER.to_string()),
        carrier_name: None,
        pickup_business_facility_uuid: Some("pickup-facility".to_string()),
        dropoff_business_facility_uuid: Some("dropoff-facility".to_string()),
        pickup_start_time: Some(t),
        pickup_end_time: Some(t + Duration::hours(2)),
        dropoff_start_time: Some(t + Duration::hours(10)),
        dropoff_end_time: Some(t + Duration::hours(12)),
        created_at: t - Duration::days(1),
        updated_at: t - Duration::days(1),
    }
}

pub fn pickup_address() -> Address {
    Address {
        postal_code: Some("02130".to_string()),
        address: Some("Ms Alice Smith Apartment 1c 213 Derrick Street".to_string()),
        city: Some("Boston".to_string()),
        state: Some("MA".to_string()),
        country: Some("USA".to_string()),
    }
}

pub fn dropoff_address() -> Address {
    Address {
        postal_code: Some("74136".to_string()),
        address: Some("4616 Philli Lane".to_string()),
        city: Some("Tulsa".to_string()),
        state: Some("Oklahoma".to_string()),
        country: Some("USA".to_string()),
    }
}

pub fn shipment(job_uuid: &str) -> Shipment {
    let mut order = order_data();
    order.job_uuid = job_uuid.to_string();
    Shipment {
        order,
        pickup: pickup_address(),
        dropoff: dropoff_address(),
    }
}

pub fn success_response(order_id: &str) -> TrackingResponse {
    TrackingResponse {
        order_id: order_id.to_string(),
        status: "Success".to_string(),
        tracking_request_id: format!("TR-{}", order_id),
    }
}
