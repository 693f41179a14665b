use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order as stored by the order-management side, read-only input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub job_uuid: String,
    #[serde(default)]
    pub load_uuid: Option<String>,
    #[serde(default)]
    pub truck_number: Option<String>,
    #[serde(default)]
    pub carrier_uuid: Option<String>,
    #[serde(default)]
    pub carrier_dot_number: Option<String>,
    #[serde(default)]
    pub carrier_name: Option<String>,
    #[serde(default)]
    pub pickup_business_facility_uuid: Option<String>,
    #[serde(default)]
    pub dropoff_business_facility_uuid: Option<String>,
    #[serde(default)]
    pub pickup_start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub pickup_end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub dropoff_start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub dropoff_end_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Postal address of a business facility
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// An order together with the addresses of both of its facilities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub order: OrderRecord,
    #[serde(default)]
    pub pickup: Address,
    #[serde(default)]
    pub dropoff: Address,
}

// ================================================================================================
// Provider request shapes
// ================================================================================================

/// Create/change order payload sent to Macropoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrackingRequest {
    pub track_start_date_time: String,
    pub notifications: Notifications,
    pub carrier: CarrierData,
    pub vehicle: VehicleData,
    pub trip_sheet: TripSheetData,
    pub track_via: TrackViaData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Notifications {
    pub notification: Notification,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    #[serde(rename = "PartnerMPID")]
    pub partner_mpid: String,
    #[serde(rename = "IDNumber")]
    pub id_number: String,
    #[serde(rename = "TrackDurationInHours")]
    pub track_duration_in_hours: i64,
    #[serde(rename = "TrackIntervalInMinutes")]
    pub track_interval_in_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarrierData {
    #[serde(rename = "CarrierID", skip_serializing_if = "Option::is_none")]
    pub carrier_id: Option<String>,
    #[serde(rename = "CarrierName", skip_serializing_if = "Option::is_none")]
    pub carrier_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct VehicleData {
    pub vehicle_type: VehicleType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TripSheetData {
    pub stops: StopsData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StopsData {
    pub stop: Vec<StopData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StopData {
    pub stop_name: String,
    pub stop_type: StopType,
    #[serde(rename = "StopID")]
    pub stop_id: u32,
    pub address: StopAddress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date_time: Option<String>,
}

/// Address block of a stop, field-for-field counterpart of [`Address`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StopAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(rename = "Line1", skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(rename = "StateOrProvince", skip_serializing_if = "Option::is_none")]
    pub state_or_province: Option<String>,
    #[serde(rename = "CountryCode", skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrackViaData {
    pub number: Number,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Number {
    #[serde(rename = "Type")]
    pub number_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_number: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopType {
    Pickup,
    DropOff,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleType {
    DryVan,
    Reefer,
    Flatbed,
    StepDeck,
    PowerOnly,
}

impl VehicleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::DryVan => "DryVan",
            VehicleType::Reefer => "Reefer",
            VehicleType::Flatbed => "Flatbed",
            VehicleType::StepDeck => "StepDeck",
            VehicleType::PowerOnly => "PowerOnly",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "dryvan" => Ok(VehicleType::DryVan),
            "reefer" => Ok(VehicleType::Reefer),
            "flatbed" => Ok(VehicleType::Flatbed),
            "stepdeck" => Ok(VehicleType::StepDeck),
            "poweronly" => Ok(VehicleType::PowerOnly),
            _ => anyhow::bail!("Unknown vehicle type: {}", s),
        }
    }
}

// ================================================================================================
// Provider responses
// ================================================================================================

/// Macropoint answer to a create or change order call (pass-through only)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrackingResponse {
    #[serde(rename = "OrderID")]
    pub order_id: String,
    pub status: String,
    #[serde(rename = "TrackingRequestID")]
    pub tracking_request_id: String,
}

pub type CreateOrderResponse = TrackingResponse;
pub type ChangeOrderResponse = TrackingResponse;

impl TrackingResponse {
    pub fn is_success(&self) -> bool {
        self.status == "Success"
    }
}
