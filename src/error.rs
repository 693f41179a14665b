use thiserror::Error;

pub type TrackingResult<T> = Result<T, TrackingError>;

/// Reasons a tracking request cannot be built from an order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackingError {
    #[error("Order is missing required field `{0}`")]
    MissingRequiredField(&'static str),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Track duration of {hours}h for job {job_uuid} is negative")]
    InvalidTrackWindow { job_uuid: String, hours: i64 },
}
