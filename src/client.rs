use anyhow::Result;

use crate::models::{ChangeOrderResponse, CreateOrderResponse, TrackingRequest};

/// Transport to the Macropoint order API.
///
/// Implementations own authentication, serialization and retries; the
/// tracker only hands them fully built requests.
#[async_trait::async_trait]
pub trait MacropointClient: Send + Sync {
    async fn create_order(&self, request: &TrackingRequest) -> Result<CreateOrderResponse>;

    async fn change_order(
        &self,
        order_id: &str,
        request: &TrackingRequest,
    ) -> Result<ChangeOrderResponse>;
}
