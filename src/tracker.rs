use anyhow::{Context, Result};
use tracing::{error, info, warn};

use crate::client::MacropointClient;
use crate::config::Config;
use crate::models::{
    Address, ChangeOrderResponse, CreateOrderResponse, OrderRecord, Shipment, TrackingRequest,
    TrackingResponse,
};
use crate::request::build_tracking_request;

pub struct OrderTracker {
    config: Config,
    client: Box<dyn MacropointClient>,
}

impl OrderTracker {
    pub fn new(config: Config, client: Box<dyn MacropointClient>) -> Self {
        Self { config, client }
    }

    pub fn build_request(
        &self,
        order: &OrderRecord,
        pickup: &Address,
        dropoff: &Address,
    ) -> Result<TrackingRequest> {
        build_tracking_request(&self.config, order, pickup, dropoff).with_context(|| {
            format!("Failed to build tracking request for job {}", order.job_uuid)
        })
    }

    pub async fn create_order(
        &self,
        order: &OrderRecord,
        pickup: &Address,
        dropoff: &Address,
    ) -> Result<CreateOrderResponse> {
        let request = self.build_request(order, pickup, dropoff)?;

        let response = self
            .client
            .create_order(&request)
            .await
            .with_context(|| format!("Macropoint create order failed for job {}", order.job_uuid))?;

        log_response("create", &order.job_uuid, &response);

        Ok(response)
    }

    pub async fn change_order(
        &self,
        order_id: &str,
        order: &OrderRecord,
        pickup: &Address,
        dropoff: &Address,
    ) -> Result<ChangeOrderResponse> {
        let request = self.build_request(order, pickup, dropoff)?;

        let response = self
            .client
            .change_order(order_id, &request)
            .await
            .with_context(|| {
                format!(
                    "Macropoint change order {} failed for job {}",
                    order_id, order.job_uuid
                )
            })?;

        log_response("change", &order.job_uuid, &response);

        Ok(response)
    }

    /// Creates orders for every shipment concurrently, one result per shipment in input order.
    pub async fn create_orders(&self, shipments: &[Shipment]) -> Vec<Result<CreateOrderResponse>> {
        let results = futures::future::join_all(shipments.iter().map(|shipment| {
            self.create_order(&shipment.order, &shipment.pickup, &shipment.dropoff)
        }))
        .await;

        for (shipment, result) in shipments.iter().zip(&results) {
            if let Err(e) = result {
                error!(job_uuid = %shipment.order.job_uuid, "Tracking order failed: {:?}", e);
            }
        }

        results
    }
}

fn log_response(operation: &str, job_uuid: &str, response: &TrackingResponse) {
    if response.is_success() {
        info!(
            operation,
            job_uuid,
            order_id = %response.order_id,
            tracking_request_id = %response.tracking_request_id,
            "Macropoint order accepted"
        );
    } else {
        warn!(
            operation,
            job_uuid,
            order_id = %response.order_id,
            status = %response.status,
            "Macropoint order returned non-success status"
        );
    }
}
