//! Order service: validation, the API call, and response normalization.
//!
//! The service is the layer that knows what a *valid* request and a *well-formed*
//! response look like. It never touches application state; that is the job of
//! [`OrderApp`](crate::lifecycle::OrderApp).

pub mod error;
pub mod messages;

pub use error::*;
pub use messages::*;

use crate::clients::OrderApi;
use crate::model::{HealthStatus, OrderResponse, OrdersSnapshot};
use crate::validation::validate_message;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

pub struct OrderService<A: OrderApi> {
    api: A,
}

impl<A: OrderApi> OrderService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Validates `message` and sends it to the ordering system.
    ///
    /// Validation runs first: an invalid message fails with
    /// [`ServiceError::Validation`] and no request is made.
    #[instrument(skip(self))]
    pub async fn process_order_request(&self, message: &str) -> Result<OrderResponse, ServiceError> {
        let validation = validate_message(message);
        if !validation.is_valid {
            let error = validation
                .error
                .unwrap_or_else(|| "Invalid message".to_string());
            debug!(%error, "Rejected before sending");
            return Err(ServiceError::Validation(error));
        }

        let body = self.api.process_message(message).await?;
        let response: OrderResponse = normalize(body)?;
        info!(action = ?response.action, success = response.success, "Processed");
        Ok(response)
    }

    /// Current orders and totals, or an empty snapshot when they cannot be loaded.
    ///
    /// Never fails: a failed initial load must not keep the UI from starting.
    #[instrument(skip(self))]
    pub async fn load_initial_orders(&self) -> OrdersSnapshot {
        let loaded = match self.api.get_orders().await {
            Ok(body) => normalize::<OrdersSnapshot>(body),
            Err(e) => Err(ServiceError::from(e)),
        };

        match loaded {
            Ok(snapshot) => {
                info!(orders = snapshot.orders.len(), "Loaded orders");
                snapshot
            }
            Err(e) => {
                warn!(error = %e, "Failed to load orders");
                OrdersSnapshot::default()
            }
        }
    }

    /// Typed health check.
    pub async fn health(&self) -> Result<HealthStatus, ServiceError> {
        let body = self.api.health_check().await?;
        normalize(body)
    }

    pub async fn test_connection(&self) -> bool {
        self.api.test_connection().await
    }
}

/// Turns a raw body into a typed payload, rejecting anything that is not an
/// object of the right shape.
pub fn normalize<T: DeserializeOwned>(body: Value) -> Result<T, ServiceError> {
    if !body.is_object() {
        warn!("Response body is not an object");
        return Err(ServiceError::InvalidResponse);
    }
    serde_json::from_value(body).map_err(|e| {
        warn!(error = %e, "Response body has an unexpected shape");
        ServiceError::InvalidResponse
    })
}
