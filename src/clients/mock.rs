//! # Mock API
//!
//! An in-memory [`OrderApi`] for testing the service and app layers without a server.
//!
//! Queue the responses you expect with the builder methods, run the code under test,
//! then inspect [`MockApi::calls`] or call [`MockApi::verify`].
//!
//! ```ignore
//! let api = MockApi::new();
//! api.expect_process_message().return_ok(json!({ ... }));
//!
//! let service = OrderService::new(api.clone());
//! service.process_order_request("two fries").await?;
//!
//! assert_eq!(api.call_count(), 1);
//! api.verify();
//! ```

use crate::clients::{ApiError, OrderApi};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Which operation an expectation or a recorded call refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    ProcessMessage,
    GetOrders,
    CancelOrder,
    HealthCheck,
}

/// A call the mock received, with its argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    ProcessMessage(String),
    GetOrders,
    CancelOrder(String),
    HealthCheck,
}

impl ApiCall {
    pub fn kind(&self) -> CallKind {
        match self {
            ApiCall::ProcessMessage(_) => CallKind::ProcessMessage,
            ApiCall::GetOrders => CallKind::GetOrders,
            ApiCall::CancelOrder(_) => CallKind::CancelOrder,
            ApiCall::HealthCheck => CallKind::HealthCheck,
        }
    }
}

struct Expectation {
    kind: CallKind,
    response: Result<Value, ApiError>,
}

/// A mock API with expectation tracking.
///
/// Clones share the same expectations and call log, so a test can keep one
/// handle while the service owns another.
#[derive(Clone, Default)]
pub struct MockApi {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    calls: Arc<Mutex<Vec<ApiCall>>>,
}

impl MockApi {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expect_process_message(&self) -> ExpectationBuilder {
        self.expect(CallKind::ProcessMessage)
    }

    pub fn expect_get_orders(&self) -> ExpectationBuilder {
        self.expect(CallKind::GetOrders)
    }

    pub fn expect_cancel_order(&self) -> ExpectationBuilder {
        self.expect(CallKind::CancelOrder)
    }

    pub fn expect_health_check(&self) -> ExpectationBuilder {
        self.expect(CallKind::HealthCheck)
    }

    fn expect(&self, kind: CallKind) -> ExpectationBuilder {
        ExpectationBuilder {
            kind,
            expectations: self.expectations.clone(),
        }
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }

    fn answer(&self, call: ApiCall) -> Result<Value, ApiError> {
        let kind = call.kind();
        self.calls.lock().unwrap().push(call);

        let expectation = self.expectations.lock().unwrap().pop_front();
        match expectation {
            Some(expectation) if expectation.kind == kind => expectation.response,
            Some(expectation) => panic!(
                "Expectation mismatch: expected {:?}, got {:?}",
                expectation.kind, kind
            ),
            None => panic!("Unexpected request: {kind:?}"),
        }
    }
}

/// Builder returned by the `expect_*` methods.
pub struct ExpectationBuilder {
    kind: CallKind,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl ExpectationBuilder {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, body: Value) {
        self.push(Ok(body));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ApiError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Value, ApiError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation {
            kind: self.kind,
            response,
        });
    }
}

#[async_trait]
impl OrderApi for MockApi {
    async fn process_message(&self, message: &str) -> Result<Value, ApiError> {
        self.answer(ApiCall::ProcessMessage(message.to_string()))
    }

    async fn get_orders(&self) -> Result<Value, ApiError> {
        self.answer(ApiCall::GetOrders)
    }

    async fn cancel_order(&self, order_id: &str) -> Result<Value, ApiError> {
        self.answer(ApiCall::CancelOrder(order_id.to_string()))
    }

    async fn health_check(&self) -> Result<Value, ApiError> {
        self.answer(ApiCall::HealthCheck)
    }
}
