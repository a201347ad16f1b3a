//! Stub ordering system for integration tests.

#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use drivethru_client::model::{ItemCounts, OrderId, Orders};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// A base URL nothing listens on.
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// In-memory kitchen: every message places 2 burgers and 3 fries, except
/// `Cancel order <id>`.
#[derive(Clone, Default)]
pub struct Kitchen {
    inner: Arc<Mutex<KitchenState>>,
}

#[derive(Default)]
struct KitchenState {
    next_id: u64,
    orders: Orders,
}

impl Kitchen {
    pub fn with_order(self, id: u64, order: ItemCounts) -> Self {
        {
            let mut state = self.inner.lock().unwrap();
            state.orders.insert(OrderId::from(id), order);
            state.next_id = state.next_id.max(id);
        }
        self
    }

    pub fn router(self) -> Router {
        Router::new()
            .route("/api/v1/process", post(process))
            .route("/api/v1/orders", get(list_orders))
            .route("/api/v1/orders/{id}", delete(cancel))
            .route("/health", get(health))
            .with_state(self)
    }
}

fn totals(orders: &Orders) -> ItemCounts {
    orders.values().fold(ItemCounts::default(), |acc, order| {
        ItemCounts::new(
            acc.burgers + order.burgers,
            acc.fries + order.fries,
            acc.drinks + order.drinks,
        )
    })
}

fn cancel_in(state: &mut KitchenState, id: &str) -> Value {
    match state.orders.remove(&OrderId::from(id)) {
        Some(_) => json!({
            "success": true,
            "action": "canceled",
            "order_id": id.parse::<u64>().unwrap_or_default(),
            "totals": totals(&state.orders),
            "orders": state.orders,
        }),
        None => json!({
            "success": false,
            "action": "error",
            "message": format!("Order #{id} not found"),
            "totals": totals(&state.orders),
            "orders": state.orders,
        }),
    }
}

async fn process(State(kitchen): State<Kitchen>, Json(body): Json<Value>) -> Json<Value> {
    let message = body["message"].as_str().unwrap_or_default().to_string();
    let mut state = kitchen.inner.lock().unwrap();

    if let Some(id) = message.strip_prefix("Cancel order ") {
        return Json(cancel_in(&mut state, id.trim()));
    }

    state.next_id += 1;
    let id = state.next_id;
    let items = ItemCounts::new(2, 3, 0);
    state.orders.insert(OrderId::from(id), items);
    Json(json!({
        "success": true,
        "action": "placed",
        "order_id": id,
        "items": items,
        "totals": totals(&state.orders),
        "orders": state.orders,
    }))
}

async fn list_orders(State(kitchen): State<Kitchen>) -> Json<Value> {
    let state = kitchen.inner.lock().unwrap();
    Json(json!({"orders": state.orders, "totals": totals(&state.orders)}))
}

async fn cancel(
    State(kitchen): State<Kitchen>,
    Path(id): Path<String>,
) -> (StatusCode, Json<Value>) {
    let mut state = kitchen.inner.lock().unwrap();
    if !state.orders.contains_key(&OrderId::from(id.as_str())) {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": format!("Order #{id} not found")})),
        );
    }
    (StatusCode::OK, Json(cancel_in(&mut state, &id)))
}

async fn health() -> Json<Value> {
    Json(json!({"status": "healthy", "service": "drive-thru-api", "version": "1.0.0"}))
}
