use super::{Order, OrderTotals, Orders};
use serde::{Deserialize, Serialize};

/// Outcome classification reported by the ordering system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderAction {
    Placed,
    Canceled,
    /// Known to the server; treated like `None` when building messages.
    Modified,
    Error,
    None,
}

/// Body of `POST /api/v1/process` and `DELETE /api/v1/orders/{id}`.
///
/// When `action` is `Placed`, `order_id` and `items` are present.
/// When `action` is `Canceled`, `order_id` is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderResponse {
    pub success: bool,
    pub action: OrderAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Order>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub totals: OrderTotals,
    pub orders: Orders,
}

/// Body of `GET /api/v1/orders`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrdersSnapshot {
    pub orders: Orders,
    pub totals: OrderTotals,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ItemCounts, OrderId};
    use serde_json::json;

    #[test]
    fn test_placed_response_parses() {
        let body = json!({
            "success": true,
            "action": "placed",
            "order_id": 7,
            "items": {"burgers": 2, "fries": 3, "drinks": 0},
            "totals": {"burgers": 2, "fries": 3, "drinks": 0},
            "orders": {"7": {"burgers": 2, "fries": 3, "drinks": 0}}
        });

        let response: OrderResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.action, OrderAction::Placed);
        assert_eq!(response.order_id, Some(7));
        assert_eq!(response.items, Some(ItemCounts::new(2, 3, 0)));
        assert_eq!(response.message, None);
        assert_eq!(response.orders.get(&OrderId::from("7")), Some(&ItemCounts::new(2, 3, 0)));
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        let body = json!({
            "success": true,
            "action": "teleported",
            "totals": {},
            "orders": {}
        });
        assert!(serde_json::from_value::<OrderResponse>(body).is_err());
    }

    #[test]
    fn test_health_status_tolerates_extra_fields() {
        let body = json!({"status": "healthy", "message": "Drive Thru Ordering System API"});
        let health: HealthStatus = serde_json::from_value(body).unwrap();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.service, None);
    }
}
