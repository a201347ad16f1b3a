//! User-facing text built from server responses and errors.

use crate::model::{ItemType, Order, OrderAction, OrderResponse, OrderTotals};
use crate::order_service::ServiceError;

pub const DEFAULT_SUCCESS_MESSAGE: &str = "Request processed successfully";
pub const CONNECTION_ERROR_MESSAGE: &str =
    "Unable to connect to the ordering system. Please try again.";

/// Message for a successful response: the server's own text when it sent one,
/// otherwise one synthesized from the action.
pub fn create_success_message(result: &OrderResponse) -> String {
    if let Some(message) = result.message.as_deref().filter(|m| !m.is_empty()) {
        return message.to_string();
    }

    // Id 0 is not a real order number
    let order_id = result.order_id.filter(|id| *id != 0);
    match (result.action, order_id, result.items.as_ref()) {
        (OrderAction::Placed, Some(id), Some(items)) => {
            format!("Order #{id} placed: {}", create_order_summary(items))
        }
        (OrderAction::Canceled, Some(id), _) => format!("Order #{id} has been canceled"),
        _ => DEFAULT_SUCCESS_MESSAGE.to_string(),
    }
}

/// Message for a failed request.
pub fn create_error_message(error: &ServiceError) -> String {
    let message = error.to_string();
    if message.trim().is_empty() {
        CONNECTION_ERROR_MESSAGE.to_string()
    } else {
        message
    }
}

/// Lowercase name for `count` items of one type. Fries have no singular.
pub fn format_item_name(item: ItemType, count: u32) -> &'static str {
    match (item, count) {
        (ItemType::Burgers, 1) => "burger",
        (ItemType::Burgers, _) => "burgers",
        (ItemType::Fries, _) => "fries",
        (ItemType::Drinks, 1) => "drink",
        (ItemType::Drinks, _) => "drinks",
    }
}

/// `"2 burgers, 1 fries"`: nonzero items only, in burgers/fries/drinks order.
pub fn create_order_summary(order: &Order) -> String {
    ItemType::ALL
        .iter()
        .map(|item| (*item, order.count(*item)))
        .filter(|(_, count)| *count > 0)
        .map(|(item, count)| format!("{count} {}", format_item_name(item, count)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Title-case summary for an order card, `"Empty order"` when nothing is in it.
pub fn format_order_items(order: &Order) -> String {
    let mut items = Vec::new();
    if order.burgers > 0 {
        let plural = if order.burgers == 1 { "" } else { "s" };
        items.push(format!("{} Burger{plural}", order.burgers));
    }
    if order.fries > 0 {
        items.push(format!("{} Fries", order.fries));
    }
    if order.drinks > 0 {
        let plural = if order.drinks == 1 { "" } else { "s" };
        items.push(format!("{} Drink{plural}", order.drinks));
    }

    if items.is_empty() {
        "Empty order".to_string()
    } else {
        items.join(", ")
    }
}

pub fn calculate_total_items(totals: &OrderTotals) -> u64 {
    totals.total()
}

pub fn is_empty_order(order: &Order) -> bool {
    order.is_empty()
}

/// Sample messages for an input placeholder.
pub fn order_examples() -> &'static [&'static str] {
    &[
        "I want 2 burgers and 3 fries",
        "Can I get a burger and a drink?",
        "My friend and I each want fries",
        "Cancel order #3",
        "One of everything please",
        "3 burgers, 2 fries, and 4 drinks",
    ]
}

/// Cuts `text` to `max_length` characters and appends `...` when it was longer.
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let head: String = text.chars().take(max_length).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ApiError;
    use crate::model::{ItemCounts, Orders};
    use rstest::rstest;

    fn response(action: OrderAction, order_id: Option<u64>, items: Option<Order>) -> OrderResponse {
        OrderResponse {
            success: true,
            action,
            order_id,
            items,
            message: None,
            totals: OrderTotals::default(),
            orders: Orders::new(),
        }
    }

    #[test]
    fn test_placed_message() {
        let result = response(OrderAction::Placed, Some(7), Some(ItemCounts::new(2, 3, 0)));
        assert_eq!(create_success_message(&result), "Order #7 placed: 2 burgers, 3 fries");
    }

    #[test]
    fn test_singular_items() {
        let result = response(OrderAction::Placed, Some(4), Some(ItemCounts::new(1, 1, 1)));
        assert_eq!(
            create_success_message(&result),
            "Order #4 placed: 1 burger, 1 fries, 1 drink"
        );
    }

    #[test]
    fn test_canceled_message() {
        let result = response(OrderAction::Canceled, Some(3), None);
        assert_eq!(create_success_message(&result), "Order #3 has been canceled");
    }

    #[rstest]
    #[case(OrderAction::Placed, None, Some(ItemCounts::new(1, 0, 0)))]
    #[case(OrderAction::Placed, Some(1), None)]
    #[case(OrderAction::Canceled, None, None)]
    #[case(OrderAction::Placed, Some(0), Some(ItemCounts::new(1, 0, 0)))]
    #[case(OrderAction::Canceled, Some(0), None)]
    #[case(OrderAction::Modified, Some(2), None)]
    #[case(OrderAction::None, None, None)]
    fn test_generic_message(
        #[case] action: OrderAction,
        #[case] order_id: Option<u64>,
        #[case] items: Option<Order>,
    ) {
        let result = response(action, order_id, items);
        assert_eq!(create_success_message(&result), DEFAULT_SUCCESS_MESSAGE);
    }

    #[test]
    fn test_server_message_wins() {
        let mut result = response(OrderAction::Placed, Some(7), Some(ItemCounts::new(2, 3, 0)));
        result.message = Some("Enjoy your meal!".to_string());
        assert_eq!(create_success_message(&result), "Enjoy your meal!");
    }

    #[test]
    fn test_error_message() {
        let timeout = ServiceError::Api(ApiError::Timeout);
        assert_eq!(
            create_error_message(&timeout),
            "Request timed out. Please try again."
        );

        let silent = ServiceError::Api(ApiError::Transport(String::new()));
        assert_eq!(create_error_message(&silent), CONNECTION_ERROR_MESSAGE);
    }

    #[test]
    fn test_display_helpers() {
        assert_eq!(format_order_items(&ItemCounts::new(2, 1, 1)), "2 Burgers, 1 Fries, 1 Drink");
        assert_eq!(format_order_items(&ItemCounts::default()), "Empty order");
        assert_eq!(calculate_total_items(&ItemCounts::new(2, 3, 4)), 9);
        assert!(is_empty_order(&ItemCounts::default()));
        assert_eq!(truncate_text("Cancel order #3", 6), "Cancel...");
        assert_eq!(truncate_text("short", 10), "short");
        assert!(order_examples().contains(&"I want 2 burgers and 3 fries"));
    }
}
