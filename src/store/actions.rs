//! Actions accepted by the order store and how [`AppState`] applies them.

use crate::framework::StoreState;
use crate::model::{AppState, OrderTotals, Orders};

/// Every mutation the order store allows.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreAction {
    SetLoading(bool),
    /// Sets `error` and clears `last_response`.
    SetError(String),
    /// Sets `last_response` and clears `error`.
    SetSuccess(String),
    /// Replaces totals and orders together.
    UpdateOrders { totals: OrderTotals, orders: Orders },
    ClearMessages,
    /// Back to `AppState::default()`.
    Reset,
}

impl StoreState for AppState {
    type Action = StoreAction;

    fn reduce(&mut self, action: StoreAction) {
        match action {
            StoreAction::SetLoading(loading) => self.is_loading = loading,
            StoreAction::SetError(error) => {
                self.error = error;
                self.last_response.clear();
            }
            StoreAction::SetSuccess(message) => {
                self.last_response = message;
                self.error.clear();
            }
            StoreAction::UpdateOrders { totals, orders } => {
                self.totals = totals;
                self.orders = orders;
            }
            StoreAction::ClearMessages => {
                self.error.clear();
                self.last_response.clear();
            }
            StoreAction::Reset => *self = AppState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ItemCounts, OrderId};

    #[test]
    fn test_messages_are_mutually_exclusive() {
        let mut state = AppState::default();

        state.reduce(StoreAction::SetSuccess("Order #1 placed: 1 burger".into()));
        state.reduce(StoreAction::SetError("Request timed out. Please try again.".into()));
        assert_eq!(state.error, "Request timed out. Please try again.");
        assert_eq!(state.last_response, "");

        state.reduce(StoreAction::SetSuccess("Order #1 has been canceled".into()));
        assert_eq!(state.last_response, "Order #1 has been canceled");
        assert_eq!(state.error, "");
    }

    #[test]
    fn test_update_orders_leaves_flags_alone() {
        let mut state = AppState::default();
        state.reduce(StoreAction::SetLoading(true));
        state.reduce(StoreAction::SetError("x".into()));

        let orders = Orders::from([(OrderId::from("1"), ItemCounts::new(1, 0, 0))]);
        state.reduce(StoreAction::UpdateOrders {
            totals: ItemCounts::new(1, 0, 0),
            orders: orders.clone(),
        });

        assert_eq!(state.orders, orders);
        assert!(state.is_loading);
        assert_eq!(state.error, "x");
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut state = AppState::default();
        state.reduce(StoreAction::SetLoading(true));
        state.reduce(StoreAction::SetSuccess("done".into()));
        state.reduce(StoreAction::UpdateOrders {
            totals: ItemCounts::new(3, 2, 1),
            orders: Orders::from([(OrderId::from("9"), ItemCounts::new(3, 2, 1))]),
        });

        state.reduce(StoreAction::Reset);
        assert_eq!(state, AppState::default());
    }
}
