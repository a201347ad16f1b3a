//! The order store: application state owned by a [`StateActor`], mutated only through
//! the action methods on [`OrderStore`].

pub mod actions;
pub mod selectors;

pub use actions::*;
pub use selectors::*;

use crate::framework::{FrameworkError, StateActor, StateClient};
use crate::model::{AppState, OrderTotals, Orders};
use tokio::sync::watch;
use tracing::{debug, instrument};

/// Creates a new store actor and its handle, starting from `AppState::default()`.
pub fn new() -> (StateActor<AppState>, OrderStore) {
    let (actor, client) = StateActor::new(32, AppState::default());
    (actor, OrderStore::new(client))
}

/// Handle to the order store.
///
/// Callers never get a mutable reference to the state; they dispatch actions and
/// read snapshots.
#[derive(Clone)]
pub struct OrderStore {
    inner: StateClient<AppState>,
}

impl OrderStore {
    pub fn new(inner: StateClient<AppState>) -> Self {
        Self { inner }
    }

    pub async fn set_loading(&self, loading: bool) -> Result<(), FrameworkError> {
        self.inner.dispatch(StoreAction::SetLoading(loading)).await
    }

    pub async fn set_error(&self, error: impl Into<String>) -> Result<(), FrameworkError> {
        self.inner.dispatch(StoreAction::SetError(error.into())).await
    }

    pub async fn set_success(&self, message: impl Into<String>) -> Result<(), FrameworkError> {
        self.inner
            .dispatch(StoreAction::SetSuccess(message.into()))
            .await
    }

    /// Replaces totals and orders in one action.
    #[instrument(skip(self, orders), fields(orders = orders.len()))]
    pub async fn update_orders(
        &self,
        totals: OrderTotals,
        orders: Orders,
    ) -> Result<(), FrameworkError> {
        debug!(?totals, "Updating orders");
        self.inner
            .dispatch(StoreAction::UpdateOrders { totals, orders })
            .await
    }

    pub async fn clear_messages(&self) -> Result<(), FrameworkError> {
        self.inner.dispatch(StoreAction::ClearMessages).await
    }

    pub async fn reset(&self) -> Result<(), FrameworkError> {
        self.inner.dispatch(StoreAction::Reset).await
    }

    /// The latest published state.
    pub fn current(&self) -> AppState {
        self.inner.current()
    }

    /// The state as the actor holds it, after every earlier action.
    pub async fn snapshot(&self) -> Result<AppState, FrameworkError> {
        self.inner.snapshot().await
    }

    /// Projections of the latest published state.
    pub fn projections(&self) -> Projections {
        Projections::from(&self.current())
    }

    /// Wakes on every published state.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.inner.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ItemCounts, OrderId};

    fn spawn_store() -> OrderStore {
        let (actor, store) = new();
        tokio::spawn(actor.run());
        store
    }

    #[tokio::test]
    async fn test_update_orders_then_read() {
        let store = spawn_store();
        let totals = ItemCounts::new(2, 3, 1);
        let orders = Orders::from([
            (OrderId::from("7"), ItemCounts::new(2, 3, 0)),
            (OrderId::from("8"), ItemCounts::new(0, 0, 1)),
        ]);

        store.update_orders(totals, orders.clone()).await.unwrap();

        let state = store.snapshot().await.unwrap();
        assert_eq!(state.totals, totals);
        assert_eq!(state.orders, orders);

        let projections = store.projections();
        assert_eq!(projections.total_items, 6);
        assert_eq!(projections.order_count, 2);
        assert!(projections.has_orders);
    }

    #[tokio::test]
    async fn test_set_error_and_success() {
        let store = spawn_store();

        store.set_error("x").await.unwrap();
        let state = store.current();
        assert_eq!(state.error, "x");
        assert_eq!(state.last_response, "");

        store.set_success("y").await.unwrap();
        let state = store.current();
        assert_eq!(state.last_response, "y");
        assert_eq!(state.error, "");
    }

    #[tokio::test]
    async fn test_reset_after_any_sequence() {
        let store = spawn_store();

        store.set_loading(true).await.unwrap();
        store.set_success("Order #1 placed: 1 burger").await.unwrap();
        store
            .update_orders(
                ItemCounts::new(1, 0, 0),
                Orders::from([(OrderId::from("1"), ItemCounts::new(1, 0, 0))]),
            )
            .await
            .unwrap();
        store.set_error("boom").await.unwrap();

        store.reset().await.unwrap();
        assert_eq!(store.snapshot().await.unwrap(), AppState::default());
    }

    #[tokio::test]
    async fn test_subscribers_get_recomputed_projections() {
        let store = spawn_store();
        let mut rx = store.subscribe();

        store
            .update_orders(
                ItemCounts::new(1, 1, 1),
                Orders::from([(OrderId::from("5"), ItemCounts::new(1, 1, 1))]),
            )
            .await
            .unwrap();

        rx.changed().await.unwrap();
        let projections = Projections::from(&*rx.borrow_and_update());
        assert_eq!(projections.total_items, 3);
    }
}
