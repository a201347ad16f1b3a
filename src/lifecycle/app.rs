use crate::clients::OrderApi;
use crate::framework::FrameworkError;
use crate::order_service::{create_error_message, create_success_message, OrderService};
use crate::store::OrderStore;
use tracing::{error, info, instrument, warn};

pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load initial data";
pub const REQUEST_FAILURE_MESSAGE: &str = "Failed to process your request";

/// The application: an [`OrderService`] wired to an [`OrderStore`].
///
/// `OrderApp` is where every service failure is turned into store-visible text.
/// Its methods only fail when the store itself is gone ([`FrameworkError`]).
///
/// # Example
///
/// ```ignore
/// let app = OrderApp::new(HttpApiClient::from_config(&config));
/// app.initialize().await?;
///
/// app.process_message("I want 2 burgers and 3 fries").await?;
/// println!("{}", app.store().current().last_response);
///
/// app.shutdown().await?;
/// ```
pub struct OrderApp<A: OrderApi> {
    service: OrderService<A>,
    store: OrderStore,
    /// Store actor task, when this app spawned it
    handle: Option<tokio::task::JoinHandle<()>>,
}

impl<A: OrderApi> OrderApp<A> {
    /// Spawns a fresh store actor and wires it to `api`.
    pub fn new(api: A) -> Self {
        let (actor, store) = crate::store::new();
        let handle = tokio::spawn(actor.run());
        Self {
            service: OrderService::new(api),
            store,
            handle: Some(handle),
        }
    }

    /// Uses a store that is already running (or mocked).
    pub fn with_store(api: A, store: OrderStore) -> Self {
        Self {
            service: OrderService::new(api),
            store,
            handle: None,
        }
    }

    pub fn store(&self) -> &OrderStore {
        &self.store
    }

    pub fn service(&self) -> &OrderService<A> {
        &self.service
    }

    /// Loads the current orders into the store.
    #[instrument(skip(self))]
    pub async fn initialize(&self) -> Result<(), FrameworkError> {
        let snapshot = self.service.load_initial_orders().await;
        if let Err(e) = self.store.update_orders(snapshot.totals, snapshot.orders).await {
            error!(error = %e, "Failed to initialize app");
            // Best effort: the store that just failed is unlikely to take this either
            let _ = self.store.set_error(LOAD_FAILURE_MESSAGE).await;
            return Err(e);
        }
        info!("App initialized");
        Ok(())
    }

    /// Runs one message through the whole pipeline.
    ///
    /// Loading is set first and cleared last on every path, including when the
    /// returned future is dropped before it completes.
    #[instrument(skip(self))]
    pub async fn process_message(&self, message: &str) -> Result<(), FrameworkError> {
        let guard = LoadingGuard::new(self.store.clone());
        self.store.set_loading(true).await?;
        let outcome = self.run_request(message).await;
        let cleared = self.store.set_loading(false).await;
        guard.disarm();
        outcome.and(cleared)
    }

    async fn run_request(&self, message: &str) -> Result<(), FrameworkError> {
        self.store.clear_messages().await?;

        match self.service.process_order_request(message).await {
            Ok(result) if result.success => {
                let text = create_success_message(&result);
                self.store.update_orders(result.totals, result.orders).await?;
                info!(message = %text, "Request succeeded");
                self.store.set_success(text).await
            }
            Ok(result) => {
                let text = result
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| REQUEST_FAILURE_MESSAGE.to_string());
                warn!(action = ?result.action, message = %text, "Request rejected by server");
                self.store.set_error(text).await
            }
            Err(e) => {
                warn!(error = %e, "Request failed");
                self.store.set_error(create_error_message(&e)).await
            }
        }
    }

    /// Cancels an order by sending `"Cancel order {id}"` through [`Self::process_message`].
    pub async fn cancel_order(&self, order_id: &str) -> Result<(), FrameworkError> {
        let message = format!("Cancel order {order_id}");
        self.process_message(&message).await
    }

    pub async fn clear_messages(&self) -> Result<(), FrameworkError> {
        self.store.clear_messages().await
    }

    pub async fn reset(&self) -> Result<(), FrameworkError> {
        self.store.reset().await
    }

    pub async fn test_connection(&self) -> bool {
        self.service.test_connection().await
    }

    /// Drops this app's store handle and waits for the store actor to finish.
    ///
    /// The actor only exits once every clone of the store handle is gone.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down app...");
        let Self { store, handle, .. } = self;
        drop(store);

        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(format!("Store task failed: {:?}", e));
            }
        }

        info!("Shutdown complete.");
        Ok(())
    }
}

/// Clears the loading flag from a spawned task if a processing cycle is dropped
/// before it finishes.
struct LoadingGuard {
    store: Option<OrderStore>,
}

impl LoadingGuard {
    fn new(store: OrderStore) -> Self {
        Self { store: Some(store) }
    }

    fn disarm(mut self) {
        self.store = None;
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        let Some(store) = self.store.take() else {
            return;
        };
        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                warn!("Request dropped before completion, clearing loading");
                runtime.spawn(async move {
                    let _ = store.set_loading(false).await;
                });
            }
            Err(_) => warn!("Request dropped outside a runtime, loading not cleared"),
        }
    }
}
