//! # Mock Framework
//!
//! Utilities for testing code that talks to a [`StateClient`] in isolation.
//!
//! - [`MockClient`] applies actions like the real actor but also records them, so a
//!   test can assert the exact sequence a caller dispatched.
//! - [`create_mock_client`] hands out the raw request receiver. Use helpers like
//!   [`expect_dispatch`] to answer requests by hand (delays, failures, ordering).

use crate::framework::{FrameworkError, StateClient, StateRequest, StoreState};
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot, watch};

// =============================================================================
// RECORDING CLIENT
// =============================================================================

/// A client whose backing task records every dispatched action.
///
/// # Example
/// ```ignore
/// let mock = MockClient::new(AppState::default());
/// let store = OrderStore::new(mock.client());
/// store.set_loading(true).await?;
///
/// assert_eq!(mock.actions(), vec![StoreAction::SetLoading(true)]);
/// ```
pub struct MockClient<S: StoreState> {
    client: StateClient<S>,
    recorded: Arc<Mutex<Vec<S::Action>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<S: StoreState> MockClient<S>
where
    S::Action: Clone,
{
    /// Creates a recording client starting from `initial`.
    pub fn new(initial: S) -> Self {
        let (sender, mut receiver) = mpsc::channel::<StateRequest<S>>(100);
        let (publisher, watcher) = watch::channel(initial.clone());
        let recorded = Arc::new(Mutex::new(Vec::new()));
        let recorded_clone = recorded.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            let mut state = initial;
            while let Some(request) = receiver.recv().await {
                match request {
                    StateRequest::Dispatch { action, respond_to } => {
                        recorded_clone.lock().unwrap().push(action.clone());
                        state.reduce(action);
                        publisher.send_replace(state.clone());
                        let _ = respond_to.send(Ok(()));
                    }
                    StateRequest::Snapshot { respond_to } => {
                        let _ = respond_to.send(Ok(state.clone()));
                    }
                }
            }
        });

        Self {
            client: StateClient::new(sender, watcher),
            recorded,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StateClient<S> {
        self.client.clone()
    }

    /// Every action dispatched so far, in order.
    pub fn actions(&self) -> Vec<S::Action> {
        self.recorded.lock().unwrap().clone()
    }
}

// =============================================================================
// MANUAL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Nothing answers the requests until the test does. Dropping the receiver
/// simulates a store actor that has shut down.
pub fn create_mock_client<S: StoreState>(
    buffer_size: usize,
    initial: S,
) -> (StateClient<S>, mpsc::Receiver<StateRequest<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (_publisher, watcher) = watch::channel(initial);
    (StateClient::new(sender, watcher), receiver)
}

/// Helper to verify that the next message is a Dispatch request
pub async fn expect_dispatch<S: StoreState>(
    receiver: &mut mpsc::Receiver<StateRequest<S>>,
) -> Option<(S::Action, oneshot::Sender<Result<(), FrameworkError>>)> {
    match receiver.recv().await {
        Some(StateRequest::Dispatch { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Snapshot request
pub async fn expect_snapshot<S: StoreState>(
    receiver: &mut mpsc::Receiver<StateRequest<S>>,
) -> Option<oneshot::Sender<Result<S, FrameworkError>>> {
    match receiver.recv().await {
        Some(StateRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}
