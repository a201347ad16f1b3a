//! # Core State Framework
//!
//! This module defines the generic building blocks for owning and observing state.
//!
//! ## Key Types
//!
//! - [`StoreState`]: The trait that every state value must implement.
//! - [`StateActor`]: The generic actor that owns the state and applies actions.
//! - [`StateClient`]: The generic client for dispatching actions and reading snapshots.
//! - [`FrameworkError`]: Common errors (e.g., ActorClosed).

use std::fmt::Debug;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any state value must implement to be owned by a [`StateActor`].
///
/// # Architecture Note
/// The state describes *what* changes (`reduce`), the actor decides *when*.
/// Because the actor is the only owner, every action is applied atomically:
/// no observer can ever see a half-applied action.
///
/// `Action` is an associated type so a store can only receive the actions that
/// were written for it. Sending a foreign action is a compile error.
pub trait StoreState: Clone + Send + Sync + 'static {
    /// Enum of the mutations this state accepts.
    type Action: Send + Sync + Debug;

    /// Apply one action in place.
    fn reduce(&mut self, action: Self::Action);
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the state framework itself.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
}

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor.
///
/// - **Dispatch**: apply an action, then acknowledge once the new snapshot is published.
/// - **Snapshot**: read the state as the actor currently holds it.
#[derive(Debug)]
pub enum StateRequest<S: StoreState> {
    Dispatch {
        action: S::Action,
        respond_to: Response<()>,
    },
    Snapshot {
        respond_to: Response<S>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that owns a state value.
///
/// # Concurrency Model
/// The actor processes its messages *sequentially* in a loop, so the state
/// needs no `Mutex`. Every applied action is published on a `watch` channel;
/// subscribers always observe whole snapshots.
pub struct StateActor<S: StoreState> {
    receiver: mpsc::Receiver<StateRequest<S>>,
    state: S,
    publisher: watch::Sender<S>,
}

impl<S: StoreState> StateActor<S> {
    pub fn new(buffer_size: usize, initial: S) -> (Self, StateClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (publisher, watcher) = watch::channel(initial.clone());
        let actor = Self {
            receiver,
            state: initial,
            publisher,
        };
        let client = StateClient::new(sender, watcher);
        (actor, client)
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "AppState" instead of the full path)
        let state_type = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(state_type, "Actor started");

        let mut applied: u64 = 0;
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StateRequest::Dispatch { action, respond_to } => {
                    debug!(state_type, ?action, "Dispatch");
                    self.state.reduce(action);
                    applied += 1;
                    // send_replace never fails, even with no subscribers left
                    self.publisher.send_replace(self.state.clone());
                    let _ = respond_to.send(Ok(()));
                }
                StateRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
            }
        }

        info!(state_type, applied, "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe handle to a running [`StateActor`].
#[derive(Clone)]
pub struct StateClient<S: StoreState> {
    sender: mpsc::Sender<StateRequest<S>>,
    watcher: watch::Receiver<S>,
}

impl<S: StoreState> StateClient<S> {
    pub fn new(sender: mpsc::Sender<StateRequest<S>>, watcher: watch::Receiver<S>) -> Self {
        Self { sender, watcher }
    }

    /// Apply an action. Resolves after the resulting snapshot is published.
    pub async fn dispatch(&self, action: S::Action) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest::Dispatch { action, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Read the state through the actor, ordered after every earlier dispatch.
    pub async fn snapshot(&self) -> Result<S, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// The latest published snapshot, without a round trip.
    pub fn current(&self) -> S {
        self.watcher.borrow().clone()
    }

    /// A receiver that wakes on every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.watcher.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Counter {
        value: i64,
        label: String,
    }

    #[derive(Debug)]
    enum CounterAction {
        Add(i64),
        Relabel(String),
        Clear,
    }

    impl StoreState for Counter {
        type Action = CounterAction;

        fn reduce(&mut self, action: CounterAction) {
            match action {
                CounterAction::Add(n) => self.value += n,
                CounterAction::Relabel(label) => self.label = label,
                CounterAction::Clear => *self = Counter::default(),
            }
        }
    }

    #[tokio::test]
    async fn test_dispatch_then_read() {
        let (actor, client) = StateActor::new(10, Counter::default());
        tokio::spawn(actor.run());

        client.dispatch(CounterAction::Add(3)).await.unwrap();
        client.dispatch(CounterAction::Add(4)).await.unwrap();
        client
            .dispatch(CounterAction::Relabel("seven".into()))
            .await
            .unwrap();

        let snapshot = client.snapshot().await.unwrap();
        assert_eq!(snapshot.value, 7);
        assert_eq!(snapshot.label, "seven");

        // The watch channel already holds the same value once dispatch resolved
        assert_eq!(client.current(), snapshot);

        client.dispatch(CounterAction::Clear).await.unwrap();
        assert_eq!(client.current(), Counter::default());
    }

    #[tokio::test]
    async fn test_subscriber_sees_every_publish() {
        let (actor, client) = StateActor::new(10, Counter::default());
        tokio::spawn(actor.run());

        let mut rx = client.subscribe();
        client.dispatch(CounterAction::Add(1)).await.unwrap();

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().value, 1);
    }

    #[tokio::test]
    async fn test_closed_actor_reports_error() {
        let (actor, client) = StateActor::new(10, Counter::default());
        drop(actor);

        let result = client.dispatch(CounterAction::Add(1)).await;
        assert_eq!(result, Err(FrameworkError::ActorClosed));
    }
}
