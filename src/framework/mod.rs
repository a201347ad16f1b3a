//! Generic state framework.
//!
//! This module provides the building blocks for a state container that is owned by a
//! single task, mutated through typed actions and observed through published snapshots.
//!
//! # Main Components
//!
//! - [`StoreState`] - Trait that state types implement to be owned by an actor
//! - [`StateActor`] - Generic actor that applies actions sequentially
//! - [`StateClient`] - Type-safe handle for dispatching actions and reading snapshots
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test code that dispatches actions without
//! spawning a real actor.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
