//! Runtime orchestration and lifecycle management.
//!
//! - [`OrderApp`] - Wires the order service to the store and owns the store actor
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod app;
pub mod tracing;

pub use self::app::*;
pub use self::tracing::*;
