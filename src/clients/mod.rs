//! Clients for the remote ordering system.
//!
//! [`OrderApi`] is the seam the rest of the crate talks to. [`HttpApiClient`] is the
//! real implementation; [`mock::MockApi`] stands in for it in tests.

pub mod api_client;
pub mod error;
pub mod mock;

pub use api_client::*;
pub use error::*;
