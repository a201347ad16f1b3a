//! # Drive-Thru Client
//!
//! > **A typed client for a natural-language drive-thru ordering system.**
//!
//! A customer types free text ("I want 2 burgers and 3 fries"), the remote ordering
//! system interprets it, and this crate keeps a consistent local picture of the active
//! orders and running totals.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### One owner for state
//! All application state lives inside a single [`StateActor`](framework::StateActor).
//! Nothing else holds a mutable reference to it: callers dispatch actions and read
//! published snapshots. Observers subscribe to a `watch` channel and recompute
//! projections from each snapshot.
//!
//! ### Typed at the boundary
//! The HTTP client returns raw JSON. The [`order_service`] layer turns it into typed
//! responses and rejects anything malformed, so the store only ever sees well-formed data.
//!
//! ## 🚀 Core Concepts
//!
//! ### Errors become text in one place
//! Validation failures, timeouts, non-2xx statuses and malformed bodies all travel as
//! typed errors until [`OrderApp`](lifecycle::OrderApp), which turns them into the
//! store's `error` field. App methods only fail when the store itself has shut down.
//!
//! ### Mocking: Testing without Pain
//! [`MockApi`](clients::mock::MockApi) scripts the remote system and
//! [`MockClient`](framework::mock::MockClient) records every store action, so the whole
//! pipeline can be tested without a network.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic state actor and its client.
//! - **Key items**: [`StoreState`](framework::StoreState), [`StateActor`](framework::StateActor), [`StateClient`](framework::StateClient).
//!
//! ### 2. The Store ([`store`])
//! Application state, its actions and derived projections.
//! - **Key items**: [`OrderStore`](store::OrderStore), [`StoreAction`](store::StoreAction), [`Projections`](store::Projections).
//!
//! ### 3. The Interface ([`clients`], [`order_service`], [`validation`])
//! HTTP transport with a timeout, then validation and response normalization on top.
//! - **Key items**: [`OrderApi`](clients::OrderApi), [`HttpApiClient`](clients::HttpApiClient), [`OrderService`](order_service::OrderService).
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! Wires the service to the store and owns the store task.
//! - **Key items**: [`OrderApp`](lifecycle::OrderApp), [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Point at a running ordering system and start the terminal client
//! DRIVETHRU_API_URL=http://localhost:8000 RUST_LOG=info cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_service;
pub mod store;
pub mod validation;
