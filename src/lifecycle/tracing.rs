//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! The compact format hides the crate/module prefix (`with_target(false)`), which keeps
//! log lines short while still carrying the structured fields.
//!
//! ```bash
//! # Request outcomes and startup
//! RUST_LOG=info cargo run
//!
//! # Every dispatched store action and outgoing request
//! RUST_LOG=debug cargo run
//!
//! # Only the HTTP client
//! RUST_LOG=drivethru_client::clients=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Store actor**: start, every dispatched action (debug), shutdown with the action count
//! - **API client**: one span per call, timeouts and non-2xx statuses (warn)
//! - **Order service**: validation rejections (debug), processed responses, load fallbacks (warn)
//! - **App**: request outcomes with the text that reached the store
//!
//! ## Example
//!
//! With `RUST_LOG=debug`:
//!
//! ```text
//! DEBUG process_message{message="I want 2 burgers and 3 fries"}: Dispatch state_type="AppState" action=SetLoading(true)
//! DEBUG process_message{message="I want 2 burgers and 3 fries"}:process_order_request{...}:process_message{...}: Sending request
//!  INFO process_message{message="I want 2 burgers and 3 fries"}:process_order_request{...}: Processed action=Placed success=true
//!  INFO process_message{message="I want 2 burgers and 3 fries"}: Request succeeded message=Order #7 placed: 2 burgers, 3 fries
//! ```

/// Installs the global subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Module paths add noise; spans carry the context
        .compact()
        .init();
}
