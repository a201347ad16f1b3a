//! Pure data structures shared by every layer: item counts, server payloads and the
//! application state.

pub mod order;
pub mod response;
pub mod state;

pub use order::*;
pub use response::*;
pub use state::*;
