use super::{OrderTotals, Orders};

/// Everything the UI renders, in one value.
///
/// `error` and `last_response` are advisory strings; at most one of them is
/// non-empty at any time. The initial state is `AppState::default()`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub totals: OrderTotals,
    pub orders: Orders,
    pub is_loading: bool,
    pub error: String,
    pub last_response: String,
}
