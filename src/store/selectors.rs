//! Derived projections and selectors.
//!
//! All of these are pure functions of a state snapshot. Recompute them from each
//! published [`AppState`]; never cache them across publishes.

use crate::model::{AppState, ItemType, Order, OrderId, Orders};

/// Values derived from one [`AppState`] snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Projections {
    pub has_orders: bool,
    pub order_count: usize,
    /// burgers + fries + drinks across the totals.
    pub total_items: u64,
}

impl Projections {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            has_orders: !state.orders.is_empty(),
            order_count: state.orders.len(),
            total_items: state.totals.total(),
        }
    }
}

impl From<&AppState> for Projections {
    fn from(state: &AppState) -> Self {
        Self::from_state(state)
    }
}

pub fn select_order_by_id<'a>(orders: &'a Orders, id: &str) -> Option<&'a Order> {
    orders.get(&OrderId::from(id))
}

/// Orders containing at least one item of type `item`, in iteration order.
pub fn select_orders_by_type(orders: &Orders, item: ItemType) -> Vec<(&str, &Order)> {
    orders
        .iter()
        .filter(|(_, order)| order.count(item) > 0)
        .map(|(id, order)| (id.as_str(), order))
        .collect()
}

/// The order with the most items. On a tie the lowest id in [`OrderId`] order wins.
pub fn select_largest_order(orders: &Orders) -> Option<(&str, &Order)> {
    let mut largest: Option<(&OrderId, &Order)> = None;
    for (id, order) in orders {
        match largest {
            Some((_, best)) if best.total() >= order.total() => {}
            _ => largest = Some((id, order)),
        }
    }
    largest.map(|(id, order)| (id.as_str(), order))
}
