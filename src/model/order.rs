use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// The three things the drive-thru sells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Burgers,
    Fries,
    Drinks,
}

impl ItemType {
    /// All item types in display order.
    pub const ALL: [ItemType; 3] = [ItemType::Burgers, ItemType::Fries, ItemType::Drinks];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Burgers => "burgers",
            ItemType::Fries => "fries",
            ItemType::Drinks => "drinks",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counts of burgers, fries and drinks.
///
/// The same shape serves a single order and the store-wide totals, see
/// [`Order`] and [`OrderTotals`]. Missing fields deserialize as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCounts {
    #[serde(default)]
    pub burgers: u32,
    #[serde(default)]
    pub fries: u32,
    #[serde(default)]
    pub drinks: u32,
}

/// Item counts of a single order.
pub type Order = ItemCounts;

/// Item counts summed over every active order.
pub type OrderTotals = ItemCounts;

/// Active orders keyed by order id, iterated in [`OrderId`] order.
pub type Orders = BTreeMap<OrderId, Order>;

/// Key of an order as it appears in a JSON object.
///
/// Ordering puts integer ids first, compared numerically (`"2"` before `"10"`),
/// then every other id compared as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The numeric value of a canonical integer id (no sign, no leading zeros).
    pub fn as_number(&self) -> Option<u64> {
        let id = self.0.as_str();
        let canonical = !id.is_empty()
            && id.bytes().all(|b| b.is_ascii_digit())
            && (id == "0" || !id.starts_with('0'));
        if canonical {
            id.parse().ok()
        } else {
            None
        }
    }
}

impl Ord for OrderId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.as_number(), other.as_number()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for OrderId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl ItemCounts {
    pub fn new(burgers: u32, fries: u32, drinks: u32) -> Self {
        Self {
            burgers,
            fries,
            drinks,
        }
    }

    /// Count for one item type.
    pub fn count(&self, item: ItemType) -> u32 {
        match item {
            ItemType::Burgers => self.burgers,
            ItemType::Fries => self.fries,
            ItemType::Drinks => self.drinks,
        }
    }

    /// Sum of all three counts.
    pub fn total(&self) -> u64 {
        u64::from(self.burgers) + u64::from(self.fries) + u64::from(self.drinks)
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
