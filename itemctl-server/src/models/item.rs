//! Item record and its input shapes

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::coerce::lax_bool;

/// A stored item. `id` is assigned by storage and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub in_stock: bool,
}

/// Body accepted by create and update.
///
/// Unknown fields (including a caller-supplied `id`) are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub price: f64,
    #[serde(default = "default_in_stock", deserialize_with = "lax_bool")]
    pub in_stock: bool,
}

fn default_in_stock() -> bool {
    true
}

impl NewItem {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            in_stock: default_in_stock(),
        }
    }

    pub fn with_in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }

    /// Attach a storage-assigned id.
    pub fn into_item(self, id: i32) -> Item {
        Item {
            id,
            name: self.name,
            price: self.price,
            in_stock: self.in_stock,
        }
    }
}

/// Conjunctive list filters. `None` means "don't filter on this column".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFilter {
    pub in_stock: Option<bool>,
    pub min_price: Option<f64>,
    /// Case-insensitive substring of `name`
    pub name: Option<String>,
}

impl ItemFilter {
    /// Name needle, with empty strings treated as absent.
    pub fn name_contains(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    /// Evaluate the filter against a single item.
    pub fn matches(&self, item: &Item) -> bool {
        if let Some(in_stock) = self.in_stock {
            if item.in_stock != in_stock {
                return false;
            }
        }

        if let Some(min_price) = self.min_price {
            if item.price < min_price {
                return false;
            }
        }

        if let Some(needle) = self.name_contains() {
            if !item.name.to_lowercase().contains(&needle.to_lowercase()) {
                return false;
            }
        }

        true
    }
}
