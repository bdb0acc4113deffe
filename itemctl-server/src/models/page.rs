//! Offset/limit paging for the list endpoint

use serde::Deserialize;

use super::coerce::lax_bool_opt;
use super::ItemFilter;

/// Default number of records returned by a list call
pub const DEFAULT_LIMIT: u32 = 10;

/// Offset-based page window. `limit` is not capped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Leading matches to discard
    pub skip: u32,
    /// Maximum records returned
    pub limit: u32,
}

impl Page {
    pub fn new(skip: u32, limit: u32) -> Self {
        Self { skip, limit }
    }

    /// SQL OFFSET value.
    pub fn offset(&self) -> i64 {
        i64::from(self.skip)
    }

    /// SQL LIMIT value.
    pub fn limit(&self) -> i64 {
        i64::from(self.limit)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Query string accepted by `GET /items/`.
///
/// Kept flat: `serde_urlencoded` can't coerce numbers or booleans
/// through `#[serde(flatten)]`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    #[serde(default, deserialize_with = "lax_bool_opt")]
    pub in_stock: Option<bool>,
    pub min_price: Option<f64>,
    pub name: Option<String>,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl ListParams {
    /// Split into the filter and the page window.
    pub fn into_parts(self) -> (ItemFilter, Page) {
        let filter = ItemFilter {
            in_stock: self.in_stock,
            min_price: self.min_price,
            name: self.name,
        };
        let page = Page::new(self.skip.unwrap_or(0), self.limit.unwrap_or(DEFAULT_LIMIT));
        (filter, page)
    }
}
