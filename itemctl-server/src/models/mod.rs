//! Domain models for the items resource
//!
//! Request bodies and query strings deserialize straight into these types.
//! Type coercion is the only validation: anything serde accepts is stored.

pub mod coerce;
pub mod item;
pub mod page;

pub use item::{Item, ItemFilter, NewItem};
pub use page::{ListParams, Page, DEFAULT_LIMIT};
