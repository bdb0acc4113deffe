//! Database layer - pool, schema bootstrap and item stores
//!
//! Handlers only see the [`ItemStore`] trait. [`PgItemStore`] is the real
//! backend; [`MemoryItemStore`] stands in for it in tests and demos.
//!
//! Every store call borrows its own connection (or transaction) for the
//! duration of the call and returns it on drop, so a request never holds
//! a session past its handler and an uncommitted write is rolled back.

pub mod memory;
pub mod pool;
pub mod postgres;
pub mod schema;
pub mod store;

pub use memory::MemoryItemStore;
pub use pool::{create_pool, DEFAULT_MAX_CONNECTIONS};
pub use postgres::PgItemStore;
pub use schema::ensure_schema;
pub use store::{DbError, ItemStore};
