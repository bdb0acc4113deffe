//! itemctl-server: CRUD HTTP service for inventory items
//!
//! Five endpoints over a single `items` table. Route handlers talk to an
//! [`db::ItemStore`], backed by PostgreSQL in production and by memory in
//! tests.

pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use db::{DbError, ItemStore, MemoryItemStore, PgItemStore};
pub use http::{build_router, run_server, ApiError, ServerConfig, ServerError};
pub use models::{Item, ItemFilter, NewItem, Page};
pub use state::AppState;
