//! Application state shared across handlers

use std::sync::Arc;

use crate::db::ItemStore;

/// Shared application state.
///
/// Cheap to clone; every clone points at the same store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Box<dyn ItemStore>,
}

impl AppState {
    pub fn new(store: impl ItemStore + 'static) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store: Box::new(store),
            }),
        }
    }

    pub fn store(&self) -> &dyn ItemStore {
        self.inner.store.as_ref()
    }
}
