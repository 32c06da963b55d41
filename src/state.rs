//! Shared application state for all routes.

use crate::store::PostStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Built once at startup and shared by every handler.
    pub store: Arc<dyn PostStore>,
}

impl AppState {
    pub fn new<S: PostStore + 'static>(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
