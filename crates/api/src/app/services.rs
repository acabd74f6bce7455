//! Service wiring shared by the route handlers.

use std::sync::Arc;

use custodesk_core::CustomerStore;

/// Handler-facing bundle of collaborators, passed via `Extension`.
///
/// Today this is just the customer store; keeping the indirection means
/// handlers never name a concrete store type.
pub struct AppServices {
    store: Arc<dyn CustomerStore>,
}

impl AppServices {
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        Self { store }
    }

    pub fn customers(&self) -> &dyn CustomerStore {
        self.store.as_ref()
    }
}
