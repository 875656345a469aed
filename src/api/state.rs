use std::sync::Arc;

use crate::services::{Catalog, Recommender};

/// Shared application state
///
/// Everything here is read-only for the process lifetime, so concurrent
/// requests share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub recommender: Arc<Recommender>,
}

impl AppState {
    pub fn new(catalog: Catalog, recommender: Recommender) -> Self {
        Self {
            catalog: Arc::new(catalog),
            recommender: Arc::new(recommender),
        }
    }
}
