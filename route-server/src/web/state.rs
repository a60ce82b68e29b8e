//! Application state for the web layer.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::planner::SearchConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Locations and legs searched by every request
    pub catalog: Arc<Catalog>,

    /// Itinerary planner configuration
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(catalog: Catalog, config: SearchConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }
}
