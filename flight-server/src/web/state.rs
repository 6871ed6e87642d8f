//! Application state for the web layer.

use std::sync::Arc;

use crate::catalog::FlightCatalog;
use crate::domain::CategoryTable;

/// Shared application state.
///
/// Everything here is read-only after startup, so handlers share it
/// without locking.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Flights available to search
    pub catalog: Arc<FlightCatalog>,

    /// Fare categories in display order
    pub categories: Arc<CategoryTable>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(catalog: FlightCatalog, categories: CategoryTable) -> Self {
        Self {
            catalog: Arc::new(catalog),
            categories: Arc::new(categories),
        }
    }
}
