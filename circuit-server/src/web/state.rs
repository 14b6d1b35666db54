//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::catalog::Catalog;
use crate::export::ReportConfig;
use crate::filter::FilterState;
use crate::itinerary::Itinerary;

/// Shared application state.
///
/// The itinerary and filter state are process-wide singletons. Each sits
/// behind a single `RwLock`, so writers are serialized: every mutation
/// runs to completion before the next is admitted, which is all the
/// atomicity the planner needs.
#[derive(Clone)]
pub struct AppState {
    /// The immutable site catalog.
    pub catalog: Arc<Catalog>,

    /// The user's itinerary.
    pub itinerary: Arc<RwLock<Itinerary>>,

    /// The current filter state.
    pub filter: Arc<RwLock<FilterState>>,

    /// Report layout configuration.
    pub report: Arc<ReportConfig>,
}

impl AppState {
    /// Create the app state around a loaded catalog.
    pub fn new(catalog: Catalog, report: ReportConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            itinerary: Arc::new(RwLock::new(Itinerary::new())),
            filter: Arc::new(RwLock::new(FilterState::default())),
            report: Arc::new(report),
        }
    }
}
