//! Itinerary export.
//!
//! The planner produces one structured document, [`ItinerarySnapshot`];
//! two writers render it externally: a machine-readable JSON document and
//! a paginated human-readable report.

mod json;
mod report;
mod snapshot;

pub use json::{to_json_string, write_json};
pub use report::{Report, ReportConfig, ReportPage, render_report};
pub use snapshot::{ItinerarySnapshot, SnapshotStop};

/// Error from export rendering.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The human-readable report refuses an empty itinerary; the caller
    /// should notify the user instead of producing a blank document.
    #[error("nothing to export: the itinerary is empty")]
    EmptyItinerary,

    /// Serializing the snapshot failed.
    #[error("failed to serialize itinerary document: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing the document failed.
    #[error("failed to write itinerary document: {0}")]
    Io(#[from] std::io::Error),
}
