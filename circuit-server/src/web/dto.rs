//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{EraBucket, Site};
use crate::filter::{CategoryFilter, EraFilter, FilterState};

/// A site in the catalog listing.
#[derive(Debug, Serialize)]
pub struct SiteSummary {
    /// Stable site key
    pub key: String,

    /// Display name
    pub name: String,

    /// Category display label
    pub category: String,

    /// Free-text era label
    pub era: String,

    /// Era bucket the label classifies into
    pub era_bucket: String,

    /// Latitude in decimal degrees
    pub latitude: f64,

    /// Longitude in decimal degrees
    pub longitude: f64,

    /// Visibility under the current filter state
    pub visible: bool,
}

impl SiteSummary {
    /// Build a summary for `site` with its computed visibility.
    pub fn from_site(site: &Site, visible: bool) -> Self {
        Self {
            key: site.key.as_str().to_string(),
            name: site.name.clone(),
            category: site.category.as_str().to_string(),
            era: site.era.clone(),
            era_bucket: EraBucket::classify(&site.era).as_str().to_string(),
            latitude: site.coordinates.latitude(),
            longitude: site.coordinates.longitude(),
            visible,
        }
    }
}

/// Response for the catalog listing.
#[derive(Debug, Serialize)]
pub struct SiteListResponse {
    /// All sites in catalog order
    pub sites: Vec<SiteSummary>,

    /// How many of them are visible under the current filter
    pub visible_count: usize,
}

/// One timeline entry in a site detail.
#[derive(Debug, Serialize)]
pub struct TimelineEntryResult {
    /// Year label
    pub year: String,

    /// What happened
    pub event: String,
}

/// Full site detail for the renderer's modal.
#[derive(Debug, Serialize)]
pub struct SiteDetailResponse {
    /// Stable site key
    pub key: String,

    /// Display name
    pub name: String,

    /// Category display label
    pub category: String,

    /// Free-text era label
    pub era: String,

    /// Latitude in decimal degrees
    pub latitude: f64,

    /// Longitude in decimal degrees
    pub longitude: f64,

    /// Visitor highlights in display order
    pub highlights: Vec<String>,

    /// Historical background
    pub history: String,

    /// Architectural notes
    pub architecture: String,

    /// Ordered historical timeline
    pub timeline: Vec<TimelineEntryResult>,
}

impl SiteDetailResponse {
    /// Build a detail response for `site`.
    pub fn from_site(site: &Site) -> Self {
        Self {
            key: site.key.as_str().to_string(),
            name: site.name.clone(),
            category: site.category.as_str().to_string(),
            era: site.era.clone(),
            latitude: site.coordinates.latitude(),
            longitude: site.coordinates.longitude(),
            highlights: site.highlights.clone(),
            history: site.description.history.clone(),
            architecture: site.description.architecture.clone(),
            timeline: site
                .description
                .timeline
                .iter()
                .map(|entry| TimelineEntryResult {
                    year: entry.year.clone(),
                    event: entry.event.clone(),
                })
                .collect(),
        }
    }
}

/// Request to replace the filter state.
///
/// Missing fields reset their axis; unknown values fail open to "all".
#[derive(Debug, Deserialize)]
pub struct FilterRequest {
    /// Category filter value ("all" or a category label)
    pub category: Option<String>,

    /// Era bucket filter value ("all" or a bucket label)
    pub era: Option<String>,

    /// Free-text search
    pub search: Option<String>,
}

impl FilterRequest {
    /// Parse the request into a filter state.
    pub fn into_state(self) -> FilterState {
        FilterState {
            category: CategoryFilter::parse(self.category.as_deref().unwrap_or("all")),
            era: EraFilter::parse(self.era.as_deref().unwrap_or("all")),
            search: self.search.unwrap_or_default(),
        }
    }
}

/// Echo of the current filter state.
#[derive(Debug, Serialize)]
pub struct FilterResponse {
    /// Category filter value
    pub category: String,

    /// Era bucket filter value
    pub era: String,

    /// Free-text search
    pub search: String,

    /// Sites visible under this state
    pub visible_count: usize,
}

impl FilterResponse {
    /// Build the echo for `state` with a computed visible count.
    pub fn from_state(state: &FilterState, visible_count: usize) -> Self {
        Self {
            category: match state.category {
                CategoryFilter::All => "all".to_string(),
                CategoryFilter::Only(category) => category.as_str().to_string(),
            },
            era: match state.era {
                EraFilter::All => "all".to_string(),
                EraFilter::Only(bucket) => bucket.as_str().to_string(),
            },
            search: state.search.clone(),
            visible_count,
        }
    }
}

/// Request to add a stop to the itinerary.
#[derive(Debug, Deserialize)]
pub struct AddStopRequest {
    /// Key of the site to add
    pub key: String,
}

/// Response after an add attempt.
#[derive(Debug, Serialize)]
pub struct AddStopResponse {
    /// False on the idempotent duplicate no-op
    pub added: bool,

    /// Stops now in the itinerary
    pub stop_count: usize,
}

/// Request to replace the itinerary ordering.
#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    /// The new key order; must be a permutation of the current stops
    pub keys: Vec<String>,
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
}
