//! Itinerary snapshot documents.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::itinerary::Itinerary;

/// One stop in a snapshot, with its display fields and the distance to
/// the stop that follows it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotStop {
    /// Stable site key.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Category display label.
    pub category: String,
    /// Free-text era label.
    pub era: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Great-circle distance to the next stop; `None` for the last stop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_to_next_km: Option<f64>,
}

/// An immutable snapshot of an itinerary at a point in time.
///
/// Capturing a snapshot never mutates the itinerary; the snapshot is the
/// document both export renderings (machine-readable JSON and the
/// paginated report) are derived from. The creation timestamp is
/// supplied by the caller so the core stays deterministic under test.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItinerarySnapshot {
    /// Ordered stops.
    #[serde(rename = "itinerary")]
    pub stops: Vec<SnapshotStop>,
    /// Total distance over consecutive stops, unrounded.
    pub total_distance_km: f64,
    /// Total distance rounded to the nearest whole kilometre.
    #[serde(rename = "totalDistance")]
    pub total_distance_km_rounded: i64,
    /// When the snapshot was taken.
    pub created_at: DateTime<Utc>,
}

impl ItinerarySnapshot {
    /// Capture the current state of `itinerary`.
    pub fn capture(itinerary: &Itinerary, created_at: DateTime<Utc>) -> Self {
        let sites = itinerary.stops();
        let stops = sites
            .iter()
            .enumerate()
            .map(|(idx, site)| SnapshotStop {
                key: site.key.as_str().to_string(),
                name: site.name.clone(),
                category: site.category.as_str().to_string(),
                era: site.era.clone(),
                latitude: site.coordinates.latitude(),
                longitude: site.coordinates.longitude(),
                distance_to_next_km: sites
                    .get(idx + 1)
                    .map(|next| site.coordinates.distance_km(&next.coordinates)),
            })
            .collect();

        ItinerarySnapshot {
            stops,
            total_distance_km: itinerary.total_distance_km(),
            total_distance_km_rounded: itinerary.total_distance_km_rounded(),
            created_at,
        }
    }

    /// Number of stops in the snapshot.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns true if the snapshot holds no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}
