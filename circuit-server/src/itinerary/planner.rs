//! The itinerary sequence and its travel metrics.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::domain::{Site, SiteKey};

/// Error from itinerary mutations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ItineraryError {
    /// An index was outside the current sequence.
    ///
    /// This indicates a renderer/state desync: the caller should log it
    /// and re-render, never surface it as a crash.
    #[error("index {index} is out of range for an itinerary of {len} stops")]
    IndexOutOfRange { index: usize, len: usize },

    /// A requested reordering was not a permutation of the current stops.
    ///
    /// The safe recovery is to discard the attempted reorder; the prior
    /// ordering is always left unchanged.
    #[error("reorder rejected: {reason}")]
    InvalidReorder { reason: &'static str },
}

/// A user-curated ordered sequence of catalog sites.
///
/// The sequence never contains the same site key twice; adding a stop
/// that is already present is a silent no-op, since the UI gesture that
/// triggers it fires on every click. Sites are shared read-only data;
/// the itinerary holds references, not copies.
///
/// Every successful mutation bumps a revision counter, so a poll-driven
/// display can cheaply detect staleness without diffing state.
#[derive(Debug, Clone, Default)]
pub struct Itinerary {
    stops: Vec<Arc<Site>>,
    revision: u64,
}

impl Itinerary {
    /// Create an empty itinerary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stop unless its key is already present.
    ///
    /// Returns `true` if the stop was added, `false` on the idempotent
    /// duplicate no-op.
    pub fn add(&mut self, site: Arc<Site>) -> bool {
        if self.contains(&site.key) {
            return false;
        }
        debug!(key = %site.key, stops = self.stops.len() + 1, "itinerary stop added");
        self.stops.push(site);
        self.revision += 1;
        true
    }

    /// Remove and return the stop at `index`.
    pub fn remove(&mut self, index: usize) -> Result<Arc<Site>, ItineraryError> {
        if index >= self.stops.len() {
            return Err(ItineraryError::IndexOutOfRange {
                index,
                len: self.stops.len(),
            });
        }
        let site = self.stops.remove(index);
        self.revision += 1;
        Ok(site)
    }

    /// Remove all stops.
    pub fn clear(&mut self) {
        self.stops.clear();
        self.revision += 1;
    }

    /// Replace the ordering with the permutation described by `keys`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidReorder` unless `keys` is exactly a permutation of
    /// the current stop keys: no additions, no omissions, no duplicates.
    /// On rejection the current ordering is fully retained.
    pub fn reorder_to(&mut self, keys: &[SiteKey]) -> Result<(), ItineraryError> {
        if keys.len() != self.stops.len() {
            return Err(ItineraryError::InvalidReorder {
                reason: "wrong number of stops",
            });
        }

        let positions: HashMap<&SiteKey, usize> = self
            .stops
            .iter()
            .enumerate()
            .map(|(idx, site)| (&site.key, idx))
            .collect();

        let mut seen = vec![false; self.stops.len()];
        let mut reordered = Vec::with_capacity(self.stops.len());
        for key in keys {
            let &idx = positions
                .get(key)
                .ok_or(ItineraryError::InvalidReorder {
                    reason: "unknown stop key",
                })?;
            if seen[idx] {
                return Err(ItineraryError::InvalidReorder {
                    reason: "duplicate stop key",
                });
            }
            seen[idx] = true;
            reordered.push(Arc::clone(&self.stops[idx]));
        }

        self.stops = reordered;
        self.revision += 1;
        Ok(())
    }

    /// Re-order the sequence in place with a greedy nearest-neighbor
    /// heuristic.
    ///
    /// The first stop stays fixed as the anchor; each step appends the
    /// remaining stop closest (great-circle) to the last-placed stop.
    /// Equidistant candidates resolve to the first encountered in
    /// remaining-pool order, so the result is deterministic for a given
    /// input order. O(n²); a heuristic, not a TSP solver. No-op below
    /// two stops.
    pub fn sort_by_nearest_neighbor(&mut self) {
        if self.stops.len() < 2 {
            return;
        }

        let before_km = self.total_distance_km();
        let mut remaining = self.stops.split_off(1);

        while !remaining.is_empty() {
            let last = &self.stops[self.stops.len() - 1];
            let mut nearest_idx = 0;
            let mut nearest_km = f64::INFINITY;
            for (idx, candidate) in remaining.iter().enumerate() {
                let km = last.coordinates.distance_km(&candidate.coordinates);
                if km < nearest_km {
                    nearest_km = km;
                    nearest_idx = idx;
                }
            }
            self.stops.push(remaining.remove(nearest_idx));
        }

        self.revision += 1;
        debug!(
            before_km = before_km.round(),
            after_km = self.total_distance_km().round(),
            "itinerary resequenced by nearest neighbor"
        );
    }

    /// Total great-circle distance over consecutive stops, unrounded.
    ///
    /// Exactly `0.0` for fewer than two stops.
    pub fn total_distance_km(&self) -> f64 {
        self.leg_distances_km().sum()
    }

    /// Total distance rounded to the nearest whole kilometre.
    ///
    /// Rounding belongs to the presentation boundary; computations should
    /// use [`Itinerary::total_distance_km`].
    pub fn total_distance_km_rounded(&self) -> i64 {
        self.total_distance_km().round() as i64
    }

    /// Per-leg distances in sequence order (`len - 1` values).
    pub fn leg_distances_km(&self) -> impl Iterator<Item = f64> + '_ {
        self.stops
            .windows(2)
            .map(|pair| pair[0].coordinates.distance_km(&pair[1].coordinates))
    }

    /// The stops in sequence order.
    pub fn stops(&self) -> &[Arc<Site>] {
        &self.stops
    }

    /// The stop keys in sequence order.
    pub fn keys(&self) -> impl Iterator<Item = &SiteKey> {
        self.stops.iter().map(|site| &site.key)
    }

    /// Is a site with this key already in the sequence?
    pub fn contains(&self, key: &SiteKey) -> bool {
        self.stops.iter().any(|site| &site.key == key)
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns true if there are no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Monotonic counter bumped on every successful mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
