//! Staged reordering for drag-and-drop gestures.
//!
//! A drag gesture permutes a visual list over many intermediate events
//! before it either lands or is abandoned. The itinerary must never see
//! those intermediate states: a [`ReorderDraft`] captures the key order
//! at drag start, absorbs every move, and only touches the itinerary at
//! commit time. Abandoning the gesture is simply dropping the draft.

use crate::domain::SiteKey;

use super::{Itinerary, ItineraryError};

/// A staged reordering of an itinerary's stops.
#[derive(Debug, Clone)]
pub struct ReorderDraft {
    keys: Vec<SiteKey>,
}

impl ReorderDraft {
    /// Capture the current stop order of `itinerary`.
    pub fn new(itinerary: &Itinerary) -> Self {
        ReorderDraft {
            keys: itinerary.keys().cloned().collect(),
        }
    }

    /// The staged key order.
    pub fn keys(&self) -> &[SiteKey] {
        &self.keys
    }

    /// Move the stop at `from` so it ends up at position `to`.
    ///
    /// Only the draft changes; the itinerary is untouched until
    /// [`ReorderDraft::commit`].
    pub fn move_stop(&mut self, from: usize, to: usize) -> Result<(), ItineraryError> {
        let len = self.keys.len();
        if from >= len {
            return Err(ItineraryError::IndexOutOfRange { index: from, len });
        }
        if to >= len {
            return Err(ItineraryError::IndexOutOfRange { index: to, len });
        }
        let key = self.keys.remove(from);
        self.keys.insert(to, key);
        Ok(())
    }

    /// Apply the staged order to `itinerary`.
    ///
    /// Delegates to [`Itinerary::reorder_to`], so a draft that has gone
    /// stale (the itinerary changed since the drag started) is rejected
    /// and the itinerary keeps its prior ordering.
    pub fn commit(self, itinerary: &mut Itinerary) -> Result<(), ItineraryError> {
        itinerary.reorder_to(&self.keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Coordinates, Site, SiteDescription};
    use std::sync::Arc;

    fn site(key: &str, lat: f64) -> Arc<Site> {
        Arc::new(Site {
            key: SiteKey::parse(key).unwrap(),
            name: key.to_string(),
            category: Category::Heritage,
            era: "Hoysala (12th c.)".to_string(),
            coordinates: Coordinates::new(lat, 76.0).unwrap(),
            highlights: vec![],
            description: SiteDescription {
                history: String::new(),
                architecture: String::new(),
                timeline: vec![],
            },
        })
    }

    fn key(s: &str) -> SiteKey {
        SiteKey::parse(s).unwrap()
    }

    fn three_stop_itinerary() -> Itinerary {
        let mut itinerary = Itinerary::new();
        itinerary.add(site("a", 1.0));
        itinerary.add(site("b", 2.0));
        itinerary.add(site("c", 3.0));
        itinerary
    }

    #[test]
    fn move_and_commit() {
        let mut itinerary = three_stop_itinerary();

        let mut draft = ReorderDraft::new(&itinerary);
        draft.move_stop(0, 2).unwrap();
        assert_eq!(draft.keys(), &[key("b"), key("c"), key("a")]);

        // Nothing applied yet.
        let keys: Vec<_> = itinerary.keys().cloned().collect();
        assert_eq!(keys, vec![key("a"), key("b"), key("c")]);

        draft.commit(&mut itinerary).unwrap();
        let keys: Vec<_> = itinerary.keys().cloned().collect();
        assert_eq!(keys, vec![key("b"), key("c"), key("a")]);
    }

    #[test]
    fn abandoned_draft_changes_nothing() {
        let itinerary = three_stop_itinerary();
        let revision = itinerary.revision();

        {
            let mut draft = ReorderDraft::new(&itinerary);
            draft.move_stop(2, 0).unwrap();
            // Dropped without commit.
        }

        assert_eq!(itinerary.revision(), revision);
        let keys: Vec<_> = itinerary.keys().cloned().collect();
        assert_eq!(keys, vec![key("a"), key("b"), key("c")]);
    }

    #[test]
    fn move_out_of_range() {
        let itinerary = three_stop_itinerary();
        let mut draft = ReorderDraft::new(&itinerary);

        assert!(matches!(
            draft.move_stop(3, 0),
            Err(ItineraryError::IndexOutOfRange { index: 3, len: 3 })
        ));
        assert!(matches!(
            draft.move_stop(0, 3),
            Err(ItineraryError::IndexOutOfRange { index: 3, len: 3 })
        ));
    }

    #[test]
    fn stale_draft_is_rejected() {
        let mut itinerary = three_stop_itinerary();

        let mut draft = ReorderDraft::new(&itinerary);
        draft.move_stop(0, 1).unwrap();

        // The itinerary changes while the drag is in flight.
        itinerary.add(site("d", 4.0));

        let result = draft.commit(&mut itinerary);
        assert!(matches!(
            result,
            Err(ItineraryError::InvalidReorder { .. })
        ));

        // The itinerary keeps its own ordering.
        let keys: Vec<_> = itinerary.keys().cloned().collect();
        assert_eq!(keys, vec![key("a"), key("b"), key("c"), key("d")]);
    }
}
