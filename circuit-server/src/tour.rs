//! Auto-tour progression.
//!
//! An auto-tour steps through a fixed selection order of sites, one per
//! tick. The caller owns the clock (the rendering surface drives a timer
//! and calls [`AutoTour::advance`] on each tick); the tour itself is just
//! the cancellable progression state. It never mutates the itinerary or
//! the filter state, so aborting mid-sequence cannot corrupt anything.

use crate::domain::SiteKey;

/// A cancellable progression through a sequence of site selections.
#[derive(Debug, Clone)]
pub struct AutoTour {
    stops: Vec<SiteKey>,
    next: usize,
    active: bool,
}

impl AutoTour {
    /// Start a tour over `stops`, typically the currently visible sites
    /// in catalog order. A tour over an empty list starts inactive.
    pub fn new(stops: Vec<SiteKey>) -> Self {
        let active = !stops.is_empty();
        AutoTour {
            stops,
            next: 0,
            active,
        }
    }

    /// Yield the next selection and advance.
    ///
    /// Returns `None` once the tour is cancelled or exhausted; exhaustion
    /// deactivates the tour.
    pub fn advance(&mut self) -> Option<SiteKey> {
        if !self.active {
            return None;
        }
        match self.stops.get(self.next) {
            Some(key) => {
                self.next += 1;
                if self.next == self.stops.len() {
                    self.active = false;
                }
                Some(key.clone())
            }
            None => {
                self.active = false;
                None
            }
        }
    }

    /// Abort the tour mid-sequence. Subsequent `advance` calls return
    /// `None`.
    pub fn cancel(&mut self) {
        self.active = false;
    }

    /// Is the tour still running?
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Number of selections not yet yielded.
    pub fn remaining(&self) -> usize {
        if self.active {
            self.stops.len() - self.next
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> SiteKey {
        SiteKey::parse(s).unwrap()
    }

    fn tour(keys: &[&str]) -> AutoTour {
        AutoTour::new(keys.iter().map(|k| key(k)).collect())
    }

    #[test]
    fn yields_selection_order() {
        let mut tour = tour(&["hampi", "badami", "belur"]);

        assert!(tour.is_active());
        assert_eq!(tour.remaining(), 3);
        assert_eq!(tour.advance(), Some(key("hampi")));
        assert_eq!(tour.advance(), Some(key("badami")));
        assert_eq!(tour.advance(), Some(key("belur")));
        assert!(!tour.is_active());
        assert_eq!(tour.advance(), None);
    }

    #[test]
    fn exhaustion_deactivates() {
        let mut tour = tour(&["hampi"]);
        assert_eq!(tour.advance(), Some(key("hampi")));
        assert!(!tour.is_active());
        assert_eq!(tour.remaining(), 0);
    }

    #[test]
    fn cancel_aborts_mid_sequence() {
        let mut tour = tour(&["hampi", "badami", "belur"]);
        assert_eq!(tour.advance(), Some(key("hampi")));

        tour.cancel();
        assert!(!tour.is_active());
        assert_eq!(tour.remaining(), 0);
        assert_eq!(tour.advance(), None);
    }

    #[test]
    fn empty_tour_is_inactive() {
        let mut tour = tour(&[]);
        assert!(!tour.is_active());
        assert_eq!(tour.advance(), None);
    }
}
