//! The itinerary planner.
//!
//! Owns the ordered sequence of selected sites and everything derived
//! from it: great-circle travel metrics, manual and greedy reordering,
//! and the staged drafts that keep drag gestures atomic.

mod draft;
mod planner;

pub use draft::ReorderDraft;
pub use planner::{Itinerary, ItineraryError};
