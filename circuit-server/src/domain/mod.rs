//! Domain types for the heritage circuit planner.
//!
//! This module contains the core domain model types that represent
//! validated catalog data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod coords;
mod era;
mod site;

pub use coords::{Coordinates, InvalidCoordinates};
pub use era::EraBucket;
pub use site::{Category, InvalidSiteKey, Site, SiteDescription, SiteKey, TimelineEntry};
