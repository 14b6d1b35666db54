//! Heritage circuit planner server.
//!
//! The core behind an interactive map of Karnataka heritage sites: a
//! filterable site catalog, a user-curated itinerary with great-circle
//! distances and greedy resequencing, and exportable circuit documents.
//! Rendering (3D scene, 2D map) lives in an external surface that drives
//! this core over its web contract.

pub mod catalog;
pub mod domain;
pub mod export;
pub mod filter;
pub mod itinerary;
pub mod tour;
pub mod web;
