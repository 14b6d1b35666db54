//! Web layer for the heritage circuit planner.
//!
//! Provides the HTTP contract that rendering surfaces (the 3D scene, the
//! 2D map, or a headless harness) consume, and serves the renderer's
//! static bundle.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
