//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use chrono::Utc;
use tower_http::services::ServeDir;
use tracing::warn;

use crate::domain::SiteKey;
use crate::export::{self, ExportError, ItinerarySnapshot};
use crate::filter;
use crate::itinerary::ItineraryError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
///
/// `static_dir` is the path to the external renderer's asset bundle.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/sites", get(list_sites))
        .route("/api/sites/:key", get(site_detail))
        .route(
            "/api/filter",
            get(get_filter).put(set_filter).delete(reset_filter),
        )
        .route("/api/itinerary", get(get_itinerary).delete(clear_itinerary))
        .route("/api/itinerary/stops", post(add_stop))
        .route("/api/itinerary/stops/:index", delete(remove_stop))
        .route("/api/itinerary/order", put(reorder_itinerary))
        .route("/api/itinerary/sort", post(sort_itinerary))
        .route("/api/itinerary/export", get(export_json))
        .route("/api/itinerary/export/report", get(export_report))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List the catalog with per-site visibility under the current filter.
async fn list_sites(State(state): State<AppState>) -> Json<SiteListResponse> {
    let filter_state = state.filter.read().await;

    let sites: Vec<SiteSummary> = state
        .catalog
        .iter()
        .map(|site| SiteSummary::from_site(site, filter_state.is_visible(site)))
        .collect();
    let visible_count = sites.iter().filter(|s| s.visible).count();

    Json(SiteListResponse {
        sites,
        visible_count,
    })
}

/// Full detail for one site (modal content).
async fn site_detail(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<SiteDetailResponse>, AppError> {
    let key = SiteKey::parse(&key).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    let site = state.catalog.get(&key).ok_or_else(|| AppError::NotFound {
        message: format!("no site with key {key}"),
    })?;

    Ok(Json(SiteDetailResponse::from_site(site)))
}

/// Echo the current filter state.
async fn get_filter(State(state): State<AppState>) -> Json<FilterResponse> {
    let filter_state = state.filter.read().await;
    let visible_count = filter::visible_sites(&state.catalog, &filter_state).count();
    Json(FilterResponse::from_state(&filter_state, visible_count))
}

/// Replace the filter state. Unknown values fail open to "all".
async fn set_filter(
    State(state): State<AppState>,
    Json(req): Json<FilterRequest>,
) -> Json<FilterResponse> {
    let new_state = req.into_state();
    let visible_count = filter::visible_sites(&state.catalog, &new_state).count();

    let mut filter_state = state.filter.write().await;
    *filter_state = new_state;

    Json(FilterResponse::from_state(&filter_state, visible_count))
}

/// Reset the filter state to its default (everything visible).
async fn reset_filter(State(state): State<AppState>) -> Json<FilterResponse> {
    let mut filter_state = state.filter.write().await;
    *filter_state = Default::default();
    Json(FilterResponse::from_state(
        &filter_state,
        state.catalog.len(),
    ))
}

/// Live snapshot of the itinerary.
async fn get_itinerary(State(state): State<AppState>) -> Json<ItinerarySnapshot> {
    let itinerary = state.itinerary.read().await;
    Json(ItinerarySnapshot::capture(&itinerary, Utc::now()))
}

/// Add a stop by site key. Duplicate adds are idempotent no-ops.
async fn add_stop(
    State(state): State<AppState>,
    Json(req): Json<AddStopRequest>,
) -> Result<Json<AddStopResponse>, AppError> {
    let key = SiteKey::parse(&req.key).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    let site = state.catalog.get(&key).ok_or_else(|| AppError::NotFound {
        message: format!("no site with key {key}"),
    })?;

    let mut itinerary = state.itinerary.write().await;
    let added = itinerary.add(site.clone());

    Ok(Json(AddStopResponse {
        added,
        stop_count: itinerary.len(),
    }))
}

/// Remove the stop at an index.
///
/// An out-of-range index means the renderer's list view went stale; it is
/// reported as a conflict for the renderer to resolve by re-rendering,
/// never as a server crash.
async fn remove_stop(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<ItinerarySnapshot>, AppError> {
    let mut itinerary = state.itinerary.write().await;
    itinerary.remove(index)?;
    Ok(Json(ItinerarySnapshot::capture(&itinerary, Utc::now())))
}

/// Clear the itinerary.
async fn clear_itinerary(State(state): State<AppState>) -> Json<ItinerarySnapshot> {
    let mut itinerary = state.itinerary.write().await;
    itinerary.clear();
    Json(ItinerarySnapshot::capture(&itinerary, Utc::now()))
}

/// Replace the stop ordering (drag-and-drop reconciliation).
async fn reorder_itinerary(
    State(state): State<AppState>,
    Json(req): Json<ReorderRequest>,
) -> Result<Json<ItinerarySnapshot>, AppError> {
    let mut keys = Vec::with_capacity(req.keys.len());
    for raw in &req.keys {
        keys.push(SiteKey::parse(raw).map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?);
    }

    let mut itinerary = state.itinerary.write().await;
    itinerary.reorder_to(&keys)?;
    Ok(Json(ItinerarySnapshot::capture(&itinerary, Utc::now())))
}

/// Re-sequence the itinerary with the nearest-neighbor heuristic.
async fn sort_itinerary(State(state): State<AppState>) -> Json<ItinerarySnapshot> {
    let mut itinerary = state.itinerary.write().await;
    itinerary.sort_by_nearest_neighbor();
    Json(ItinerarySnapshot::capture(&itinerary, Utc::now()))
}

/// Download the itinerary as a JSON document. An empty itinerary
/// downloads as an empty-list document.
async fn export_json(State(state): State<AppState>) -> Result<Response, AppError> {
    let itinerary = state.itinerary.read().await;
    let snapshot = ItinerarySnapshot::capture(&itinerary, Utc::now());
    drop(itinerary);

    let body = export::to_json_string(&snapshot)?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/json"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"karnataka-heritage-circuit.json\"",
            ),
        ],
        body,
    )
        .into_response())
}

/// Download the itinerary as a paginated plain-text report.
async fn export_report(State(state): State<AppState>) -> Result<Response, AppError> {
    let itinerary = state.itinerary.read().await;
    let snapshot = ItinerarySnapshot::capture(&itinerary, Utc::now());
    drop(itinerary);

    let report = export::render_report(&snapshot, &state.report)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"karnataka-heritage-circuit.txt\"",
            ),
        ],
        report.to_text(),
    )
        .into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Conflict { message: String },
    Internal { message: String },
}

impl From<ItineraryError> for AppError {
    fn from(e: ItineraryError) -> Self {
        match e {
            // A stale index from the renderer: a desync, not a bad request.
            ItineraryError::IndexOutOfRange { .. } => AppError::Conflict {
                message: e.to_string(),
            },
            ItineraryError::InvalidReorder { .. } => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl From<ExportError> for AppError {
    fn from(e: ExportError) -> Self {
        match e {
            ExportError::EmptyItinerary => AppError::BadRequest {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
