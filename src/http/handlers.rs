//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the catalog
//! and service layers for the actual logic.

use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use tracing::debug;

use super::dto::{
    ClickRequest, ClickResponse, DashboardStatus, DashboardViewModel, HealthResponse,
    LocationListResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::DashboardKind;
use crate::services::selection::ClickEvent;
use crate::services::view_model;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

fn parse_kind(raw: &str) -> Result<DashboardKind, AppError> {
    raw.parse()
        .map_err(|_| AppError::NotFound(format!("unknown dashboard '{}'", raw)))
}

// =============================================================================
// Dashboard Pages
// =============================================================================

/// GET /
///
/// The basic dashboard page.
pub async fn basic_page() -> Html<&'static str> {
    Html(crate::html::BASIC_PAGE)
}

/// GET /detailed
///
/// The detailed dashboard page.
pub async fn detailed_page() -> Html<&'static str> {
    Html(crate::html::DETAILED_PAGE)
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint reporting dataset provenance for both dashboards.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let dashboards = DashboardKind::ALL
        .iter()
        .map(|kind| {
            let catalog = state.catalog(*kind);
            DashboardStatus {
                kind: kind.to_string(),
                source: catalog.source().to_string(),
                records: catalog.len(),
                loaded_at: catalog.loaded_at(),
            }
        })
        .collect();

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        dashboards,
    }))
}

// =============================================================================
// Dashboard Data
// =============================================================================

/// GET /v1/dashboards/{kind}/locations
///
/// List the location records backing a dashboard.
pub async fn list_locations(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> HandlerResult<LocationListResponse> {
    let kind = parse_kind(&kind)?;
    let catalog = state.catalog(kind);

    Ok(Json(LocationListResponse {
        locations: catalog.records().to_vec(),
        total: catalog.len(),
    }))
}

/// GET /v1/dashboards/{kind}/view
///
/// Current full view model for a dashboard.
pub async fn get_view(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> HandlerResult<DashboardViewModel> {
    let kind = parse_kind(&kind)?;
    let catalog = state.catalog(kind);
    let selection = state.selections.get(kind);

    Ok(Json(view_model::render(catalog, selection)))
}

/// POST /v1/dashboards/{kind}/click
///
/// Apply a click from either view and return the refreshed view model.
/// Unresolvable clicks (unknown origin, negative or out-of-range index) are
/// benign no-ops: the stored selection stays put and the current view is
/// returned with `applied: false`.
pub async fn post_click(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Json(request): Json<ClickRequest>,
) -> HandlerResult<ClickResponse> {
    let kind = parse_kind(&kind)?;
    let catalog = state.catalog(kind);

    let outcome = usize::try_from(request.index)
        .ok()
        .and_then(|index| ClickEvent::resolve(request.origin, index))
        .map(|event| state.selections.apply(kind, event, catalog.len()));

    let (applied, selection) = match outcome {
        Some(outcome) => {
            if outcome.applied {
                if let Some(record) = outcome.selection.index().and_then(|i| catalog.get(i)) {
                    debug!(
                        dashboard = %kind,
                        index = record.index,
                        location = %record.label,
                        "Click selected row"
                    );
                }
            } else {
                debug!(
                    dashboard = %kind,
                    index = request.index,
                    "Ignoring out-of-range click"
                );
            }
            (outcome.applied, outcome.selection)
        }
        None => {
            debug!(dashboard = %kind, index = request.index, "Ignoring unresolvable click");
            (false, state.selections.get(kind))
        }
    };

    let view = view_model::render(catalog, selection);
    Ok(Json(ClickResponse {
        applied,
        selected_index: selection.to_wire(),
        view,
    }))
}
