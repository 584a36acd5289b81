//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! The view-model DTOs are re-exported from the routes module since they
//! already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    // Core records
    HostMetadata,
    LocationRecord,
    // View model
    CameraView,
    CardView,
    DashboardViewModel,
    MarkerView,
    // Selection wire types
    ClickOrigin,
};

/// Request body for a dashboard click.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClickRequest {
    /// Surface the click came from (`"list"` or `"marker"`)
    pub origin: ClickOrigin,
    /// Zero-based row index; out-of-range values are ignored
    pub index: i64,
}

/// Response for a dashboard click.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClickResponse {
    /// Whether the click was accepted and stored
    pub applied: bool,
    /// Selection after the click, `-1` when nothing is selected
    pub selected_index: i64,
    /// Refreshed full view
    pub view: DashboardViewModel,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Per-dashboard dataset provenance
    pub dashboards: Vec<DashboardStatus>,
}

/// Dataset provenance for one dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStatus {
    /// Dashboard kind ("basic" or "detailed")
    pub kind: String,
    /// Data source ("builtin" or "csv:<path>")
    pub source: String,
    /// Number of records in the table
    pub records: usize,
    /// When the table was built
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

/// Location listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationListResponse {
    /// Records in table order
    pub locations: Vec<LocationRecord>,
    /// Total count
    pub total: usize,
}
