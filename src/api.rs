//! Public API surface for the dashboard backend.
//!
//! This file consolidates the core record types and re-exports the DTO types
//! used by the HTTP API. All types derive Serialize/Deserialize for JSON
//! serialization.

pub use crate::routes::dashboard::CameraView;
pub use crate::routes::dashboard::CardView;
pub use crate::routes::dashboard::DashboardViewModel;
pub use crate::routes::dashboard::MarkerView;

pub use crate::services::selection::ApplyOutcome;
pub use crate::services::selection::ClickEvent;
pub use crate::services::selection::ClickOrigin;
pub use crate::services::selection::Selection;

use serde::{Deserialize, Serialize};

/// Dashboard variant identifier.
///
/// The two dashboards share the same core modules and differ only in data
/// source and page template; each keeps its own selection slot.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardKind {
    /// Hard-coded table, cards show label and date only.
    Basic,
    /// CSV-backed table with fallback, cards show host metadata.
    Detailed,
}

impl DashboardKind {
    pub const ALL: [DashboardKind; 2] = [DashboardKind::Basic, DashboardKind::Detailed];

    pub fn as_str(&self) -> &'static str {
        match self {
            DashboardKind::Basic => "basic",
            DashboardKind::Detailed => "detailed",
        }
    }
}

impl std::str::FromStr for DashboardKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(DashboardKind::Basic),
            "detailed" => Ok(DashboardKind::Detailed),
            other => Err(format!("unknown dashboard kind: {}", other)),
        }
    }
}

impl std::fmt::Display for DashboardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One Olympic host location row.
///
/// `index` is the shared key between list cards and map markers: zero-based,
/// dense, and equal to the row's position in the table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationRecord {
    /// Zero-based row index, equal to the position in the table
    pub index: usize,
    /// Display name, e.g. "Paris, France (Summer 2024)"
    pub label: String,
    /// Latitude in decimal degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in decimal degrees (-180 to 180)
    pub longitude: f64,
    /// Opening date, e.g. "2024-07-26"
    pub date: String,
    /// Extra host metadata (detailed dashboard only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HostMetadata>,
}

impl LocationRecord {
    pub fn new(
        index: usize,
        label: impl Into<String>,
        latitude: f64,
        longitude: f64,
        date: impl Into<String>,
    ) -> Result<Self, String> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err("Latitude must be between -90 and 90 degrees".to_string());
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err("Longitude must be between -180 and 180 degrees".to_string());
        }
        Ok(Self {
            index,
            label: label.into(),
            latitude,
            longitude,
            date: date.into(),
            metadata: None,
        })
    }

    pub fn with_metadata(mut self, metadata: HostMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Host metadata attached to a record in the detailed dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HostMetadata {
    pub host_city: String,
    pub country: String,
    /// "Summer" or "Winter"
    pub event_type: String,
    /// Year of the opening ceremony
    pub year: i32,
    /// Estimated spectator attendance, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendance: Option<u64>,
    /// Number of medal events held
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medal_count: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_location_record_valid() {
        let record =
            LocationRecord::new(0, "Paris, France (Summer 2024)", 48.8566, 2.3522, "2024-07-26");
        assert!(record.is_ok());
        let record = record.unwrap();
        assert_eq!(record.index, 0);
        assert_eq!(record.label, "Paris, France (Summer 2024)");
        assert!(record.metadata.is_none());
    }

    #[test]
    fn test_location_record_latitude_bounds() {
        assert!(LocationRecord::new(0, "x", 90.0, 0.0, "d").is_ok());
        assert!(LocationRecord::new(0, "x", -90.0, 0.0, "d").is_ok());
        assert!(LocationRecord::new(0, "x", 90.01, 0.0, "d").is_err());
        assert!(LocationRecord::new(0, "x", -90.01, 0.0, "d").is_err());
    }

    #[test]
    fn test_location_record_longitude_bounds() {
        assert!(LocationRecord::new(0, "x", 0.0, 180.0, "d").is_ok());
        assert!(LocationRecord::new(0, "x", 0.0, -180.0, "d").is_ok());
        assert!(LocationRecord::new(0, "x", 0.0, 180.01, "d").is_err());
        assert!(LocationRecord::new(0, "x", 0.0, -180.01, "d").is_err());
    }

    #[test]
    fn test_location_record_with_metadata() {
        let record = LocationRecord::new(3, "Sochi, Russia (Winter 2014)", 43.5855, 40.2020, "2014-02-07")
            .unwrap()
            .with_metadata(HostMetadata {
                host_city: "Sochi".to_string(),
                country: "Russia".to_string(),
                event_type: "Winter".to_string(),
                year: 2014,
                attendance: Some(1_100_000),
                medal_count: Some(98),
            });
        let meta = record.metadata.expect("metadata set");
        assert_eq!(meta.event_type, "Winter");
        assert_eq!(meta.medal_count, Some(98));
    }

    #[test]
    fn test_dashboard_kind_round_trip() {
        for kind in DashboardKind::ALL {
            assert_eq!(DashboardKind::from_str(kind.as_str()).unwrap(), kind);
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn test_dashboard_kind_unknown() {
        assert!(DashboardKind::from_str("fancy").is_err());
        assert!(DashboardKind::from_str("Basic").is_err());
        assert!(DashboardKind::from_str("").is_err());
    }

    #[test]
    fn test_dashboard_kind_serde() {
        let json = serde_json::to_string(&DashboardKind::Detailed).unwrap();
        assert_eq!(json, "\"detailed\"");
        let kind: DashboardKind = serde_json::from_str("\"basic\"").unwrap();
        assert_eq!(kind, DashboardKind::Basic);
    }

    #[test]
    fn test_metadata_optional_fields_skipped() {
        let record = LocationRecord::new(0, "x", 1.0, 2.0, "d").unwrap();
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("metadata"));
    }
}
