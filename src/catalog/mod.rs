//! In-memory location table shared by both dashboards.
//!
//! A [`Catalog`] is built once at startup, either from the built-in tables
//! in [`defaults`] or from a CSV file via [`loader`], and is immutable
//! afterwards. Construction enforces the dense index layout: after any load,
//! `records()[i].index == i` for every row, which gives O(1) positional
//! lookup and makes the row index a safe shared key between list cards and
//! map markers.

pub mod defaults;
pub mod loader;

pub use loader::{load_or_default, CatalogError};

use chrono::{DateTime, Utc};

use crate::api::LocationRecord;

/// Where the records of a catalog came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Built-in literal table.
    Builtin,
    /// Parsed from a CSV file at this path.
    CsvFile(std::path::PathBuf),
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogSource::Builtin => write!(f, "builtin"),
            CatalogSource::CsvFile(path) => write!(f, "csv:{}", path.display()),
        }
    }
}

/// Read-only table of host location records.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<LocationRecord>,
    source: CatalogSource,
    loaded_at: DateTime<Utc>,
}

impl Catalog {
    /// Build a catalog from rows, enforcing the dense index layout.
    ///
    /// Row indices are rewritten to match row order unconditionally; callers
    /// that care about anomalies in supplied indices detect and report them
    /// before building (see [`loader`]).
    pub fn from_records(mut records: Vec<LocationRecord>, source: CatalogSource) -> Self {
        for (position, record) in records.iter_mut().enumerate() {
            record.index = position;
        }
        Self {
            records,
            source,
            loaded_at: Utc::now(),
        }
    }

    /// Built-in table for the basic dashboard.
    pub fn builtin_basic() -> Self {
        Self::from_records(defaults::basic_records(), CatalogSource::Builtin)
    }

    /// Built-in table for the detailed dashboard, with host metadata.
    pub fn builtin_detailed() -> Self {
        Self::from_records(defaults::detailed_records(), CatalogSource::Builtin)
    }

    pub fn records(&self) -> &[LocationRecord] {
        &self.records
    }

    /// O(1) positional lookup; `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&LocationRecord> {
        self.records.get(index)
    }

    pub fn contains_index(&self, index: usize) -> bool {
        index < self.records.len()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Coordinate centroid of all records, `(0.0, 0.0)` for an empty table.
    ///
    /// Used as the map center before any selection exists.
    pub fn centroid(&self) -> (f64, f64) {
        if self.records.is_empty() {
            return (0.0, 0.0);
        }
        let n = self.records.len() as f64;
        let lat = self.records.iter().map(|r| r.latitude).sum::<f64>() / n;
        let lon = self.records.iter().map(|r| r.longitude).sum::<f64>() / n;
        (lat, lon)
    }
}
