//! CSV loader for the detailed dashboard table.
//!
//! Loading happens once at startup; the file is never re-read or written.
//! Failure handling is deliberately uneven: a missing file silently falls
//! back to the built-in table, an unreadable or malformed file falls back
//! with a warning, but a header that lacks a required column is a
//! configuration error and aborts startup. Supplied `index` values are never
//! trusted: any deviation from dense row order discards the column and
//! renumbers from row order, with one warning.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::{Catalog, CatalogSource};
use crate::api::{HostMetadata, LocationRecord};

/// Columns every data file must provide.
pub const REQUIRED_COLUMNS: [&str; 5] = ["index", "location", "latitude", "longitude", "date"];

/// Error type for catalog loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The header is present but lacks a required column. The file was
    /// clearly meant to be used, so this aborts startup instead of silently
    /// serving the fallback table.
    #[error("data file {path}: missing required column '{column}'")]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("data file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("data file {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("data file {path}, row {row}: {message}")]
    Row {
        path: PathBuf,
        row: usize,
        message: String,
    },
}

/// Load the detailed table from `path`, falling back to the built-in rows.
///
/// Returns `Err` only for the fatal missing-column case; every other failure
/// degrades to [`Catalog::builtin_detailed`].
pub fn load_or_default(path: &Path) -> Result<Catalog, CatalogError> {
    if !path.exists() {
        info!(path = %path.display(), "Data file not found, using built-in table");
        return Ok(Catalog::builtin_detailed());
    }

    match read_records(path) {
        Ok(records) => {
            let catalog =
                Catalog::from_records(records, CatalogSource::CsvFile(path.to_path_buf()));
            info!(path = %path.display(), records = catalog.len(), "Loaded location table");
            Ok(catalog)
        }
        Err(e @ CatalogError::MissingColumn { .. }) => Err(e),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read data file, using built-in table");
            Ok(Catalog::builtin_detailed())
        }
    }
}

fn read_records(path: &Path) -> Result<Vec<LocationRecord>, CatalogError> {
    let file = File::open(path).map_err(|e| CatalogError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let headers = reader
        .headers()
        .map_err(|e| CatalogError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?
        .clone();
    let columns = ColumnMap::resolve(path, &headers)?;

    let mut rows = Vec::new();
    for (i, result) in reader.records().enumerate() {
        // Data rows start on line 2; the header occupies line 1.
        let row_no = i + 2;
        let record = result.map_err(|e| CatalogError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;
        rows.push(columns.parse_row(path, row_no, &record)?);
    }

    Ok(finalize(path, rows))
}

/// Check supplied indices against dense row order, warn once on any
/// deviation, and strip them. Final indices always come from row order.
fn finalize(path: &Path, rows: Vec<ParsedRow>) -> Vec<LocationRecord> {
    let dense = rows
        .iter()
        .enumerate()
        .all(|(i, row)| row.supplied_index == Some(i));
    if !dense && !rows.is_empty() {
        warn!(
            path = %path.display(),
            "Supplied index column is not a dense zero-based sequence, renumbering from row order"
        );
    }
    rows.into_iter().map(|row| row.record).collect()
}

struct ParsedRow {
    /// Index value as written in the file, `None` if unparseable.
    supplied_index: Option<usize>,
    record: LocationRecord,
}

/// Resolved column positions for one data file.
struct ColumnMap {
    index: usize,
    location: usize,
    latitude: usize,
    longitude: usize,
    date: usize,
    host_city: Option<usize>,
    country: Option<usize>,
    event_type: Option<usize>,
    year: Option<usize>,
    attendance: Option<usize>,
    medal_count: Option<usize>,
}

impl ColumnMap {
    fn resolve(path: &Path, headers: &csv::StringRecord) -> Result<Self, CatalogError> {
        let required = |column: &'static str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or(CatalogError::MissingColumn {
                    path: path.to_path_buf(),
                    column,
                })
        };
        let optional = |column: &str| headers.iter().position(|h| h == column);

        Ok(Self {
            index: required("index")?,
            location: required("location")?,
            latitude: required("latitude")?,
            longitude: required("longitude")?,
            date: required("date")?,
            host_city: optional("host_city"),
            country: optional("country"),
            event_type: optional("event_type"),
            year: optional("year"),
            attendance: optional("attendance"),
            medal_count: optional("medal_count"),
        })
    }

    fn parse_row(
        &self,
        path: &Path,
        row_no: usize,
        record: &csv::StringRecord,
    ) -> Result<ParsedRow, CatalogError> {
        let row_error = |message: String| CatalogError::Row {
            path: path.to_path_buf(),
            row: row_no,
            message,
        };
        let field = |position: usize| record.get(position).unwrap_or("");

        let label = field(self.location);
        if label.is_empty() {
            return Err(row_error("empty location".to_string()));
        }
        let latitude: f64 = field(self.latitude)
            .parse()
            .map_err(|_| row_error(format!("invalid latitude '{}'", field(self.latitude))))?;
        let longitude: f64 = field(self.longitude)
            .parse()
            .map_err(|_| row_error(format!("invalid longitude '{}'", field(self.longitude))))?;

        // The supplied index is parsed leniently; anomalies are handled in
        // finalize(), not per row.
        let supplied_index = field(self.index).parse::<usize>().ok();

        let mut out = LocationRecord::new(0, label, latitude, longitude, field(self.date))
            .map_err(row_error)?;
        if let Some(metadata) = self.metadata_for(record) {
            out = out.with_metadata(metadata);
        }

        Ok(ParsedRow {
            supplied_index,
            record: out,
        })
    }

    /// Metadata is decorative: it is attached only when the four core
    /// columns are present and non-empty for the row, and number parsing is
    /// lenient. Rows without it simply render without detail lines.
    fn metadata_for(&self, record: &csv::StringRecord) -> Option<HostMetadata> {
        let value = |position: Option<usize>| {
            position
                .and_then(|p| record.get(p))
                .filter(|v| !v.is_empty())
        };

        let host_city = value(self.host_city)?;
        let country = value(self.country)?;
        let event_type = value(self.event_type)?;
        let year: i32 = value(self.year)?.parse().ok()?;

        Some(HostMetadata {
            host_city: host_city.to_string(),
            country: country.to_string(),
            event_type: event_type.to_string(),
            year,
            attendance: value(self.attendance).and_then(|v| v.parse().ok()),
            medal_count: value(self.medal_count).and_then(|v| v.parse().ok()),
        })
    }
}
