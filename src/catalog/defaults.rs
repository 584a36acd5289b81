//! Built-in host location tables.
//!
//! The ten most recent Olympic Games at the time the dashboards were built,
//! newest first. City-centre coordinates; dates are the opening ceremonies.
//! These rows back the basic dashboard directly and serve as the fallback
//! for the detailed dashboard when its CSV file is absent or unreadable.

use crate::api::{HostMetadata, LocationRecord};

/// A literal seed row. Converted into [`LocationRecord`]s at startup, with
/// indices assigned from row order.
#[derive(Debug, Clone)]
struct SeedRow {
    label: &'static str,
    latitude: f64,
    longitude: f64,
    date: &'static str,
}

impl SeedRow {
    const fn new(label: &'static str, latitude: f64, longitude: f64, date: &'static str) -> Self {
        Self {
            label,
            latitude,
            longitude,
            date,
        }
    }
}

/// Host metadata seed for the detailed table, one entry per [`HOST_ROWS`]
/// row. Attendance figures are ticket-sale estimates; the two pandemic
/// editions were held without a public and carry no figure.
#[derive(Debug, Clone)]
struct SeedMeta {
    host_city: &'static str,
    country: &'static str,
    event_type: &'static str,
    year: i32,
    attendance: Option<u64>,
    medal_count: Option<u32>,
}

impl SeedMeta {
    const fn new(
        host_city: &'static str,
        country: &'static str,
        event_type: &'static str,
        year: i32,
        attendance: Option<u64>,
        medal_count: Option<u32>,
    ) -> Self {
        Self {
            host_city,
            country,
            event_type,
            year,
            attendance,
            medal_count,
        }
    }
}

// ============================================================================
// Host locations, newest first
// ============================================================================

const HOST_ROWS: &[SeedRow] = &[
    SeedRow::new("Paris, France (Summer 2024)", 48.8566, 2.3522, "2024-07-26"),
    SeedRow::new("Beijing, China (Winter 2022)", 39.9042, 116.4074, "2022-02-04"),
    SeedRow::new("Tokyo, Japan (Summer 2020)", 35.6762, 139.6503, "2021-07-23"),
    SeedRow::new("Pyeongchang, South Korea (Winter 2018)", 37.3705, 128.3903, "2018-02-09"),
    SeedRow::new("Rio de Janeiro, Brazil (Summer 2016)", -22.9083, -43.1964, "2016-08-05"),
    SeedRow::new("Sochi, Russia (Winter 2014)", 43.5855, 40.2020, "2014-02-07"),
    SeedRow::new("London, UK (Summer 2012)", 51.5074, -0.1278, "2012-07-27"),
    SeedRow::new("Vancouver, Canada (Winter 2010)", 49.2827, -123.1207, "2010-02-12"),
    SeedRow::new("Beijing, China (Summer 2008)", 39.9042, 116.4074, "2008-08-08"),
    SeedRow::new("Turin, Italy (Winter 2006)", 45.0703, 7.6869, "2006-02-10"),
];

// ============================================================================
// Host metadata, aligned with HOST_ROWS
// ============================================================================

const HOST_META: &[SeedMeta] = &[
    SeedMeta::new("Paris", "France", "Summer", 2024, Some(9_500_000), Some(329)),
    SeedMeta::new("Beijing", "China", "Winter", 2022, None, Some(109)),
    SeedMeta::new("Tokyo", "Japan", "Summer", 2021, None, Some(339)),
    SeedMeta::new("Pyeongchang", "South Korea", "Winter", 2018, Some(1_070_000), Some(102)),
    SeedMeta::new("Rio de Janeiro", "Brazil", "Summer", 2016, Some(6_100_000), Some(306)),
    SeedMeta::new("Sochi", "Russia", "Winter", 2014, Some(1_100_000), Some(98)),
    SeedMeta::new("London", "United Kingdom", "Summer", 2012, Some(8_200_000), Some(302)),
    SeedMeta::new("Vancouver", "Canada", "Winter", 2010, Some(1_490_000), Some(86)),
    SeedMeta::new("Beijing", "China", "Summer", 2008, Some(6_500_000), Some(302)),
    SeedMeta::new("Turin", "Italy", "Winter", 2006, Some(900_000), Some(84)),
];

fn record_from_seed(position: usize, seed: &SeedRow) -> LocationRecord {
    LocationRecord {
        index: position,
        label: seed.label.to_string(),
        latitude: seed.latitude,
        longitude: seed.longitude,
        date: seed.date.to_string(),
        metadata: None,
    }
}

/// Records for the basic dashboard: labels, coordinates and dates only.
pub fn basic_records() -> Vec<LocationRecord> {
    HOST_ROWS
        .iter()
        .enumerate()
        .map(|(i, seed)| record_from_seed(i, seed))
        .collect()
}

/// Records for the detailed dashboard, with host metadata attached.
pub fn detailed_records() -> Vec<LocationRecord> {
    HOST_ROWS
        .iter()
        .zip(HOST_META.iter())
        .enumerate()
        .map(|(i, (seed, meta))| {
            record_from_seed(i, seed).with_metadata(HostMetadata {
                host_city: meta.host_city.to_string(),
                country: meta.country.to_string(),
                event_type: meta.event_type.to_string(),
                year: meta.year,
                attendance: meta.attendance,
                medal_count: meta.medal_count,
            })
        })
        .collect()
}
