//! View rendering for the dashboards.
//!
//! [`render`] is the single place where selection turns into pixels: it
//! derives the full list and map render state from the catalog and the
//! current selection. The function is pure and recomputes everything on
//! every call; handlers never patch a previous view, so the two views can
//! never drift apart.

use crate::api::{CameraView, CardView, DashboardViewModel, LocationRecord, MarkerView, Selection};
use crate::catalog::Catalog;

/// Marker radius in pixels.
pub const MARKER_SIZE: u32 = 10;
pub const MARKER_SIZE_SELECTED: u32 = 15;

/// Marker colors (blue default, red selected).
pub const MARKER_COLOR: &str = "#1f77b4";
pub const MARKER_COLOR_SELECTED: &str = "#d62728";
pub const MARKER_OPACITY: f64 = 0.8;

/// Card borders.
pub const CARD_BORDER: &str = "1px solid #ddd";
pub const CARD_BORDER_SELECTED: &str = "2px solid red";

/// Zoom showing the full extent, used before any selection.
pub const ZOOM_FULL_EXTENT: f64 = 1.0;
/// Zoom applied when centering on a selected row.
pub const ZOOM_SELECTED: f64 = 8.0;

/// Derive the complete dashboard view from the table and the selection.
///
/// A selection index outside the table (which the store never produces) is
/// treated as no selection.
pub fn render(catalog: &Catalog, selection: Selection) -> DashboardViewModel {
    let selected = selection.index().filter(|i| catalog.contains_index(*i));

    let markers = catalog
        .records()
        .iter()
        .map(|r| marker_view(r, selected == Some(r.index)))
        .collect();

    let cards = catalog
        .records()
        .iter()
        .map(|r| card_view(r, selected == Some(r.index)))
        .collect();

    let camera = match selected.and_then(|i| catalog.get(i)) {
        Some(r) => CameraView {
            center_latitude: r.latitude,
            center_longitude: r.longitude,
            zoom: ZOOM_SELECTED,
        },
        None => {
            let (center_latitude, center_longitude) = catalog.centroid();
            CameraView {
                center_latitude,
                center_longitude,
                zoom: ZOOM_FULL_EXTENT,
            }
        }
    };

    DashboardViewModel {
        markers,
        cards,
        camera,
        scroll_to: selected,
        selected_index: match selected {
            Some(i) => i as i64,
            None => -1,
        },
    }
}

fn marker_view(record: &LocationRecord, is_selected: bool) -> MarkerView {
    MarkerView {
        index: record.index,
        latitude: record.latitude,
        longitude: record.longitude,
        size: if is_selected {
            MARKER_SIZE_SELECTED
        } else {
            MARKER_SIZE
        },
        color: if is_selected {
            MARKER_COLOR_SELECTED
        } else {
            MARKER_COLOR
        }
        .to_string(),
        opacity: MARKER_OPACITY,
        hover: hover_text(record),
        selected: is_selected,
    }
}

fn card_view(record: &LocationRecord, is_selected: bool) -> CardView {
    CardView {
        index: record.index,
        title: format!("{} - {}", record.label, record.date),
        detail_lines: detail_lines(record),
        border: if is_selected {
            CARD_BORDER_SELECTED
        } else {
            CARD_BORDER
        }
        .to_string(),
        selected: is_selected,
    }
}

fn hover_text(record: &LocationRecord) -> String {
    format!(
        "<b>{}</b><br>Date: {}<br>Lat: {:.4}<br>Lon: {:.4}",
        record.label, record.date, record.latitude, record.longitude
    )
}

/// Extra card lines for rows carrying host metadata. Empty for the basic
/// dashboard, whose records never have any.
fn detail_lines(record: &LocationRecord) -> Vec<String> {
    let Some(meta) = &record.metadata else {
        return Vec::new();
    };

    let mut lines = vec![
        format!("Host city: {}, {}", meta.host_city, meta.country),
        format!("{} Games, {}", meta.event_type, meta.year),
    ];
    if let Some(attendance) = meta.attendance {
        lines.push(format!("Attendance: {}", group_thousands(attendance)));
    }
    if let Some(medal_count) = meta.medal_count {
        lines.push(format!("Medal events: {}", medal_count));
    }
    lines
}

/// Format an integer with comma thousands separators.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{HostMetadata, Selection};
    use crate::catalog::{Catalog, CatalogSource};

    fn create_test_catalog() -> Catalog {
        let records = vec![
            LocationRecord::new(0, "Paris, France (Summer 2024)", 48.8566, 2.3522, "2024-07-26")
                .unwrap(),
            LocationRecord::new(1, "Beijing, China (Winter 2022)", 39.9042, 116.4074, "2022-02-04")
                .unwrap(),
            LocationRecord::new(2, "Tokyo, Japan (Summer 2020)", 35.6762, 139.6503, "2021-07-23")
                .unwrap(),
        ];
        Catalog::from_records(records, CatalogSource::Builtin)
    }

    #[test]
    fn test_render_unselected() {
        let catalog = create_test_catalog();
        let view = render(&catalog, Selection::None);

        assert_eq!(view.markers.len(), 3);
        assert_eq!(view.cards.len(), 3);
        assert_eq!(view.selected_index, -1);
        assert!(view.scroll_to.is_none());
        assert_eq!(view.camera.zoom, ZOOM_FULL_EXTENT);

        for marker in &view.markers {
            assert_eq!(marker.size, MARKER_SIZE);
            assert_eq!(marker.color, MARKER_COLOR);
            assert!(!marker.selected);
        }
        for card in &view.cards {
            assert_eq!(card.border, CARD_BORDER);
            assert!(!card.selected);
        }
    }

    #[test]
    fn test_render_unselected_camera_is_centroid() {
        let catalog = create_test_catalog();
        let view = render(&catalog, Selection::None);

        let (lat, lon) = catalog.centroid();
        assert!((view.camera.center_latitude - lat).abs() < 1e-9);
        assert!((view.camera.center_longitude - lon).abs() < 1e-9);
    }

    #[test]
    fn test_render_selected_styles_one_row() {
        let catalog = create_test_catalog();
        let view = render(&catalog, Selection::Selected(0));

        assert_eq!(view.selected_index, 0);
        assert_eq!(view.scroll_to, Some(0));
        assert_eq!(view.camera.zoom, ZOOM_SELECTED);
        assert_eq!(view.camera.center_latitude, 48.8566);
        assert_eq!(view.camera.center_longitude, 2.3522);

        assert_eq!(view.markers[0].size, MARKER_SIZE_SELECTED);
        assert_eq!(view.markers[0].color, MARKER_COLOR_SELECTED);
        assert_eq!(view.cards[0].border, CARD_BORDER_SELECTED);
        assert!(view.cards[0].selected);

        for i in 1..3 {
            assert_eq!(view.markers[i].size, MARKER_SIZE);
            assert_eq!(view.cards[i].border, CARD_BORDER);
        }
    }

    #[test]
    fn test_render_out_of_range_selection_falls_back() {
        let catalog = create_test_catalog();
        let view = render(&catalog, Selection::Selected(99));

        assert_eq!(view.selected_index, -1);
        assert!(view.scroll_to.is_none());
        assert_eq!(view.camera.zoom, ZOOM_FULL_EXTENT);
        assert!(view.cards.iter().all(|c| !c.selected));
    }

    #[test]
    fn test_render_empty_catalog() {
        let catalog = Catalog::from_records(vec![], CatalogSource::Builtin);
        let view = render(&catalog, Selection::None);

        assert!(view.markers.is_empty());
        assert!(view.cards.is_empty());
        assert_eq!(view.camera.center_latitude, 0.0);
        assert_eq!(view.camera.center_longitude, 0.0);
        assert_eq!(view.camera.zoom, ZOOM_FULL_EXTENT);
    }

    #[test]
    fn test_card_title_format() {
        let catalog = create_test_catalog();
        let view = render(&catalog, Selection::None);
        assert_eq!(view.cards[0].title, "Paris, France (Summer 2024) - 2024-07-26");
    }

    #[test]
    fn test_hover_text_contains_coordinates() {
        let catalog = create_test_catalog();
        let view = render(&catalog, Selection::None);
        let hover = &view.markers[0].hover;
        assert!(hover.contains("<b>Paris, France (Summer 2024)</b>"));
        assert!(hover.contains("Date: 2024-07-26"));
        assert!(hover.contains("Lat: 48.8566"));
        assert!(hover.contains("Lon: 2.3522"));
    }

    #[test]
    fn test_detail_lines_without_metadata() {
        let catalog = create_test_catalog();
        let view = render(&catalog, Selection::None);
        assert!(view.cards.iter().all(|c| c.detail_lines.is_empty()));
    }

    #[test]
    fn test_detail_lines_with_metadata() {
        let record = LocationRecord::new(0, "Sochi, Russia (Winter 2014)", 43.5855, 40.2020, "2014-02-07")
            .unwrap()
            .with_metadata(HostMetadata {
                host_city: "Sochi".to_string(),
                country: "Russia".to_string(),
                event_type: "Winter".to_string(),
                year: 2014,
                attendance: Some(1_100_000),
                medal_count: Some(98),
            });
        let catalog = Catalog::from_records(vec![record], CatalogSource::Builtin);
        let view = render(&catalog, Selection::None);

        let lines = &view.cards[0].detail_lines;
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Host city: Sochi, Russia");
        assert_eq!(lines[1], "Winter Games, 2014");
        assert_eq!(lines[2], "Attendance: 1,100,000");
        assert_eq!(lines[3], "Medal events: 98");
    }

    #[test]
    fn test_detail_lines_skip_missing_counts() {
        let record = LocationRecord::new(0, "Tokyo, Japan (Summer 2020)", 35.6762, 139.6503, "2021-07-23")
            .unwrap()
            .with_metadata(HostMetadata {
                host_city: "Tokyo".to_string(),
                country: "Japan".to_string(),
                event_type: "Summer".to_string(),
                year: 2021,
                attendance: None,
                medal_count: Some(339),
            });
        let catalog = Catalog::from_records(vec![record], CatalogSource::Builtin);
        let view = render(&catalog, Selection::None);

        let lines = &view.cards[0].detail_lines;
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| !l.starts_with("Attendance")));
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(9_500_000), "9,500,000");
        assert_eq!(group_thousands(100), "100");
    }

    #[test]
    fn test_render_is_deterministic() {
        let catalog = create_test_catalog();
        let a = serde_json::to_value(render(&catalog, Selection::Selected(1))).unwrap();
        let b = serde_json::to_value(render(&catalog, Selection::Selected(1))).unwrap();
        assert_eq!(a, b);
    }
}
