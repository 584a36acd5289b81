use serde::{Deserialize, Serialize};

/// One map marker, fully styled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerView {
    pub index: usize,
    pub latitude: f64,
    pub longitude: f64,
    /// Radius in pixels
    pub size: u32,
    /// CSS color
    pub color: String,
    pub opacity: f64,
    /// Tooltip markup shown on hover
    pub hover: String,
    pub selected: bool,
}

/// One list card, fully styled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardView {
    pub index: usize,
    /// Heading text, "{label} - {date}"
    pub title: String,
    /// Extra lines below the heading (detailed dashboard only)
    pub detail_lines: Vec<String>,
    /// CSS border
    pub border: String,
    pub selected: bool,
}

/// Map camera directive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CameraView {
    pub center_latitude: f64,
    pub center_longitude: f64,
    pub zoom: f64,
}

/// Complete render state for one dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardViewModel {
    pub markers: Vec<MarkerView>,
    pub cards: Vec<CardView>,
    pub camera: CameraView,
    /// Row the list should scroll to, present when a selection exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_to: Option<usize>,
    /// Wire encoding of the selection, `-1` when nothing is selected
    pub selected_index: i64,
}

/// Route function name constants
pub const GET_DASHBOARD_VIEW: &str = "get_dashboard_view";
pub const POST_DASHBOARD_CLICK: &str = "post_dashboard_click";
pub const LIST_DASHBOARD_LOCATIONS: &str = "list_dashboard_locations";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_view_clone() {
        let marker = MarkerView {
            index: 0,
            latitude: 48.8566,
            longitude: 2.3522,
            size: 15,
            color: "#d62728".to_string(),
            opacity: 0.8,
            hover: "Paris".to_string(),
            selected: true,
        };
        let cloned = marker.clone();
        assert_eq!(cloned.size, 15);
        assert!(cloned.selected);
    }

    #[test]
    fn test_card_view_debug() {
        let card = CardView {
            index: 2,
            title: "Tokyo, Japan (Summer 2020) - 2021-07-23".to_string(),
            detail_lines: vec![],
            border: "1px solid #ddd".to_string(),
            selected: false,
        };
        let debug_str = format!("{:?}", card);
        assert!(debug_str.contains("CardView"));
    }

    #[test]
    fn test_view_model_serializes_without_scroll_target() {
        let view = DashboardViewModel {
            markers: vec![],
            cards: vec![],
            camera: CameraView {
                center_latitude: 0.0,
                center_longitude: 0.0,
                zoom: 1.0,
            },
            scroll_to: None,
            selected_index: -1,
        };
        let json = serde_json::to_string(&view).unwrap();
        assert!(!json.contains("scroll_to"));
        assert!(json.contains("\"selected_index\":-1"));
    }

    #[test]
    fn test_view_model_round_trip() {
        let view = DashboardViewModel {
            markers: vec![],
            cards: vec![],
            camera: CameraView {
                center_latitude: 48.8566,
                center_longitude: 2.3522,
                zoom: 8.0,
            },
            scroll_to: Some(0),
            selected_index: 0,
        };
        let json = serde_json::to_string(&view).unwrap();
        let back: DashboardViewModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back.scroll_to, Some(0));
        assert_eq!(back.camera.zoom, 8.0);
    }

    #[test]
    fn test_const_values() {
        assert_eq!(GET_DASHBOARD_VIEW, "get_dashboard_view");
        assert_eq!(POST_DASHBOARD_CLICK, "post_dashboard_click");
        assert_eq!(LIST_DASHBOARD_LOCATIONS, "list_dashboard_locations");
    }
}
