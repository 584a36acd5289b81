//! Embedded dashboard pages.
//!
//! Each page is a self-contained HTML document with a small script that
//! fetches the view model, renders cards and markers, and posts clicks back.
//! All styling decisions come from the server; the script only applies them.
//! Leaflet is loaded from a CDN and is the only client-side dependency.

pub mod basic;
pub mod detailed;

pub use basic::BASIC_PAGE;
pub use detailed::DETAILED_PAGE;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_target_their_own_api() {
        assert!(BASIC_PAGE.contains("\"/v1/dashboards/basic\""));
        assert!(DETAILED_PAGE.contains("\"/v1/dashboards/detailed\""));
    }

    #[test]
    fn test_pages_embed_the_map_widget() {
        for page in [BASIC_PAGE, DETAILED_PAGE] {
            assert!(page.contains("leaflet"));
            assert!(page.contains("id=\"map\""));
            assert!(page.contains("id=\"list\""));
        }
    }

    #[test]
    fn test_pages_apply_smooth_scrolling() {
        for page in [BASIC_PAGE, DETAILED_PAGE] {
            assert!(page.contains("scrollIntoView"));
            assert!(page.contains("smooth"));
        }
    }
}
