//! Application state for the HTTP server.

use std::sync::Arc;

use crate::api::DashboardKind;
use crate::catalog::Catalog;
use crate::services::selection::SelectionStore;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Immutable location table for the basic dashboard
    pub basic: Arc<Catalog>,
    /// Immutable location table for the detailed dashboard
    pub detailed: Arc<Catalog>,
    /// Mutable selection slots, one per dashboard
    pub selections: SelectionStore,
}

impl AppState {
    /// Create a new application state with the given catalogs.
    pub fn new(basic: Catalog, detailed: Catalog) -> Self {
        Self {
            basic: Arc::new(basic),
            detailed: Arc::new(detailed),
            selections: SelectionStore::new(),
        }
    }

    /// Catalog backing a dashboard kind.
    pub fn catalog(&self, kind: DashboardKind) -> &Catalog {
        match kind {
            DashboardKind::Basic => &self.basic,
            DashboardKind::Detailed => &self.detailed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_routes_catalogs_by_kind() {
        let state = AppState::new(Catalog::builtin_basic(), Catalog::builtin_detailed());
        assert!(state
            .catalog(DashboardKind::Basic)
            .records()
            .iter()
            .all(|r| r.metadata.is_none()));
        assert!(state
            .catalog(DashboardKind::Detailed)
            .records()
            .iter()
            .all(|r| r.metadata.is_some()));
    }
}
