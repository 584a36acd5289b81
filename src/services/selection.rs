//! Selection state shared between the list and the map.
//!
//! Each dashboard owns exactly one selection slot. Slots start out empty and
//! move to a selected row on the first accepted click; there is no deselect
//! transition. Clicks from the list and from the map are resolved into the
//! same state, so the row index stays the single shared key between the two
//! views.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::api::DashboardKind;

/// Currently highlighted row, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// No row highlighted; the state before the first click.
    #[default]
    None,
    /// The row at this index is highlighted in both views.
    Selected(usize),
}

impl Selection {
    pub fn index(&self) -> Option<usize> {
        match self {
            Selection::None => None,
            Selection::Selected(i) => Some(*i),
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        matches!(self, Selection::Selected(i) if *i == index)
    }

    /// Wire encoding: `-1` when nothing is selected.
    pub fn to_wire(&self) -> i64 {
        match self {
            Selection::None => -1,
            Selection::Selected(i) => *i as i64,
        }
    }

    /// Decode the wire encoding; any negative value means no selection.
    pub fn from_wire(raw: i64) -> Self {
        usize::try_from(raw)
            .map(Selection::Selected)
            .unwrap_or(Selection::None)
    }
}

/// Surface a click came from, as written on the wire.
///
/// Unknown origins deserialize to [`ClickOrigin::Unknown`] instead of
/// failing, so a newer page script cannot break an older server; such
/// clicks are simply ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClickOrigin {
    List,
    Marker,
    #[serde(other)]
    Unknown,
}

/// A click resolved to a concrete interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickEvent {
    /// A list card was clicked.
    ListClick(usize),
    /// A map marker was clicked.
    MarkerClick(usize),
}

impl ClickEvent {
    /// Resolve a wire payload into an event; `None` for unknown origins.
    pub fn resolve(origin: ClickOrigin, index: usize) -> Option<ClickEvent> {
        match origin {
            ClickOrigin::List => Some(ClickEvent::ListClick(index)),
            ClickOrigin::Marker => Some(ClickEvent::MarkerClick(index)),
            ClickOrigin::Unknown => None,
        }
    }

    /// Row index carried by the event. Both origins select the same way;
    /// downstream state never depends on which view was clicked.
    pub fn index(&self) -> usize {
        match self {
            ClickEvent::ListClick(i) | ClickEvent::MarkerClick(i) => *i,
        }
    }
}

/// Result of applying a click to a selection slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyOutcome {
    /// Selection after the call.
    pub selection: Selection,
    /// Whether the click was accepted (an in-range index).
    pub applied: bool,
    /// Whether the stored selection actually changed. Re-selecting the
    /// current row is accepted but changes nothing.
    pub changed: bool,
}

/// In-memory selection state, one slot per dashboard.
///
/// Cheap to clone; all clones share the same slots. Each update is a single
/// write under the lock, so concurrent clicks serialize per slot and the
/// last one wins.
#[derive(Clone)]
pub struct SelectionStore {
    slots: Arc<RwLock<HashMap<DashboardKind, Selection>>>,
}

impl SelectionStore {
    pub fn new() -> Self {
        let mut slots = HashMap::new();
        for kind in DashboardKind::ALL {
            slots.insert(kind, Selection::None);
        }
        Self {
            slots: Arc::new(RwLock::new(slots)),
        }
    }

    /// Current selection for a dashboard.
    pub fn get(&self, kind: DashboardKind) -> Selection {
        self.slots
            .read()
            .get(&kind)
            .copied()
            .unwrap_or(Selection::None)
    }

    /// Apply a resolved click against a table of `table_len` rows.
    ///
    /// Out-of-range indices leave the slot untouched and report
    /// `applied: false`; valid ones overwrite the slot, idempotently for
    /// repeats of the current row.
    pub fn apply(&self, kind: DashboardKind, event: ClickEvent, table_len: usize) -> ApplyOutcome {
        let index = event.index();
        let mut slots = self.slots.write();
        let slot = slots.entry(kind).or_insert(Selection::None);

        if index >= table_len {
            return ApplyOutcome {
                selection: *slot,
                applied: false,
                changed: false,
            };
        }

        let next = Selection::Selected(index);
        let changed = *slot != next;
        *slot = next;
        ApplyOutcome {
            selection: next,
            applied: true,
            changed,
        }
    }
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self::new()
    }
}
