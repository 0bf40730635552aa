//! Projects the visible POI subset into selectable list rows, independent
//! of the map. Rows are pure derivations; the projector holds no state.
//!
//! Row actions are resolved through an explicit name table rather than any
//! ambient lookup, so hosts can wire buttons/keys to actions by string name
//! and get a typed action back.

use crate::model::{category_icon, Poi};

/// Actions available on every list row. `Go` and `Info` resolve through
/// marker lookups (center/zoom and popup-open); `Edit` and `Delete` go to
/// the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Go,
    Info,
    Edit,
    Delete,
}

/// Dispatch table: action name → action. The names are the stable contract
/// hosts key their buttons on.
pub const ACTIONS: [(&str, RowAction); 4] = [
    ("go", RowAction::Go),
    ("info", RowAction::Info),
    ("edit", RowAction::Edit),
    ("delete", RowAction::Delete),
];

impl RowAction {
    pub fn from_name(name: &str) -> Option<Self> {
        ACTIONS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, action)| *action)
    }

    pub fn name(&self) -> &'static str {
        match self {
            RowAction::Go => "go",
            RowAction::Info => "info",
            RowAction::Edit => "edit",
            RowAction::Delete => "delete",
        }
    }
}

/// One selectable row in the POI list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListRow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: &'static str,
    pub actions: [RowAction; 4],
}

/// Derives list rows from the visible POI subset, preserving order.
pub fn project(visible: &[&Poi]) -> Vec<ListRow> {
    visible
        .iter()
        .map(|poi| ListRow {
            id: poi.id.clone(),
            title: poi.title.clone(),
            description: poi.description.clone(),
            icon: category_icon(&poi.category),
            actions: [
                RowAction::Go,
                RowAction::Info,
                RowAction::Edit,
                RowAction::Delete,
            ],
        })
        .collect()
}
