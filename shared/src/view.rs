//! Dashboard navigation state

use serde::{Deserialize, Serialize};

use crate::models::{FarmSnapshot, FieldRecord};

/// Which screen is shown, and the field it is about
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(tag = "page", content = "selected_field", rename_all = "kebab-case")]
pub enum ViewState {
    #[default]
    Dashboard,
    FieldDetail(FieldRecord),
}

impl ViewState {
    /// The field to show in the detail view.
    ///
    /// The record captured at selection time may be stale after a refresh,
    /// so the field is looked up again by `field_id` in the latest snapshot.
    /// The captured copy is used only when the field is no longer reported.
    pub fn resolve_field<'a>(&'a self, snapshot: Option<&'a FarmSnapshot>) -> Option<&'a FieldRecord> {
        match self {
            ViewState::Dashboard => None,
            ViewState::FieldDetail(selected) => snapshot
                .and_then(|s| s.field(&selected.field_id))
                .or(Some(selected)),
        }
    }
}

/// Two-state navigation controller; every transition is total
#[derive(Debug, Clone, Default)]
pub struct ViewController {
    state: ViewState,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn select_field(&mut self, field: FieldRecord) -> &ViewState {
        self.state = ViewState::FieldDetail(field);
        &self.state
    }

    pub fn go_back(&mut self) -> &ViewState {
        self.state = ViewState::Dashboard;
        &self.state
    }
}
