use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Single-date selection. Selecting a date replaces whatever was selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    selected_date: Option<NaiveDate>,
}

impl SelectionState {
    pub fn new(initial: Option<NaiveDate>) -> Self {
        Self {
            selected_date: initial,
        }
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.selected_date == Some(date)
    }

    /// Returns the date that was selected before.
    pub fn select(&mut self, date: NaiveDate) -> Option<NaiveDate> {
        self.selected_date.replace(date)
    }
}

/// What the renderer has to restyle after a tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionChange {
    /// Cell rendered as selected in the displayed grid before the tap, if any.
    pub previous: Option<NaiveDate>,
    pub current: NaiveDate,
}

/// Transition hint recorded by the latest navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationDirection {
    #[default]
    None,
    Backward,
    Forward,
}
