use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which month a grid cell's date belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellOrigin {
    Previous,
    Current,
    Next,
}

impl fmt::Display for CellOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellOrigin::Previous => "previous",
            CellOrigin::Current => "current",
            CellOrigin::Next => "next",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub origin: CellOrigin,
    /// Column of the cell, counted from the configured first day of week.
    pub weekday_index: u32,
    pub is_today: bool,
    pub is_selected: bool,
    pub is_weekend: bool,
}

impl DayCell {
    pub fn new(date: NaiveDate, origin: CellOrigin, first_day_of_week: Weekday) -> Self {
        Self {
            date,
            origin,
            weekday_index: weekday_index(date.weekday(), first_day_of_week),
            is_today: false,
            is_selected: false,
            is_weekend: false,
        }
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Only cells of the displayed month accept taps.
    pub fn is_selectable(&self) -> bool {
        self.origin == CellOrigin::Current
    }
}

/// Position of `weekday` in a week that starts on `first_day_of_week`.
pub fn weekday_index(weekday: Weekday, first_day_of_week: Weekday) -> u32 {
    (weekday.num_days_from_monday() + 7 - first_day_of_week.num_days_from_monday()) % 7
}
