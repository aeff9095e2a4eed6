use crate::domain::{CellOrigin, DayCell, MonthKey};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

pub const DAYS_PER_WEEK: usize = 7;

/// Row-major grid of day cells for one month, five or six weeks tall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    pub month: MonthKey,
    pub first_day_of_week: Weekday,
    pub cells: Vec<DayCell>,
}

impl MonthGrid {
    pub fn rows(&self) -> usize {
        self.cells.len() / DAYS_PER_WEEK
    }

    /// Index of the last populated row.
    pub fn last_row(&self) -> usize {
        self.rows().saturating_sub(1)
    }

    pub fn row(&self, index: usize) -> &[DayCell] {
        let start = index * DAYS_PER_WEEK;
        let end = (start + DAYS_PER_WEEK).min(self.cells.len());
        self.cells.get(start..end).unwrap_or(&[])
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    pub fn current_cells(&self) -> impl Iterator<Item = &DayCell> {
        self.cells
            .iter()
            .filter(|cell| cell.origin == CellOrigin::Current)
    }

    /// The selectable cell for `date`, if the date is in the displayed month.
    pub fn cell_for(&self, date: NaiveDate) -> Option<&DayCell> {
        self.current_cells().find(|cell| cell.date == date)
    }

    pub fn selected_cell(&self) -> Option<&DayCell> {
        self.cells.iter().find(|cell| cell.is_selected)
    }

    /// ISO week number of every row, taken from the row's Thursday.
    /// Purely cosmetic; nothing about the grid depends on it.
    pub fn week_numbers(&self) -> Vec<u32> {
        self.weeks()
            .map(|week| {
                week.iter()
                    .find(|cell| cell.date.weekday() == Weekday::Thu)
                    .map(|cell| cell.date.iso_week().week())
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Weekdays in column order.
    pub fn weekday_headers(&self) -> [Weekday; DAYS_PER_WEEK] {
        let mut headers = [self.first_day_of_week; DAYS_PER_WEEK];
        let mut day = self.first_day_of_week;
        for header in headers.iter_mut() {
            *header = day;
            day = day.succ();
        }
        headers
    }
}
