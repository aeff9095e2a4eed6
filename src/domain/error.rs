use crate::domain::CellOrigin;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// A day outside the displayed month was handed to `select_day`.
    /// Renderers never wire taps to these cells, so this is a wiring bug.
    #[error("cannot select {date}: cell belongs to the {origin} month")]
    InvalidSelection { date: NaiveDate, origin: CellOrigin },

    #[error("invalid month key: year {year}, month index {month}")]
    InvalidMonthKey { year: i64, month: i64 },
}
