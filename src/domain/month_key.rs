use crate::domain::CalendarError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Identity of a displayed month. `month` is zero-based (0 = January).
///
/// Ordering is lexicographic on (year, month), which the derive gives us
/// from the field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMonthKey")]
pub struct MonthKey {
    year: i32,
    month: u32,
}

/// Unchecked wire form; deserialization goes through `MonthKey::new`.
#[derive(Deserialize)]
struct RawMonthKey {
    year: i32,
    month: u32,
}

impl TryFrom<RawMonthKey> for MonthKey {
    type Error = CalendarError;

    fn try_from(raw: RawMonthKey) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.month)
    }
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        if month > 11 || !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::InvalidMonthKey {
                year: year as i64,
                month: month as i64,
            });
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`.
    pub fn from_date(date: NaiveDate) -> Result<Self, CalendarError> {
        Self::new(date.year(), date.month0())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn name(&self) -> &'static str {
        MONTH_NAMES[self.month as usize]
    }

    pub fn first_day(&self) -> NaiveDate {
        // Year and month were range-checked on construction.
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1).unwrap_or_default()
    }

    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, day)
    }

    pub fn days_in_month(&self) -> u32 {
        match self.month {
            0 | 2 | 4 | 6 | 7 | 9 | 11 => 31,
            3 | 5 | 8 | 10 => 30,
            _ if is_leap_year(self.year) => 29,
            _ => 28,
        }
    }

    /// Shift by `delta` months, rolling the year in both directions.
    pub fn add_months(&self, delta: i32) -> Result<Self, CalendarError> {
        let total = self.year as i64 * 12 + self.month as i64 + delta as i64;
        let year = total.div_euclid(12);
        let month = total.rem_euclid(12);
        if year < MIN_YEAR as i64 || year > MAX_YEAR as i64 {
            return Err(CalendarError::InvalidMonthKey { year, month });
        }
        Self::new(year as i32, month as u32)
    }

    /// Month preceding this one. The grid borrows its leading cells from here.
    pub fn previous(&self) -> Result<Self, CalendarError> {
        self.add_months(-1)
    }

    pub fn next(&self) -> Result<Self, CalendarError> {
        self.add_months(1)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.year)
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
