use crate::domain::{CellOrigin, DAYS_PER_WEEK, DayCell, MonthGrid, MonthKey, weekday_index};
use chrono::{Datelike, Duration, Weekday};
use log::debug;

/// Lays a month out on a seven-column grid.
///
/// Leading cells are borrowed from the tail of the previous month, trailing
/// cells from the head of the next one, and the grid is only as tall as it
/// needs to be to hold every day of the month.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalendarMonthModel;

impl CalendarMonthModel {
    pub fn new() -> Self {
        Self
    }

    pub fn compute_grid(&self, month: MonthKey, first_day_of_week: Weekday) -> MonthGrid {
        let first = month.first_day();
        let days_in_month = month.days_in_month() as usize;
        let leading = weekday_index(first.weekday(), first_day_of_week) as usize;
        let rows = (leading + days_in_month).div_ceil(DAYS_PER_WEEK);
        let total = rows * DAYS_PER_WEEK;

        let cells = (0..total)
            .map(|i| {
                let date = first + Duration::days(i as i64 - leading as i64);
                let origin = if i < leading {
                    CellOrigin::Previous
                } else if i < leading + days_in_month {
                    CellOrigin::Current
                } else {
                    CellOrigin::Next
                };
                DayCell::new(date, origin, first_day_of_week)
            })
            .collect();

        debug!(
            "computed grid for {}: {} rows, {} leading, {} trailing",
            month,
            rows,
            leading,
            total - leading - days_in_month
        );

        MonthGrid {
            month,
            first_day_of_week,
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const ALL_WEEKDAYS: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn grid(year: i32, month: u32, first: Weekday) -> MonthGrid {
        CalendarMonthModel::new().compute_grid(MonthKey::new(year, month).unwrap(), first)
    }

    fn days_with(grid: &MonthGrid, origin: CellOrigin) -> Vec<u32> {
        grid.cells
            .iter()
            .filter(|c| c.origin == origin)
            .map(|c| c.day())
            .collect()
    }

    #[test]
    fn january_2024_sunday_first() {
        let g = grid(2024, 0, Weekday::Sun);

        assert_eq!(g.rows(), 5);
        assert_eq!(g.cells.len(), 35);
        assert_eq!(days_with(&g, CellOrigin::Previous), vec![31]);
        assert_eq!(g.cells[0].date, date(2023, 12, 31));
        assert_eq!(days_with(&g, CellOrigin::Current), (1..=31).collect::<Vec<_>>());
        assert_eq!(days_with(&g, CellOrigin::Next), vec![1, 2, 3]);
        assert_eq!(g.cells[34].date, date(2024, 2, 3));

        let first_current = g.current_cells().next().unwrap();
        assert_eq!(first_current.weekday_index, 1);
    }

    #[test]
    fn six_rows_when_month_spills_over() {
        // March 2024 starts on a Friday: 5 leading + 31 days = 36 cells.
        let g = grid(2024, 2, Weekday::Sun);
        assert_eq!(g.rows(), 6);
        assert_eq!(days_with(&g, CellOrigin::Previous), vec![25, 26, 27, 28, 29]);
        assert_eq!(days_with(&g, CellOrigin::Next), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn february_can_fit_in_four_weeks_worth_of_days() {
        // Feb 2015 starts on a Sunday and has 28 days: no leading cells, and the
        // grid rounds up to exactly four full rows.
        let g = grid(2015, 1, Weekday::Sun);
        assert!(days_with(&g, CellOrigin::Previous).is_empty());
        assert!(days_with(&g, CellOrigin::Next).is_empty());
        assert_eq!(g.rows(), 4);
    }

    #[test]
    fn leap_february_borrows_from_january() {
        let g = grid(2024, 1, Weekday::Sun);
        // Feb 1 2024 is a Thursday.
        assert_eq!(days_with(&g, CellOrigin::Previous), vec![28, 29, 30, 31]);
        assert_eq!(days_with(&g, CellOrigin::Current).len(), 29);

        let g = grid(2024, 2, Weekday::Sun);
        assert_eq!(g.cells[4].date, date(2024, 2, 29));
    }

    #[test]
    fn january_borrows_from_previous_december() {
        let g = grid(2023, 0, Weekday::Mon);
        // Jan 1 2023 is a Sunday: six leading cells in a Monday-first week.
        assert_eq!(days_with(&g, CellOrigin::Previous), vec![26, 27, 28, 29, 30, 31]);
        assert!(g.cells.iter().take(6).all(|c| c.date.year() == 2022));
    }

    #[test]
    fn december_spills_into_next_january() {
        let g = grid(2023, 11, Weekday::Sun);
        let next: Vec<_> = g
            .cells
            .iter()
            .filter(|c| c.origin == CellOrigin::Next)
            .collect();
        assert!(!next.is_empty());
        assert!(next.iter().all(|c| c.date.year() == 2024 && c.date.month() == 1));
    }

    #[test]
    fn structural_invariants_hold_for_every_month_and_week_start() {
        let model = CalendarMonthModel::new();
        for year in [1900, 1999, 2000, 2023, 2024, 2100] {
            for month in 0..12 {
                let key = MonthKey::new(year, month).unwrap();
                for first in ALL_WEEKDAYS {
                    let g = model.compute_grid(key, first);

                    // Whole weeks, and never an empty trailing row.
                    assert_eq!(g.cells.len() % 7, 0);
                    assert!((4..=6).contains(&g.rows()));
                    assert!(g.row(g.last_row()).iter().any(|c| c.origin == CellOrigin::Current));

                    // Contiguous current run sized to the month.
                    let current = days_with(&g, CellOrigin::Current);
                    assert_eq!(current.len() as u32, key.days_in_month());
                    assert_eq!(current, (1..=key.days_in_month()).collect::<Vec<_>>());

                    // First column is the configured week start.
                    assert_eq!(g.cells[0].date.weekday(), first);
                    assert!(g.cells.iter().enumerate().all(|(i, c)| c.weekday_index as usize == i % 7));

                    // Leading days are the previous month's tail, increasing.
                    let prev = days_with(&g, CellOrigin::Previous);
                    let prev_len = key.previous().unwrap().days_in_month();
                    let expected: Vec<u32> = ((prev_len + 1 - prev.len() as u32)..=prev_len).collect();
                    assert_eq!(prev, expected);

                    // Trailing days count up from 1.
                    let next = days_with(&g, CellOrigin::Next);
                    assert_eq!(next, (1..=next.len() as u32).collect::<Vec<_>>());

                    // Origins appear in order.
                    let origins: Vec<_> = g.cells.iter().map(|c| c.origin).collect();
                    let mut sorted = origins.clone();
                    sorted.sort_by_key(|o| match o {
                        CellOrigin::Previous => 0,
                        CellOrigin::Current => 1,
                        CellOrigin::Next => 2,
                    });
                    assert_eq!(origins, sorted);
                }
            }
        }
    }

    #[test]
    fn recomputing_is_deterministic() {
        let model = CalendarMonthModel::new();
        let key = MonthKey::new(2024, 6).unwrap();
        assert_eq!(
            model.compute_grid(key, Weekday::Wed),
            model.compute_grid(key, Weekday::Wed)
        );
    }

    #[test]
    fn fresh_cells_carry_no_decoration() {
        let g = grid(2024, 0, Weekday::Sun);
        assert!(g.cells.iter().all(|c| !c.is_today && !c.is_selected && !c.is_weekend));
    }
}
