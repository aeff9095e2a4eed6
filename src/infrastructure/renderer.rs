use crate::domain::{MonthGrid, NavigationDirection, SelectionChange};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Render-ready description of the displayed month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthView {
    pub title: String,
    pub grid: MonthGrid,
    pub week_numbers: Vec<u32>,
    /// Which slide transition to play. `None` means no animation.
    pub direction: NavigationDirection,
}

impl MonthView {
    pub fn new(grid: MonthGrid, direction: NavigationDirection) -> Self {
        Self {
            title: grid.month.to_string(),
            week_numbers: grid.week_numbers(),
            grid,
            direction,
        }
    }
}

/// Implemented by the host toolkit. The controller hands it decorated grids
/// and selection changes; pixels, colours and animation are its business.
pub trait MonthRenderer {
    fn render_month(&mut self, view: &MonthView) -> Result<()>;

    /// Restyle the cells affected by a tap. Cells are identified by date.
    fn render_selection(&mut self, _change: &SelectionChange) -> Result<()> {
        Ok(())
    }
}

/// Writes each month view as a JSON document on its own line.
pub struct JsonRenderer<W: Write> {
    out: W,
    pretty: bool,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, pretty: false }
    }

    pub fn pretty(out: W) -> Self {
        Self { out, pretty: true }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> MonthRenderer for JsonRenderer<W> {
    fn render_month(&mut self, view: &MonthView) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.out, view)
        } else {
            serde_json::to_writer(&mut self.out, view)
        }
        .context("Failed to serialize month view to JSON")?;
        writeln!(self.out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CalendarMonthModel, MonthKey};
    use chrono::Weekday;

    #[test]
    fn view_carries_title_and_week_numbers() {
        let grid = CalendarMonthModel::new().compute_grid(MonthKey::new(2024, 0).unwrap(), Weekday::Mon);
        let view = MonthView::new(grid, NavigationDirection::Forward);

        assert_eq!(view.title, "January 2024");
        assert_eq!(view.week_numbers.len(), view.grid.rows());
    }

    #[test]
    fn json_renderer_emits_parseable_views() {
        let grid = CalendarMonthModel::new().compute_grid(MonthKey::new(2024, 0).unwrap(), Weekday::Sun);
        let view = MonthView::new(grid, NavigationDirection::None);

        let mut renderer = JsonRenderer::new(Vec::new());
        renderer.render_month(&view).unwrap();
        let output = String::from_utf8(renderer.into_inner()).unwrap();

        let value: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(value["title"], "January 2024");
        assert_eq!(value["direction"], "none");
        assert_eq!(value["grid"]["cells"].as_array().unwrap().len(), 35);
        assert_eq!(value["grid"]["cells"][0]["origin"], "previous");
        assert_eq!(value["grid"]["cells"][0]["date"], "2023-12-31");

        let back: MonthView = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(back, view);
    }
}
