use super::theme::{ColorPair, Theme};
use crate::domain::{NavigationDirection, SelectionChange};
use crate::infrastructure::{MonthRenderer, MonthView};
use anyhow::Result;
use chrono::Weekday;
use std::io::Write;

/// Prints a month as a block of text, one week per line.
pub struct TextRenderer<W: Write> {
    out: W,
    theme: Theme,
    colored: bool,
    show_week_numbers: bool,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, theme: Theme) -> Self {
        Self {
            out,
            theme,
            colored: true,
            show_week_numbers: false,
        }
    }

    pub fn plain(out: W) -> Self {
        Self {
            out,
            theme: Theme::minimal(),
            colored: false,
            show_week_numbers: false,
        }
    }

    pub fn with_week_numbers(mut self, show: bool) -> Self {
        self.show_week_numbers = show;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, colors: &ColorPair, text: &str, bold: bool) -> String {
        match (self.colored, bold) {
            (false, _) => text.to_string(),
            (true, true) => colors.colorize_bold(text),
            (true, false) => colors.colorize(text),
        }
    }
}

pub fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

pub fn direction_arrow(direction: NavigationDirection) -> &'static str {
    match direction {
        NavigationDirection::None => "",
        NavigationDirection::Backward => "◀ ",
        NavigationDirection::Forward => "▶ ",
    }
}

impl<W: Write> MonthRenderer for TextRenderer<W> {
    fn render_month(&mut self, view: &MonthView) -> Result<()> {
        let width = if self.show_week_numbers { 24 } else { 20 };
        let title = format!("{}{}", direction_arrow(view.direction), view.title);
        let title = self.paint(&self.theme.colors.title, &format!("{:^width$}", title), true);
        writeln!(self.out, "{}", title)?;

        let mut header = String::new();
        if self.show_week_numbers {
            header.push_str("Wk ");
        }
        let labels: Vec<&str> = view
            .grid
            .weekday_headers()
            .iter()
            .map(|d| weekday_label(*d))
            .collect();
        header.push_str(&labels.join(" "));
        let header = self.paint(&self.theme.colors.header, &header, false);
        writeln!(self.out, "{}", header)?;

        for (row, week) in view.grid.weeks().enumerate() {
            let mut line = String::new();
            if self.show_week_numbers {
                let number = format!("{:>2} ", view.week_numbers.get(row).copied().unwrap_or(0));
                line.push_str(&self.paint(&self.theme.colors.week_number, &number, false));
            }
            let days: Vec<String> = week
                .iter()
                .map(|cell| {
                    let text = format!("{:>2}", cell.day());
                    let bold = cell.is_today || cell.is_selected;
                    self.paint(self.theme.cell_colors(cell), &text, bold)
                })
                .collect();
            line.push_str(&days.join(" "));
            writeln!(self.out, "{}", line)?;
        }

        Ok(())
    }

    fn render_selection(&mut self, change: &SelectionChange) -> Result<()> {
        writeln!(self.out, "Selected {}", change.current)?;
        Ok(())
    }
}
