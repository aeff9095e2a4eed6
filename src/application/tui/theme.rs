use crate::domain::DayCell;
use chrono::{Datelike, Weekday};
use crossterm::style::{Color as CrosstermColor, Stylize};
use ratatui::style::{Color as RatatuiColor, Modifier, Style as RatatuiStyle};

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Day states
    pub day: ColorPair,
    pub selected: ColorPair,
    pub today: ColorPair,
    pub borrowed: ColorPair,
    pub cursor: ColorPair,

    // Weekend text
    pub sunday: ColorPair,
    pub saturday: ColorPair,

    // UI elements
    pub title: ColorPair,
    pub header: ColorPair,
    pub week_number: ColorPair,

    // Text
    pub help_text: ColorPair,
    pub error_text: ColorPair,
}

#[derive(Debug, Clone)]
pub struct ColorPair {
    pub fg: CrosstermColor,
    pub bg: Option<CrosstermColor>,
}

impl ColorPair {
    pub fn new(fg: CrosstermColor) -> Self {
        Self { fg, bg: None }
    }

    pub fn with_bg(fg: CrosstermColor, bg: CrosstermColor) -> Self {
        Self { fg, bg: Some(bg) }
    }

    /// Convert to ratatui style
    pub fn to_ratatui(&self) -> RatatuiStyle {
        let mut style = RatatuiStyle::default().fg(Self::crossterm_to_ratatui(self.fg));
        if let Some(bg) = self.bg {
            style = style.bg(Self::crossterm_to_ratatui(bg));
        }
        style
    }

    /// Convert crossterm color to ratatui color
    pub fn crossterm_to_ratatui(color: CrosstermColor) -> RatatuiColor {
        match color {
            CrosstermColor::Black => RatatuiColor::Black,
            CrosstermColor::DarkRed => RatatuiColor::Red,
            CrosstermColor::DarkGreen => RatatuiColor::Green,
            CrosstermColor::DarkYellow => RatatuiColor::Yellow,
            CrosstermColor::DarkBlue => RatatuiColor::Blue,
            CrosstermColor::DarkMagenta => RatatuiColor::Magenta,
            CrosstermColor::DarkCyan => RatatuiColor::Cyan,
            CrosstermColor::Grey => RatatuiColor::Gray,
            CrosstermColor::DarkGrey => RatatuiColor::DarkGray,
            CrosstermColor::Red => RatatuiColor::LightRed,
            CrosstermColor::Green => RatatuiColor::LightGreen,
            CrosstermColor::Yellow => RatatuiColor::LightYellow,
            CrosstermColor::Blue => RatatuiColor::LightBlue,
            CrosstermColor::Magenta => RatatuiColor::LightMagenta,
            CrosstermColor::Cyan => RatatuiColor::LightCyan,
            CrosstermColor::White => RatatuiColor::White,
            CrosstermColor::Rgb { r, g, b } => RatatuiColor::Rgb(r, g, b),
            CrosstermColor::AnsiValue(v) => RatatuiColor::Indexed(v),
            _ => RatatuiColor::White,
        }
    }

    /// Apply color to text for terminal output
    pub fn colorize(&self, text: &str) -> String {
        let mut styled = text.with(self.fg);
        if let Some(bg) = self.bg {
            styled = styled.on(bg);
        }
        format!("{}", styled)
    }

    /// Apply color with bold
    pub fn colorize_bold(&self, text: &str) -> String {
        let mut styled = text.with(self.fg).bold();
        if let Some(bg) = self.bg {
            styled = styled.on(bg);
        }
        format!("{}", styled)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "Dark".to_string(),
            colors: ThemeColors {
                day: ColorPair::new(CrosstermColor::White),
                selected: ColorPair::with_bg(CrosstermColor::White, CrosstermColor::DarkBlue),
                today: ColorPair::with_bg(CrosstermColor::Black, CrosstermColor::Yellow),
                borrowed: ColorPair::new(CrosstermColor::Rgb { r: 83, g: 83, b: 83 }),
                cursor: ColorPair::with_bg(CrosstermColor::White, CrosstermColor::Rgb { r: 51, g: 51, b: 51 }),

                sunday: ColorPair::new(CrosstermColor::Rgb { r: 215, g: 60, b: 16 }),
                saturday: ColorPair::new(CrosstermColor::Rgb { r: 0, g: 158, b: 247 }),

                title: ColorPair::new(CrosstermColor::White),
                header: ColorPair::new(CrosstermColor::DarkCyan),
                week_number: ColorPair::new(CrosstermColor::DarkGrey),

                help_text: ColorPair::new(CrosstermColor::DarkCyan),
                error_text: ColorPair::new(CrosstermColor::Red),
            },
        }
    }

    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            colors: ThemeColors {
                day: ColorPair::new(CrosstermColor::Black),
                selected: ColorPair::with_bg(CrosstermColor::White, CrosstermColor::DarkBlue),
                today: ColorPair::with_bg(CrosstermColor::Black, CrosstermColor::Yellow),
                borrowed: ColorPair::new(CrosstermColor::Grey),
                cursor: ColorPair::with_bg(CrosstermColor::Black, CrosstermColor::Rgb { r: 225, g: 225, b: 225 }),

                sunday: ColorPair::new(CrosstermColor::DarkRed),
                saturday: ColorPair::new(CrosstermColor::DarkBlue),

                title: ColorPair::new(CrosstermColor::Black),
                header: ColorPair::new(CrosstermColor::DarkBlue),
                week_number: ColorPair::new(CrosstermColor::Grey),

                help_text: ColorPair::new(CrosstermColor::DarkBlue),
                error_text: ColorPair::new(CrosstermColor::DarkRed),
            },
        }
    }

    pub fn minimal() -> Self {
        Self {
            name: "Minimal".to_string(),
            colors: ThemeColors {
                day: ColorPair::new(CrosstermColor::White),
                selected: ColorPair::with_bg(CrosstermColor::Black, CrosstermColor::White),
                today: ColorPair::new(CrosstermColor::White),
                borrowed: ColorPair::new(CrosstermColor::DarkGrey),
                cursor: ColorPair::with_bg(CrosstermColor::White, CrosstermColor::Rgb { r: 28, g: 28, b: 28 }),

                sunday: ColorPair::new(CrosstermColor::White),
                saturday: ColorPair::new(CrosstermColor::White),

                title: ColorPair::new(CrosstermColor::White),
                header: ColorPair::new(CrosstermColor::White),
                week_number: ColorPair::new(CrosstermColor::DarkGrey),

                help_text: ColorPair::new(CrosstermColor::Grey),
                error_text: ColorPair::new(CrosstermColor::White),
            },
        }
    }

    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "minimal" => Self::minimal(),
            _ => Self::dark(), // default
        }
    }

    pub fn available_themes() -> Vec<String> {
        vec!["dark".to_string(), "light".to_string(), "minimal".to_string()]
    }

    /// Colours for a decorated cell. Selected wins over today when both apply.
    pub fn cell_colors(&self, cell: &DayCell) -> &ColorPair {
        if !cell.is_selectable() {
            &self.colors.borrowed
        } else if cell.is_selected {
            &self.colors.selected
        } else if cell.is_today {
            &self.colors.today
        } else if cell.is_weekend {
            match cell.date.weekday() {
                Weekday::Sun => &self.colors.sunday,
                _ => &self.colors.saturday,
            }
        } else {
            &self.colors.day
        }
    }

    pub fn cell_style(&self, cell: &DayCell) -> RatatuiStyle {
        let style = self.cell_colors(cell).to_ratatui();
        if cell.is_today || cell.is_selected {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}
