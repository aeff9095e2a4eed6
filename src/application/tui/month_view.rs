use super::text::{direction_arrow, weekday_label};
use super::theme::Theme;
use crate::application::MonthViewController;
use crate::domain::{MonthGrid, NavigationDirection};
use chrono::{Datelike, Duration, NaiveDate};
use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, poll};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::tty::IsTty;
use log::debug;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};
use std::io::{self, Stdout, stdout};

/// Keyboard-driven state of the interactive picker, independent of the terminal.
#[derive(Debug, Clone)]
pub struct PickerState {
    /// Day under the cursor; always inside the displayed month
    pub cursor: NaiveDate,
    /// Transition of the most recent navigation, shown in the title
    pub transition: NavigationDirection,
    pub should_exit: bool,
    pub show_help: bool,
    /// Last navigation or selection error, shown under the grid
    pub error: Option<String>,
}

impl PickerState {
    pub fn new(controller: &MonthViewController) -> Self {
        let month = controller.current_month();
        let today = controller.today();
        let cursor = controller
            .selected_date()
            .filter(|d| month.contains(*d))
            .or_else(|| Some(today).filter(|d| month.contains(*d)))
            .unwrap_or_else(|| month.first_day());

        Self {
            cursor,
            transition: NavigationDirection::None,
            should_exit: false,
            show_help: false,
            error: None,
        }
    }

    /// Handle keyboard input
    pub fn handle_key_event(&mut self, key: KeyEvent, controller: &mut MonthViewController) {
        self.error = None;

        match (key.code, key.modifiers) {
            // Exit
            (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => {
                self.should_exit = true;
            }

            // Ctrl+C and Ctrl+D
            (KeyCode::Char('c'), KeyModifiers::CONTROL)
            | (KeyCode::Char('d'), KeyModifiers::CONTROL) => {
                self.should_exit = true;
            }

            // Cursor movement, crossing into neighbouring months as needed
            (KeyCode::Left, _) | (KeyCode::Char('h'), _) => {
                self.move_cursor(Duration::days(-1), controller);
            }
            (KeyCode::Right, _) | (KeyCode::Char('l'), _) => {
                self.move_cursor(Duration::days(1), controller);
            }
            (KeyCode::Up, _) | (KeyCode::Char('k'), _) => {
                self.move_cursor(Duration::weeks(-1), controller);
            }
            (KeyCode::Down, _) | (KeyCode::Char('j'), _) => {
                self.move_cursor(Duration::weeks(1), controller);
            }

            // Month navigation
            (KeyCode::PageUp, _) | (KeyCode::Char('['), _) => {
                self.navigate(-1, controller);
            }
            (KeyCode::PageDown, _) | (KeyCode::Char(']'), _) => {
                self.navigate(1, controller);
            }

            // Jump to today
            (KeyCode::Char('t'), _) => match controller.jump_to_today() {
                Ok(view) => {
                    self.transition = view.direction;
                    self.cursor = controller.today();
                }
                Err(e) => self.error = Some(e.to_string()),
            },

            // Select the day under the cursor
            (KeyCode::Enter, _) | (KeyCode::Char(' '), _) => {
                if let Err(e) = controller.select_date(self.cursor) {
                    self.error = Some(e.to_string());
                }
            }

            // Toggle help
            (KeyCode::Char('?'), _) => {
                self.show_help = !self.show_help;
            }

            _ => {}
        }
    }

    fn move_cursor(&mut self, delta: Duration, controller: &mut MonthViewController) {
        let Some(target) = self.cursor.checked_add_signed(delta) else {
            return;
        };
        if !controller.current_month().contains(target) {
            match controller.go_to_date(target) {
                Ok(view) => self.transition = view.direction,
                Err(e) => {
                    self.error = Some(e.to_string());
                    return;
                }
            }
        }
        self.cursor = target;
    }

    fn navigate(&mut self, delta: i32, controller: &mut MonthViewController) {
        match controller.navigate_relative(delta) {
            Ok(view) => {
                self.transition = view.direction;
                let month = view.grid.month;
                let day = self.cursor.day().min(month.days_in_month());
                self.cursor = month.day(day).unwrap_or_else(|| month.first_day());
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }
}

pub struct MonthPickerView<'a> {
    state: PickerState,
    /// Terminal instance
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Theme for styling
    theme: Theme,
    controller: &'a mut MonthViewController,
}

impl<'a> MonthPickerView<'a> {
    pub fn new(controller: &'a mut MonthViewController, theme: Theme) -> io::Result<Self> {
        // First check if we're in a proper terminal
        if !IsTty::is_tty(&std::io::stdout()) {
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "Not running in a TTY, cannot initialize terminal interface",
            ));
        }

        enable_raw_mode()
            .map_err(|e| io::Error::other(format!("Failed to enable raw mode: {}", e)))?;

        stdout().execute(EnterAlternateScreen).map_err(|e| {
            let _ = disable_raw_mode(); // Clean up on failure
            io::Error::other(format!("Failed to enter alternate screen: {}", e))
        })?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend).map_err(|e| {
            let _ = disable_raw_mode();
            let _ = stdout().execute(LeaveAlternateScreen);
            io::Error::other(format!("Failed to create terminal: {}", e))
        })?;

        Ok(Self {
            state: PickerState::new(controller),
            terminal,
            theme,
            controller,
        })
    }

    /// Calculate centered area with both horizontal and vertical centering
    fn calculate_centered_area(available: Rect, needed_width: u16, needed_height: u16) -> Rect {
        let width = std::cmp::min(available.width, needed_width);
        let height = std::cmp::min(available.height, needed_height);

        Rect {
            x: available.x + available.width.saturating_sub(width) / 2,
            y: available.y + available.height.saturating_sub(height) / 2,
            width,
            height,
        }
    }

    fn create_month_table(
        grid: &MonthGrid,
        state: &PickerState,
        theme: &Theme,
    ) -> Table<'static> {
        let header = Row::new(
            grid.weekday_headers()
                .iter()
                .map(|d| Cell::from(weekday_label(*d)).style(theme.colors.header.to_ratatui()))
                .collect::<Vec<_>>(),
        )
        .height(1);

        let rows: Vec<Row> = grid
            .weeks()
            .map(|week| {
                let cells: Vec<Cell> = week
                    .iter()
                    .map(|cell| {
                        let mut style = theme.cell_style(cell);
                        let plain = !cell.is_today && !cell.is_selected;
                        if cell.date == state.cursor && plain {
                            style = style.patch(theme.colors.cursor.to_ratatui());
                        }
                        Cell::from(format!("{:>2}", cell.day())).style(style)
                    })
                    .collect();
                Row::new(cells)
            })
            .collect();

        let title = format!("{}{}", direction_arrow(state.transition), grid.month);

        Table::new(rows, [Constraint::Length(3); 7])
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::NONE)
                    .title(title)
                    .title_style(theme.colors.title.to_ratatui())
                    .title_alignment(Alignment::Center),
            )
            .column_spacing(1)
    }

    /// Create status and help text
    fn create_status_text(
        state: &PickerState,
        selected: Option<NaiveDate>,
        theme: &Theme,
    ) -> Paragraph<'static> {
        let mut lines = Vec::new();

        let status = match (&state.error, selected) {
            (Some(error), _) => Span::styled(error.clone(), theme.colors.error_text.to_ratatui()),
            (None, Some(date)) => Span::styled(
                format!("Selected: {}", date.format("%A, %B %d, %Y")),
                theme.colors.day.to_ratatui(),
            ),
            (None, None) => Span::styled("No date selected", theme.colors.borrowed.to_ratatui()),
        };
        lines.push(Line::from(vec![status]));

        if state.show_help {
            lines.push(Line::from(vec![Span::styled(
                "←→/hl=Day • ↑↓/jk=Week • [ ]/PgUp/PgDn=Month • t=Today • Enter=Select • q=Quit",
                theme.colors.help_text.to_ratatui(),
            )]));
        }

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::NONE))
            .alignment(Alignment::Center)
    }

    /// Run the picker loop. Returns the selection at exit.
    pub fn run(&mut self) -> io::Result<Option<NaiveDate>> {
        loop {
            if self.state.should_exit {
                break;
            }

            let grid = self.controller.grid().clone();
            let selected = self.controller.selected_date();
            let state = &self.state;
            let theme = &self.theme;

            self.terminal.draw(|frame| {
                let size = frame.area();

                const CALENDAR_HEIGHT: u16 = 9; // title + header + up to 6 weeks + spacing
                const STATUS_HEIGHT: u16 = 3;
                const CALENDAR_WIDTH: u16 = 60;

                let centered_area = Self::calculate_centered_area(
                    size,
                    CALENDAR_WIDTH,
                    CALENDAR_HEIGHT + STATUS_HEIGHT,
                );

                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(CALENDAR_HEIGHT),
                        Constraint::Length(STATUS_HEIGHT),
                    ])
                    .split(centered_area);

                let table_width = 7 * 3 + 6;
                let table_area = Self::calculate_centered_area(chunks[0], table_width, CALENDAR_HEIGHT);
                frame.render_widget(Self::create_month_table(&grid, state, theme), table_area);
                frame.render_widget(Self::create_status_text(state, selected, theme), chunks[1]);
            })?;

            // Handle events with timeout to prevent blocking indefinitely
            if poll(std::time::Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    debug!("key {:?}", key.code);
                    self.state.handle_key_event(key, self.controller);
                }
            }
        }

        self.cleanup()?;

        Ok(self.controller.selected_date())
    }

    /// Explicit cleanup method
    fn cleanup(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        self.terminal.backend_mut().execute(LeaveAlternateScreen)?;
        Ok(())
    }
}

impl<'a> Drop for MonthPickerView<'a> {
    fn drop(&mut self) {
        // Fallback cleanup if explicit cleanup wasn't called
        let _ = self.cleanup();
    }
}
