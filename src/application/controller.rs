use crate::application::Config;
use crate::domain::{
    CalendarError, CalendarMonthModel, CellOrigin, DayCell, MonthGrid, MonthKey,
    NavigationDirection, SelectionChange, SelectionState,
};
use crate::infrastructure::{
    Clock, DateSelectedListener, ListenerRegistry, MonthRenderer, MonthView, SelectionContext,
    SystemClock,
};
use chrono::{Datelike, NaiveDate, Weekday};
use log::{debug, info, warn};
use std::cmp::Ordering;

/// Owns the displayed month and the selection, and is the only thing that
/// mutates either.
pub struct MonthViewController {
    model: CalendarMonthModel,
    first_day_of_week: Weekday,
    current_month: MonthKey,
    selection: SelectionState,
    /// Date of the cell last rendered as selected in `grid`. Lets the renderer
    /// find the cell to un-highlight without holding on to it.
    last_rendered_selected: Option<NaiveDate>,
    navigation_direction: NavigationDirection,
    grid: MonthGrid,
    clock: Box<dyn Clock>,
    listeners: ListenerRegistry,
    renderer: Option<Box<dyn MonthRenderer>>,
}

impl MonthViewController {
    pub fn new(config: &Config) -> Result<Self, CalendarError> {
        Self::with_clock(config, Box::new(SystemClock))
    }

    /// Opens on the month of the initial selection, or today's month.
    pub fn with_clock(config: &Config, clock: Box<dyn Clock>) -> Result<Self, CalendarError> {
        let opening = config.initial_selected.unwrap_or_else(|| clock.today());
        let current_month = MonthKey::from_date(opening)?;
        let model = CalendarMonthModel::new();
        let grid = model.compute_grid(current_month, config.first_day_of_week);

        let mut controller = Self {
            model,
            first_day_of_week: config.first_day_of_week,
            current_month,
            selection: SelectionState::new(config.initial_selected),
            last_rendered_selected: None,
            navigation_direction: NavigationDirection::None,
            grid,
            clock,
            listeners: ListenerRegistry::new(),
            renderer: None,
        };
        controller.grid = controller.decorate_grid(controller.grid.clone());
        controller.last_rendered_selected = controller.grid.selected_cell().map(|c| c.date);
        Ok(controller)
    }

    pub fn set_renderer<R>(&mut self, renderer: R)
    where
        R: MonthRenderer + 'static,
    {
        self.renderer = Some(Box::new(renderer));
    }

    /// Replace any registered listeners with `listener`.
    pub fn set_listener<L>(&mut self, listener: L)
    where
        L: DateSelectedListener + 'static,
    {
        self.listeners.replace(listener);
    }

    pub fn register_listener<L>(&mut self, listener: L)
    where
        L: DateSelectedListener + 'static,
    {
        self.listeners.register(listener);
    }

    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    pub fn current_month(&self) -> MonthKey {
        self.current_month
    }

    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selection.selected_date()
    }

    pub fn last_rendered_selected(&self) -> Option<NaiveDate> {
        self.last_rendered_selected
    }

    /// The decorated grid currently on display.
    pub fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Snapshot of the display with no pending transition.
    pub fn view(&self) -> MonthView {
        MonthView::new(self.grid.clone(), NavigationDirection::None)
    }

    /// Display `month`, recomputing its grid.
    ///
    /// The returned view carries the transition direction relative to the
    /// month shown before; the direction is consumed here.
    pub fn go_to_month(&mut self, month: MonthKey) -> MonthView {
        self.navigation_direction = match month.cmp(&self.current_month) {
            Ordering::Greater => NavigationDirection::Forward,
            Ordering::Less => NavigationDirection::Backward,
            Ordering::Equal => NavigationDirection::None,
        };
        debug!(
            "go to {} from {} ({:?})",
            month, self.current_month, self.navigation_direction
        );

        self.current_month = month;
        let grid = self.model.compute_grid(month, self.first_day_of_week);
        self.grid = self.decorate_grid(grid);
        self.last_rendered_selected = self.grid.selected_cell().map(|c| c.date);

        let direction = std::mem::take(&mut self.navigation_direction);
        let view = MonthView::new(self.grid.clone(), direction);
        if let Some(renderer) = self.renderer.as_mut() {
            if let Err(e) = renderer.render_month(&view) {
                warn!("Renderer failed to draw {}: {:#}", month, e);
            }
        }
        view
    }

    /// Display the month containing `date`.
    pub fn go_to_date(&mut self, date: NaiveDate) -> Result<MonthView, CalendarError> {
        let month = MonthKey::from_date(date)?;
        Ok(self.go_to_month(month))
    }

    /// Move by `delta` months. Fails without touching state if the result
    /// leaves the supported year range.
    pub fn navigate_relative(&mut self, delta: i32) -> Result<MonthView, CalendarError> {
        let month = self.current_month.add_months(delta)?;
        Ok(self.go_to_month(month))
    }

    pub fn next_month(&mut self) -> Result<MonthView, CalendarError> {
        let month = self.current_month.next()?;
        Ok(self.go_to_month(month))
    }

    pub fn previous_month(&mut self) -> Result<MonthView, CalendarError> {
        let month = self.current_month.previous()?;
        Ok(self.go_to_month(month))
    }

    /// Show today's month. Does not change the selection.
    pub fn jump_to_today(&mut self) -> Result<MonthView, CalendarError> {
        let today = self.clock.today();
        self.go_to_date(today)
    }

    /// Apply today / selected / weekend hints to a freshly computed grid.
    /// Only cells of the displayed month can be today or selected.
    pub fn decorate_grid(&self, mut grid: MonthGrid) -> MonthGrid {
        let today = self.clock.today();
        for cell in grid.cells.iter_mut() {
            let current = cell.origin == CellOrigin::Current;
            cell.is_today = current && cell.date == today;
            cell.is_selected = current && self.selection.is_selected(cell.date);
            cell.is_weekend = matches!(cell.date.weekday(), Weekday::Sat | Weekday::Sun);
        }
        grid
    }

    /// Select the day under a tapped cell and notify listeners.
    pub fn select_day(&mut self, cell: &DayCell) -> Result<SelectionChange, CalendarError> {
        if !cell.is_selectable() {
            return Err(CalendarError::InvalidSelection {
                date: cell.date,
                origin: cell.origin,
            });
        }

        let date = cell.date;
        // A stale cell may belong to a month other than the one displayed.
        let month = MonthKey::from_date(date)?;
        let change = SelectionChange {
            previous: self.last_rendered_selected,
            current: date,
        };

        self.selection.select(date);
        for c in self.grid.cells.iter_mut() {
            c.is_selected = c.origin == CellOrigin::Current && c.date == date;
        }
        self.last_rendered_selected = self.grid.cell_for(date).map(|c| c.date);

        info!("Selected {}", date);

        if let Some(renderer) = self.renderer.as_mut() {
            if let Err(e) = renderer.render_selection(&change) {
                warn!("Renderer failed to restyle selection: {:#}", e);
            }
        }

        self.listeners.notify(&SelectionContext {
            date,
            month,
            previous: change.previous,
        });

        Ok(change)
    }

    /// Select `date` through its cell in the displayed grid.
    pub fn select_date(&mut self, date: NaiveDate) -> Result<SelectionChange, CalendarError> {
        let cell = match self.grid.cells.iter().find(|c| c.date == date) {
            Some(cell) => cell.clone(),
            None => {
                let origin = if date < self.current_month.first_day() {
                    CellOrigin::Previous
                } else {
                    CellOrigin::Next
                };
                return Err(CalendarError::InvalidSelection { date, origin });
            }
        };
        self.select_day(&cell)
    }
}
