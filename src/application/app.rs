use crate::application::{Config, MonthPickerView, MonthViewController, TextRenderer, Theme};
use crate::domain::MonthKey;
use crate::infrastructure::{JsonRenderer, SelectionLogListener};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::debug;

pub struct MonthPickerApp {
    controller: MonthViewController,
    config: Config,
    theme: Theme,
}

impl MonthPickerApp {
    pub fn new(config: Config) -> Result<Self> {
        Self::with_default_plugins(config)
    }

    pub fn with_default_plugins(config: Config) -> Result<Self> {
        let mut app = Self::without_plugins(config)?;

        let log = SelectionLogListener::new(app.config.data_dir.clone());
        debug!("selection log at {}", log.log_path().display());
        app.controller.register_listener(log);

        Ok(app)
    }

    pub fn without_plugins(config: Config) -> Result<Self> {
        let controller =
            MonthViewController::new(&config).context("Failed to open the initial month")?;
        let theme = Theme::by_name(&config.theme);

        Ok(Self {
            controller,
            config,
            theme,
        })
    }

    pub fn controller(&self) -> &MonthViewController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut MonthViewController {
        &mut self.controller
    }

    /// Print one month to stdout, as coloured text or JSON.
    pub fn show(&mut self, month: Option<MonthKey>, json: bool, week_numbers: bool) -> Result<()> {
        if json {
            self.controller
                .set_renderer(JsonRenderer::pretty(std::io::stdout()));
        } else {
            self.controller.set_renderer(
                TextRenderer::new(std::io::stdout(), self.theme.clone())
                    .with_week_numbers(week_numbers),
            );
        }

        let month = month.unwrap_or_else(|| self.controller.current_month());
        self.controller.go_to_month(month);
        Ok(())
    }

    /// Run the interactive picker and return the date selected at exit.
    pub fn run_picker(&mut self, month: Option<MonthKey>) -> Result<Option<NaiveDate>> {
        if let Some(month) = month {
            self.controller.go_to_month(month);
        }

        let mut view = MonthPickerView::new(&mut self.controller, self.theme.clone())
            .context("Failed to start the month picker")?;
        let selected = view.run()?;
        Ok(selected)
    }
}
