use crate::application::{Config, MonthPickerApp, Theme, parse_date, parse_weekday};
use crate::domain::MonthKey;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "monthpicker")]
#[command(about = "A terminal month calendar with single-day selection")]
#[command(version)]
pub struct Cli {
    /// First day of the week (e.g. sun, mon); overrides MONTHPICKER_FIRST_DAY
    #[arg(short, long, global = true)]
    pub first_day: Option<String>,

    /// Initially selected date (YYYY-MM-DD); overrides MONTHPICKER_SELECTED
    #[arg(short, long, global = true)]
    pub selected: Option<String>,

    /// Colour theme (dark, light, minimal); overrides MONTHPICKER_THEME
    #[arg(long, global = true)]
    pub theme: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a month grid and exit
    Show {
        /// Month to show (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
        /// Emit the decorated grid as JSON
        #[arg(long)]
        json: bool,
        /// Prefix each week with its ISO week number
        #[arg(short, long)]
        week_numbers: bool,
    },
    /// Start the interactive picker (default)
    Pick {
        /// Month to open on (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },
}

impl Cli {
    pub fn run() -> anyhow::Result<()> {
        let cli = Self::parse();
        let config = cli.config(Config::from_env()?)?;

        match cli.command {
            Some(Commands::Show {
                month,
                json,
                week_numbers,
            }) => {
                let mut app = MonthPickerApp::without_plugins(config)?;
                let month = parse_month(month.as_deref())?;
                app.show(month, json, week_numbers)?;
            }
            Some(Commands::Pick { month }) => {
                run_picker(config, month.as_deref())?;
            }
            None => {
                run_picker(config, None)?;
            }
        }

        Ok(())
    }

    /// Apply command-line overrides on top of the environment config.
    pub fn config(&self, mut config: Config) -> anyhow::Result<Config> {
        if let Some(day) = &self.first_day {
            config.first_day_of_week = parse_weekday(day)?;
        }
        if let Some(date) = &self.selected {
            config.initial_selected = Some(parse_date(date)?);
        }
        if let Some(theme) = &self.theme {
            let available = Theme::available_themes();
            if !available.contains(&theme.to_lowercase()) {
                anyhow::bail!(
                    "unknown theme '{}', expected one of: {}",
                    theme,
                    available.join(", ")
                );
            }
            config.theme = theme.clone();
        }
        Ok(config)
    }
}

/// Parses `YYYY-MM` with a one-based month.
fn parse_month_key(s: &str) -> anyhow::Result<MonthKey> {
    let (year, month) = s
        .split_once('-')
        .ok_or_else(|| anyhow::anyhow!("expected YYYY-MM, got '{}'", s))?;
    let year: i32 = year.trim().parse()?;
    let month: u32 = month.trim().parse()?;
    if month == 0 {
        anyhow::bail!("month must be between 1 and 12, got 0");
    }
    Ok(MonthKey::new(year, month - 1)?)
}

fn parse_month(month: Option<&str>) -> anyhow::Result<Option<MonthKey>> {
    month.map(parse_month_key).transpose()
}

fn run_picker(config: Config, month: Option<&str>) -> anyhow::Result<()> {
    let mut app = MonthPickerApp::new(config)?;
    let month = parse_month(month)?;

    if let Some(date) = app.run_picker(month)? {
        println!("{}", date.format("%Y-%m-%d"));
    }

    Ok(())
}
