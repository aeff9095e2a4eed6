use anyhow::{Context, Result};
use chrono::{NaiveDate, Weekday};
use std::path::PathBuf;

pub const FIRST_DAY_VAR: &str = "MONTHPICKER_FIRST_DAY";
pub const SELECTED_VAR: &str = "MONTHPICKER_SELECTED";
pub const THEME_VAR: &str = "MONTHPICKER_THEME";
pub const DIR_VAR: &str = "MONTHPICKER_DIR";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub first_day_of_week: Weekday,
    pub initial_selected: Option<NaiveDate>,
    pub theme: String,
    /// Where plugins such as the selection log write.
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            first_day_of_week: Weekday::Sun,
            initial_selected: None,
            theme: "dark".to_string(),
            data_dir: default_data_dir(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. `from_env` passes the process
    /// environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(FIRST_DAY_VAR) {
            config.first_day_of_week = parse_weekday(&value)
                .with_context(|| format!("Invalid {}", FIRST_DAY_VAR))?;
        }

        if let Some(value) = lookup(SELECTED_VAR) {
            let date = parse_date(&value).with_context(|| format!("Invalid {}", SELECTED_VAR))?;
            config.initial_selected = Some(date);
        }

        if let Some(value) = lookup(THEME_VAR) {
            config.theme = value;
        }

        if let Some(value) = lookup(DIR_VAR) {
            config.data_dir = PathBuf::from(value);
        }

        Ok(config)
    }
}

pub fn parse_weekday(value: &str) -> Result<Weekday> {
    value
        .trim()
        .parse::<Weekday>()
        .map_err(|_| anyhow::anyhow!("'{}' is not a weekday name", value))
}

pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .with_context(|| format!("'{}' is not a YYYY-MM-DD date", value))
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("monthpicker")
}
