use crate::infrastructure::{DateSelectedListener, SelectionContext};
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

pub const SELECTION_LOG_FILE: &str = "selection_log.txt";

/// Plugin that appends every confirmed selection to a log file
pub struct SelectionLogListener {
    dir: PathBuf,
}

impl SelectionLogListener {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn log_path(&self) -> PathBuf {
        self.dir.join(SELECTION_LOG_FILE)
    }
}

impl DateSelectedListener for SelectionLogListener {
    fn on_date_selected(&self, context: &SelectionContext) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.log_path())
            .context("Failed to open selection log")?;

        let previous = context
            .previous
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());

        writeln!(
            file,
            "[{}] Selected {} in {} (previous: {})",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
            context.date,
            context.month,
            previous
        )?;

        Ok(())
    }

    fn name(&self) -> &str {
        "Selection Log"
    }
}
