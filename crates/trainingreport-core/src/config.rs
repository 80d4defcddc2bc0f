//! Report configuration.
//!
//! Holds the input location, output directory and the parameters the
//! analyzers run with (fiscal year window, qualifying trainings, check date).
//! Defaults reproduce the fixed FY2024 lab-safety report.
//!
//! Configuration is read from the file named by `TRAININGREPORT_CONFIG`, or
//! from `~/.config/trainingreport/config.json` when present. Keys missing from
//! the file keep their defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::FiscalYearWindow;

/// Application name used for the config directory path
const APP_NAME: &str = "trainingreport";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "TRAININGREPORT_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub input_file: PathBuf,
    pub output_dir: PathBuf,
    pub fiscal_year_start: NaiveDate,
    pub fiscal_year_end: NaiveDate,
    pub qualifying_trainings: Vec<String>,
    pub check_date: NaiveDate,
    pub expiration_horizon_months: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from("./trainings.json"),
            output_dir: PathBuf::from("."),
            fiscal_year_start: NaiveDate::from_ymd_opt(2023, 7, 1).unwrap_or_default(),
            fiscal_year_end: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap_or_default(),
            qualifying_trainings: vec![
                "Electrical Safety for Labs".to_string(),
                "X-Ray Safety".to_string(),
                "Laboratory Safety Training".to_string(),
            ],
            check_date: NaiveDate::from_ymd_opt(2023, 10, 1).unwrap_or_default(),
            expiration_horizon_months: 1,
        }
    }
}

impl ReportConfig {
    pub fn load() -> Result<Self> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::load_from(Path::new(&path));
        }

        match Self::config_path() {
            Ok(path) if path.exists() => Self::load_from(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        if config.fiscal_year_end < config.fiscal_year_start {
            anyhow::bail!(
                "fiscal_year_end {} is before fiscal_year_start {}",
                config.fiscal_year_end,
                config.fiscal_year_start
            );
        }
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Window with both bounds at midnight, so the end date only admits
    /// completions stamped at exactly 00:00 on that day.
    pub fn fiscal_year_window(&self) -> FiscalYearWindow {
        FiscalYearWindow::new(
            self.qualifying_trainings.iter().cloned(),
            midnight(self.fiscal_year_start),
            midnight(self.fiscal_year_end),
        )
    }

    pub fn check_datetime(&self) -> NaiveDateTime {
        midnight(self.check_date)
    }

    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}
