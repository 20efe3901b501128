//! Configuration loading from TOML files.
//!
//! Lookup order:
//! 1. `--config <path>` on the command line
//! 2. `$LABKIT_CONFIG` environment variable
//! 3. `<platform config dir>/labkit/config.toml`
//! 4. Built-in defaults (everything is optional)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use labkit_core::LabError;
use labkit_store::{DEFAULT_HISTORY_CAPACITY, DEFAULT_STUDENT_CAPACITY};

/// Top-level configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub history: HistoryConfig,
    pub students: StudentsConfig,
    pub display: DisplayConfig,
}

/// Calculator history settings.
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub capacity: usize,
    /// Log a 0.0 result when a division by zero is attempted.
    pub log_failed_division: bool,
}

/// Student table settings.
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct StudentsConfig {
    pub capacity: usize,
    /// Records shown by "Display Top Performers".
    pub top_count: usize,
}

/// Output formatting.
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Decimal places for averages and calculator results.
    pub precision: usize,
    /// Column width of one matrix cell.
    pub cell_width: usize,
}

// --- Defaults ---

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_HISTORY_CAPACITY,
            log_failed_division: true,
        }
    }
}

impl Default for StudentsConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_STUDENT_CAPACITY,
            top_count: 5,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: 2,
            cell_width: 4,
        }
    }
}

/// Upper bound for either table; both are allocated up front.
pub const MAX_CAPACITY: usize = 10_000;
pub const MAX_PRECISION: usize = 17;
pub const MAX_CELL_WIDTH: usize = 32;

impl Config {
    pub fn validate(&self) -> Result<(), LabError> {
        check_range("history.capacity", self.history.capacity, 1, MAX_CAPACITY)?;
        check_range("students.capacity", self.students.capacity, 1, MAX_CAPACITY)?;
        check_range("display.precision", self.display.precision, 0, MAX_PRECISION)?;
        check_range("display.cell_width", self.display.cell_width, 0, MAX_CELL_WIDTH)?;
        Ok(())
    }
}

fn check_range(key: &str, value: usize, min: usize, max: usize) -> Result<(), LabError> {
    if value < min || value > max {
        return Err(LabError::Config(format!(
            "{key} must be between {min} and {max}, got {value}"
        )));
    }
    Ok(())
}

/// Load config from disk. Returns defaults if no config file exists.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let path = config_path(explicit);

    if let Some(p) = &path {
        if p.exists() {
            let config = load_from(p)?;
            tracing::debug!("loaded config from {}", p.display());
            return Ok(config);
        }
    }

    Ok(Config::default())
}

fn load_from(path: &Path) -> Result<Config> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("validating {}", path.display()))?;
    Ok(config)
}

/// Resolve the config file path.
fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    // 1. Command line
    if let Some(p) = explicit {
        return Some(p.to_path_buf());
    }

    // 2. Environment variable
    if let Ok(p) = std::env::var("LABKIT_CONFIG") {
        return Some(PathBuf::from(p));
    }

    // 3. Platform config dir
    directories::ProjectDirs::from("dev", "labkit", "labkit")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Show the active config path (for `labkit config`).
pub fn show_config_path(explicit: Option<&Path>) -> String {
    match config_path(explicit) {
        Some(p) if p.exists() => format!("{} (loaded)", p.display()),
        Some(p) => format!("{} (not found, using defaults)", p.display()),
        None => "no config path resolved (using defaults)".into(),
    }
}
