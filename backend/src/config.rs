//! Timeline configuration file and environment support.
//!
//! Settings live in a TOML file with a `[timeline]` table:
//!
//! ```toml
//! [timeline]
//! mode = "proportional"
//! boundary_month = 6
//! boundary_day = 30
//! year = 2025
//! ```
//!
//! Every key is optional. Environment variables override file values.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::models::ScaleMode;

/// Timeline configuration from file and/or environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default)]
    pub timeline: TimelineSettings,
}

/// Layout settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSettings {
    #[serde(default)]
    pub mode: ScaleMode,
    /// Month (1-12) of the last day of the first half.
    #[serde(default = "default_boundary_month")]
    pub boundary_month: u32,
    /// Day of month of the last day of the first half.
    #[serde(default = "default_boundary_day")]
    pub boundary_day: u32,
    /// Planning year; callers may also pass it explicitly.
    #[serde(default)]
    pub year: Option<i32>,
}

fn default_boundary_month() -> u32 {
    6
}

fn default_boundary_day() -> u32 {
    30
}

impl Default for TimelineSettings {
    fn default() -> Self {
        Self {
            mode: ScaleMode::default(),
            boundary_month: default_boundary_month(),
            boundary_day: default_boundary_day(),
            year: None,
        }
    }
}

impl LayoutConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(LayoutConfig)` if the file was read, parsed and validated
    /// * `Err(LayoutError::Configuration)` otherwise
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LayoutError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            LayoutError::Configuration(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, LayoutError> {
        let config: LayoutConfig = toml::from_str(content).map_err(|e| {
            LayoutError::Configuration(format!("Failed to parse config file: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Locate `timeline.toml` in the standard locations.
    ///
    /// Searches, in order:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn find_default_path() -> Option<PathBuf> {
        [
            PathBuf::from("timeline.toml"),
            PathBuf::from("backend/timeline.toml"),
            PathBuf::from("../timeline.toml"),
        ]
        .into_iter()
        .find(|path| path.exists())
    }

    /// Load configuration from the default location.
    pub fn from_default_location() -> Result<Self, LayoutError> {
        match Self::find_default_path() {
            Some(path) => Self::from_file(path),
            None => Err(LayoutError::Configuration(
                "No timeline.toml found in standard locations".to_string(),
            )),
        }
    }

    /// Defaults overridden by environment variables.
    ///
    /// # Environment Variables
    /// - `TIMELINE_MODE` (optional): `equal` | `proportional`
    /// - `TIMELINE_BOUNDARY_MONTH` (optional, default: 6)
    /// - `TIMELINE_BOUNDARY_DAY` (optional, default: 30)
    /// - `TIMELINE_YEAR` (optional): planning year
    pub fn from_env() -> Result<Self, LayoutError> {
        Self::default().with_env_overrides()
    }

    /// Apply environment overrides on top of this configuration.
    pub fn with_env_overrides(mut self) -> Result<Self, LayoutError> {
        if let Ok(mode) = env::var("TIMELINE_MODE") {
            self.timeline.mode = mode.parse().map_err(LayoutError::Configuration)?;
        }
        if let Some(month) = parse_env::<u32>("TIMELINE_BOUNDARY_MONTH")? {
            self.timeline.boundary_month = month;
        }
        if let Some(day) = parse_env::<u32>("TIMELINE_BOUNDARY_DAY")? {
            self.timeline.boundary_day = day;
        }
        if let Some(year) = parse_env::<i32>("TIMELINE_YEAR")? {
            self.timeline.year = Some(year);
        }
        self.validate()?;
        Ok(self)
    }

    /// File at the default location (or defaults when none exists), then env overrides.
    pub fn load() -> Result<Self, LayoutError> {
        let base = match Self::find_default_path() {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        base.with_env_overrides()
    }

    /// Check the boundary month/day against a leap year so February 29 is allowed.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let TimelineSettings {
            boundary_month: month,
            boundary_day: day,
            ..
        } = self.timeline;
        if NaiveDate::from_ymd_opt(2024, month, day).is_none() {
            return Err(LayoutError::Configuration(format!(
                "Invalid boundary month/day: {}/{}",
                month, day
            )));
        }
        if (month, day) == (12, 31) {
            return Err(LayoutError::Configuration(
                "Boundary cannot be December 31".to_string(),
            ));
        }
        Ok(())
    }

    pub fn mode(&self) -> ScaleMode {
        self.timeline.mode
    }

    /// Boundary date (last day of H1) for `year`.
    pub fn boundary_for_year(&self, year: i32) -> Result<NaiveDate, LayoutError> {
        let TimelineSettings {
            boundary_month: month,
            boundary_day: day,
            ..
        } = self.timeline;
        NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            LayoutError::Configuration(format!(
                "Boundary {}/{} does not exist in {}",
                month, day, year
            ))
        })
    }

    /// Boundary for the configured year, `None` when no year is set.
    pub fn configured_boundary(&self) -> Result<Option<NaiveDate>, LayoutError> {
        self.timeline
            .year
            .map(|year| self.boundary_for_year(year))
            .transpose()
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Result<Option<T>, LayoutError> {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map(Some).map_err(|_| {
            LayoutError::Configuration(format!("{} must be a number, got '{}'", key, raw))
        }),
        Err(_) => Ok(None),
    }
}
