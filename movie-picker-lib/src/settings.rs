//! Application settings (data file locations, display defaults).
//!
//! Settings live in `~/.config/movie-picker/settings.toml`. Every key is
//! optional; command-line flags take priority over the file, and the file
//! takes priority over the built-in defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dataset::JoinPolicy;
use crate::error::SettingsError;
use crate::filter::{DEFAULT_LIMIT, DEFAULT_YEAR_RANGE, YearRange};

pub const DEFAULT_TITLES_FILE: &str = "titles.csv";
pub const DEFAULT_CREDITS_FILE: &str = "credits.csv";

/// Canonical path to the settings file: `~/.config/movie-picker/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("movie-picker").join("settings.toml")
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub data: DataSettings,
    pub display: DisplaySettings,
    pub join: JoinSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub titles: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub limit: usize,
    pub default_from: i32,
    pub default_to: i32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            default_from: DEFAULT_YEAR_RANGE.low,
            default_to: DEFAULT_YEAR_RANGE.high,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoinSettings {
    /// Pair each title with only its first credit row.
    pub dedupe_credits: bool,
}

impl Default for JoinSettings {
    fn default() -> Self {
        Self {
            dedupe_credits: true,
        }
    }
}

impl Settings {
    /// Load from [`settings_path`]. A missing file gives the defaults.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(&settings_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|e| SettingsError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        toml::from_str(&contents).map_err(|e| SettingsError::Parse {
            path: path.display().to_string(),
            source: e,
        })
    }

    pub fn to_toml_string(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Titles path: CLI override, then settings, then `titles.csv`.
    pub fn titles_path(&self, cli_override: Option<PathBuf>) -> PathBuf {
        cli_override
            .or_else(|| self.data.titles.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TITLES_FILE))
    }

    /// Credits path: CLI override, then settings, then `credits.csv`.
    pub fn credits_path(&self, cli_override: Option<PathBuf>) -> PathBuf {
        cli_override
            .or_else(|| self.data.credits.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CREDITS_FILE))
    }

    pub fn join_policy(&self) -> JoinPolicy {
        if self.join.dedupe_credits {
            JoinPolicy::FirstMatch
        } else {
            JoinPolicy::KeepDuplicates
        }
    }

    pub fn default_range(&self) -> YearRange {
        YearRange::new(self.display.default_from, self.display.default_to)
    }
}
