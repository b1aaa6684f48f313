//! Configuration management for emojipick
//!
//! Settings live in a TOML file. Every section is optional; a missing file
//! is the same as an empty one.
//!
//! ```toml
//! [filters]
//! skin_tones_disabled = true
//! max_emoji_version = 13
//!
//! [grid]
//! cols = 8
//! rows = 5
//!
//! [aliases]
//! "👍" = ["lgtm"]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::types::{FilterSettings, GridSize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub filters: FiltersConfig,
    pub grid: GridConfig,
    pub recents: RecentsConfig,
    pub display: DisplayConfig,
    /// Extra search aliases keyed by glyph
    pub aliases: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FiltersConfig {
    pub skin_tones_disabled: bool,
    pub genders_disabled: bool,
    /// Negative values mean "no cutoff"
    pub max_emoji_version: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub cols: usize,
    pub rows: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cols: GridSize::DEFAULT.cols,
            rows: GridSize::DEFAULT.rows,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecentsConfig {
    /// Recents file; defaults to `<data dir>/emojipick/recents.json`
    pub path: Option<String>,
    /// Defaults to one full grid page
    pub capacity: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show only the first variant of each base emoji in search results
    pub collapse_variants: bool,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Falls back to defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the picker cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.grid.cols == 0 {
            return Err(invalid("grid.cols", "must be at least 1"));
        }
        if self.grid.rows == 0 {
            return Err(invalid("grid.rows", "must be at least 1"));
        }
        Ok(())
    }

    /// Filter settings with out-of-range values clamped
    pub fn filter_settings(&self) -> FilterSettings {
        FilterSettings::new(
            self.filters.skin_tones_disabled,
            self.filters.genders_disabled,
            self.filters.max_emoji_version,
        )
    }

    pub fn grid_size(&self) -> GridSize {
        GridSize {
            cols: self.grid.cols.max(1),
            rows: self.grid.rows.max(1),
        }
    }

    pub fn recents_capacity(&self) -> usize {
        self.recents
            .capacity
            .unwrap_or_else(|| self.grid_size().page_size())
    }

    /// Resolve the recents file, expanding `~`
    pub fn recents_path(&self) -> Result<PathBuf> {
        match self.recents.path {
            Some(ref path) => Ok(PathBuf::from(shellexpand::tilde(path).to_string())),
            None => Ok(resolve_data_path()?.join("recents.json")),
        }
    }
}

fn invalid(field: &str, reason: &str) -> crate::error::PickError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("EMOJIPICK_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("emojipick").join("config.toml"))
}

/// Resolve the data directory path following XDG Base Directory spec
pub fn resolve_data_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| ConfigError::MissingField("data directory".to_string()))?;

    Ok(data_dir.join("emojipick"))
}
