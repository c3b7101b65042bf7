//! # Configuration
//!
//! Optional YAML settings for the command line front end.
//!
//! ```yaml
//! emphasis: markdown        # html | markdown | ansi | plain
//! flats: db-eb-only         # db-eb-only | all-flats
//! library: songs.yaml
//! scroll-speed-ms: 100
//! ```
//!
//! Every key is optional. A missing file means all defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::annotate::{AnnotateOptions, Emphasis};
use crate::error::{ChordsheetError, Result};
use crate::pitch::FlatNormalization;

pub const DEFAULT_LIBRARY: &str = "songs.yaml";
pub const DEFAULT_SCROLL_SPEED_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Config {
    pub emphasis: Emphasis,
    pub flats: FlatNormalization,
    pub library: PathBuf,
    /// Delay between lines when auto-scrolling
    pub scroll_speed_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            emphasis: Emphasis::default(),
            flats: FlatNormalization::default(),
            library: PathBuf::from(DEFAULT_LIBRARY),
            scroll_speed_ms: DEFAULT_SCROLL_SPEED_MS,
        }
    }
}

impl Config {
    /// Parse configuration from YAML text. Empty text gives the defaults.
    pub fn from_yaml(content: &str) -> Result<Config> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(content).map_err(|e| ChordsheetError::Config(e.to_string()))
    }

    /// Load configuration from `path`, falling back to defaults if the file
    /// does not exist.
    pub fn load(path: &Path) -> Result<Config> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ChordsheetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    pub fn annotate_options(&self) -> AnnotateOptions {
        AnnotateOptions {
            emphasis: self.emphasis,
            flats: self.flats,
        }
    }
}
