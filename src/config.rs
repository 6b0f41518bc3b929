//! # Configuration Management Module
//!
//! Configuration of a run: where reports go, how results are returned and
//! which ffprobe to use.
//!
//! ## Responsibilities:
//! - Defines the `Config` struct and the `OutputMode` of a run
//! - Validates parameters before a run starts
//! - Loads/saves defaults from/to a JSON file
//!
//! ## Parameters:
//! - `output_directory`: where `.log`/`.json` reports are written (default: none)
//! - `output_mode`: `text`, `json` or `object` (default: `text`)
//! - `ffprobe_path`: explicit ffprobe executable (default: resolved from `PATH`)
//! - `show_progress`: progress bar for multi-file runs (default: true)
//!
//! ## Example:
//! ```rust
//! use video_resolution::config::{Config, OutputMode};
//!
//! let config = Config {
//!     output_mode: OutputMode::from_flags(true, false),
//!     ..Default::default()
//! };
//! config.validate()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::error::VideoResolutionError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// What a run returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Formatted report lines
    #[default]
    Text,
    /// `{ "Files": [...] }` document
    Json,
    /// The raw records
    Object,
}

impl OutputMode {
    /// Object mode takes priority when both flags are set
    pub fn from_flags(json: bool, object: bool) -> Self {
        if object {
            Self::Object
        } else if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Configuration for a video resolution run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory for `.log` and `.json` reports (None = no report files)
    pub output_directory: Option<PathBuf>,
    /// What the run returns
    pub output_mode: OutputMode,
    /// Explicit ffprobe executable
    pub ffprobe_path: Option<PathBuf>,
    /// Show a progress bar when more than one file is probed
    pub show_progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_directory: None,
            output_mode: OutputMode::Text,
            ffprobe_path: None,
            show_progress: true,
        }
    }
}

impl Config {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if let Some(ref ffprobe) = self.ffprobe_path {
            if !ffprobe.is_file() {
                return Err(VideoResolutionError::Config(format!(
                    "ffprobe path does not exist: {}",
                    ffprobe.display()
                ))
                .into());
            }
        }

        Ok(())
    }

    /// Default location of the configuration file
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("video-resolution").join("config.json"))
    }

    /// Load configuration from file
    pub async fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = tokio::fs::read_to_string(path).await?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub async fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, content).await?;
        Ok(())
    }
}
