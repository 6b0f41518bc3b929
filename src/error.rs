//! # Error Types Module
//!
//! Defines the custom error types of the application.
//!
//! ## Responsibilities:
//! - `VideoResolutionError` categorizes every failure of a run
//! - `ProbeError` is what a `Prober` returns for a single file
//! - Integrates with `thiserror` for automatic conversion and with `anyhow`
//!   for propagation in the orchestrator
//!
//! ## Error categories:
//! - `Input`: unsatisfiable input parameters, missing file or directory (fatal)
//! - `ProberUnavailable`: ffprobe is not installed (fatal)
//! - `OutputDirectory`: the output directory is missing and cannot be created
//!   (non-fatal, file output is skipped)
//! - `Config`: invalid configuration values
//!
//! ## Example:
//! ```rust
//! use video_resolution::VideoResolutionError;
//!
//! let err = VideoResolutionError::Input("no valid input parameters".to_string());
//! assert_eq!(err.to_string(), "Input error: no valid input parameters");
//! ```

use std::path::PathBuf;

/// Custom error types for a video resolution run
#[derive(thiserror::Error, Debug)]
pub enum VideoResolutionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Input error: {0}")]
    Input(String),

    #[error("Prober unavailable: {0}")]
    ProberUnavailable(String),

    #[error("Output directory {path} does not exist and could not be created: {reason}")]
    OutputDirectory { path: PathBuf, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Failure of a single probe invocation
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ProbeError {
    /// The probing tool itself is missing; retrying other files is pointless
    #[error("ffprobe not available: {0}")]
    Unavailable(String),

    #[error("{0}")]
    Failed(String),
}
