//! # Video Resolution Library
//!
//! Probes video files with ffprobe for their resolution and file size and
//! reports the results ordered by resolution and by name.
//!
//! ## Responsibilities:
//! - Defines the modular structure of the application
//! - Exposes the main types through re-exports
//! - Gives `main.rs` (and tests) a clean interface
//!
//! ## Module architecture:
//! - `config`: run configuration and validation
//! - `error`: custom error types
//! - `file_manager`: input resolution and video file discovery
//! - `prober` / `tool_resolver`: the ffprobe boundary
//! - `record`: the `VideoRecord` data model
//! - `report`: sorted text views
//! - `json_output`: JSON documents
//! - `output`: `.log`/`.json` report files
//! - `runner`: main orchestrator
//! - `progress`: progress bar and statistics
//!
//! ## Usage:
//! ```rust,no_run
//! use video_resolution::{Config, FfprobeProber, InputParams, VideoResolution};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::default();
//! let runner = VideoResolution::new(config.clone(), FfprobeProber::from_config(&config));
//! let report = runner
//!     .run(&InputParams { input_directory: Some("/videos".into()), ..Default::default() })
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod file_manager;
pub mod json_output;
pub mod output;
pub mod prober;
pub mod progress;
pub mod record;
pub mod report;
pub mod runner;
pub mod tool_resolver;

pub use config::{Config, OutputMode};
pub use error::{ProbeError, VideoResolutionError};
pub use file_manager::InputParams;
pub use prober::{FfprobeProber, ProbeInfo, Prober};
pub use record::VideoRecord;
pub use runner::{RunOutput, RunReport, VideoResolution};
