//! # Media Prober Module
//!
//! Asks an external tool for the dimensions and size of a video file.
//!
//! ## Responsibilities:
//! - `Prober` trait: the single capability boundary of the application, so
//!   resolution, sorting and formatting can be tested with a fake prober
//! - `FfprobeProber`: the real implementation, running
//!   `ffprobe -v error -print_format json -show_format -show_streams <file>`
//! - Decoding of the ffprobe JSON with serde
//!
//! ## Failure modes:
//! - ffprobe cannot be spawned (not installed): `ProbeError::Unavailable`,
//!   which ends the whole run
//! - ffprobe exits with an error or prints garbage: `ProbeError::Failed`,
//!   which only skips that file
//!
//! ## Example:
//! ```rust,no_run
//! use video_resolution::prober::{FfprobeProber, Prober};
//! use std::path::Path;
//!
//! let prober = FfprobeProber::new("ffprobe");
//! let info = prober.probe(Path::new("movie.mkv"))?;
//! println!("{:?}x{:?}", info.width, info.height);
//! # Ok::<(), video_resolution::ProbeError>(())
//! ```

use crate::config::Config;
use crate::error::ProbeError;
use crate::tool_resolver::{missing_tool_message, ToolPathResolver};
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// What a prober reports for one file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProbeInfo {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub size_in_bytes: u64,
}

/// Inspects a media file
pub trait Prober {
    fn probe(&self, path: &Path) -> Result<ProbeInfo, ProbeError>;
}

/// Prober backed by the ffprobe executable
#[derive(Debug, Clone)]
pub struct FfprobeProber {
    command: PathBuf,
}

impl FfprobeProber {
    pub fn new(command: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Pick the executable from the config, the tools directory or `PATH`
    pub fn from_config(config: &Config) -> Self {
        if let Some(ref path) = config.ffprobe_path {
            return Self::new(path);
        }

        match ToolPathResolver::new().check_tool_with_instructions("ffprobe") {
            Ok(path) => Self::new(path),
            // Let the spawn fail so the error surfaces once, inside the run
            Err(msg) => {
                debug!("{}", msg);
                Self::new("ffprobe")
            }
        }
    }
}

impl Prober for FfprobeProber {
    fn probe(&self, path: &Path) -> Result<ProbeInfo, ProbeError> {
        debug!("Running {} on: {}", self.command.display(), path.display());

        let output = Command::new(&self.command)
            .args([
                "-v", "error",
                "-print_format", "json",
                "-show_format",
                "-show_streams",
            ])
            .arg(path)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => ProbeError::Unavailable(missing_tool_message("ffprobe")),
                ErrorKind::PermissionDenied => ProbeError::Unavailable(format!(
                    "{} cannot be executed: {}",
                    self.command.display(),
                    e
                )),
                _ => ProbeError::Failed(format!("failed to execute {}: {}", self.command.display(), e)),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(ProbeError::Failed(if stderr.is_empty() {
                format!("ffprobe exited with {}", output.status)
            } else {
                stderr
            }));
        }

        parse_probe_output(&output.stdout, path)
    }
}

#[derive(Debug, Deserialize)]
struct ProbeOutput {
    format: Option<ProbeFormat>,
    #[serde(default)]
    streams: Vec<ProbeStream>,
}

#[derive(Debug, Deserialize)]
struct ProbeFormat {
    size: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProbeStream {
    codec_type: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
}

/// Decode ffprobe's JSON. The size falls back to file metadata when ffprobe omits it.
pub fn parse_probe_output(stdout: &[u8], path: &Path) -> Result<ProbeInfo, ProbeError> {
    let parsed: ProbeOutput = serde_json::from_slice(stdout)
        .map_err(|e| ProbeError::Failed(format!("failed to parse ffprobe output: {}", e)))?;

    let video_stream = parsed
        .streams
        .iter()
        .find(|s| s.codec_type.as_deref() == Some("video"));

    let size = parsed
        .format
        .and_then(|f| f.size)
        .and_then(|s| s.trim().parse::<u64>().ok());

    let size_in_bytes = match size {
        Some(size) => size,
        None => std::fs::metadata(path)
            .map_err(|e| ProbeError::Failed(format!("cannot read file size: {}", e)))?
            .len(),
    };

    Ok(ProbeInfo {
        width: video_stream.and_then(|s| s.width),
        height: video_stream.and_then(|s| s.height),
        size_in_bytes,
    })
}
