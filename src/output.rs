//! # Output Sink Module
//!
//! Persists the report of a run to an output directory.
//!
//! ## Responsibilities:
//! - Creates the output directory when it is missing
//! - Writes `VideoResolution_{yyyyMMdd_HHmmss}.log` with both ordered views
//! - Writes `VideoResolution_{yyyyMMdd_HHmmss}.json` with the structured records
//!
//! Two runs within the same second into the same directory overwrite each
//! other's files.

use crate::error::VideoResolutionError;
use crate::json_output::records_document;
use crate::record::VideoRecord;
use crate::report::Report;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Paths of the files written for one run
#[derive(Debug, Clone, PartialEq)]
pub struct OutputFiles {
    pub log: PathBuf,
    pub json: PathBuf,
}

/// Base name shared by the `.log` and `.json` files
pub fn base_file_name(now: &DateTime<Local>) -> String {
    format!("VideoResolution_{}", now.format("%Y%m%d_%H%M%S"))
}

/// Make sure `dir` exists, creating it if needed
pub async fn ensure_output_directory(dir: &Path) -> Result<(), VideoResolutionError> {
    let directory_error = |reason: String| VideoResolutionError::OutputDirectory {
        path: dir.to_path_buf(),
        reason,
    };

    if dir.is_dir() {
        return Ok(());
    }
    if dir.exists() {
        return Err(directory_error("path exists and is not a directory".to_string()));
    }

    fs::create_dir_all(dir)
        .await
        .map_err(|e| directory_error(e.to_string()))?;
    info!("Created output directory: {}", dir.display());
    Ok(())
}

/// Write the `.log` and `.json` files for `records` into `dir`
pub async fn write_output_files(
    records: &[VideoRecord],
    dir: &Path,
    now: DateTime<Local>,
) -> Result<OutputFiles, VideoResolutionError> {
    ensure_output_directory(dir).await?;

    let base = base_file_name(&now);
    let files = OutputFiles {
        log: dir.join(format!("{}.log", base)),
        json: dir.join(format!("{}.json", base)),
    };

    let log: String = Report::new(records)
        .log_lines()
        .iter()
        .map(|line| format!("{}\n", line))
        .collect();
    fs::write(&files.log, log).await?;
    debug!("Wrote log file: {}", files.log.display());

    fs::write(&files.json, records_document(records)?).await?;
    debug!("Wrote json file: {}", files.json.display());

    Ok(files)
}
