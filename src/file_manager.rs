//! # File Management Module
//!
//! Turns the input parameters of a run into the concrete list of files to probe.
//!
//! ## Responsibilities:
//! - Resolution of the three input modes (file list, single file, directory)
//! - Existence checks before any probing happens
//! - Directory discovery, flat or recursive, with an extension allow-list
//! - Parsing newline-separated file lists (`--files -`)
//!
//! ## Resolution order (first match wins):
//! 1. `files`: every entry must exist, returned verbatim
//! 2. `file`: as-is, or joined to `input_directory`
//! 3. `input_directory`: scanned for video files
//! 4. nothing usable: error
//!
//! ## Supported extensions:
//! AVI, DIVX, ISO, M2TS, M4V, MKV, MP4, MPG, X265, WMV (case-insensitive)
//!
//! ## Example:
//! ```rust,no_run
//! use video_resolution::file_manager::{resolve_inputs, InputParams};
//!
//! let params = InputParams {
//!     input_directory: Some("/videos".into()),
//!     recursive: true,
//!     ..Default::default()
//! };
//! let files = resolve_inputs(&params)?;
//! # Ok::<(), video_resolution::VideoResolutionError>(())
//! ```

use crate::error::VideoResolutionError;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Extensions picked up by a directory scan
pub const VIDEO_EXTENSIONS: [&str; 10] = [
    "avi", "divx", "iso", "m2ts", "m4v", "mkv", "mp4", "mpg", "x265", "wmv",
];

/// Input parameters of a run. Only one mode is expected to be used at a time.
#[derive(Debug, Clone, Default)]
pub struct InputParams {
    /// Explicit list of files, highest priority
    pub files: Vec<PathBuf>,
    /// Single file, relative to cwd, absolute, or relative to `input_directory`
    pub file: Option<PathBuf>,
    /// Base directory for `file`, or the directory to scan
    pub input_directory: Option<PathBuf>,
    /// Scan sub-directories too
    pub recursive: bool,
}

/// Resolve the input parameters into the ordered list of files to probe
pub fn resolve_inputs(params: &InputParams) -> Result<Vec<PathBuf>, VideoResolutionError> {
    if !params.files.is_empty() {
        if !params.files.iter().all(|f| f.is_file()) {
            return Err(VideoResolutionError::Input("one or more files not found".to_string()));
        }

        debug!("Using {} explicitly supplied files", params.files.len());
        return Ok(params.files.clone());
    }

    let input_directory = params.input_directory.as_deref().filter(|d| !is_blank(d));

    if let Some(file) = params.file.as_deref().filter(|f| !is_blank(f)) {
        return resolve_single_file(file, input_directory);
    }

    if let Some(dir) = input_directory {
        if !dir.is_dir() {
            return Err(VideoResolutionError::Input(format!(
                "directory not found: {}",
                dir.display()
            )));
        }

        return find_video_files(dir, params.recursive);
    }

    Err(VideoResolutionError::Input("no valid input parameters".to_string()))
}

fn resolve_single_file(file: &Path, input_directory: Option<&Path>) -> Result<Vec<PathBuf>, VideoResolutionError> {
    if file.is_file() {
        return Ok(vec![file.to_path_buf()]);
    }

    if let Some(dir) = input_directory {
        let joined = dir.join(file);
        debug!("Trying {} relative to input directory", joined.display());
        if joined.is_file() {
            return Ok(vec![joined]);
        }
    }

    Err(VideoResolutionError::Input(format!("file not found: {}", file.display())))
}

/// Find supported video files under `dir`, in directory-listing order.
///
/// Symlinked files are included, symlinked directories are not descended into.
/// An unreadable entry ends the scan with an error.
pub fn find_video_files(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>, VideoResolutionError> {
    let mut walker = WalkDir::new(dir).min_depth(1);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| {
            VideoResolutionError::Input(format!("cannot scan {}: {}", dir.display(), e))
        })?;

        let path = entry.path();
        if path.is_file() && is_supported_format(path) {
            files.push(entry.into_path());
        }
    }

    debug!("Found {} video files in {}", files.len(), dir.display());
    Ok(files)
}

/// Check if a file extension is in the allow-list
pub fn is_supported_format(path: &Path) -> bool {
    match file_extension(path) {
        Some(ext) => VIDEO_EXTENSIONS.contains(&ext.to_lowercase().as_str()),
        None => false,
    }
}

/// Extension of `path`. A bare dot-name such as `.mkv` counts as the extension itself.
fn file_extension(path: &Path) -> Option<String> {
    if let Some(ext) = path.extension() {
        return Some(ext.to_string_lossy().into_owned());
    }

    let name = path.file_name()?.to_string_lossy();
    let ext = name.strip_prefix('.').filter(|rest| !rest.is_empty())?;
    Some(ext.to_string())
}

/// Read a newline-separated file list, skipping blank lines and trimming whitespace
pub fn read_file_list<R: BufRead>(reader: R) -> Result<Vec<PathBuf>, VideoResolutionError> {
    let mut files = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            files.push(PathBuf::from(trimmed));
        }
    }
    Ok(files)
}

fn is_blank(path: &Path) -> bool {
    path.to_string_lossy().trim().is_empty()
}
