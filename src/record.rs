//! # Video Record Module
//!
//! One `VideoRecord` per successfully probed file.
//!
//! ## Stored fields:
//! - `file`: the path as supplied or resolved (never canonicalized)
//! - `width` / `height`: absent when no video stream was found
//! - `size_in_bytes`: 64-bit, video files regularly exceed 4 GiB
//!
//! ## Derived values:
//! - `size_in_mb()` / `size_in_gb()`: binary megabytes and gigabytes
//! - `resolution()`: the `"{width}x{height}"` label
//! - `result_line()`: one formatted row of the report table

use crate::prober::ProbeInfo;
use serde::{Deserialize, Serialize};
use std::path::Path;

const BYTES_PER_MB: f64 = 1_048_576.0;
const BYTES_PER_GB: f64 = 1_073_741_824.0;

/// Resolution and size of a single video file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VideoRecord {
    pub file: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub size_in_bytes: u64,
}

impl VideoRecord {
    pub fn new(file: impl Into<String>, width: Option<u32>, height: Option<u32>, size_in_bytes: u64) -> Self {
        Self {
            file: file.into(),
            width,
            height,
            size_in_bytes,
        }
    }

    /// Build a record from the prober's answer for `path`
    pub fn from_probe(path: &Path, info: ProbeInfo) -> Self {
        Self::new(path.to_string_lossy(), info.width, info.height, info.size_in_bytes)
    }

    pub fn size_in_mb(&self) -> f64 {
        self.size_in_bytes as f64 / BYTES_PER_MB
    }

    pub fn size_in_gb(&self) -> f64 {
        self.size_in_bytes as f64 / BYTES_PER_GB
    }

    /// `"{width}x{height}"`, absent sides render empty
    pub fn resolution(&self) -> String {
        format!("{}x{}", dimension(self.width), dimension(self.height))
    }

    /// Table row: resolution and size padded to 10, two-space gaps, then the path
    pub fn result_line(&self) -> String {
        let size = format!("{}Mb", self.size_in_mb());
        format!("{:<10}  {:<10}  {}", self.resolution(), size, self.file)
    }
}

fn dimension(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_label() {
        let record = VideoRecord::new("a.mp4", Some(320), Some(240), 0);
        assert_eq!(record.resolution(), "320x240");

        let record = VideoRecord::new("a.mp4", None, None, 0);
        assert_eq!(record.resolution(), "x");
    }

    #[test]
    fn test_size_conversions() {
        let record = VideoRecord::new("a.mp4", None, None, 1_572_864);
        assert_eq!(record.size_in_mb(), 1.5);

        let large = VideoRecord::new("big.mkv", None, None, 6 * 1_073_741_824);
        assert_eq!(large.size_in_gb(), 6.0);
        assert_eq!(large.size_in_mb(), 6144.0);
    }

    #[test]
    fn test_result_line_layout() {
        let record = VideoRecord::new("Assets/sample.mp4", Some(320), Some(240), 1_572_864);
        assert_eq!(record.result_line(), "320x240     1.5Mb       Assets/sample.mp4");
    }

    #[test]
    fn test_result_line_does_not_truncate() {
        let record = VideoRecord::new("x.mkv", Some(10240), Some(4320), 1_234_567_890);
        let line = record.result_line();
        assert!(line.starts_with("10240x4320  "));
        assert!(line.contains(&format!("{}Mb", 1_234_567_890f64 / 1_048_576.0)));
        assert!(line.ends_with("  x.mkv"));
    }

    #[test]
    fn test_serialized_field_names() {
        let record = VideoRecord::new("a.mp4", Some(1920), None, 42);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["File"], "a.mp4");
        assert_eq!(json["Width"], 1920);
        assert!(json["Height"].is_null());
        assert_eq!(json["SizeInBytes"], 42);
    }
}
