//! # JSON Output Module
//!
//! Structured JSON representations of the probed records.
//!
//! ## Documents:
//! - records file (`VideoResolution_*.json`): indented array of `JsonFile`
//! - `--json` result: `{ "Files": [ JsonFile, ... ] }`
//!
//! Both carry the stored fields (`File`, `Width`, `Height`, `SizeInBytes`)
//! plus the derived `Resolution`, `SizeInMb` and `SizeInGb`. Reading either
//! back into `VideoRecord` ignores the derived fields.

use crate::record::VideoRecord;
use serde::{Deserialize, Serialize};

/// One record with its derived values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JsonFile {
    pub file: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub size_in_bytes: u64,
    pub resolution: String,
    pub size_in_mb: f64,
    pub size_in_gb: f64,
}

/// Document returned in JSON result mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonOutput {
    #[serde(rename = "Files")]
    pub files: Vec<JsonFile>,
}

impl From<&VideoRecord> for JsonFile {
    fn from(record: &VideoRecord) -> Self {
        Self {
            file: record.file.clone(),
            width: record.width,
            height: record.height,
            size_in_bytes: record.size_in_bytes,
            resolution: record.resolution(),
            size_in_mb: record.size_in_mb(),
            size_in_gb: record.size_in_gb(),
        }
    }
}

impl JsonOutput {
    pub fn new(records: &[VideoRecord]) -> Self {
        Self {
            files: records.iter().map(JsonFile::from).collect(),
        }
    }

    pub fn to_pretty_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Indented JSON array written to the `.json` report file
pub fn records_document(records: &[VideoRecord]) -> serde_json::Result<String> {
    let files: Vec<JsonFile> = records.iter().map(JsonFile::from).collect();
    serde_json::to_string_pretty(&files)
}
