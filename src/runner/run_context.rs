//! # Run Context
//!
//! All state accumulated by one run. Created by the orchestrator, passed
//! through the stages and dropped once the output has been produced.

use crate::record::VideoRecord;
use std::path::{Path, PathBuf};

/// Category of a non-fatal problem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A single file could not be probed
    ProbeFailure,
    /// The output directory was missing and could not be created
    OutputDirectory,
    /// Report files could not be written
    OutputWrite,
}

/// A recoverable problem recorded during a run
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub path: PathBuf,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, path: &Path, message: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.to_path_buf(),
            message: message.into(),
        }
    }
}

/// State of one run
#[derive(Debug, Default)]
pub struct RunContext {
    pub files: Vec<PathBuf>,
    pub records: Vec<VideoRecord>,
    pub diagnostics: Vec<Diagnostic>,
}

impl RunContext {
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self {
            files,
            ..Default::default()
        }
    }

    pub fn add_diagnostic(&mut self, kind: DiagnosticKind, path: &Path, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::new(kind, path, message));
    }
}
