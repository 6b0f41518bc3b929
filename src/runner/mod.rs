//! # Runner Module
//!
//! Ties the stages of a run together:
//! - `video_resolution`: the orchestrator (resolve, probe, report, output)
//! - `run_context`: per-run state (files, records, diagnostics)

pub mod run_context;
pub mod video_resolution;

pub use run_context::{Diagnostic, DiagnosticKind, RunContext};
pub use video_resolution::{RunOutput, RunReport, VideoResolution};
