//! # Video Resolution Orchestrator
//!
//! Runs the stages of the tool one after the other:
//! 1. resolve input files (fatal on error)
//! 2. probe each file once, in order
//! 3. write `.log`/`.json` reports when an output directory is configured
//! 4. build the return value for the configured `OutputMode`
//!
//! A missing ffprobe ends the run immediately. Every other problem is
//! recorded as a `Diagnostic` and the run carries on.

use crate::{
    config::{Config, OutputMode},
    error::{ProbeError, VideoResolutionError},
    file_manager::{resolve_inputs, InputParams},
    json_output::JsonOutput,
    output::{write_output_files, OutputFiles},
    progress::{ProbeStats, ProgressManager},
    prober::Prober,
    record::VideoRecord,
    report::Report,
    runner::run_context::{Diagnostic, DiagnosticKind, RunContext},
};
use anyhow::Result;
use chrono::Local;
use tracing::{debug, info, warn};

/// What a run returns, depending on the output mode
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutput {
    Lines(Vec<String>),
    Json(String),
    Records(Vec<VideoRecord>),
}

/// Result of a completed run
#[derive(Debug)]
pub struct RunReport {
    pub output: RunOutput,
    pub diagnostics: Vec<Diagnostic>,
    pub output_files: Option<OutputFiles>,
    pub stats: ProbeStats,
}

/// Main orchestrator
pub struct VideoResolution<P: Prober> {
    config: Config,
    prober: P,
}

impl<P: Prober> VideoResolution<P> {
    pub fn new(config: Config, prober: P) -> Self {
        Self { config, prober }
    }

    /// Run the whole pipeline for `input`
    pub async fn run(&self, input: &InputParams) -> Result<RunReport> {
        let files = resolve_inputs(input)?;
        info!("🎬 Found {} video files to process", files.len());

        let mut ctx = RunContext::new(files);
        let stats = self.probe_all(&mut ctx)?;
        info!("{}", stats.format_summary());

        let output_files = self.write_report_files(&mut ctx).await;

        let RunContext {
            records,
            diagnostics,
            ..
        } = ctx;

        Ok(RunReport {
            output: self.build_output(records)?,
            diagnostics,
            output_files,
            stats,
        })
    }

    fn probe_all(&self, ctx: &mut RunContext) -> Result<ProbeStats> {
        let total = ctx.files.len();
        let progress = if self.config.show_progress && total > 1 {
            ProgressManager::new(total as u64)
        } else {
            ProgressManager::hidden()
        };
        let mut stats = ProbeStats::new();

        for (index, path) in ctx.files.iter().enumerate() {
            progress.update(&format!("Processing file {} of {}", index + 1, total));

            match self.prober.probe(path) {
                Ok(info) => {
                    debug!("Probed {}: {:?}", path.display(), info);
                    ctx.records.push(VideoRecord::from_probe(path, info));
                    stats.add_probed();
                }
                Err(ProbeError::Unavailable(msg)) => {
                    progress.finish();
                    return Err(VideoResolutionError::ProberUnavailable(msg).into());
                }
                Err(ProbeError::Failed(reason)) => {
                    warn!("Failed to probe {}: {}", path.display(), reason);
                    ctx.diagnostics
                        .push(Diagnostic::new(DiagnosticKind::ProbeFailure, path, reason));
                    stats.add_failed();
                }
            }
        }

        progress.finish();
        Ok(stats)
    }

    async fn write_report_files(&self, ctx: &mut RunContext) -> Option<OutputFiles> {
        let dir = self.config.output_directory.as_deref()?;

        match write_output_files(&ctx.records, dir, Local::now()).await {
            Ok(files) => {
                info!("💾 Results written to {} and {}", files.log.display(), files.json.display());
                Some(files)
            }
            Err(e) => {
                let kind = match &e {
                    VideoResolutionError::OutputDirectory { .. } => DiagnosticKind::OutputDirectory,
                    _ => DiagnosticKind::OutputWrite,
                };
                warn!("Skipping report files: {}", e);
                ctx.add_diagnostic(kind, dir, e.to_string());
                None
            }
        }
    }

    fn build_output(&self, records: Vec<VideoRecord>) -> Result<RunOutput> {
        Ok(match self.config.output_mode {
            OutputMode::Object => RunOutput::Records(records),
            OutputMode::Json => RunOutput::Json(JsonOutput::new(&records).to_pretty_string()?),
            OutputMode::Text => RunOutput::Lines(Report::new(&records).host_lines()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prober::ProbeInfo;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::fs::File;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Prober answering from a table, recording every call
    #[derive(Default)]
    struct FakeProber {
        answers: HashMap<PathBuf, Result<ProbeInfo, ProbeError>>,
        calls: RefCell<Vec<PathBuf>>,
    }

    impl FakeProber {
        fn answer(mut self, path: &Path, result: Result<ProbeInfo, ProbeError>) -> Self {
            self.answers.insert(path.to_path_buf(), result);
            self
        }
    }

    impl Prober for FakeProber {
        fn probe(&self, path: &Path) -> Result<ProbeInfo, ProbeError> {
            self.calls.borrow_mut().push(path.to_path_buf());
            self.answers
                .get(path)
                .cloned()
                .unwrap_or_else(|| Err(ProbeError::Failed("unexpected file".to_string())))
        }
    }

    fn info(width: u32, height: u32, size_in_bytes: u64) -> Result<ProbeInfo, ProbeError> {
        Ok(ProbeInfo {
            width: Some(width),
            height: Some(height),
            size_in_bytes,
        })
    }

    fn quiet_config() -> Config {
        Config {
            show_progress: false,
            ..Default::default()
        }
    }

    fn create_files(dir: &Path, names: &[&str]) -> Vec<PathBuf> {
        names
            .iter()
            .map(|name| {
                let path = dir.join(name);
                File::create(&path).unwrap();
                path
            })
            .collect()
    }

    #[tokio::test]
    async fn test_probe_failure_does_not_stop_the_run() {
        let dir = TempDir::new().unwrap();
        let files = create_files(dir.path(), &["a.mp4", "b.mp4", "c.mp4"]);

        let prober = FakeProber::default()
            .answer(&files[0], info(1920, 1080, 2_097_152))
            .answer(&files[1], Err(ProbeError::Failed("moov atom not found".to_string())))
            .answer(&files[2], info(1280, 720, 1_048_576));
        let runner = VideoResolution::new(
            Config {
                output_mode: OutputMode::Object,
                ..quiet_config()
            },
            prober,
        );

        let report = runner
            .run(&InputParams {
                files: files.clone(),
                ..Default::default()
            })
            .await
            .unwrap();

        match report.output {
            RunOutput::Records(records) => {
                assert_eq!(records.len(), 2);
                assert_eq!(records[0].file, files[0].to_string_lossy());
                assert_eq!(records[1].file, files[2].to_string_lossy());
            }
            other => panic!("Unexpected output: {:?}", other),
        }
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].kind, DiagnosticKind::ProbeFailure);
        assert_eq!(report.diagnostics[0].path, files[1]);
        assert_eq!(report.stats.files_failed, 1);
        assert_eq!(runner.prober.calls.borrow().as_slice(), files.as_slice());
    }

    #[tokio::test]
    async fn test_missing_prober_is_fatal() {
        let dir = TempDir::new().unwrap();
        let files = create_files(dir.path(), &["a.mp4", "b.mp4"]);

        let prober = FakeProber::default()
            .answer(&files[0], Err(ProbeError::Unavailable("ffprobe".to_string())))
            .answer(&files[1], info(320, 240, 1));
        let runner = VideoResolution::new(quiet_config(), prober);

        let err = runner
            .run(&InputParams {
                files: files.clone(),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<VideoResolutionError>(),
            Some(VideoResolutionError::ProberUnavailable(_))
        ));
        // reported once, remaining files untouched
        assert_eq!(runner.prober.calls.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_input_error_happens_before_probing() {
        let dir = TempDir::new().unwrap();
        let runner = VideoResolution::new(quiet_config(), FakeProber::default());

        let err = runner
            .run(&InputParams {
                files: vec![dir.path().join("missing.mp4")],
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<VideoResolutionError>(),
            Some(VideoResolutionError::Input(_))
        ));
        assert!(runner.prober.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_single_file_text_output() {
        let dir = TempDir::new().unwrap();
        let files = create_files(dir.path(), &["sample.mp4"]);
        let prober = FakeProber::default().answer(&files[0], info(320, 240, 570_000));
        let runner = VideoResolution::new(quiet_config(), prober);

        let report = runner
            .run(&InputParams {
                file: Some(files[0].clone()),
                ..Default::default()
            })
            .await
            .unwrap();

        let RunOutput::Lines(lines) = report.output else {
            panic!("expected text output");
        };
        assert!(lines[5].contains("320x240"));
        assert!(lines[5].contains(&format!("{}Mb", 570_000f64 / 1_048_576.0)));
        assert!(lines[5].ends_with(&*files[0].to_string_lossy()));
        assert!(report.output_files.is_none());
    }

    #[tokio::test]
    async fn test_json_mode() {
        let dir = TempDir::new().unwrap();
        let files = create_files(dir.path(), &["sample.mp4"]);
        let prober = FakeProber::default().answer(&files[0], info(320, 240, 1_048_576));
        let runner = VideoResolution::new(
            Config {
                output_mode: OutputMode::Json,
                ..quiet_config()
            },
            prober,
        );

        let report = runner
            .run(&InputParams {
                files: files.clone(),
                ..Default::default()
            })
            .await
            .unwrap();

        let RunOutput::Json(json) = report.output else {
            panic!("expected json output");
        };
        let parsed: JsonOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.files.len(), 1);
        assert_eq!(parsed.files[0].resolution, "320x240");
        assert_eq!(parsed.files[0].size_in_mb, 1.0);
    }

    #[tokio::test]
    async fn test_output_directory_failure_is_a_warning() {
        let dir = TempDir::new().unwrap();
        let files = create_files(dir.path(), &["a.mkv", "b.mkv"]);
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();
        let output_directory = blocker.join("reports");

        let prober = FakeProber::default()
            .answer(&files[0], info(1920, 1080, 1))
            .answer(&files[1], info(1280, 720, 1));
        let runner = VideoResolution::new(
            Config {
                output_directory: Some(output_directory.clone()),
                ..quiet_config()
            },
            prober,
        );

        let report = runner
            .run(&InputParams {
                input_directory: Some(dir.path().to_path_buf()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(matches!(report.output, RunOutput::Lines(ref lines) if lines.len() == 19));
        assert!(report.output_files.is_none());
        assert!(!output_directory.exists());
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].kind, DiagnosticKind::OutputDirectory);
    }

    #[tokio::test]
    async fn test_report_files_written() {
        let dir = TempDir::new().unwrap();
        let files = create_files(dir.path(), &["a.mkv"]);
        let output_directory = dir.path().join("out");

        let prober = FakeProber::default().answer(&files[0], info(640, 480, 1));
        let runner = VideoResolution::new(
            Config {
                output_directory: Some(output_directory.clone()),
                ..quiet_config()
            },
            prober,
        );

        let report = runner
            .run(&InputParams {
                files,
                ..Default::default()
            })
            .await
            .unwrap();

        let written = report.output_files.unwrap();
        assert!(written.log.is_file());
        assert!(written.json.is_file());
        assert!(report.diagnostics.is_empty());

        // the log keeps both sections even for a single record
        let log = std::fs::read_to_string(&written.log).unwrap();
        assert!(log.contains("Ordered by resolution:"));
        assert!(log.contains("Ordered by name:"));
    }
}
