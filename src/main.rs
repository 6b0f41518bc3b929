//! # Video Resolution - Main Entry Point
//!
//! ## Responsibilities:
//! - Parses command line arguments with `clap`
//! - Initializes `tracing` logging on stderr
//! - Merges the configuration file with command line overrides
//! - Runs the orchestrator and prints its output on stdout
//!
//! ## Execution flow:
//! 1. Parse CLI arguments
//! 2. Configure logging (INFO, or DEBUG with `--verbose`, or `RUST_LOG`)
//! 3. Load the config file and apply overrides
//! 4. Resolve inputs, probe, write reports
//! 5. Print text lines, a JSON document or JSON lines
//!
//! ## Usage examples:
//! ```bash
//! video-resolution --file ExampleFile.mkv
//! video-resolution --input-directory /videos --recursive --output-directory /videos/logs
//! video-resolution --file ExampleFile.mkv --input-directory /videos --json
//! find . -name '*.mkv' | video-resolution --files -
//! ```

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use video_resolution::file_manager::read_file_list;
use video_resolution::{Config, FfprobeProber, InputParams, OutputMode, RunOutput, VideoResolution};

#[derive(Parser)]
#[command(name = "video-resolution")]
#[command(about = "Probe video files for their resolution and file size")]
struct Args {
    /// Files to process (use `-` to read paths from stdin, one per line)
    #[arg(long, num_args = 1.., value_name = "PATH")]
    files: Vec<PathBuf>,

    /// Single file: in the current directory, a relative or full path, or a name inside --input-directory
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Directory to scan for videos, or the base directory for --file
    #[arg(short, long)]
    input_directory: Option<PathBuf>,

    /// Also search sub-directories of --input-directory
    #[arg(short, long)]
    recursive: bool,

    /// Directory for the .log and .json report files
    #[arg(short, long)]
    output_directory: Option<PathBuf>,

    /// Print a JSON document instead of the text report
    #[arg(long)]
    json: bool,

    /// Print the raw records as JSON lines (takes priority over --json)
    #[arg(long)]
    object: bool,

    /// Path to the ffprobe executable
    #[arg(long, value_name = "PATH")]
    ffprobe: Option<PathBuf>,

    /// Configuration file (default: <config dir>/video-resolution/config.json)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Do not show a progress bar
    #[arg(long)]
    no_progress: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if args.verbose { "debug" } else { "info" }));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = load_config(&args).await?;

    let files = if args.files.len() == 1 && args.files[0] == Path::new("-") {
        read_file_list(std::io::stdin().lock())?
    } else {
        args.files
    };
    let input = InputParams {
        files,
        file: args.file,
        input_directory: args.input_directory,
        recursive: args.recursive,
    };

    let prober = FfprobeProber::from_config(&config);
    let runner = VideoResolution::new(config, prober);
    let report = runner.run(&input).await?;

    if !report.diagnostics.is_empty() {
        warn!("Finished with {} warning(s)", report.diagnostics.len());
    }

    match report.output {
        RunOutput::Lines(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        RunOutput::Json(json) => println!("{}", json),
        RunOutput::Records(records) => {
            for record in &records {
                println!("{}", serde_json::to_string(record)?);
            }
        }
    }

    Ok(())
}

/// Config file values, overridden by whatever was given on the command line
async fn load_config(args: &Args) -> Result<Config> {
    let mut config = match args.config.clone().or_else(Config::default_path) {
        Some(path) => Config::from_file(&path).await?,
        None => Config::default(),
    };

    if let Some(ref dir) = args.output_directory {
        config.output_directory = Some(dir.clone());
    }
    if args.json || args.object {
        config.output_mode = OutputMode::from_flags(args.json, args.object);
    }
    if let Some(ref ffprobe) = args.ffprobe {
        config.ffprobe_path = Some(ffprobe.clone());
    }
    if args.no_progress {
        config.show_progress = false;
    }

    config.validate()?;
    Ok(config)
}
