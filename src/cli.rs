//! Command-line interface for voskcheck
//!
//! Provides argument parsing using clap derive macros.

use clap::Parser;
use std::path::PathBuf;

/// Smoke-test a Vosk speech-to-text installation
#[derive(Parser, Debug)]
#[command(
    name = "voskcheck",
    version,
    about = "Smoke-test a Vosk speech-to-text installation"
)]
pub struct Cli {
    /// Model directory to use (skips the candidate search)
    #[arg(long, value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// Keep the generated test clip instead of deleting it
    #[arg(long)]
    pub keep_audio: bool,

    /// Print a machine-readable JSON report on stdout
    #[arg(long)]
    pub json: bool,

    /// Suppress informational output (failures still printed)
    #[arg(short, long)]
    pub quiet: bool,

    /// Show the recognition library's own log output
    #[arg(short, long)]
    pub verbose: bool,
}
