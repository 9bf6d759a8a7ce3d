//! voskcheck - smoke-test for a Vosk speech-to-text installation
//!
//! Runs a fixed checklist: library present, model found, model loads, a
//! silent test clip generates, and the clip streams through a recognizer
//! end-to-end. Exit code 0 means the installation is ready.

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

pub mod audio;
pub mod checklist;
pub mod cli;
pub mod defaults;
pub mod error;
pub mod model;
pub mod output;
pub mod recognizer;

// Checklist surface
pub use checklist::{ChecklistOptions, RunReport, Step, Verdict, run_checklist};

// Error handling
pub use error::{CheckError, Result};

// Console reporting
pub use output::Reporter;

/// Build version string with optional git commit hash.
///
/// Returns `"0.1.0+abc1234"` when git hash is available, `"0.1.0"` otherwise.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => format!("{}+{}", version, hash),
        _ => version.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_string_starts_with_cargo_version() {
        let ver = version_string();
        assert!(
            ver.starts_with(env!("CARGO_PKG_VERSION")),
            "version_string should start with CARGO_PKG_VERSION, got: {}",
            ver
        );
    }
}
