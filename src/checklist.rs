//! The smoke-test itself: a fixed sequence of gated steps.
//!
//! Modeled as an explicit linear state machine rather than nested
//! conditionals, so "which step failed" is structural and lands in the JSON
//! report instead of living only in a print statement.

use crate::defaults::{CLIP_SECS, MODEL_DIR_NAME};
use crate::error::CheckError;
use crate::output::Reporter;
use crate::recognizer::LibraryLogLevel;
use crate::{audio, model, recognizer};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// The checklist steps, in execution order. Each gates the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Library,
    LocateModel,
    LoadModel,
    GenerateAudio,
    Recognize,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Library => "library check",
            Step::LocateModel => "model location",
            Step::LoadModel => "model load",
            Step::GenerateAudio => "audio generation",
            Step::Recognize => "recognition",
        };
        f.write_str(name)
    }
}

/// Terminal state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Verdict {
    Passed,
    Failed { step: Step },
}

/// One completed (or failed) step.
#[derive(Debug, Serialize)]
pub struct StepReport {
    pub step: Step,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Full run report; serialized as-is for `--json`.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub verdict: Verdict,
    pub steps: Vec<StepReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunks_processed: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
    pub clip_removed: bool,
}

impl RunReport {
    pub fn passed(&self) -> bool {
        self.verdict == Verdict::Passed
    }

    /// 0 when all checks passed, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.passed() { 0 } else { 1 }
    }
}

/// Knobs for a run. Everything has a sensible default for the plain
/// `voskcheck` invocation.
#[derive(Debug, Clone)]
pub struct ChecklistOptions {
    /// Explicit model directory; skips the candidate search.
    pub model_override: Option<PathBuf>,
    /// Keep the generated clip instead of deleting it on success.
    pub keep_audio: bool,
    /// How chatty libvosk may be during the recognition step.
    pub log_level: LibraryLogLevel,
}

impl Default for ChecklistOptions {
    fn default() -> Self {
        Self {
            model_override: None,
            keep_audio: false,
            log_level: LibraryLogLevel::Quiet,
        }
    }
}

/// Scratch state threaded through the steps.
#[derive(Default)]
struct RunState {
    steps: Vec<StepReport>,
    model_path: Option<String>,
    clip_path: Option<String>,
    chunks_processed: Option<usize>,
    transcript: Option<String>,
    clip_removed: bool,
}

impl RunState {
    fn step_passed(&mut self, step: Step) {
        self.steps.push(StepReport {
            step,
            passed: true,
            error: None,
        });
    }

    fn into_report(self, verdict: Verdict) -> RunReport {
        RunReport {
            verdict,
            steps: self.steps,
            model_path: self.model_path,
            clip_path: self.clip_path,
            chunks_processed: self.chunks_processed,
            transcript: self.transcript,
            clip_removed: self.clip_removed,
        }
    }
}

/// Run the whole checklist, short-circuiting at the first failure.
pub fn run_checklist(options: &ChecklistOptions, reporter: &Reporter) -> RunReport {
    let mut state = RunState::default();

    let verdict = match run_steps(options, reporter, &mut state) {
        Ok(()) => Verdict::Passed,
        Err((step, error)) => {
            state.steps.push(StepReport {
                step,
                passed: false,
                error: Some(error.to_string()),
            });
            Verdict::Failed { step }
        }
    };

    reporter.summary(verdict == Verdict::Passed);
    state.into_report(verdict)
}

fn run_steps(
    options: &ChecklistOptions,
    reporter: &Reporter,
    state: &mut RunState,
) -> Result<(), (Step, CheckError)> {
    // 1. Library presence
    reporter.section(1, "Checking recognition library...");
    match recognizer::library_available() {
        Ok(()) => {
            reporter.pass("recognition library linked (model, recognizer, and log-level entry points usable)");
            state.step_passed(Step::Library);
        }
        Err(error) => {
            reporter.fail(&error);
            reporter.hint("rebuild with: cargo build --features vosk (requires libvosk)");
            return Err((Step::Library, error));
        }
    }

    // 2. Model location
    reporter.section(2, "Locating model...");
    let model_path = match model::locate_model(options.model_override.as_deref()) {
        Ok(path) => {
            reporter.pass(format!("found model at {}", path.display()));
            state.step_passed(Step::LocateModel);
            state.model_path = Some(path.display().to_string());
            path
        }
        Err(error) => {
            reporter.fail(&error);
            reporter.hint(format!(
                "place the '{MODEL_DIR_NAME}' directory in the current or parent directory, or pass --model <PATH>"
            ));
            return Err((Step::LocateModel, error));
        }
    };

    // 3. Model load
    reporter.section(3, "Loading model...");
    match model::verify_loads(&model_path) {
        Ok(()) => {
            reporter.pass(format!("model loaded from {}", model_path.display()));
            state.step_passed(Step::LoadModel);
        }
        Err(error) => {
            reporter.fail(&error);
            return Err((Step::LoadModel, error));
        }
    }

    // 4. Test clip generation
    reporter.section(4, "Generating test clip...");
    let clip_path = audio::clip_path();
    match audio::write_silent_clip(&clip_path) {
        Ok(()) => {
            reporter.pass(format!(
                "wrote {CLIP_SECS}s of silence to {}",
                clip_path.display()
            ));
            state.step_passed(Step::GenerateAudio);
            state.clip_path = Some(clip_path.display().to_string());
        }
        Err(error) => {
            reporter.fail(&error);
            return Err((Step::GenerateAudio, error));
        }
    }

    // 5. End-to-end recognition
    reporter.section(5, "Running recognition...");
    let outcome = recognizer::run_recognition(&model_path, &clip_path, options.log_level, |fragment| {
        reporter.pass(format!("recognized: {fragment}"))
    });
    match outcome {
        Ok(outcome) => {
            reporter.pass(format!("processed {} chunks", outcome.chunks));
            match outcome.transcript() {
                Some(text) => reporter.pass(format!("full transcript: {text}")),
                None => reporter.info("no text recognized (expected for a silent clip)"),
            }
            state.chunks_processed = Some(outcome.chunks);
            state.transcript = outcome.transcript();
            state.step_passed(Step::Recognize);
        }
        Err(error) => {
            reporter.fail(&error);
            return Err((Step::Recognize, error));
        }
    }

    // Cleanup is best-effort and never affects the verdict.
    if options.keep_audio {
        reporter.info(format!("keeping test clip at {}", clip_path.display()));
    } else if std::fs::remove_file(&clip_path).is_ok() {
        state.clip_removed = true;
        reporter.pass(format!("removed test clip {}", clip_path.display()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_display_names() {
        assert_eq!(Step::Library.to_string(), "library check");
        assert_eq!(Step::LocateModel.to_string(), "model location");
        assert_eq!(Step::Recognize.to_string(), "recognition");
    }

    #[test]
    fn verdict_serializes_with_status_tag() {
        let passed = serde_json::to_value(Verdict::Passed).unwrap();
        assert_eq!(passed["status"], "passed");

        let failed = serde_json::to_value(Verdict::Failed {
            step: Step::LocateModel,
        })
        .unwrap();
        assert_eq!(failed["status"], "failed");
        assert_eq!(failed["step"], "locate_model");
    }

    #[test]
    fn report_exit_codes() {
        let passed = RunState::default().into_report(Verdict::Passed);
        assert_eq!(passed.exit_code(), 0);

        let failed = RunState::default().into_report(Verdict::Failed {
            step: Step::LoadModel,
        });
        assert_eq!(failed.exit_code(), 1);
    }

    #[test]
    fn report_omits_absent_fields_in_json() {
        let report = RunState::default().into_report(Verdict::Failed {
            step: Step::Library,
        });
        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("transcript").is_none());
        assert!(value.get("chunks_processed").is_none());
        assert_eq!(value["clip_removed"], false);
    }

    #[cfg(not(feature = "vosk"))]
    #[test]
    fn without_vosk_the_run_fails_at_the_library_step() {
        let reporter = Reporter::new(true);
        let report = run_checklist(&ChecklistOptions::default(), &reporter);

        assert_eq!(
            report.verdict,
            Verdict::Failed {
                step: Step::Library
            }
        );
        assert_eq!(report.exit_code(), 1);
        assert_eq!(report.steps.len(), 1);
        assert!(!report.steps[0].passed);
        // Nothing past the gate ran.
        assert!(report.model_path.is_none());
        assert!(report.clip_path.is_none());
    }

    #[cfg(feature = "vosk")]
    #[test]
    fn missing_model_fails_at_locate_without_loading_or_recognizing() {
        let dir = tempfile::TempDir::new().unwrap();
        let options = ChecklistOptions {
            model_override: Some(dir.path().join("no-such-model")),
            ..ChecklistOptions::default()
        };
        let reporter = Reporter::new(true);
        let report = run_checklist(&options, &reporter);

        assert_eq!(
            report.verdict,
            Verdict::Failed {
                step: Step::LocateModel
            }
        );
        // Library passed, locate failed, nothing after.
        assert_eq!(report.steps.len(), 2);
        assert!(report.steps[0].passed);
        assert!(!report.steps[1].passed);
        assert!(report.clip_path.is_none());
        assert!(report.chunks_processed.is_none());
    }
}
