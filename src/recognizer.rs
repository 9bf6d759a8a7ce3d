//! Streaming recognition over the generated clip.
//!
//! Only compiled against libvosk when the `vosk` feature is enabled; without
//! it every entry point reports that recognition support is missing, which
//! is exactly what the smoke-test should say for such a build.

use crate::error::Result;
use std::path::Path;

/// How chatty libvosk itself is allowed to be during recognition.
///
/// Explicit per-run configuration rather than a hidden process-global set
/// by some earlier step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryLogLevel {
    /// Only libvosk errors.
    Quiet,
    /// Full libvosk diagnostics.
    Verbose,
}

/// Accumulated result of a full recognition pass.
#[derive(Debug, Default)]
pub struct RecognitionOutcome {
    /// Chunks fed to the recognizer.
    pub chunks: usize,
    /// Non-empty text fragments, in the order the recognizer emitted them.
    pub fragments: Vec<String>,
}

impl RecognitionOutcome {
    /// Append a fragment unless it is empty after trimming.
    ///
    /// Returns the stored fragment so callers can report it immediately.
    pub fn push(&mut self, text: &str) -> Option<&str> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.fragments.push(trimmed.to_string());
        self.fragments.last().map(String::as_str)
    }

    /// Space-joined transcript, or `None` when nothing was recognized.
    pub fn transcript(&self) -> Option<String> {
        if self.fragments.is_empty() {
            None
        } else {
            Some(self.fragments.join(" "))
        }
    }
}

/// Report whether recognition support is compiled in.
///
/// With the `vosk` feature the model constructor, recognizer constructor,
/// and log-level setter are all resolved at link time, so reaching this
/// function at all means they are usable.
#[cfg(feature = "vosk")]
pub fn library_available() -> Result<()> {
    Ok(())
}

#[cfg(not(feature = "vosk"))]
pub fn library_available() -> Result<()> {
    Err(crate::error::CheckError::RecognitionUnavailable)
}

/// Stream `audio_path` through a recognizer bound to the model at
/// `model_path`, in fixed-size chunks.
///
/// Preconditions checked before any recognizer exists: the audio file is
/// present and its format is mono 16-bit integer PCM. `on_fragment` is
/// invoked for each non-empty fragment as it is accepted, matching the
/// on-the-fly reporting an operator expects from a long file.
#[cfg(feature = "vosk")]
pub fn run_recognition(
    model_path: &Path,
    audio_path: &Path,
    log_level: LibraryLogLevel,
    mut on_fragment: impl FnMut(&str),
) -> Result<RecognitionOutcome> {
    use crate::audio::{self, ClipReader};
    use crate::error::CheckError;
    use vosk::{DecodingState, Recognizer};

    vosk::set_log_level(match log_level {
        LibraryLogLevel::Quiet => vosk::LogLevel::Error,
        LibraryLogLevel::Verbose => vosk::LogLevel::Info,
    });

    let mut reader = ClipReader::open(audio_path)?;
    let spec = reader.spec();
    audio::validate_spec(&spec)?;

    let model = crate::model::load_model(model_path)?;
    // The recognizer is bound to the file's own declared rate, so generator
    // and recognizer agree by construction.
    let mut recognizer =
        Recognizer::new(&model, spec.sample_rate as f32).ok_or_else(|| CheckError::Recognition {
            message: format!(
                "failed to create recognizer at {} Hz",
                spec.sample_rate
            ),
        })?;
    recognizer.set_words(true);

    let mut outcome = RecognitionOutcome::default();
    loop {
        let chunk = reader.next_chunk()?;
        if chunk.is_empty() {
            break;
        }
        outcome.chunks += 1;

        let state = recognizer
            .accept_waveform(&chunk)
            .map_err(|e| CheckError::Recognition {
                message: format!("waveform rejected: {:?}", e),
            })?;

        if let DecodingState::Finalized = state
            && let Some(text) = complete_text(recognizer.result())
            && let Some(stored) = outcome.push(&text)
        {
            on_fragment(stored);
        }
    }

    if let Some(text) = complete_text(recognizer.final_result())
        && let Some(stored) = outcome.push(&text)
    {
        on_fragment(stored);
    }

    Ok(outcome)
}

#[cfg(not(feature = "vosk"))]
pub fn run_recognition(
    _model_path: &Path,
    _audio_path: &Path,
    _log_level: LibraryLogLevel,
    _on_fragment: impl FnMut(&str),
) -> Result<RecognitionOutcome> {
    Err(crate::error::CheckError::RecognitionUnavailable)
}

/// Extract the transcript text from a complete result, taking the first
/// alternative when several are returned.
#[cfg(feature = "vosk")]
fn complete_text(result: vosk::CompleteResult) -> Option<String> {
    match result {
        vosk::CompleteResult::Single(single) => Some(single.text.to_string()),
        vosk::CompleteResult::Multiple(multiple) => multiple
            .alternatives
            .first()
            .map(|alt| alt.text.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_non_empty_fragments_in_order() {
        let mut outcome = RecognitionOutcome::default();
        assert_eq!(outcome.push("你好"), Some("你好"));
        assert_eq!(outcome.push("世界"), Some("世界"));
        assert_eq!(outcome.fragments, vec!["你好", "世界"]);
    }

    #[test]
    fn push_drops_empty_and_whitespace_only_text() {
        let mut outcome = RecognitionOutcome::default();
        assert_eq!(outcome.push(""), None);
        assert_eq!(outcome.push("   "), None);
        assert_eq!(outcome.push("\t\n"), None);
        assert!(outcome.fragments.is_empty());
        assert_eq!(outcome.transcript(), None);
    }

    #[test]
    fn push_trims_surrounding_whitespace() {
        let mut outcome = RecognitionOutcome::default();
        assert_eq!(outcome.push("  hello  "), Some("hello"));
        assert_eq!(outcome.fragments, vec!["hello"]);
    }

    #[test]
    fn transcript_joins_fragments_with_single_spaces() {
        let mut outcome = RecognitionOutcome::default();
        outcome.push("one");
        outcome.push("two");
        outcome.push("three");
        assert_eq!(outcome.transcript().as_deref(), Some("one two three"));
    }

    #[cfg(not(feature = "vosk"))]
    #[test]
    fn library_unavailable_without_feature() {
        assert!(matches!(
            library_available(),
            Err(crate::error::CheckError::RecognitionUnavailable)
        ));
    }

    #[cfg(feature = "vosk")]
    #[test]
    fn library_available_with_feature() {
        assert!(library_available().is_ok());
    }
}
