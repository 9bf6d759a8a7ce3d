//! Shared constants for the smoke-test.
//!
//! Everything the checklist treats as fixed lives here so the values stay
//! consistent between the clip generator, the recognizer, and the tests.

/// Sample rate of the generated test clip in Hz.
///
/// 16kHz is the standard rate for speech recognition; Vosk models are
/// trained against it.
pub const SAMPLE_RATE: u32 = 16_000;

/// Duration of the generated test clip in seconds.
pub const CLIP_SECS: u32 = 2;

/// Total frames in the generated clip (`SAMPLE_RATE * CLIP_SECS`).
pub const CLIP_FRAMES: u32 = SAMPLE_RATE * CLIP_SECS;

/// Samples fed to the recognizer per read.
///
/// The final chunk of a file may be shorter; the recognizer accepts
/// arbitrary chunk lengths.
pub const CHUNK_SAMPLES: usize = 4000;

/// Model directory name the locator searches for.
pub const MODEL_DIR_NAME: &str = "vosk-model-small-cn-0.22";

/// File name of the generated clip inside the platform temp directory.
pub const CLIP_FILE_NAME: &str = "voskcheck-test-audio.wav";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_frames_match_rate_and_duration() {
        assert_eq!(CLIP_FRAMES, 32_000);
    }

    #[test]
    fn clip_payload_is_64000_bytes() {
        // 16-bit mono: two bytes per frame.
        assert_eq!(CLIP_FRAMES as usize * 2, 64_000);
    }
}
