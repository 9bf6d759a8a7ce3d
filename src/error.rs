//! Error types for voskcheck.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    // Missing dependency
    #[error("recognition support is not compiled in (rebuild with --features vosk)")]
    RecognitionUnavailable,

    // Missing resources
    #[error("model directory not found; checked: {checked}")]
    ModelNotFound { checked: String },

    #[error("audio file not found at {path}")]
    AudioFileNotFound { path: String },

    // Malformed resources
    #[error("failed to load model from {path} (malformed or incompatible model directory)")]
    ModelLoad { path: String },

    #[error("audio format mismatch: expected {expected}, got {actual}")]
    AudioFormatMismatch { expected: String, actual: String },

    // Runtime failures during processing
    #[error("recognizer error: {message}")]
    Recognition { message: String },

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, CheckError>;
