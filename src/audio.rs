//! Synthetic test clip generation and WAV access.
//!
//! The generator writes two seconds of digital silence in the exact format
//! the recognizer requires. `ClipReader` streams samples back out in
//! fixed-size chunks; the underlying file handle is released by drop on
//! every exit path, success or failure.

use crate::defaults::{CHUNK_SAMPLES, CLIP_FILE_NAME, CLIP_FRAMES, SAMPLE_RATE};
use crate::error::{CheckError, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Location of the generated clip: a fixed name in the platform temp dir.
pub fn clip_path() -> PathBuf {
    std::env::temp_dir().join(CLIP_FILE_NAME)
}

/// WAV spec of the generated clip: mono, 16-bit integer PCM, 16kHz.
pub fn clip_spec() -> hound::WavSpec {
    hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    }
}

/// Write the silent test clip: `CLIP_FRAMES` zero-valued frames.
pub fn write_silent_clip(path: &Path) -> Result<()> {
    let mut writer = hound::WavWriter::create(path, clip_spec())?;
    for _ in 0..CLIP_FRAMES {
        writer.write_sample(0i16)?;
    }
    writer.finalize()?;
    Ok(())
}

/// Check the format preconditions the recognizer requires: exactly one
/// channel, 16-bit samples, integer (uncompressed PCM) encoding.
///
/// Returns the first violated constraint; callers report it before any
/// recognizer is constructed.
pub fn validate_spec(spec: &hound::WavSpec) -> Result<()> {
    if spec.channels != 1 {
        return Err(CheckError::AudioFormatMismatch {
            expected: "1 channel (mono)".to_string(),
            actual: format!("{} channels", spec.channels),
        });
    }
    if spec.bits_per_sample != 16 {
        return Err(CheckError::AudioFormatMismatch {
            expected: "16-bit samples".to_string(),
            actual: format!("{}-bit samples", spec.bits_per_sample),
        });
    }
    if spec.sample_format != hound::SampleFormat::Int {
        return Err(CheckError::AudioFormatMismatch {
            expected: "integer PCM samples".to_string(),
            actual: "float samples".to_string(),
        });
    }
    Ok(())
}

/// Streams a WAV file in `CHUNK_SAMPLES`-sized chunks.
pub struct ClipReader<R: Read> {
    reader: hound::WavReader<R>,
}

impl ClipReader<std::io::BufReader<std::fs::File>> {
    /// Open a WAV file from disk. A missing file is reported as such rather
    /// than as a parse error.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CheckError::AudioFileNotFound {
                path: path.display().to_string(),
            });
        }
        Ok(Self {
            reader: hound::WavReader::open(path)?,
        })
    }
}

impl<R: Read> ClipReader<R> {
    /// Create from any reader (for testing/flexibility).
    pub fn from_reader(reader: R) -> Result<Self> {
        Ok(Self {
            reader: hound::WavReader::new(reader)?,
        })
    }

    /// Declared format of the file.
    pub fn spec(&self) -> hound::WavSpec {
        self.reader.spec()
    }

    /// Total frames in the file, per its header.
    pub fn frames(&self) -> u32 {
        self.reader.duration()
    }

    /// Read the next chunk of up to `CHUNK_SAMPLES` samples.
    ///
    /// The final chunk of a file may be shorter; an empty vec signals
    /// end-of-file.
    pub fn next_chunk(&mut self) -> Result<Vec<i16>> {
        let mut chunk = Vec::with_capacity(CHUNK_SAMPLES);
        for sample in self.reader.samples::<i16>().take(CHUNK_SAMPLES) {
            chunk.push(sample?);
        }
        Ok(chunk)
    }
}
