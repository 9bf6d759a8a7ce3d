//! Model location and loading.
//!
//! The locator scans an ordered list of candidate directories and takes the
//! first one that exists; it does not inspect directory contents. Loading is
//! a single call into libvosk and is only compiled with the `vosk` feature.

use crate::defaults::MODEL_DIR_NAME;
use crate::error::{CheckError, Result};
use std::path::{Path, PathBuf};

/// Candidate model directories, in search order: next to the binary's
/// working directory, one level up, then the bare name.
pub fn candidate_paths() -> Vec<PathBuf> {
    [
        format!("./{MODEL_DIR_NAME}"),
        format!("../{MODEL_DIR_NAME}"),
        MODEL_DIR_NAME.to_string(),
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

/// First existing path among `candidates`, in order.
pub fn first_existing(candidates: &[PathBuf]) -> Option<&PathBuf> {
    candidates.iter().find(|p| p.exists())
}

/// Locate the model directory.
///
/// An explicit `override_path` bypasses the candidate search but must still
/// exist on disk.
pub fn locate_model(override_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = override_path {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
        return Err(CheckError::ModelNotFound {
            checked: path.display().to_string(),
        });
    }

    let candidates = candidate_paths();
    match first_existing(&candidates) {
        Some(path) => Ok(path.clone()),
        None => Err(CheckError::ModelNotFound {
            checked: candidates
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
        }),
    }
}

/// Load the model from a located directory.
///
/// libvosk reports load failure as an absent handle rather than a message,
/// so the error can only name the path.
#[cfg(feature = "vosk")]
pub fn load_model(path: &Path) -> Result<vosk::Model> {
    vosk::Model::new(path.to_string_lossy().as_ref()).ok_or_else(|| CheckError::ModelLoad {
        path: path.display().to_string(),
    })
}

/// Load the model and discard the handle, proving the directory is usable.
///
/// The recognition step constructs its own model so the two checks stay
/// independent.
#[cfg(feature = "vosk")]
pub fn verify_loads(path: &Path) -> Result<()> {
    load_model(path).map(|_| ())
}

#[cfg(not(feature = "vosk"))]
pub fn verify_loads(_path: &Path) -> Result<()> {
    Err(CheckError::RecognitionUnavailable)
}
