//! Directory helpers
//!
//! Idempotent directory creation used when materializing the layout.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, error, trace, warn};

use crate::error::Result;
use crate::SerializerError;

/// Make sure `path` exists as a directory, creating missing parents
///
/// Returns `Ok(true)` when this call created the directory and `Ok(false)`
/// when it was already there (contents are never touched).
///
/// Races with other creators are tolerated: if creation fails but the path
/// is a directory afterwards, someone else won and the call succeeds.
pub fn ensure_dir(path: &Path) -> Result<bool> {
    if path.is_dir() {
        trace!(path = %path.display(), "directory already present");
        return Ok(false);
    }

    match fs::create_dir_all(path) {
        Ok(()) => {
            debug!(path = %path.display(), "created directory");
            Ok(true)
        }
        Err(e) if path.is_dir() => {
            warn!(path = %path.display(), error = %e, "directory created concurrently");
            Ok(false)
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "failed to create directory");
            Err(SerializerError::Io(io::Error::new(
                e.kind(),
                format!("failed to create directory {}: {}", path.display(), e),
            )))
        }
    }
}
