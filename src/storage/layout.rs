//! Data Layout
//!
//! Maps the serialized data location to its snapshot and delta directories.
//!
//! ## Responsibilities
//! - Derive `<root>/snapshots` and `<root>/deltas` from the root path
//! - Create the three directories on startup (idempotent)
//! - Name artifact files and discover the versions already on disk

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::constants::{ARTIFACT_EXTENSION, DELTA_LOCATION, DELTA_PREFIX, SNAPSHOT_LOCATION, SNAPSHOT_PREFIX};
use crate::error::Result;

use super::ensure_dir;

/// The on-disk layout of serialized state
///
/// ```text
/// {root}/
///   ├── snapshots/     (snapshot_000001.blob, snapshot_000002.blob, ...)
///   └── deltas/        (delta_000002.blob, ...)
/// ```
///
/// Paths are joined, never canonicalized; symlinks are left as they are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLayout {
    /// Serialized data location
    root: PathBuf,

    /// `{root}/snapshots`
    snapshots: PathBuf,

    /// `{root}/deltas`
    deltas: PathBuf,
}

impl DataLayout {
    /// Compute the layout for `root` without touching the filesystem
    pub fn derive(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let snapshots = root.join(SNAPSHOT_LOCATION);
        let deltas = root.join(DELTA_LOCATION);

        Self {
            root,
            snapshots,
            deltas,
        }
    }

    /// Compute the layout for `root` and make sure every directory exists
    ///
    /// Order: root (with parents), then snapshots, then deltas. Existing
    /// directories and their contents are left untouched.
    pub fn ensure(root: impl Into<PathBuf>) -> Result<Self> {
        let layout = Self::derive(root);

        let mut created = 0;
        for dir in [&layout.root, &layout.snapshots, &layout.deltas] {
            if ensure_dir(dir)? {
                created += 1;
            }
        }

        info!(
            root = %layout.root.display(),
            created,
            "serialized data layout ready"
        );

        Ok(layout)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn snapshots(&self) -> &Path {
        &self.snapshots
    }

    pub fn deltas(&self) -> &Path {
        &self.deltas
    }

    // =========================================================================
    // Artifacts
    // =========================================================================

    /// Path of the snapshot for `version`
    pub fn snapshot_path(&self, version: u64) -> PathBuf {
        self.snapshots.join(artifact_name(SNAPSHOT_PREFIX, version))
    }

    /// Path of the delta that produces `version`
    pub fn delta_path(&self, version: u64) -> PathBuf {
        self.deltas.join(artifact_name(DELTA_PREFIX, version))
    }

    /// Versions of all snapshots on disk, ascending
    pub fn snapshot_versions(&self) -> Result<Vec<u64>> {
        scan_versions(&self.snapshots, SNAPSHOT_PREFIX)
    }

    /// Versions of all deltas on disk, ascending
    pub fn delta_versions(&self) -> Result<Vec<u64>> {
        scan_versions(&self.deltas, DELTA_PREFIX)
    }

    /// Newest snapshot version, or `None` when no snapshot was written yet
    pub fn latest_snapshot_version(&self) -> Result<Option<u64>> {
        Ok(self.snapshot_versions()?.last().copied())
    }

    /// Delta versions strictly newer than `version`, ascending
    ///
    /// Replaying these on top of snapshot `version` brings a consumer up to date.
    pub fn deltas_after(&self, version: u64) -> Result<Vec<u64>> {
        Ok(self
            .delta_versions()?
            .into_iter()
            .filter(|&v| v > version)
            .collect())
    }
}

// =============================================================================
// Private Helpers
// =============================================================================

/// "snapshot_", 42 → "snapshot_000042.blob"
fn artifact_name(prefix: &str, version: u64) -> String {
    format!("{}{:06}.{}", prefix, version, ARTIFACT_EXTENSION)
}

/// Parse the version out of an artifact file name
/// "delta_000042.blob" → Some(42); "prior.blob", "delta_42.blob" → None
///
/// Only names `artifact_name` would produce are accepted, so each version
/// maps to exactly one file.
fn parse_version(path: &Path, prefix: &str) -> Option<u64> {
    if path.extension()?.to_str()? != ARTIFACT_EXTENSION {
        return None;
    }
    let name = path.file_stem()?.to_string_lossy();
    let id_str = name.strip_prefix(prefix)?;
    let version: u64 = id_str.parse().ok()?;

    if path.file_name()?.to_str()? != artifact_name(prefix, version) {
        return None;
    }
    Some(version)
}

fn scan_versions(dir: &Path, prefix: &str) -> Result<Vec<u64>> {
    let mut versions = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_path = entry.path();

        if file_path.is_file() {
            if let Some(version) = parse_version(&file_path, prefix) {
                versions.push(version);
            }
        }
    }

    versions.sort_unstable();
    versions.dedup();
    Ok(versions)
}
