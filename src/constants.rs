//! Layout constants shared by producers and consumers of serialized state.

/// Subdirectory of the serialized data location holding full snapshots
pub const SNAPSHOT_LOCATION: &str = "snapshots";

/// Subdirectory of the serialized data location holding deltas
pub const DELTA_LOCATION: &str = "deltas";

/// File name prefix of snapshot artifacts ("snapshot_000042.blob")
pub const SNAPSHOT_PREFIX: &str = "snapshot_";

/// File name prefix of delta artifacts ("delta_000042.blob")
pub const DELTA_PREFIX: &str = "delta_";

/// Extension shared by all blob artifacts
pub const ARTIFACT_EXTENSION: &str = "blob";
