//! Engine Module
//!
//! Seams to the blob state engine and the factory that builds it.
//!
//! ## Responsibilities
//! - Describe what a transitioner needs from a blob state engine
//! - Describe how a transitioner obtains a fresh engine for its schema
//! - Provide the shared handle handed out by `acquire_state_engine`
//!
//! The engine itself (in-memory dataset, binary snapshot/delta format) lives
//! outside this crate; only the operations used to move state to and from the
//! serialized data location are named here.

use std::fmt;
use std::io::{Read, Write};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::Result;

/// A blob state engine holding an in-memory dataset
///
/// The write side moves through cycles: `prepare_for_write` closes the
/// current cycle's mutations, the engine then emits a snapshot and/or delta,
/// and `prepare_for_next_cycle` opens the next one.
pub trait BlobStateEngine: Send + Sync {
    /// Add one serialized object of `type_name` to the current cycle
    fn add(&mut self, type_name: &str, object: &[u8]) -> Result<()>;

    /// Close the current cycle so its state can be serialized
    fn prepare_for_write(&mut self);

    /// Start a new cycle after state has been written
    fn prepare_for_next_cycle(&mut self);

    /// Write a full image of the current state
    fn write_snapshot(&mut self, out: &mut dyn Write) -> Result<()>;

    /// Write the changes between the previous cycle and the current one
    fn write_delta(&mut self, out: &mut dyn Write) -> Result<()>;

    /// Replace the in-memory state with a snapshot
    fn read_snapshot(&mut self, input: &mut dyn Read) -> Result<()>;

    /// Apply a delta on top of the in-memory state
    fn apply_delta(&mut self, input: &mut dyn Read) -> Result<()>;

    /// Version of the state currently held, if any
    fn latest_version(&self) -> Option<u64>;

    /// Record the version of the state now held
    fn set_latest_version(&mut self, version: u64);
}

/// Builds blob state engines wired to a specific dataset schema
pub trait EngineFactory: Send + Sync {
    /// Create a new, empty engine
    fn create_engine(&self) -> Result<Box<dyn BlobStateEngine>>;

    /// Human readable name, used in logs
    fn name(&self) -> &str {
        "engine-factory"
    }
}

impl fmt::Debug for dyn EngineFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineFactory")
            .field("name", &self.name())
            .finish()
    }
}

impl fmt::Debug for dyn BlobStateEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlobStateEngine")
            .field("latest_version", &self.latest_version())
            .finish()
    }
}

/// Engine handle shared between a transitioner and its callers
///
/// ## Concurrency:
/// - Readers (lookups against the dataset) take the read lock
/// - Writers (mutation, snapshot/delta emission) take the write lock
pub type SharedEngine = Arc<RwLock<Box<dyn BlobStateEngine>>>;

/// Wrap a freshly built engine into a shared handle
pub fn share(engine: Box<dyn BlobStateEngine>) -> SharedEngine {
    Arc::new(RwLock::new(engine))
}
