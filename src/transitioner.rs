//! Transitioner Module
//!
//! Shared groundwork for producing and consuming serialized state.
//!
//! ## Responsibilities
//! - Hold the engine factory and the serialized data location
//! - Record the directory layout created at initialization
//! - Declare the two operations producer and consumer variants provide
//!
//! Variants compose a [`TransitionerBase`] rather than extend it:
//!
//! ```text
//!   TransitionerConfig ──initialize──▶ TransitionerBase
//!                                           │
//!                     ┌─────────────────────┴───────────────────┐
//!                     ▼                                         ▼
//!            producer variant                          consumer variant
//!       (acquire: fresh or restored,            (acquire: restore snapshot
//!        persist: snapshot + delta)              + replay deltas)
//! ```

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::config::TransitionerConfig;
use crate::engine::{self, EngineFactory, SharedEngine};
use crate::error::Result;
use crate::storage::DataLayout;

/// Creates or restores a blob state engine and saves the state it holds
///
/// Implementations decide whether `acquire_state_engine` builds a new engine
/// through the factory or restores one from the artifacts under
/// `base().layout()`, and which artifacts `persist_state` writes.
pub trait StateTransitioner: Send + Sync {
    /// Initialized groundwork shared by all variants
    fn base(&self) -> &TransitionerBase;

    /// Return a newly created or suitably initialized engine
    fn acquire_state_engine(&self) -> Result<SharedEngine>;

    /// Save the state held by the engine to the snapshots and/or deltas directories
    fn persist_state(&self) -> Result<()>;
}

/// Validated collaborators plus the directory layout they imply
///
/// Only obtainable through [`TransitionerConfig::initialize`] (or
/// [`TransitionerBase::builder`]), so holding one means every directory
/// existed at construction time. Fields never change afterwards and may be
/// read from any thread without locking.
#[derive(Debug)]
pub struct TransitionerBase {
    /// Factory for fresh engines
    serializer_factory: Arc<dyn EngineFactory>,

    /// Location exactly as configured
    serialized_data_location: String,

    /// Root, snapshots and deltas directories
    layout: DataLayout,
}

impl TransitionerBase {
    /// Start an empty configuration
    pub fn builder() -> TransitionerConfig {
        TransitionerConfig::new()
    }

    /// Create the layout for already validated collaborators
    pub(crate) fn new(
        serializer_factory: Arc<dyn EngineFactory>,
        serialized_data_location: String,
    ) -> Result<Self> {
        let layout = DataLayout::ensure(&serialized_data_location)?;

        info!(
            factory = serializer_factory.name(),
            location = %serialized_data_location,
            "state transitioner initialized"
        );

        Ok(Self {
            serializer_factory,
            serialized_data_location,
            layout,
        })
    }

    /// Build an empty engine through the factory
    pub fn new_engine(&self) -> Result<SharedEngine> {
        let fresh = self.serializer_factory.create_engine()?;
        Ok(engine::share(fresh))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn serializer_factory(&self) -> &Arc<dyn EngineFactory> {
        &self.serializer_factory
    }

    pub fn serialized_data_location(&self) -> &str {
        &self.serialized_data_location
    }

    pub fn layout(&self) -> &DataLayout {
        &self.layout
    }

    pub fn root_dir(&self) -> &Path {
        self.layout.root()
    }

    pub fn snapshots_dir(&self) -> &Path {
        self.layout.snapshots()
    }

    pub fn deltas_dir(&self) -> &Path {
        self.layout.deltas()
    }
}
