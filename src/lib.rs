//! # Snapshot Serializer
//!
//! Groundwork for running a blob state engine against a directory of
//! persisted snapshots and deltas:
//! - Validation of the collaborators a transitioner needs
//! - A deterministic on-disk layout for snapshot and delta artifacts
//! - The `StateTransitioner` contract implemented by producer/consumer variants
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   TransitionerConfig                         │
//! │         (engine factory + serialized data location)          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ initialize()
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   TransitionerBase                           │
//! │              (validated, layout recorded)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ composed into
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Producer   │          │  Consumer   │
//!   │  variant    │          │  variant    │
//!   └──────┬──────┘          └──────┬──────┘
//!          │                        │
//!          ▼                        ▼
//!   ┌──────────────────────────────────────┐
//!   │  {root}/snapshots      {root}/deltas │
//!   └──────────────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;
pub mod constants;

pub mod engine;
pub mod storage;
pub mod transitioner;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{SerializerError, Result};
pub use config::TransitionerConfig;
pub use constants::{DELTA_LOCATION, SNAPSHOT_LOCATION};
pub use engine::{BlobStateEngine, EngineFactory, SharedEngine};
pub use storage::DataLayout;
pub use transitioner::{StateTransitioner, TransitionerBase};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the snapshot serializer
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
