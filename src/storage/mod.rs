//! Storage Module
//!
//! Filesystem layout for persisted snapshot and delta artifacts.
//!
//! ## Responsibilities
//! - Derive the snapshot and delta directories from the data location
//! - Create missing directories, accept existing ones unchanged
//! - Name artifact files and list the versions present on disk
//!
//! ## Directory Layout
//! ```text
//! ┌────────────────────────────────────────┐
//! │ {serialized_data_location}/            │
//! │ ├── snapshots/                         │
//! │ │   ├── snapshot_000001.blob           │
//! │ │   └── snapshot_000003.blob           │
//! │ └── deltas/                            │
//! │     ├── delta_000002.blob              │
//! │     └── delta_000003.blob              │
//! └────────────────────────────────────────┘
//! ```
//!
//! The artifact contents belong to the blob state engine; this module only
//! decides where they live.

mod dirs;
mod layout;

pub use dirs::ensure_dir;
pub use layout::DataLayout;
