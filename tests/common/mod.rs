//! Test doubles for the engine seams
//!
//! `StubEngine` keeps its dataset as a list of text records; snapshots are
//! every record, deltas are the records added since the last cycle.

#![allow(dead_code)]

use std::io::{BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use snapshot_serializer::{BlobStateEngine, EngineFactory, Result, SerializerError, SharedEngine};
use tempfile::TempDir;

// =============================================================================
// Stub Engine
// =============================================================================

#[derive(Debug, Default)]
pub struct StubEngine {
    records: Vec<String>,
    /// Records before this index were already emitted in a previous cycle
    committed: usize,
    version: Option<u64>,
    write_prepared: bool,
}

impl StubEngine {
    fn read_records(input: &mut dyn Read) -> Result<Vec<String>> {
        let mut records = Vec::new();
        for line in BufReader::new(input).lines() {
            let line = line?;
            if !line.is_empty() {
                records.push(line);
            }
        }
        Ok(records)
    }

    fn write_records(out: &mut dyn Write, records: &[String]) -> Result<()> {
        if records.iter().any(|r| r.contains('\n')) {
            return Err(SerializerError::Serialization(
                "record contains a newline".to_string(),
            ));
        }
        for record in records {
            writeln!(out, "{}", record)?;
        }
        Ok(())
    }

    fn require_prepared(&self) -> Result<()> {
        if self.write_prepared {
            Ok(())
        } else {
            Err(SerializerError::Engine(
                "prepare_for_write was not called".to_string(),
            ))
        }
    }
}

impl BlobStateEngine for StubEngine {
    fn add(&mut self, type_name: &str, object: &[u8]) -> Result<()> {
        let object = std::str::from_utf8(object)
            .map_err(|e| SerializerError::Serialization(e.to_string()))?;
        self.records.push(format!("{}:{}", type_name, object));
        Ok(())
    }

    fn prepare_for_write(&mut self) {
        self.write_prepared = true;
    }

    fn prepare_for_next_cycle(&mut self) {
        self.committed = self.records.len();
        self.write_prepared = false;
    }

    fn write_snapshot(&mut self, out: &mut dyn Write) -> Result<()> {
        self.require_prepared()?;
        Self::write_records(out, &self.records)
    }

    fn write_delta(&mut self, out: &mut dyn Write) -> Result<()> {
        self.require_prepared()?;
        Self::write_records(out, &self.records[self.committed..])
    }

    fn read_snapshot(&mut self, input: &mut dyn Read) -> Result<()> {
        self.records = Self::read_records(input)?;
        self.committed = self.records.len();
        Ok(())
    }

    fn apply_delta(&mut self, input: &mut dyn Read) -> Result<()> {
        let added = Self::read_records(input)?;
        self.records.extend(added);
        self.committed = self.records.len();
        Ok(())
    }

    fn latest_version(&self) -> Option<u64> {
        self.version
    }

    fn set_latest_version(&mut self, version: u64) {
        self.version = Some(version);
    }
}

// =============================================================================
// Stub Factory
// =============================================================================

/// Builds `StubEngine`s and counts how many it handed out
#[derive(Debug, Default)]
pub struct StubFactory {
    created: AtomicUsize,
}

impl StubFactory {
    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }
}

impl EngineFactory for StubFactory {
    fn create_engine(&self) -> Result<Box<dyn BlobStateEngine>> {
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(StubEngine::default()))
    }

    fn name(&self) -> &str {
        "stub"
    }
}

/// Factory that always fails, for error propagation tests
#[derive(Debug, Default)]
pub struct FailingFactory;

impl EngineFactory for FailingFactory {
    fn create_engine(&self) -> Result<Box<dyn BlobStateEngine>> {
        Err(SerializerError::Engine("schema not registered".to_string()))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

pub fn stub_factory() -> Arc<StubFactory> {
    Arc::new(StubFactory::default())
}

pub fn setup_temp_root() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().to_path_buf();
    (temp_dir, path)
}

/// Every record the engine holds, in insertion order
pub fn dump(engine: &SharedEngine) -> Vec<String> {
    let mut engine = engine.write();
    engine.prepare_for_write();
    let mut buf = Vec::new();
    engine.write_snapshot(&mut buf).unwrap();
    String::from_utf8(buf)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

pub fn path_string(path: &Path) -> String {
    path.to_str().unwrap().to_string()
}
