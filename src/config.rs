//! Configuration for a state transitioner
//!
//! Collaborators are supplied through setters (or the chaining `with_*`
//! methods) and checked once, when the configuration is initialized.

use std::fmt;
use std::sync::Arc;

use tracing::error;

use crate::engine::EngineFactory;
use crate::error::Result;
use crate::transitioner::TransitionerBase;
use crate::SerializerError;

/// Collaborators a transitioner needs before it can be initialized
///
/// Both fields start out unset. `initialize` consumes the configuration, so
/// nothing can be changed after the layout has been recorded.
#[derive(Clone, Default)]
pub struct TransitionerConfig {
    /// Factory for blob state engines of the served schema
    serializer_factory: Option<Arc<dyn EngineFactory>>,

    /// Root for all serialized artifacts
    /// Internal structure:
    ///   {serialized_data_location}/
    ///     ├── snapshots/
    ///     └── deltas/
    serialized_data_location: Option<String>,
}

impl TransitionerConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Setters
    // -------------------------------------------------------------------------

    /// Set the engine factory
    pub fn set_serializer_factory(&mut self, factory: Arc<dyn EngineFactory>) {
        self.serializer_factory = Some(factory);
    }

    /// Set the serialized data location
    pub fn set_serialized_data_location(&mut self, location: impl Into<String>) {
        self.serialized_data_location = Some(location.into());
    }

    /// Set the engine factory (chaining form)
    pub fn with_serializer_factory(mut self, factory: Arc<dyn EngineFactory>) -> Self {
        self.set_serializer_factory(factory);
        self
    }

    /// Set the serialized data location (chaining form)
    pub fn with_serialized_data_location(mut self, location: impl Into<String>) -> Self {
        self.set_serialized_data_location(location);
        self
    }

    // -------------------------------------------------------------------------
    // Getters
    // -------------------------------------------------------------------------

    pub fn serialized_data_location(&self) -> Option<&str> {
        self.serialized_data_location.as_deref()
    }

    pub fn serializer_factory(&self) -> Option<&Arc<dyn EngineFactory>> {
        self.serializer_factory.as_ref()
    }

    /// Check mandatory collaborators and create the directory layout
    pub fn initialize(self) -> Result<TransitionerBase> {
        let (factory, location) = self.validate()?;
        TransitionerBase::new(factory, location)
    }

    /// Hand out both collaborators, or a `Config` error naming the missing one
    ///
    /// The factory is checked first. An empty location counts as missing.
    fn validate(self) -> Result<(Arc<dyn EngineFactory>, String)> {
        let factory = self.serializer_factory.ok_or_else(|| {
            missing("'serializer_factory' cannot be null. This state transitioner will not be initialized")
        })?;

        let location = self
            .serialized_data_location
            .filter(|location| !location.is_empty())
            .ok_or_else(|| {
                missing("'serialized_data_location' cannot be null. This state transitioner will not be initialized")
            })?;

        Ok((factory, location))
    }
}

impl fmt::Debug for TransitionerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionerConfig")
            .field("serializer_factory", &self.serializer_factory.as_ref().map(|factory| factory.name()))
            .field("serialized_data_location", &self.serialized_data_location)
            .finish()
    }
}

fn missing(message: &str) -> SerializerError {
    error!("{}", message);
    SerializerError::Config(message.to_string())
}
