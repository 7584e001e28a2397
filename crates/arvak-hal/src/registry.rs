//! Named backend factories.
//!
//! The [`BackendRegistry`] maps backend names to constructors. Tools that
//! pick a backend by name (the conformance CLI, for instance) look the
//! factory up here and call it once per fresh instance they need.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::backend::Backend;
use crate::error::{HalError, HalResult};

/// Constructor for a fresh backend instance.
pub type BackendFactory = Arc<dyn Fn() -> HalResult<Box<dyn Backend>> + Send + Sync>;

/// Registry of backend constructors keyed by name.
#[derive(Default)]
pub struct BackendRegistry {
    factories: FxHashMap<String, BackendFactory>,
}

impl BackendRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a backend type constructed with `Default`.
    pub fn register<B>(&mut self, name: impl Into<String>)
    where
        B: Backend + Default + 'static,
    {
        self.register_factory(name, || Ok(Box::new(B::default()) as Box<dyn Backend>));
    }

    /// Register a backend with a custom constructor.
    pub fn register_factory(
        &mut self,
        name: impl Into<String>,
        factory: impl Fn() -> HalResult<Box<dyn Backend>> + Send + Sync + 'static,
    ) {
        let name = name.into();
        debug!("Registering backend factory: {}", name);
        self.factories.insert(name, Arc::new(factory));
    }

    /// The constructor registered under `name`.
    pub fn factory(&self, name: &str) -> HalResult<BackendFactory> {
        self.factories.get(name).cloned().ok_or_else(|| {
            HalError::BackendUnavailable(format!("No backend registered with name '{name}'"))
        })
    }

    /// Create a backend by name.
    pub fn create(&self, name: &str) -> HalResult<Box<dyn Backend>> {
        (self.factory(name)?)()
    }

    /// List all registered backend names, sorted.
    pub fn available_backends(&self) -> Vec<String> {
        let mut names: Vec<_> = self.factories.keys().cloned().collect();
        names.sort();
        names
    }

    /// Check if a backend is registered under `name`.
    pub fn has_backend(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }
}
