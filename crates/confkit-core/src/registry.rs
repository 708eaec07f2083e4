//! Adapter registry and construction entry points
//!
//! The registry is an explicit value owned by whoever initializes the
//! process. Registration takes `&mut self`, so all adapters are installed
//! before the registry is shared (`Arc<Registry>` or `&Registry`) with the
//! code that constructs configurations.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::config::{Config, Configer};
use crate::error::{Error, Result};

/// Registry mapping adapter names to [`Config`] factories.
///
/// # Example
///
/// ```
/// use confkit_core::{Config, Configer, Registry, Result};
///
/// struct Never;
///
/// impl Config for Never {
///     fn name(&self) -> &'static str {
///         "never"
///     }
///
///     fn parse_data(&self, _data: &[u8]) -> Result<Box<dyn Configer>> {
///         Err(confkit_core::Error::parse("never", "unsupported"))
///     }
/// }
///
/// let mut registry = Registry::new();
/// registry.register("never", Never);
/// assert!(registry.contains("never"));
/// assert!(registry.new_config_data("never", b"").is_err());
/// ```
#[derive(Clone, Default)]
pub struct Registry {
    adapters: HashMap<String, Arc<dyn Config>>,
}

impl Registry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `adapter` available under `name`.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty or already registered. Both are
    /// initialization mistakes, not runtime conditions.
    pub fn register(&mut self, name: impl Into<String>, adapter: impl Config + 'static) {
        self.register_shared(name, Arc::new(adapter));
    }

    /// Make an already shared adapter available under `name`.
    ///
    /// # Panics
    ///
    /// Same conditions as [`register`](Self::register).
    pub fn register_shared(&mut self, name: impl Into<String>, adapter: Arc<dyn Config>) {
        let name = name.into();
        if name.is_empty() {
            panic!("config: Register called with an empty adapter name");
        }
        if self.adapters.contains_key(&name) {
            panic!("config: Register called twice for adapter {name}");
        }
        tracing::debug!(adapter = %name, format = adapter.name(), "Registered config adapter");
        self.adapters.insert(name, adapter);
    }

    /// Look up the adapter registered under `name`.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Config>> {
        self.adapters.get(name).cloned()
    }

    /// Check if an adapter is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.adapters.contains_key(name)
    }

    /// Registered adapter names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.adapters.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }

    /// Parse the file at `path` with the adapter registered as `adapter_name`.
    ///
    /// Errors from the adapter are returned unchanged; only an unknown
    /// adapter name is reported here.
    pub fn new_config(
        &self,
        adapter_name: &str,
        path: impl AsRef<Path>,
    ) -> Result<Box<dyn Configer>> {
        let adapter = self.lookup(adapter_name)?;
        let path = path.as_ref();
        tracing::debug!(adapter = adapter_name, path = %path.display(), "Parsing config file");
        adapter.parse(path)
    }

    /// Parse in-memory `data` with the adapter registered as `adapter_name`.
    pub fn new_config_data(&self, adapter_name: &str, data: &[u8]) -> Result<Box<dyn Configer>> {
        let adapter = self.lookup(adapter_name)?;
        tracing::debug!(adapter = adapter_name, bytes = data.len(), "Parsing config data");
        adapter.parse_data(data)
    }

    fn lookup(&self, adapter_name: &str) -> Result<&Arc<dyn Config>> {
        self.adapters
            .get(adapter_name)
            .ok_or_else(|| Error::UnknownAdapter {
                name: adapter_name.to_string(),
            })
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("adapters", &self.names())
            .finish()
    }
}
