//! Pluggable configuration parsing for confkit
//!
//! A [`Registry`] maps adapter names (`"ini"`, `"json"`, ...) to [`Config`]
//! factories. Each factory turns a file or a byte buffer into a [`Configer`],
//! which exposes typed reads and writes keyed by `section::key` strings.
//!
//! ```
//! use confkit_core::Registry;
//!
//! let registry = Registry::new();
//! let err = registry.new_config_data("ini", b"").unwrap_err();
//! assert!(err.to_string().contains("\"ini\""));
//! ```

pub mod config;
pub mod convert;
pub mod error;
pub mod io;
pub mod key;
pub mod registry;

pub use config::{Config, Configer};
pub use error::{Error, Result};
pub use key::SECTION_SEPARATOR;
pub use registry::Registry;

/// Untyped value returned by [`Configer::diy`].
pub use serde_json::Value;
