//! Built-in ini, JSON, YAML and TOML adapters for confkit
//!
//! ```
//! let registry = confkit_adapters::registry();
//! let config = registry
//!     .new_config_data("ini", b"[db]\nhost = localhost\n")
//!     .unwrap();
//! assert_eq!(config.string("db::host"), "localhost");
//! ```

pub mod adapters;
pub mod format;
pub mod path;

pub use adapters::{
    IniAdapter, IniConfiger, JsonAdapter, TomlAdapter, TomlConfiger, TreeConfiger, TreeSyntax,
    YamlAdapter,
};
pub use format::Format;

use confkit_core::Registry;

/// Register every built-in adapter under its format name.
///
/// # Panics
///
/// Panics if any of `ini`, `json`, `yaml` or `toml` is already registered.
pub fn register_builtins(registry: &mut Registry) {
    registry.register(Format::Ini.adapter_name(), IniAdapter::new());
    registry.register(Format::Json.adapter_name(), JsonAdapter::new());
    registry.register(Format::Yaml.adapter_name(), YamlAdapter::new());
    registry.register(Format::Toml.adapter_name(), TomlAdapter::new());
}

/// Create a registry holding the built-in adapters.
pub fn registry() -> Registry {
    let mut registry = Registry::new();
    register_builtins(&mut registry);
    registry
}
