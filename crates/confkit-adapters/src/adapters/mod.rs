//! Built-in adapters

mod ini;
mod json;
mod toml;
mod tree;
mod yaml;

pub use self::ini::{DEFAULT_SECTION, IniAdapter, IniConfiger};
pub use self::json::JsonAdapter;
pub use self::toml::{TomlAdapter, TomlConfiger};
pub use self::tree::{TreeConfiger, TreeSyntax};
pub use self::yaml::YamlAdapter;
