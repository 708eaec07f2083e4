//! Save-then-reparse properties over generated keys and values

use confkit_adapters::registry;
use proptest::prelude::*;
use tempfile::TempDir;

proptest! {
    #[test]
    fn test_ini_set_save_reparse(
        section in "[a-z][a-z0-9_.=#;\\[-]{0,8}",
        key in "[a-z][a-z0-9_.#;\\[-]{0,8}",
        value in "[^\r\n]{0,24}",
    ) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("prop.ini");
        let full_key = format!("{section}::{key}");

        let registry = registry();
        let mut config = registry.new_config_data("ini", b"").unwrap();
        config.set(&full_key, &value).unwrap();
        config.save_config_file(&path).unwrap();

        let reloaded = registry.new_config("ini", &path).unwrap();
        prop_assert_eq!(reloaded.string(&full_key), value);
    }

    #[test]
    fn test_ini_placeholder_shaped_values_are_kept(
        name in "[A-Z][A-Z0-9_]{0,8}",
        fallback in "[^\r\n{}]{0,12}",
    ) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("literal.ini");
        let value = format!("${{CONFKIT_PROP_UNSET_{name}||{fallback}}}");

        let registry = registry();
        let mut config = registry.new_config_data("ini", b"").unwrap();
        config.set("vars::literal", &value).unwrap();
        config.save_config_file(&path).unwrap();

        let reloaded = registry.new_config("ini", &path).unwrap();
        prop_assert_eq!(reloaded.string("vars::literal"), value);
    }

    #[test]
    fn test_json_set_save_reparse(
        key in "[a-zA-Z_][a-zA-Z0-9_]{0,8}",
        value in "\\PC{0,24}",
    ) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("prop.json");

        let registry = registry();
        let mut config = registry.new_config_data("json", b"{}").unwrap();
        config.set(&key, &value).unwrap();
        config.save_config_file(&path).unwrap();

        let reloaded = registry.new_config("json", &path).unwrap();
        prop_assert_eq!(reloaded.string(&key), value);
    }
}
