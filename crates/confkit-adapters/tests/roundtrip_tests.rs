//! Save-then-reparse behaviour of every built-in adapter

use confkit_adapters::registry;
use rstest::rstest;
use tempfile::TempDir;

#[rstest]
#[case("ini", "app.conf", "[db]\nhost = localhost\n")]
#[case("json", "app.json", r#"{"db": {"host": "localhost"}}"#)]
#[case("yaml", "app.yaml", "db:\n  host: localhost\n")]
#[case("toml", "app.toml", "[db]\nhost = \"localhost\"\n")]
fn test_set_save_reparse(#[case] adapter: &str, #[case] file: &str, #[case] source: &str) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(file);
    std::fs::write(&path, source).unwrap();

    let registry = registry();
    let mut config = registry.new_config(adapter, &path).unwrap();
    config.set("db::user", "admin").unwrap();
    config.set("name", "demo").unwrap();
    config.save_config_file(&path).unwrap();

    let reloaded = registry.new_config(adapter, &path).unwrap();
    assert_eq!(reloaded.string("db::host"), "localhost");
    assert_eq!(reloaded.string("db::user"), "admin");
    assert_eq!(reloaded.string("name"), "demo");
}

#[rstest]
#[case("ini", "out.conf")]
#[case("json", "out.json")]
#[case("yaml", "out.yaml")]
#[case("toml", "out.toml")]
fn test_save_from_empty_source(#[case] adapter: &str, #[case] file: &str) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join(file);

    let registry = registry();
    let mut config = registry.new_config_data(adapter, b"").unwrap();
    config.set("port", "8080").unwrap();
    config.set("cache::ttl", "60").unwrap();
    config.save_config_file(&path).unwrap();

    let reloaded = registry.new_config(adapter, &path).unwrap();
    assert_eq!(reloaded.int("port").unwrap(), 8080);
    assert_eq!(reloaded.int64("cache::ttl").unwrap(), 60);
}

#[rstest]
#[case("ini")]
#[case("json")]
#[case("yaml")]
#[case("toml")]
fn test_save_overwrites_existing_file(#[case] adapter: &str) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("existing");
    std::fs::write(&path, "stale content that is not valid anywhere [[[").unwrap();

    let registry = registry();
    let mut config = registry.new_config_data(adapter, b"").unwrap();
    config.set("fresh", "yes").unwrap();
    config.save_config_file(&path).unwrap();

    let reloaded = registry.new_config(adapter, &path).unwrap();
    assert!(reloaded.bool("fresh").unwrap());
}

#[test]
fn test_missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let err = registry()
        .new_config("ini", temp.path().join("absent.conf"))
        .unwrap_err();
    assert!(matches!(err, confkit_core::Error::Io { .. }));
}

#[test]
fn test_ini_quoted_values_survive_save() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("quoted.ini");

    let registry = registry();
    let mut config = registry.new_config_data("ini", b"").unwrap();
    config.set("padded", "  both sides  ").unwrap();
    config.set("wrapped", "\"already quoted\"").unwrap();
    config.save_config_file(&path).unwrap();

    let reloaded = registry.new_config(adapter_for(&path), &path).unwrap();
    assert_eq!(reloaded.string("padded"), "  both sides  ");
    assert_eq!(reloaded.string("wrapped"), "\"already quoted\"");
}

#[test]
fn test_ini_placeholder_values_round_trip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("app.ini");
    std::fs::write(
        &path,
        "[db]\nhost = ${CONFKIT_RT_UNSET_HOST||localhost}\n",
    )
    .unwrap();

    let registry = registry();
    let mut config = registry.new_config("ini", &path).unwrap();
    assert_eq!(config.string("db::host"), "localhost");

    let literal = "${CONFKIT_RT_UNSET_PASSWORD||fallback}";
    config.set("db::password", literal).unwrap();
    config.save_config_file(&path).unwrap();

    let saved = std::fs::read_to_string(&path).unwrap();
    assert!(saved.contains("host = ${CONFKIT_RT_UNSET_HOST||localhost}"));

    let reloaded = registry.new_config("ini", &path).unwrap();
    assert_eq!(reloaded.string("db::password"), literal);
    assert_eq!(reloaded.string("db::host"), "localhost");
}

fn adapter_for(path: &std::path::Path) -> &'static str {
    confkit_adapters::Format::from_path(path)
        .map(|f| f.adapter_name())
        .unwrap_or("ini")
}
