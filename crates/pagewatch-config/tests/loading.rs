//! Tests for layered configuration loading.

use pagewatch_config::{
    ConfigError, ConfigLoader, ConfigOverrides, Mode, WatchOverrides, validate,
};
use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn loads_defaults_without_file() {
    let dir = TempDir::new().unwrap();
    let config = ConfigLoader::new(dir.path()).without_env().load().unwrap();
    assert_eq!(config.mode, Mode::Development);
    assert_eq!(config.pages.len(), 1);
}

#[test]
fn discovers_pagewatch_toml() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("pagewatch.toml"),
        r#"
mode = "production"
out_dir = "public"

[[pages]]
template = "src/index.html"
filename = "index.html"

[[pages]]
template = "src/about.html"
filename = "about/index.html"

[watch]
debounce_ms = 250
"#,
    )
    .unwrap();

    let loader = ConfigLoader::new(dir.path()).without_env();
    assert_eq!(
        loader.discover().unwrap().file_name().unwrap(),
        "pagewatch.toml"
    );

    let config = loader.load().unwrap();
    assert_eq!(config.mode, Mode::Production);
    assert_eq!(config.out_dir, PathBuf::from("public"));
    assert_eq!(config.pages.len(), 2);
    assert_eq!(config.pages[1].filename, "about/index.html");
    assert_eq!(config.watch.debounce_ms, 250);
    // untouched nested keys keep their defaults
    assert_eq!(config.watch.paths, vec![PathBuf::from("src")]);
}

#[test]
fn discovers_pagewatch_json() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("pagewatch.json"),
        r#"{ "minify": { "remove_comments": true }, "clean": true }"#,
    )
    .unwrap();

    let config = ConfigLoader::new(dir.path()).without_env().load().unwrap();
    assert!(config.should_clean());
    assert!(config.minify_options().remove_comments);
    assert!(!config.minify_options().collapse_whitespace);
}

#[test]
fn toml_wins_over_json_during_discovery() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("pagewatch.toml"), "out_dir = \"from-toml\"\n").unwrap();
    fs::write(dir.path().join("pagewatch.json"), r#"{ "out_dir": "from-json" }"#).unwrap();

    let config = ConfigLoader::new(dir.path()).without_env().load().unwrap();
    assert_eq!(config.out_dir, PathBuf::from("from-toml"));
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = ConfigLoader::new(dir.path())
        .with_file("missing.toml")
        .without_env()
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigError::NotFound(path) if path.ends_with("missing.toml")));
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("pagewatch.yaml"), "mode: production\n").unwrap();
    let err = ConfigLoader::new(dir.path())
        .with_file("pagewatch.yaml")
        .without_env()
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
}

#[test]
fn invalid_type_reports_extract_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("pagewatch.toml"), "mode = \"staging\"\n").unwrap();
    let err = ConfigLoader::new(dir.path()).without_env().load().unwrap_err();
    assert!(matches!(err, ConfigError::Extract(_)));
}

#[test]
fn overrides_beat_file_values() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("pagewatch.toml"),
        "mode = \"production\"\n[watch]\ndebounce_ms = 250\n",
    )
    .unwrap();

    let config = ConfigLoader::new(dir.path())
        .without_env()
        .with_overrides(ConfigOverrides {
            mode: Some(Mode::Development),
            out_dir: Some(PathBuf::from("build")),
            clean: None,
            watch: WatchOverrides {
                debounce_ms: Some(10),
            },
        })
        .load()
        .unwrap();

    assert_eq!(config.mode, Mode::Development);
    assert_eq!(config.out_dir, PathBuf::from("build"));
    assert_eq!(config.watch.debounce_ms, 10);
}

#[test]
fn duplicate_pages_fail_validation() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("pagewatch.toml"),
        r#"
[[pages]]
template = "src/a.html"
filename = "index.html"

[[pages]]
template = "src/b.html"
filename = "index.html"
"#,
    )
    .unwrap();

    let err = ConfigLoader::new(dir.path()).without_env().load().unwrap_err();
    assert!(matches!(err, ConfigError::DuplicatePage(name) if name == "index.html"));
}

#[test]
#[serial]
fn environment_overrides_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("pagewatch.toml"), "out_dir = \"public\"\n").unwrap();

    unsafe {
        std::env::set_var("PAGEWATCH_MODE", "production");
        std::env::set_var("PAGEWATCH_WATCH__DEBOUNCE_MS", "42");
    }

    let result = ConfigLoader::new(dir.path()).load();

    unsafe {
        std::env::remove_var("PAGEWATCH_MODE");
        std::env::remove_var("PAGEWATCH_WATCH__DEBOUNCE_MS");
    }

    let config = result.unwrap();
    assert_eq!(config.mode, Mode::Production);
    assert_eq!(config.out_dir, PathBuf::from("public"));
    assert_eq!(config.watch.debounce_ms, 42);
    validate(&config).unwrap();
}
