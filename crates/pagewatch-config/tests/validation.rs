//! Tests for configuration validation.

use pagewatch_config::{ConfigError, HtmlPage, PagewatchConfig, validate};
use std::path::PathBuf;

#[test]
fn default_config_is_valid() {
    validate(&PagewatchConfig::default()).unwrap();
}

#[test]
fn empty_pages_rejected() {
    let config = PagewatchConfig {
        pages: vec![],
        ..Default::default()
    };
    assert!(matches!(validate(&config), Err(ConfigError::NoPages)));
}

#[test]
fn escaping_filename_rejected() {
    let config = PagewatchConfig {
        pages: vec![HtmlPage::new("src/index.html", "../index.html")],
        ..Default::default()
    };
    let err = validate(&config).unwrap_err();
    assert!(err.to_string().contains("pages.filename"));
}

#[test]
fn empty_template_rejected() {
    let config = PagewatchConfig {
        pages: vec![HtmlPage::new("", "index.html")],
        ..Default::default()
    };
    assert!(matches!(
        validate(&config),
        Err(ConfigError::InvalidValue { field, .. }) if field == "pages.template"
    ));
}

#[test]
fn empty_watch_paths_rejected() {
    let mut config = PagewatchConfig::default();
    config.watch.paths.clear();
    assert!(validate(&config).is_err());
}

#[test]
fn nested_output_filenames_allowed() {
    let config = PagewatchConfig {
        pages: vec![
            HtmlPage::new("src/index.html", "index.html"),
            HtmlPage::new(PathBuf::from("src/about.html"), "about/index.html"),
        ],
        ..Default::default()
    };
    validate(&config).unwrap();
}

#[test]
fn parent_out_dir_rejected() {
    for out_dir in ["..", "../dist", "dist/../.."] {
        let config = PagewatchConfig {
            out_dir: PathBuf::from(out_dir),
            ..Default::default()
        };
        assert!(
            matches!(
                validate(&config),
                Err(ConfigError::InvalidValue { ref field, .. }) if field == "out_dir"
            ),
            "{out_dir} should be rejected"
        );
    }
}

#[test]
fn nested_out_dir_allowed() {
    let config = PagewatchConfig {
        out_dir: PathBuf::from("build/site"),
        ..Default::default()
    };
    validate(&config).unwrap();
}
