//! Tests for default values and mode-derived settings.

use pagewatch_config::{HtmlPage, MinifyOptions, Mode, PagewatchConfig, WatchOptions};
use std::path::{Path, PathBuf};

#[test]
fn pagewatch_config_defaults() {
    let config = PagewatchConfig::default();
    assert_eq!(config.mode, Mode::Development);
    assert_eq!(config.out_dir, PathBuf::from("dist"));
    assert_eq!(config.pages, vec![HtmlPage::default()]);
    assert!(config.clean.is_none());
    assert!(config.minify.is_none());
}

#[test]
fn html_page_defaults() {
    let page = HtmlPage::default();
    assert_eq!(page.template, PathBuf::from("src/index.html"));
    assert_eq!(page.filename, "index.html");
    assert!(page.variables.is_empty());
}

#[test]
fn watch_defaults() {
    let watch = WatchOptions::default();
    assert_eq!(watch.paths, vec![PathBuf::from("src")]);
    assert_eq!(watch.debounce_ms, 100);
    assert!(watch.ignore.contains(&"node_modules".to_string()));
    assert!(watch.ignore.contains(&"*.log".to_string()));
}

#[test]
fn development_keeps_output_and_enables_reload() {
    let config = PagewatchConfig::default();
    assert!(!config.should_clean());
    assert!(config.live_reload());
    assert!(!config.minify_options().is_enabled());
}

#[test]
fn production_cleans_and_minifies() {
    let config = PagewatchConfig {
        mode: Mode::Production,
        ..Default::default()
    };
    assert!(config.should_clean());
    assert!(!config.live_reload());
    assert_eq!(config.minify_options(), MinifyOptions::all());
}

#[test]
fn explicit_settings_beat_mode_defaults() {
    let config = PagewatchConfig {
        mode: Mode::Production,
        clean: Some(false),
        minify: Some(MinifyOptions {
            remove_comments: true,
            ..Default::default()
        }),
        ..Default::default()
    };
    assert!(!config.should_clean());
    let minify = config.minify_options();
    assert!(minify.remove_comments);
    assert!(!minify.collapse_whitespace);
}

#[test]
fn relative_out_dir_resolves_against_root() {
    let config = PagewatchConfig::default();
    assert_eq!(
        config.out_dir_in(Path::new("/site")),
        PathBuf::from("/site/dist")
    );
}

#[test]
fn example_toml_parses() {
    let config: PagewatchConfig = toml::from_str(PagewatchConfig::example_toml()).unwrap();
    assert_eq!(config.pages.len(), 1);
    assert_eq!(config.pages[0].variables["title"], "My site");
    pagewatch_config::validate(&config).unwrap();
}
