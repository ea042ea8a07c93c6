//! Top-level pagewatch configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::mode::Mode;
use crate::page::{HtmlPage, MinifyOptions};
use crate::watch::WatchOptions;

/// Complete configuration for a pagewatch project.
///
/// Loaded from `pagewatch.toml` / `pagewatch.json`, `PAGEWATCH_*`
/// environment variables and CLI flags through [`crate::ConfigLoader`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagewatchConfig {
    #[serde(default)]
    pub mode: Mode,

    /// Directory rendered pages are written to
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Remove `out_dir` before building. Defaults to on in production.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clean: Option<bool>,

    #[serde(default = "default_pages")]
    pub pages: Vec<HtmlPage>,

    /// Explicit minification switches. Defaults follow the mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minify: Option<MinifyOptions>,

    #[serde(default)]
    pub watch: WatchOptions,
}

impl Default for PagewatchConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            out_dir: default_out_dir(),
            clean: None,
            pages: default_pages(),
            minify: None,
            watch: WatchOptions::default(),
        }
    }
}

impl PagewatchConfig {
    /// Minification switches in effect for this configuration.
    pub fn minify_options(&self) -> MinifyOptions {
        self.minify
            .unwrap_or_else(|| MinifyOptions::for_mode(self.mode))
    }

    /// Whether the output directory is removed before a build.
    pub fn should_clean(&self) -> bool {
        self.clean.unwrap_or_else(|| self.mode.is_production())
    }

    /// Live-reload notifications are only wired in development.
    pub fn live_reload(&self) -> bool {
        self.mode.is_development()
    }

    /// Output directory resolved against `root` when relative.
    pub fn out_dir_in(&self, root: &Path) -> PathBuf {
        if self.out_dir.is_absolute() {
            self.out_dir.clone()
        } else {
            root.join(&self.out_dir)
        }
    }

    /// Example `pagewatch.toml` content.
    pub fn example_toml() -> &'static str {
        r#"mode = "development"
out_dir = "dist"

[[pages]]
template = "src/index.html"
filename = "index.html"

[pages.variables]
title = "My site"

[watch]
paths = ["src"]
ignore = ["node_modules", "dist", "*.log"]
debounce_ms = 100
"#
    }
}

pub fn default_out_dir() -> PathBuf {
    PathBuf::from("dist")
}

pub fn default_pages() -> Vec<HtmlPage> {
    vec![HtmlPage::default()]
}
