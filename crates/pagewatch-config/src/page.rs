//! HTML page and minification options.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::mode::Mode;

/// One HTML page rendered from a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HtmlPage {
    /// Template path, relative to the project root
    #[serde(default = "default_template")]
    pub template: PathBuf,

    /// Output filename, relative to the output directory.
    /// Also the artifact name used for change detection.
    #[serde(default = "default_filename")]
    pub filename: String,

    /// Extra template variables
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub variables: HashMap<String, Value>,
}

impl HtmlPage {
    pub fn new(template: impl Into<PathBuf>, filename: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            filename: filename.into(),
            variables: HashMap::new(),
        }
    }

    /// Template path resolved against `root` when relative.
    pub fn template_in(&self, root: &Path) -> PathBuf {
        if self.template.is_absolute() {
            self.template.clone()
        } else {
            root.join(&self.template)
        }
    }
}

impl Default for HtmlPage {
    fn default() -> Self {
        Self::new(default_template(), default_filename())
    }
}

pub fn default_template() -> PathBuf {
    PathBuf::from("src/index.html")
}

pub fn default_filename() -> String {
    "index.html".to_string()
}

/// HTML minification switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MinifyOptions {
    /// Strip `<!-- -->` comments (conditional comments are kept)
    pub remove_comments: bool,
    /// Collapse whitespace in text and drop whitespace between tags
    pub collapse_whitespace: bool,
    /// Drop `type="text/javascript"` from `<script>`
    pub remove_script_type_attributes: bool,
    /// Drop `type="text/css"` from `<style>` and `<link>`
    pub remove_style_type_attributes: bool,
}

impl MinifyOptions {
    /// Every switch on.
    pub fn all() -> Self {
        Self {
            remove_comments: true,
            collapse_whitespace: true,
            remove_script_type_attributes: true,
            remove_style_type_attributes: true,
        }
    }

    /// Everything on in production, everything off in development.
    pub fn for_mode(mode: Mode) -> Self {
        if mode.is_production() {
            Self::all()
        } else {
            Self::default()
        }
    }

    /// Whether any transformation is requested.
    pub fn is_enabled(&self) -> bool {
        self.remove_comments
            || self.collapse_whitespace
            || self.remove_script_type_attributes
            || self.remove_style_type_attributes
    }
}
