//! Watch-mode configuration types.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchOptions {
    /// Directories watched for changes, relative to the project root
    #[serde(default = "default_watch_paths")]
    pub paths: Vec<PathBuf>,

    /// Ignore patterns: directory names or `*.ext` suffixes
    #[serde(default = "default_ignore")]
    pub ignore: Vec<String>,

    /// Per-path debounce window; 0 disables debouncing
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            paths: default_watch_paths(),
            ignore: default_ignore(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl WatchOptions {
    /// Watch paths resolved against `root` when relative.
    pub fn paths_in(&self, root: &Path) -> Vec<PathBuf> {
        self.paths
            .iter()
            .map(|p| if p.is_absolute() { p.clone() } else { root.join(p) })
            .collect()
    }
}

pub fn default_watch_paths() -> Vec<PathBuf> {
    vec![PathBuf::from("src")]
}

pub fn default_ignore() -> Vec<String> {
    vec![
        "node_modules".to_string(),
        "dist".to_string(),
        "*.log".to_string(),
    ]
}

pub fn default_debounce_ms() -> u64 {
    100
}
