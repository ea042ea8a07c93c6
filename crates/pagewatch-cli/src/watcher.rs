//! File system watcher with per-path debouncing.
//!
//! Watches the configured paths of a project recursively and forwards
//! relevant changes over a tokio channel. The output directory, hidden files
//! and ignore patterns are filtered out so writing pages never triggers
//! another rebuild.

use crate::error::{CliError, Result};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

const CHANNEL_CAPACITY: usize = 100;

/// File change event type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileChange {
    Modified(PathBuf),
    Created(PathBuf),
    Removed(PathBuf),
}

impl FileChange {
    /// Get the path affected by this change.
    pub fn path(&self) -> &Path {
        match self {
            FileChange::Modified(p) | FileChange::Created(p) | FileChange::Removed(p) => p,
        }
    }

    fn from_event(kind: &EventKind, path: &Path) -> Option<Self> {
        let path = path.to_path_buf();
        match kind {
            EventKind::Create(_) => Some(FileChange::Created(path)),
            EventKind::Modify(_) => Some(FileChange::Modified(path)),
            EventKind::Remove(_) => Some(FileChange::Removed(path)),
            _ => None,
        }
    }
}

/// Decides which paths are worth a rebuild.
#[derive(Debug, Clone)]
pub struct WatchFilter {
    root: PathBuf,
    ignore_patterns: Vec<String>,
    excluded: Vec<PathBuf>,
}

impl WatchFilter {
    /// Filter for paths under `root`.
    ///
    /// Patterns starting with `*` match file suffixes (`*.log`); anything
    /// else matches a path component or a leading relative path
    /// (`node_modules`, `src/vendor`).
    pub fn new(root: impl Into<PathBuf>, ignore_patterns: Vec<String>) -> Self {
        Self {
            root: root.into(),
            ignore_patterns,
            excluded: Vec::new(),
        }
    }

    /// Also ignore everything below `dir` (absolute).
    pub fn exclude(mut self, dir: impl Into<PathBuf>) -> Self {
        self.excluded.push(dir.into());
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn should_ignore(&self, path: &Path) -> bool {
        // Only files within the project root
        let Ok(rel_path) = path.strip_prefix(&self.root) else {
            return true;
        };

        if self.excluded.iter().any(|dir| path.starts_with(dir)) {
            return true;
        }

        let path_str = rel_path.to_string_lossy();
        for pattern in &self.ignore_patterns {
            if let Some(suffix) = pattern.strip_prefix('*') {
                if path_str.ends_with(suffix) {
                    return true;
                }
            } else if rel_path.starts_with(pattern)
                || rel_path
                    .components()
                    .any(|component| component.as_os_str() == pattern.as_str())
            {
                return true;
            }
        }

        // Hidden files and directories (.git, editor swap files)
        rel_path.components().any(|component| {
            component
                .as_os_str()
                .to_str()
                .is_some_and(|name| name.starts_with('.') && name != "." && name != "..")
        })
    }
}

/// Recursive watcher over a set of paths.
///
/// Repeated events for the same path inside the debounce window are
/// dropped.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
    paths: Vec<PathBuf>,
}

impl FileWatcher {
    /// Start watching `paths` and return the receiving end of the change
    /// channel.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::FileNotFound`] for a path that does not exist and
    /// [`CliError::Watch`] when the platform watcher cannot be set up.
    pub fn new(
        filter: WatchFilter,
        paths: Vec<PathBuf>,
        debounce_ms: u64,
    ) -> Result<(Self, mpsc::Receiver<FileChange>)> {
        if let Some(missing) = paths.iter().find(|path| !path.exists()) {
            return Err(CliError::FileNotFound(missing.clone()));
        }

        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        let window = Duration::from_millis(debounce_ms);
        let mut last_seen: HashMap<PathBuf, Instant> = HashMap::new();

        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            let event = match res {
                Ok(event) => event,
                Err(err) => {
                    tracing::warn!(error = %err, "file watcher error");
                    return;
                }
            };

            let now = Instant::now();
            last_seen.retain(|_, seen| now.duration_since(*seen) < window);

            for path in &event.paths {
                if filter.should_ignore(path) || last_seen.contains_key(path) {
                    continue;
                }

                let Some(change) = FileChange::from_event(&event.kind, path) else {
                    continue;
                };
                last_seen.insert(path.clone(), now);

                tracing::trace!(path = %path.display(), "file change");
                // The receiver is gone once the watch loop has ended
                if tx.blocking_send(change).is_err() {
                    return;
                }
            }
        })?;

        for path in &paths {
            watcher.watch(path, RecursiveMode::Recursive)?;
        }

        Ok((
            Self {
                _watcher: watcher,
                paths,
            },
            rx,
        ))
    }

    /// Paths being watched.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}
