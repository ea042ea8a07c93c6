//! Shared fixtures for pagewatch-core integration tests.
#![allow(dead_code)]

use pagewatch_config::{HtmlPage, Mode, PagewatchConfig};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

/// Project with `src/index.html` containing `template`.
pub fn project(template: &str) -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    write(dir.path(), "src/index.html", template);
    dir
}

pub fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create dirs");
    }
    fs::write(path, content).expect("write file");
}

pub fn config(mode: Mode, pages: Vec<HtmlPage>) -> PagewatchConfig {
    PagewatchConfig {
        mode,
        pages,
        ..Default::default()
    }
}

/// A reload channel counting its signals.
#[derive(Clone, Default)]
pub struct Counter(Arc<AtomicUsize>);

impl Counter {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    pub fn channel(&self) -> impl Fn() + Send + Sync + 'static {
        let inner = Arc::clone(&self.0);
        move || {
            inner.fetch_add(1, Ordering::SeqCst);
        }
    }
}
