//! Renders every configured page and writes it to the output directory.

use pagewatch_config::{HtmlPage, MinifyOptions, PagewatchConfig};
use std::fs;
use std::path::{Path, PathBuf};

use crate::artifact::RenderedPage;
use crate::error::{RenderError, Result};
use crate::render::{HtmlRenderer, minify_html};

/// Page rendering pipeline for one project.
#[derive(Debug, Clone)]
pub struct RenderPipeline {
    root: PathBuf,
    out_dir: PathBuf,
    pages: Vec<HtmlPage>,
    renderer: HtmlRenderer,
    minify: MinifyOptions,
}

impl RenderPipeline {
    /// Create a pipeline for `config`, resolving relative paths against `root`.
    pub fn new(config: &PagewatchConfig, root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            out_dir: config.out_dir_in(&root),
            pages: config.pages.clone(),
            renderer: HtmlRenderer::new(config.mode),
            minify: config.minify_options(),
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn pages(&self) -> &[HtmlPage] {
        &self.pages
    }

    /// Render, minify and write one page.
    pub fn render_page(&self, page: &HtmlPage) -> Result<RenderedPage> {
        let rendered = self.renderer.render(page, &self.root)?;
        let content = minify_html(&rendered, &self.minify);

        let path = self.out_dir.join(&page.filename);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| RenderError::io(parent, e))?;
        }
        fs::write(&path, &content).map_err(|e| RenderError::io(&path, e))?;

        tracing::debug!(page = %page.filename, bytes = content.len(), "page rendered");

        Ok(RenderedPage {
            name: page.filename.clone(),
            path,
            content,
        })
    }

    /// Render every page in configuration order. Stops at the first failure.
    pub fn render_all(&self) -> Result<Vec<RenderedPage>> {
        self.pages
            .iter()
            .map(|page| self.render_page(page))
            .collect()
    }

    /// Remove the output directory. Returns whether anything was removed.
    ///
    /// Refuses to remove a directory that contains the project root, also
    /// when the output path only reaches it through `..` or symlinks.
    pub fn clean_output(&self) -> Result<bool> {
        if self.root.starts_with(&self.out_dir) {
            return Err(RenderError::UnsafeClean(self.out_dir.clone()));
        }

        if !self.out_dir.exists() {
            return Ok(false);
        }

        let out_dir =
            fs::canonicalize(&self.out_dir).map_err(|e| RenderError::io(&self.out_dir, e))?;
        let root = fs::canonicalize(&self.root).unwrap_or_else(|_| self.root.clone());
        if root.starts_with(&out_dir) {
            return Err(RenderError::UnsafeClean(self.out_dir.clone()));
        }

        fs::remove_dir_all(&self.out_dir).map_err(|e| RenderError::io(&self.out_dir, e))?;
        tracing::debug!(dir = %self.out_dir.display(), "output directory cleaned");
        Ok(true)
    }
}
