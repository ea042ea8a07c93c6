//! Template rendering with minijinja.

use minijinja::{Environment, Value, path_loader};
use pagewatch_config::{HtmlPage, Mode};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{RenderError, Result};

/// Renders page templates.
///
/// Templates see `mode`, `production`, `filename` and the page's own
/// `variables`. `{% include %}` and `{% extends %}` resolve relative to the
/// template's directory.
#[derive(Debug, Clone, Copy)]
pub struct HtmlRenderer {
    mode: Mode,
}

impl HtmlRenderer {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Render `page` with its template resolved against `root`.
    pub fn render(&self, page: &HtmlPage, root: &Path) -> Result<String> {
        let path = page.template_in(root);
        if !path.is_file() {
            return Err(RenderError::TemplateNotFound(path));
        }

        let dir = path.parent().unwrap_or(root);
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| RenderError::TemplateNotFound(path.clone()))?;

        // Fresh environment per render: edited templates and partials are re-read.
        let mut env = Environment::new();
        env.set_loader(path_loader(dir));
        env.set_keep_trailing_newline(true);

        let template = env.get_template(&name).map_err(|source| RenderError::Template {
            path: path.clone(),
            source,
        })?;

        template
            .render(self.context(page))
            .map_err(|source| RenderError::Template { path, source })
    }

    /// Render template source directly, without touching the filesystem.
    pub fn render_str(&self, page: &HtmlPage, source: &str) -> Result<String> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        let template = env
            .template_from_named_str(page.filename.as_str(), source)
            .map_err(|source| RenderError::Template {
                path: page.template.clone(),
                source,
            })?;

        template
            .render(self.context(page))
            .map_err(|source| RenderError::Template {
                path: page.template.clone(),
                source,
            })
    }

    fn context(&self, page: &HtmlPage) -> BTreeMap<String, Value> {
        let mut ctx: BTreeMap<String, Value> = page
            .variables
            .iter()
            .map(|(key, value)| (key.clone(), Value::from_serialize(value)))
            .collect();

        ctx.insert("mode".to_string(), Value::from(self.mode.as_str()));
        ctx.insert("production".to_string(), Value::from(self.mode.is_production()));
        ctx.insert("filename".to_string(), Value::from(page.filename.as_str()));
        ctx
    }
}
