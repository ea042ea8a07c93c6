//! Rendered artifacts and render notifications.

use std::path::PathBuf;

/// A freshly rendered artifact reported to the notifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderEvent {
    pub name: String,
    pub content: String,
}

impl RenderEvent {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// A page produced by the render pipeline and written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    /// Output filename relative to the output directory
    pub name: String,
    /// Where the page was written
    pub path: PathBuf,
    pub content: String,
}

impl RenderedPage {
    pub fn into_event(self) -> RenderEvent {
        RenderEvent {
            name: self.name,
            content: self.content,
        }
    }
}

impl From<RenderedPage> for RenderEvent {
    fn from(page: RenderedPage) -> Self {
        page.into_event()
    }
}
