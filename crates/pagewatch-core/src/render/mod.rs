//! HTML page rendering.
//!
//! - [`HtmlRenderer`] renders a page template with minijinja
//! - [`minify_html`] applies the configured HTML minification
//! - [`RenderPipeline`] renders every configured page and writes it to disk

mod html;
mod minify;
mod pipeline;

pub use html::HtmlRenderer;
pub use minify::minify_html;
pub use pipeline::RenderPipeline;
