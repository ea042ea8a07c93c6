//! Change detection and page rendering for pagewatch.
//!
//! The center of this crate is [`ChangeNotifier`]: every time a page is
//! rendered the notifier compares it with the last rendering of the same
//! page and, only when they differ, tells a [`ReloadChannel`] that content
//! changed. The first rendering of a page only establishes a baseline.
//!
//! Around it:
//!
//! - [`cache`] - the per-name content cache the notifier owns
//! - [`channel`] - the outbound notification abstraction and in-process channels
//! - [`render`] - template rendering, HTML minification and the page pipeline
//! - [`session`] - a watch session tying the pipeline to a notifier
//!
//! # Example
//!
//! ```
//! use pagewatch_core::ChangeNotifier;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! let signals = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&signals);
//! let notifier = ChangeNotifier::new(move || {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! notifier.on_render("index.html", "<p>v1</p>");
//! notifier.on_render("index.html", "<p>v2</p>");
//! notifier.on_render("index.html", "<p>v2</p>");
//! assert_eq!(signals.load(Ordering::SeqCst), 1);
//! ```

pub mod artifact;
pub mod cache;
pub mod channel;
pub mod error;
pub mod notifier;
pub mod render;
pub mod session;

pub use artifact::{RenderEvent, RenderedPage};
pub use cache::{ArtifactCache, Observation};
pub use channel::{BroadcastChannel, ContentChanged, NoopChannel, ReloadChannel};
pub use error::{RenderError, Result};
pub use notifier::ChangeNotifier;
pub use render::{HtmlRenderer, RenderPipeline, minify_html};
pub use session::{RebuildSummary, WatchSession};
