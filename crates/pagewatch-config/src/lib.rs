//! Configuration for pagewatch.
//!
//! Holds the typed configuration (`PagewatchConfig`), the build [`Mode`]
//! that switches between the production and development pipelines, and the
//! figment-based [`ConfigLoader`] that layers defaults, config files,
//! environment variables and CLI overrides.

pub mod config;
pub mod error;
pub mod loading;
pub mod mode;
pub mod page;
pub mod validation;
pub mod watch;

// Re-export main types
pub use config::*;
pub use error::*;
pub use loading::{ConfigLoader, ConfigOverrides, WatchOverrides, CONFIG_FILE_NAMES, ENV_PREFIX};
pub use mode::Mode;
pub use page::{HtmlPage, MinifyOptions};
pub use validation::validate;
pub use watch::WatchOptions;
