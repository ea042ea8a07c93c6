//! pagewatch CLI - render HTML pages and signal live reload only on real changes.
//!
//! The binary wires the pieces from `pagewatch-core` and `pagewatch-config`
//! together:
//!
//! - [`cli`] - clap argument definitions
//! - [`commands`] - `build` and `watch` implementations
//! - [`watcher`] - notify-based file watcher feeding the watch loop
//! - [`error`] - CLI error type and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status lines on stderr
//!
//! # Example
//!
//! ```rust,no_run
//! use pagewatch_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;
pub mod watcher;

pub use error::{CliError, Result, ResultExt};
