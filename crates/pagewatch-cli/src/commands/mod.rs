//! Command implementations.
//!
//! - [`build`] - render every page once
//! - [`watch`] - render on every file change and report real changes
//!
//! Each command exposes an `execute` function taking its parsed arguments.

pub mod build;
pub(crate) mod utils;
pub mod watch;

pub use build::execute as build_execute;
pub use watch::execute as watch_execute;
