//! Error handling for the pagewatch CLI.
//!
//! Library crates report their own error types (`ConfigError` from
//! `pagewatch-config`, `RenderError` from `pagewatch-core`). [`CliError`]
//! wraps them together with watcher and I/O failures so commands can use `?`
//! throughout, and [`cli_error_to_miette`] turns the final error into a
//! diagnostic for `main`.
//!
//! # Example
//!
//! ```rust,no_run
//! use pagewatch_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_template(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path)
//!         .with_path(path)
//!         .with_hint("Check the `template` field of the page")
//! }
//! ```

mod report;

use std::path::PathBuf;
use thiserror::Error;

pub use pagewatch_config::ConfigError;
pub use pagewatch_core::RenderError;
pub use report::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A page failed to render or could not be written
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File watching errors
    #[error("File watcher error: {0}")]
    Watch(#[from] notify::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Append a hint line to the error message.
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T>;

    /// Prefix the error message with `msg`.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }

    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}\n\nHint: {}", err, hint))
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_from_config_error() {
        let cli_err: CliError = ConfigError::NotFound(PathBuf::from("pagewatch.toml")).into();
        assert!(matches!(cli_err, CliError::Config(_)));

        let msg = cli_err.to_string();
        assert!(msg.contains("Configuration error"));
        assert!(msg.contains("pagewatch.toml"));
    }

    #[test]
    fn test_cli_error_from_render_error() {
        let cli_err: CliError = RenderError::TemplateNotFound(PathBuf::from("src/index.html")).into();
        assert!(matches!(cli_err, CliError::Render(_)));
        assert!(cli_err.to_string().contains("src/index.html"));
    }

    #[test]
    fn test_result_ext_with_path() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));

        let err = result.with_path("/site/src").unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(ref p) if p == &PathBuf::from("/site/src")));
    }

    #[test]
    fn test_result_ext_with_path_keeps_other_io_errors() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));

        let err = result.with_path("/site/dist").unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }

    #[test]
    fn test_result_ext_with_hint() {
        let result: std::result::Result<(), ConfigError> = Err(ConfigError::NoPages);

        let msg = result.with_hint("Add a [[pages]] table").unwrap_err().to_string();
        assert!(msg.contains("no pages configured"));
        assert!(msg.contains("Hint: Add a [[pages]] table"));
    }

    #[test]
    fn test_result_ext_context() {
        let result: std::result::Result<(), ConfigError> = Err(ConfigError::NoPages);

        let msg = result.context("Failed to start watch").unwrap_err().to_string();
        assert!(msg.starts_with("Failed to start watch: "));
    }
}
