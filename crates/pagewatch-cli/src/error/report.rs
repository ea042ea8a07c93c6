//! Conversion from [`CliError`] to miette reports.

use crate::error::{CliError, ConfigError, RenderError};
use miette::Report;

/// Convert a CLI error into a report with a help line where one applies.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        CliError::Render(e) => render_error_to_miette(e),
        CliError::FileNotFound(path) => miette::miette!(
            help = "Check the path and the --cwd directory",
            "File not found: {}",
            path.display()
        ),
        CliError::InvalidArgument(msg) => miette::miette!(
            help = "Run `pagewatch --help` for usage",
            "Invalid argument: {}",
            msg
        ),
        _ => miette::miette!("{}", err),
    }
}

fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::NotFound(_) => miette::miette!(
            help = "Create pagewatch.toml in the project root or pass --config <path>",
            "Configuration error: {}",
            err
        ),
        ConfigError::NoPages => miette::miette!(
            help = "Add at least one [[pages]] table with `template` and `filename`",
            "Configuration error: {}",
            err
        ),
        ConfigError::DuplicatePage(_) => miette::miette!(
            help = "Every page needs its own output filename",
            "Configuration error: {}",
            err
        ),
        _ => miette::miette!("Configuration error: {}", err),
    }
}

fn render_error_to_miette(err: RenderError) -> Report {
    match err {
        RenderError::TemplateNotFound(_) => miette::miette!(
            help = "Template paths are resolved relative to the project root",
            "Render error: {}",
            err
        ),
        RenderError::UnsafeClean(_) => miette::miette!(
            help = "Point `out_dir` at a directory inside the project",
            "Render error: {}",
            err
        ),
        _ => miette::miette!("Render error: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use miette::Diagnostic;
    use std::path::PathBuf;

    #[test]
    fn test_report_keeps_message() {
        let report = cli_error_to_miette(CliError::Custom("boom".to_string()));
        assert_eq!(report.to_string(), "boom");
    }

    #[test]
    fn test_report_has_help_for_invalid_argument() {
        let err = CliError::InvalidArgument("--cwd a.html is not a directory".to_string());
        let report = cli_error_to_miette(err);

        assert!(report.to_string().starts_with("Invalid argument: --cwd a.html"));
        assert!(report.help().is_some());
    }

    #[test]
    fn test_report_has_help_for_missing_config() {
        let err = CliError::Config(ConfigError::NotFound(PathBuf::from("pagewatch.toml")));
        let report = cli_error_to_miette(err);

        assert!(report.to_string().contains("pagewatch.toml"));
        let help = report.help().map(|h| h.to_string()).unwrap_or_default();
        assert!(help.contains("--config"));
    }

    #[test]
    fn test_report_has_help_for_missing_template() {
        let err = CliError::Render(RenderError::TemplateNotFound(PathBuf::from("src/index.html")));
        let report = cli_error_to_miette(err);

        assert!(report.to_string().contains("src/index.html"));
        assert!(report.help().is_some());
    }
}
