//! Schema validation (no filesystem checks).

use std::collections::HashSet;
use std::path::{Component, Path};

use crate::config::PagewatchConfig;
use crate::error::{ConfigError, Result};

/// Check a loaded configuration for values that cannot produce a build.
pub fn validate(config: &PagewatchConfig) -> Result<()> {
    if config.pages.is_empty() {
        return Err(ConfigError::NoPages);
    }

    let mut seen = HashSet::new();
    for page in &config.pages {
        validate_filename(&page.filename)?;

        if page.template.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "pages.template".to_string(),
                value: String::new(),
                hint: "Point each page at an HTML template".to_string(),
            });
        }

        if !seen.insert(page.filename.as_str()) {
            return Err(ConfigError::DuplicatePage(page.filename.clone()));
        }
    }

    if config.out_dir.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "out_dir".to_string(),
            value: String::new(),
            hint: "Use a directory such as \"dist\"".to_string(),
        });
    }

    if config
        .out_dir
        .components()
        .any(|c| matches!(c, Component::ParentDir))
    {
        return Err(ConfigError::InvalidValue {
            field: "out_dir".to_string(),
            value: config.out_dir.display().to_string(),
            hint: "The output directory is cleaned; keep it free of \"..\"".to_string(),
        });
    }

    if config.watch.paths.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "watch.paths".to_string(),
            value: "[]".to_string(),
            hint: "Watch at least one directory, e.g. [\"src\"]".to_string(),
        });
    }

    Ok(())
}

/// Output filenames stay inside the output directory.
fn validate_filename(filename: &str) -> Result<()> {
    let invalid = |hint: &str| ConfigError::InvalidValue {
        field: "pages.filename".to_string(),
        value: filename.to_string(),
        hint: hint.to_string(),
    };

    if filename.trim().is_empty() {
        return Err(invalid("Page filenames cannot be empty"));
    }

    let path = Path::new(filename);
    if path.is_absolute() {
        return Err(invalid("Use a path relative to the output directory"));
    }

    if path
        .components()
        .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)))
    {
        return Err(invalid("Page output must stay inside the output directory"));
    }

    Ok(())
}
