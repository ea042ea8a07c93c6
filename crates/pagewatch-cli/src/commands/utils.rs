//! Shared helpers for command implementations.

use crate::error::{CliError, Result, ResultExt};
use pagewatch_config::{ConfigLoader, ConfigOverrides, PagewatchConfig};
use std::path::{Path, PathBuf};

/// Resolve `path` against `cwd` unless it is already absolute.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Canonical project root: `--cwd` if given, else the current directory.
///
/// Canonical so the paths reported by the file watcher share its prefix.
pub fn resolve_root(cwd: Option<&Path>) -> Result<PathBuf> {
    let current = std::env::current_dir().context("Cannot read the current directory")?;
    let root = match cwd {
        Some(dir) => resolve_path(dir, &current),
        None => current,
    };

    let root = root.canonicalize().with_path(&root)?;
    if !root.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "--cwd {} is not a directory",
            root.display()
        )));
    }

    Ok(root)
}

/// Load the layered configuration for `root`.
pub fn load_config(
    root: &Path,
    config_file: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<PagewatchConfig> {
    let mut loader = ConfigLoader::new(root).with_overrides(overrides);
    if let Some(file) = config_file {
        loader = loader.with_file(file);
    }

    Ok(loader.load()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagewatch_config::Mode;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_path() {
        let cwd = Path::new("/work");
        assert_eq!(resolve_path(Path::new("site"), cwd), PathBuf::from("/work/site"));
        assert_eq!(resolve_path(Path::new("/abs"), cwd), PathBuf::from("/abs"));
    }

    #[test]
    fn test_resolve_root_missing_dir() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");

        let err = resolve_root(Some(&missing)).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn test_resolve_root_rejects_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("index.html");
        std::fs::write(&file, "<p>hi</p>").unwrap();

        let err = resolve_root(Some(&file)).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(ref msg) if msg.contains("not a directory")));
    }

    #[test]
    fn test_resolve_root_is_canonical() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("site");
        std::fs::create_dir_all(&nested).unwrap();

        let root = resolve_root(Some(&nested.join("..").join("site"))).unwrap();
        assert_eq!(root, nested.canonicalize().unwrap());
    }

    #[test]
    fn test_load_config_applies_overrides() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("pagewatch.toml"), "out_dir = \"public\"\n").unwrap();

        let config = load_config(
            temp.path(),
            None,
            ConfigOverrides {
                mode: Some(Mode::Production),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(config.mode, Mode::Production);
        assert_eq!(config.out_dir, PathBuf::from("public"));
    }

    #[test]
    fn test_load_config_missing_explicit_file() {
        let temp = TempDir::new().unwrap();

        let err = load_config(temp.path(), Some(Path::new("nope.toml")), ConfigOverrides::default())
            .unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }
}
