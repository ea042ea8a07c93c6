//! Multi-source configuration loading.
//!
//! Priority: CLI overrides > environment > config file > defaults

use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized, Toml},
};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::PagewatchConfig;
use crate::error::{ConfigError, Result};
use crate::mode::Mode;

/// Config files looked up in the project root, in order.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["pagewatch.toml", "pagewatch.json"];

/// Prefix for environment overrides. Nested keys are split on `__`,
/// e.g. `PAGEWATCH_WATCH__DEBOUNCE_MS=250`.
pub const ENV_PREFIX: &str = "PAGEWATCH_";

/// Values supplied on the command line. `None` leaves lower layers alone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub clean: Option<bool>,

    #[serde(skip_serializing_if = "WatchOverrides::is_empty")]
    pub watch: WatchOverrides,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct WatchOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debounce_ms: Option<u64>,
}

impl WatchOverrides {
    pub fn is_empty(&self) -> bool {
        self.debounce_ms.is_none()
    }
}

/// Builder that layers configuration sources with figment.
///
/// # Example
///
/// ```no_run
/// use pagewatch_config::{ConfigLoader, ConfigOverrides, Mode};
///
/// let config = ConfigLoader::new(".")
///     .with_overrides(ConfigOverrides {
///         mode: Some(Mode::Production),
///         ..Default::default()
///     })
///     .load()
///     .unwrap();
/// assert!(config.should_clean());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    root: PathBuf,
    file: Option<PathBuf>,
    overrides: ConfigOverrides,
    use_env: bool,
}

impl ConfigLoader {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            file: None,
            overrides: ConfigOverrides::default(),
            use_env: true,
        }
    }

    /// Use an explicit config file instead of discovering one.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Skip the `PAGEWATCH_*` environment layer.
    pub fn without_env(mut self) -> Self {
        self.use_env = false;
        self
    }

    /// Find a config file in the root directory.
    pub fn discover(&self) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| self.root.join(name))
            .find(|path| path.is_file())
    }

    /// Build the layered figment without extracting it.
    pub fn figment(&self) -> Result<Figment> {
        let mut figment = Figment::from(Serialized::defaults(PagewatchConfig::default()));

        let file = match &self.file {
            Some(path) => {
                let path = if path.is_absolute() {
                    path.clone()
                } else {
                    self.root.join(path)
                };
                if !path.is_file() {
                    return Err(ConfigError::NotFound(path));
                }
                Some(path)
            }
            None => self.discover(),
        };

        if let Some(path) = file {
            tracing::debug!(path = %path.display(), "loading config file");
            figment = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => figment.merge(Toml::file(&path)),
                Some("json") => figment.merge(Json::file(&path)),
                _ => return Err(ConfigError::UnsupportedFormat(path)),
            };
        }

        if self.use_env {
            figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
        }

        Ok(figment.merge(Serialized::defaults(&self.overrides)))
    }

    /// Load and validate the configuration.
    pub fn load(&self) -> Result<PagewatchConfig> {
        let config: PagewatchConfig = self.figment()?.extract()?;
        crate::validation::validate(&config)?;
        tracing::debug!(mode = %config.mode, pages = config.pages.len(), "configuration loaded");
        Ok(config)
    }
}
