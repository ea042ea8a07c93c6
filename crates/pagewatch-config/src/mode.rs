//! Build mode selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Whether a run produces a development or a production build.
///
/// Production minifies pages and cleans the output directory. Development
/// keeps pages readable and wires live-reload notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Development,
    Production,
}

impl Mode {
    /// Detect the mode from raw process arguments.
    ///
    /// Any argument equal to `production` selects [`Mode::Production`],
    /// everything else is a development run.
    ///
    /// ```
    /// use pagewatch_config::Mode;
    ///
    /// assert_eq!(Mode::from_args(["pagewatch", "build", "production"]), Mode::Production);
    /// assert_eq!(Mode::from_args(["pagewatch", "watch"]), Mode::Development);
    /// ```
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if args.into_iter().any(|arg| arg.as_ref() == "production") {
            Mode::Production
        } else {
            Mode::Development
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, Mode::Production)
    }

    pub fn is_development(self) -> bool {
        matches!(self, Mode::Development)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => "production",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Mode::Development),
            "production" | "prod" => Ok(Mode::Production),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_token_anywhere_in_args() {
        assert_eq!(
            Mode::from_args(["pagewatch", "--verbose", "production", "build"]),
            Mode::Production
        );
    }

    #[test]
    fn partial_token_is_not_production() {
        assert_eq!(
            Mode::from_args(["pagewatch", "--production-like", "productions"]),
            Mode::Development
        );
    }

    #[test]
    fn empty_args_default_to_development() {
        assert_eq!(Mode::from_args(Vec::<String>::new()), Mode::Development);
        assert_eq!(Mode::default(), Mode::Development);
    }

    #[test]
    fn parses_short_and_long_names() {
        assert_eq!("prod".parse::<Mode>().unwrap(), Mode::Production);
        assert_eq!(" Development ".parse::<Mode>().unwrap(), Mode::Development);
        assert!(matches!(
            "staging".parse::<Mode>(),
            Err(ConfigError::UnknownMode(m)) if m == "staging"
        ));
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Mode::Production).unwrap();
        assert_eq!(json, "\"production\"");
        assert_eq!(Mode::Production.to_string(), "production");
    }
}
