use std::path::PathBuf;

use serde::Deserialize;
use tracing::Level;

use crate::error::NotifierError;

const ENV_PREFIX: &str = "NOTIFIER_";

/// Settings read from `NOTIFIER_*` environment variables.
#[derive(Debug, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Overrides the window size given in the input.
    #[serde(default)]
    pub window: Option<usize>,
    /// Reads the input from this file instead of stdin.
    #[serde(default)]
    pub input: Option<PathBuf>,
}

fn default_log_level() -> String {
    String::from("info")
}

impl Config {
    pub fn from_env() -> Result<Self, NotifierError> {
        Ok(envy::prefixed(ENV_PREFIX).from_env::<Config>()?)
    }

    pub fn level(&self) -> Result<Level, NotifierError> {
        self.log_level
            .parse()
            .map_err(|_| NotifierError::LogLevel(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, ENV_PREFIX};
    use std::path::PathBuf;
    use tracing::Level;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<Config, envy::Error> {
        envy::prefixed(ENV_PREFIX).from_iter(
            pairs
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string())),
        )
    }

    #[test]
    fn test_defaults() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.window, None);
        assert_eq!(config.input, None);
        assert_eq!(config.level().unwrap(), Level::INFO);
    }

    #[test]
    fn test_prefixed_values() {
        let config = from_pairs(&[
            ("NOTIFIER_LOG_LEVEL", "debug"),
            ("NOTIFIER_WINDOW", "7"),
            ("NOTIFIER_INPUT", "/tmp/expenditure.txt"),
            ("WINDOW", "99"),
        ])
        .unwrap();
        assert_eq!(config.level().unwrap(), Level::DEBUG);
        assert_eq!(config.window, Some(7));
        assert_eq!(config.input, Some(PathBuf::from("/tmp/expenditure.txt")));
    }

    #[test]
    fn test_invalid_window() {
        assert!(from_pairs(&[("NOTIFIER_WINDOW", "many")]).is_err());
    }

    #[test]
    fn test_unknown_log_level() {
        let config = from_pairs(&[("NOTIFIER_LOG_LEVEL", "loud")]).unwrap();
        assert!(config.level().is_err());
    }
}
