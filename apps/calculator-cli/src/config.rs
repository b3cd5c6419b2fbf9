//! Layered application configuration.
//!
//! Sources, lowest precedence first:
//! 1. built-in defaults
//! 2. YAML file passed with `--config`
//! 3. environment variables prefixed with `CALCULATOR__` (`__` separates keys)
//! 4. CLI overrides applied by the caller

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides, e.g. `CALCULATOR__LOGGING__LEVEL=debug`.
pub const ENV_PREFIX: &str = "CALCULATOR__";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("config file does not exist: {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("invalid configuration: {0}")]
    Invalid(#[from] Box<figment::Error>),
    #[error("failed to render configuration: {0}")]
    Render(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when neither `RUST_LOG` nor `-v` is given.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Render results as JSON objects instead of bare numbers.
    pub json: bool,
}

impl AppConfig {
    /// Build the figment for the given optional YAML file.
    ///
    /// # Errors
    /// Returns `ConfigError::NotFound` if `path` is given but is not a file.
    pub fn figment(path: Option<&Path>) -> Result<Figment, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                return Err(ConfigError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            figment = figment.merge(Yaml::file(path));
        }

        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Load defaults, then the YAML file (if any), then the environment.
    ///
    /// # Errors
    /// Returns `ConfigError` if the file is missing or any layer fails to
    /// deserialize.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Ok(Self::figment(path)?.extract().map_err(Box::new)?)
    }

    /// Apply command-line flags on top of the loaded layers.
    pub fn apply_cli_overrides(&mut self, json: bool) {
        if json {
            self.output.json = true;
        }
    }

    /// Pretty JSON rendering of the effective configuration.
    ///
    /// # Errors
    /// Returns `ConfigError::Render` if serialization fails.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn from_yaml(yaml: &str) -> Result<AppConfig, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(AppConfig::default()))
            .merge(Yaml::string(yaml))
            .extract()
            .map_err(Box::new)
    }

    #[test]
    fn defaults_are_quiet_text() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.logging.level, "warn");
        assert_eq!(cfg.logging.format, LogFormat::Text);
        assert!(!cfg.output.json);
    }

    #[test]
    fn yaml_overrides_defaults_partially() {
        let cfg = from_yaml("logging:\n  format: json\n").unwrap();
        assert_eq!(cfg.logging.format, LogFormat::Json);
        assert_eq!(cfg.logging.level, "warn");
        assert!(!cfg.output.json);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(from_yaml("output:\n  colour: true\n").is_err());
    }

    #[test]
    fn missing_file_is_reported() {
        let err = AppConfig::load(Some(Path::new("/definitely/not/here.yaml"))).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
        assert!(err.to_string().contains("/definitely/not/here.yaml"));
    }

    #[test]
    fn cli_json_flag_only_turns_json_on() {
        let mut cfg = AppConfig::default();
        cfg.apply_cli_overrides(false);
        assert!(!cfg.output.json);
        cfg.apply_cli_overrides(true);
        assert!(cfg.output.json);
    }

    #[test]
    fn renders_as_json() {
        let rendered = AppConfig::default().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["logging"]["level"], "warn");
        assert_eq!(value["output"]["json"], false);
    }
}
