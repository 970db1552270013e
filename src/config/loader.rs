use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: mailer.{key} is not set (edit {path})")]
    MissingCredential { key: &'static str, path: PathBuf },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/termfolio/config.toml` on Unix/macOS, or equivalent
    /// on other platforms via `dirs::config_dir()`. Falls back to the
    /// current directory if no config directory is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("termfolio").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from a specific file.
    ///
    /// - If the file doesn't exist, validates `Config::default()`, which
    ///   fails with a message naming the missing credential, so a first run
    ///   tells the user exactly what to put where.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let config = Config::default();
            config.validate_at(path)?;
            return Ok(config);
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate_at(path)?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Credentials are checked eagerly here so the process refuses to start
    /// with an unusable mailer, rather than passing empty strings through
    /// to the provider and failing at send time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_at(&Self::config_path())
    }

    fn validate_at(&self, path: &Path) -> Result<(), ConfigError> {
        let missing = |key| ConfigError::MissingCredential {
            key,
            path: path.to_path_buf(),
        };

        if self.mailer.service_id.trim().is_empty() {
            return Err(missing("service_id"));
        }
        if self.mailer.template_id.trim().is_empty() {
            return Err(missing("template_id"));
        }
        if self.mailer.public_key.trim().is_empty() {
            return Err(missing("public_key"));
        }
        if self.mailer.recipient.trim().is_empty() {
            return Err(missing("recipient"));
        }
        if self.mailer.send_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "mailer.send_timeout_seconds must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MailerConfig;

    fn filled() -> Config {
        Config {
            mailer: MailerConfig {
                service_id: "service_abc".to_string(),
                template_id: "template_xyz".to_string(),
                public_key: "pk_123".to_string(),
                recipient: "hello@portfolio.com".to_string(),
                ..MailerConfig::default()
            },
        }
    }

    #[test]
    fn default_config_fails_validation() {
        let err = Config::default().validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingCredential {
                key: "service_id",
                ..
            }
        ));
    }

    #[test]
    fn filled_config_passes_validation() {
        filled().validate().unwrap();
    }

    #[test]
    fn each_missing_credential_is_named() {
        for (key, clear) in [
            ("service_id", (|c: &mut Config| c.mailer.service_id.clear()) as fn(&mut Config)),
            ("template_id", |c| c.mailer.template_id.clear()),
            ("public_key", |c| c.mailer.public_key.clear()),
            ("recipient", |c| c.mailer.recipient.clear()),
        ] {
            let mut config = filled();
            clear(&mut config);
            match config.validate().unwrap_err() {
                ConfigError::MissingCredential { key: got, .. } => assert_eq!(got, key),
                other => panic!("expected MissingCredential for {key}, got {other}"),
            }
        }
    }

    #[test]
    fn whitespace_credential_counts_as_missing() {
        let mut config = filled();
        config.mailer.public_key = "   ".to_string();
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::MissingCredential {
                key: "public_key",
                ..
            }
        ));
    }

    #[test]
    fn zero_timeout_rejected() {
        let mut config = filled();
        config.mailer.send_timeout_seconds = 0;
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::ValidationError { .. }
        ));
    }
}
