//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the client
//! configuration from a YAML file, with environment overrides applied on top.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ConsoleError, ConsoleResult};

use super::types::ClientConfig;

/// Environment variable that overrides the configured base URL.
pub const BASE_URL_ENV: &str = "FUND_DISBURSEMENT_API_URL";

/// Loads and provides access to the client configuration.
///
/// # Example
///
/// ```no_run
/// use fund_disbursement::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/console.yaml")?;
/// println!("Talking to {}", loader.config().base_url);
/// # Ok::<(), fund_disbursement::error::ConsoleError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ClientConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// Returns an error if the file is missing or is not valid YAML for
    /// [`ClientConfig`]. The `FUND_DISBURSEMENT_API_URL` environment variable,
    /// when set, replaces `base_url`.
    pub fn load<P: AsRef<Path>>(path: P) -> ConsoleResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ConsoleError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content, &path_str)?;
        Ok(Self {
            config: Self::apply_env(config, std::env::var(BASE_URL_ENV).ok()),
        })
    }

    /// Builds a loader from defaults plus environment overrides.
    pub fn from_env() -> Self {
        Self {
            config: Self::apply_env(ClientConfig::default(), std::env::var(BASE_URL_ENV).ok()),
        }
    }

    /// Parses YAML content into a validated configuration.
    pub fn parse(content: &str, source: &str) -> ConsoleResult<ClientConfig> {
        let config: ClientConfig =
            serde_yaml::from_str(content).map_err(|e| ConsoleError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;
        Self::validate(&config, source)?;
        Ok(config)
    }

    fn validate(config: &ClientConfig, source: &str) -> ConsoleResult<()> {
        let base = config.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConsoleError::ConfigParseError {
                path: source.to_string(),
                message: format!("base_url must be an http(s) URL, got '{}'", base),
            });
        }
        if config.timeout_secs == 0 {
            return Err(ConsoleError::ConfigParseError {
                path: source.to_string(),
                message: "timeout_secs must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    fn apply_env(mut config: ClientConfig, base_url: Option<String>) -> ClientConfig {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            debug!(base_url = %url, "Base URL overridden from environment");
            config.base_url = url;
        }
        config
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> ClientConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SendBatchRoute;
    use std::io::Write;

    #[test]
    fn test_load_missing_file_returns_config_not_found() {
        let result = ConfigLoader::load("/nonexistent/console.yaml");
        assert!(matches!(
            result,
            Err(ConsoleError::ConfigNotFound { path }) if path.contains("console.yaml")
        ));
    }

    #[test]
    fn test_load_reads_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url: https://payroll.example.com/api/v1").unwrap();
        writeln!(file, "timeout_secs: 10").unwrap();
        writeln!(file, "send_batch_route: send").unwrap();

        let loader = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(loader.config().timeout_secs, 10);
        assert_eq!(loader.config().send_batch_route, SendBatchRoute::Send);
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let result = ConfigLoader::parse("timeout_secs: [not a number", "inline");
        assert!(matches!(result, Err(ConsoleError::ConfigParseError { .. })));
    }

    #[test]
    fn test_parse_rejects_non_http_base_url() {
        let result = ConfigLoader::parse("base_url: ftp://example.com", "inline");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("base_url must be an http(s) URL"));
    }

    #[test]
    fn test_parse_rejects_zero_timeout() {
        let result = ConfigLoader::parse("timeout_secs: 0", "inline");
        assert!(result.is_err());
    }

    #[test]
    fn test_env_override_replaces_base_url() {
        let config = ConfigLoader::apply_env(
            ClientConfig::default(),
            Some("http://localhost:9000/api/v1".to_string()),
        );
        assert_eq!(config.base_url, "http://localhost:9000/api/v1");
    }

    #[test]
    fn test_blank_env_override_is_ignored() {
        let config = ConfigLoader::apply_env(ClientConfig::default(), Some("  ".to_string()));
        assert_eq!(config.base_url, crate::config::DEFAULT_BASE_URL);
    }
}
