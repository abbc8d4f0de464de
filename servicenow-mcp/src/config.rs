//! Configuration management for the ServiceNow MCP server
//!
//! Server configuration is loaded from `SERVICENOW_*` environment variables
//! with sensible defaults. The configuration names the target instance and
//! the credentials the REST transport attaches to every request; the library
//! performs no further credential management.

use crate::common::env_loader::EnvLoader;
use thiserror::Error;
use url::Url;

const ENV_PREFIX: &str = "SERVICENOW";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_API_KEY_HEADER: &str = "x-sn-apikey";

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("Missing required environment variable {var}\nHint: {hint}")]
    MissingVar {
        /// Name of the missing variable
        var: String,
        /// Helpful hint about what the variable should contain
        hint: String,
    },

    /// Invalid configuration value for a specific field
    #[error("Invalid configuration value for '{field}': {value}\n{hint}")]
    InvalidValue {
        /// Name of the configuration field that has an invalid value
        field: String,
        /// The invalid value that was provided
        value: String,
        /// Helpful hint about how to fix the issue
        hint: String,
    },
}

/// Authentication scheme used against the ServiceNow instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthType {
    /// HTTP basic authentication with username and password
    Basic,
    /// API key sent in a request header
    ApiKey,
}

impl std::str::FromStr for AuthType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "basic" => Ok(AuthType::Basic),
            "api_key" | "apikey" => Ok(AuthType::ApiKey),
            other => Err(format!("unknown auth type '{other}'")),
        }
    }
}

/// Credentials for HTTP basic authentication
#[derive(Debug, Clone)]
pub struct BasicAuthConfig {
    /// Instance username
    pub username: String,
    /// Instance password
    pub password: String,
}

/// Credentials for header-based API key authentication
#[derive(Debug, Clone)]
pub struct ApiKeyConfig {
    /// The API key value
    pub api_key: String,
    /// Header the key is sent in (default: `x-sn-apikey`)
    pub header: String,
}

/// Authentication configuration for the REST transport
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Which scheme to use
    pub auth_type: AuthType,
    /// Basic credentials, required when `auth_type` is [`AuthType::Basic`]
    pub basic: Option<BasicAuthConfig>,
    /// API key credentials, required when `auth_type` is [`AuthType::ApiKey`]
    pub api_key: Option<ApiKeyConfig>,
}

impl AuthConfig {
    /// Basic-auth configuration from username and password
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            auth_type: AuthType::Basic,
            basic: Some(BasicAuthConfig {
                username: username.into(),
                password: password.into(),
            }),
            api_key: None,
        }
    }

    /// API-key configuration with the default header
    pub fn api_key(key: impl Into<String>) -> Self {
        Self {
            auth_type: AuthType::ApiKey,
            basic: None,
            api_key: Some(ApiKeyConfig {
                api_key: key.into(),
                header: DEFAULT_API_KEY_HEADER.to_string(),
            }),
        }
    }
}

/// Configuration for a ServiceNow MCP server instance
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Base URL of the ServiceNow instance, e.g. `https://dev309760.service-now.com`
    pub instance_url: String,
    /// Authentication used for every request
    pub auth: AuthConfig,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl ServerConfig {
    /// Build a configuration from `SERVICENOW_*` environment variables.
    ///
    /// Recognized variables:
    /// - `SERVICENOW_INSTANCE_URL` (required)
    /// - `SERVICENOW_AUTH_TYPE` (`basic` or `api_key`, default `basic`)
    /// - `SERVICENOW_USERNAME` / `SERVICENOW_PASSWORD` (basic auth)
    /// - `SERVICENOW_API_KEY` / `SERVICENOW_API_KEY_HEADER` (api key auth)
    /// - `SERVICENOW_TIMEOUT_SECS` (default 30)
    pub fn from_env() -> std::result::Result<Self, ConfigError> {
        let loader = EnvLoader::new(ENV_PREFIX);

        let instance_url: String =
            loader
                .load_optional("INSTANCE_URL")
                .ok_or_else(|| ConfigError::MissingVar {
                    var: format!("{ENV_PREFIX}_INSTANCE_URL"),
                    hint: "set it to your instance base URL, e.g. https://dev309760.service-now.com"
                        .to_string(),
                })?;

        let auth_type_raw = loader.load_string("AUTH_TYPE", "basic");
        let auth_type: AuthType =
            auth_type_raw
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    field: format!("{ENV_PREFIX}_AUTH_TYPE"),
                    value: auth_type_raw.clone(),
                    hint: "expected 'basic' or 'api_key'".to_string(),
                })?;

        let auth = match auth_type {
            AuthType::Basic => {
                let username: String = loader.load_optional("USERNAME").ok_or_else(|| {
                    ConfigError::MissingVar {
                        var: format!("{ENV_PREFIX}_USERNAME"),
                        hint: "basic auth requires a username".to_string(),
                    }
                })?;
                let password: String = loader.load_optional("PASSWORD").ok_or_else(|| {
                    ConfigError::MissingVar {
                        var: format!("{ENV_PREFIX}_PASSWORD"),
                        hint: "basic auth requires a password".to_string(),
                    }
                })?;
                AuthConfig::basic(username, password)
            }
            AuthType::ApiKey => {
                let api_key: String = loader.load_optional("API_KEY").ok_or_else(|| {
                    ConfigError::MissingVar {
                        var: format!("{ENV_PREFIX}_API_KEY"),
                        hint: "api_key auth requires a key".to_string(),
                    }
                })?;
                let header = loader.load_string("API_KEY_HEADER", DEFAULT_API_KEY_HEADER);
                AuthConfig {
                    auth_type: AuthType::ApiKey,
                    basic: None,
                    api_key: Some(ApiKeyConfig { api_key, header }),
                }
            }
        };

        let config = Self {
            instance_url,
            auth,
            timeout_secs: loader.load_parsed("TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration is internally consistent.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let url = Url::parse(&self.instance_url).map_err(|e| ConfigError::InvalidValue {
            field: "instance_url".to_string(),
            value: self.instance_url.clone(),
            hint: format!("not a valid URL: {e}"),
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::InvalidValue {
                field: "instance_url".to_string(),
                value: self.instance_url.clone(),
                hint: "expected an http or https URL".to_string(),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs".to_string(),
                value: self.timeout_secs.to_string(),
                hint: "timeout must be at least 1 second".to_string(),
            });
        }
        match self.auth.auth_type {
            AuthType::Basic if self.auth.basic.is_none() => Err(ConfigError::InvalidValue {
                field: "auth".to_string(),
                value: "basic".to_string(),
                hint: "basic auth selected but no username/password configured".to_string(),
            }),
            AuthType::ApiKey if self.auth.api_key.is_none() => Err(ConfigError::InvalidValue {
                field: "auth".to_string(),
                value: "api_key".to_string(),
                hint: "api_key auth selected but no key configured".to_string(),
            }),
            _ => Ok(()),
        }
    }

    /// Construct a configuration directly, for tests and embedding.
    pub fn new(instance_url: impl Into<String>, auth: AuthConfig) -> Self {
        Self {
            instance_url: instance_url.into(),
            auth,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for suffix in [
            "INSTANCE_URL",
            "AUTH_TYPE",
            "USERNAME",
            "PASSWORD",
            "API_KEY",
            "API_KEY_HEADER",
            "TIMEOUT_SECS",
        ] {
            std::env::remove_var(format!("{ENV_PREFIX}_{suffix}"));
        }
    }

    #[test]
    #[serial]
    fn test_from_env_requires_instance_url() {
        clear_env();
        let err = ServerConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("SERVICENOW_INSTANCE_URL"));
    }

    #[test]
    #[serial]
    fn test_from_env_basic_auth() {
        clear_env();
        std::env::set_var("SERVICENOW_INSTANCE_URL", "https://dev.service-now.com");
        std::env::set_var("SERVICENOW_USERNAME", "admin");
        std::env::set_var("SERVICENOW_PASSWORD", "secret");

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.auth.auth_type, AuthType::Basic);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        let basic = config.auth.basic.unwrap();
        assert_eq!(basic.username, "admin");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_api_key_auth() {
        clear_env();
        std::env::set_var("SERVICENOW_INSTANCE_URL", "https://dev.service-now.com");
        std::env::set_var("SERVICENOW_AUTH_TYPE", "api_key");
        std::env::set_var("SERVICENOW_API_KEY", "abc123");

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.auth.auth_type, AuthType::ApiKey);
        let key = config.auth.api_key.unwrap();
        assert_eq!(key.header, DEFAULT_API_KEY_HEADER);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_unknown_auth_type() {
        clear_env();
        std::env::set_var("SERVICENOW_INSTANCE_URL", "https://dev.service-now.com");
        std::env::set_var("SERVICENOW_AUTH_TYPE", "oauth2");
        let err = ServerConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("oauth2"));
        clear_env();
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let config = ServerConfig::new("not a url", AuthConfig::basic("a", "b"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config =
            ServerConfig::new("https://dev.service-now.com", AuthConfig::basic("a", "b"));
        config.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_incomplete_auth() {
        let config = ServerConfig::new(
            "https://dev.service-now.com",
            AuthConfig {
                auth_type: AuthType::ApiKey,
                basic: None,
                api_key: None,
            },
        );
        assert!(config.validate().is_err());
    }
}
