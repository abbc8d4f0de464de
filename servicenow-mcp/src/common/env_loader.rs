//! Environment variable loading utilities
//!
//! Common patterns for loading environment variables with type conversion
//! and fallback defaults, shared by configuration loading and the CLI.

use std::env;
use std::str::FromStr;

/// Load an environment variable with a string default
pub fn load_env_string(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Load an environment variable as an Option<T>
pub fn load_env_optional<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    env::var(key).ok().and_then(|v| v.parse().ok())
}

/// Loader for environment variables sharing a common prefix
#[derive(Debug)]
pub struct EnvLoader {
    prefix: String,
}

impl EnvLoader {
    /// Create a new environment loader with the given prefix
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }

    /// Load a string value with default
    pub fn load_string(&self, suffix: &str, default: &str) -> String {
        load_env_string(&self.key(suffix), default)
    }

    /// Load a parsed value with default
    pub fn load_parsed<T>(&self, suffix: &str, default: T) -> T
    where
        T: FromStr,
    {
        load_env_optional(&self.key(suffix)).unwrap_or(default)
    }

    /// Load an optional value
    pub fn load_optional<T>(&self, suffix: &str) -> Option<T>
    where
        T: FromStr,
    {
        load_env_optional(&self.key(suffix))
    }

    fn key(&self, suffix: &str) -> String {
        format!("{}_{}", self.prefix, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_load_env_string_default() {
        std::env::remove_var("SNOW_TEST_MISSING");
        assert_eq!(load_env_string("SNOW_TEST_MISSING", "fallback"), "fallback");
    }

    #[test]
    #[serial]
    fn test_env_loader_prefixes_keys() {
        std::env::set_var("SNOW_TEST_TIMEOUT", "45");
        let loader = EnvLoader::new("SNOW_TEST");
        assert_eq!(loader.load_parsed("TIMEOUT", 30u64), 45);
        assert_eq!(loader.load_optional::<u64>("ABSENT"), None);
        std::env::remove_var("SNOW_TEST_TIMEOUT");
    }

    #[test]
    #[serial]
    fn test_env_loader_unparseable_falls_back() {
        std::env::set_var("SNOW_TEST_BAD", "not-a-number");
        let loader = EnvLoader::new("SNOW_TEST");
        assert_eq!(loader.load_parsed("BAD", 30u64), 30);
        std::env::remove_var("SNOW_TEST_BAD");
    }
}
