//! Diagnostics for configuration and setup issues

use colored::Colorize;

use servicenow_mcp::config::{AuthType, ServerConfig};

use crate::exit_codes::{EXIT_ERROR, EXIT_SUCCESS};

/// Runs setup diagnostics and reports the results
pub struct Doctor;

impl Doctor {
    /// Create a new doctor instance
    pub fn new() -> Self {
        Self
    }

    /// Run all diagnostics. Returns the process exit code.
    pub fn run_diagnostics(&self) -> anyhow::Result<i32> {
        println!("{}", "servicenow-mcp doctor".bold());
        println!();

        let config = match ServerConfig::from_env() {
            Ok(config) => config,
            Err(e) => {
                println!("{} configuration: {}", "✗".red(), e);
                return Ok(EXIT_ERROR);
            }
        };
        println!(
            "{} configuration loaded for {}",
            "✓".green(),
            config.instance_url
        );

        match config.auth.auth_type {
            AuthType::Basic => {
                // validate() has already checked the credentials are present
                let username = config
                    .auth
                    .basic
                    .as_ref()
                    .map(|b| b.username.as_str())
                    .unwrap_or("<unset>");
                println!("{} basic auth as '{}'", "✓".green(), username);
            }
            AuthType::ApiKey => {
                let header = config
                    .auth
                    .api_key
                    .as_ref()
                    .map(|k| k.header.as_str())
                    .unwrap_or("<unset>");
                println!("{} api key auth via '{}' header", "✓".green(), header);
            }
        }
        println!(
            "{} request timeout: {}s",
            "✓".green(),
            config.timeout_secs
        );

        println!();
        println!("Configuration looks good. Run 'servicenow-mcp serve' to start the server.");
        Ok(EXIT_SUCCESS)
    }
}

impl Default for Doctor {
    fn default() -> Self {
        Self::new()
    }
}
