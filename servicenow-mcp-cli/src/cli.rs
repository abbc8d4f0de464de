use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "servicenow-mcp")]
#[command(version)]
#[command(about = "An MCP server exposing ServiceNow incidents and knowledge bases as tools")]
#[command(long_about = "
servicenow-mcp is an MCP (Model Context Protocol) server that exposes a
ServiceNow instance's incidents and knowledge base as callable tools for
AI assistants. Configure the target instance through SERVICENOW_* environment
variables.

Example usage:
  servicenow-mcp serve      # Run as MCP server over stdio
  servicenow-mcp doctor     # Check configuration and setup
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run as MCP server (default when invoked via stdio)
    #[command(long_about = "
Runs servicenow-mcp as an MCP server over stdio. This is the mode MCP
clients (e.g. Claude Code) invoke. The server will:

- Read the instance URL and credentials from SERVICENOW_* environment variables
- Expose incident and knowledge base tools via the MCP protocol
- Forward every tool call to the configured ServiceNow instance

Required environment:
  SERVICENOW_INSTANCE_URL   Base URL of the instance
  SERVICENOW_USERNAME       Username (basic auth, the default)
  SERVICENOW_PASSWORD       Password (basic auth, the default)

Or for API key authentication:
  SERVICENOW_AUTH_TYPE=api_key
  SERVICENOW_API_KEY        The key value
")]
    Serve,
    /// Diagnose configuration and setup issues
    #[command(long_about = "
Runs diagnostics to help troubleshoot setup issues. The doctor command
checks that the SERVICENOW_* environment variables are present and
consistent, and that the instance URL is well-formed.
")]
    Doctor,
}
