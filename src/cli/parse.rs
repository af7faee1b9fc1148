//! CLI parse: clap types for registry-admin. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// registry-admin - Model Registry administration client
#[derive(Parser)]
#[command(name = "registry-admin")]
#[command(about = "Administrative client for the Model Registry backend-for-frontend API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Application whose BFF endpoint to use (overrides bff.application)
    #[arg(long, global = true)]
    pub app: Option<String>,

    /// Selected namespaces, comma separated
    #[arg(long = "ns", global = true)]
    pub namespaces: Option<String>,

    /// Page query string, e.g. `ns=team-a&ns=team-b`; its `ns` values are
    /// added to the namespace selection
    #[arg(long, global = true)]
    pub query: Option<String>,

    /// Workspace root directory (for config/config.toml)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show API availability for the current application and namespaces
    Status {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show the current user and their authorization
    User {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List namespaces visible to the current user
    Namespaces {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show the settings page (cluster admins only)
    Settings {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Resolve a page path for the current user
    Route {
        /// Page path, e.g. /settings
        path: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Validate the effective configuration
    Validate,
}
