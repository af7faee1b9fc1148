//! registry-admin CLI Binary
//!
//! Command-line interface for the Model Registry administration client.

use clap::Parser;
use registry_admin::cli::{Cli, RunContext};
use registry_admin::config::ConfigLoader;
use registry_admin::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);

    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("registry-admin starting");

    let context = match RunContext::new(
        cli.workspace.clone(),
        cli.config.clone(),
        cli.app.clone(),
        cli.namespaces.clone(),
    ) {
        Ok(ctx) => ctx.with_page_query(cli.query.as_deref()),
        Err(e) => {
            error!("Error loading configuration: {}", e);
            eprintln!("{}", registry_admin::cli::map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", registry_admin::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args, environment, and config file
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    if !cli.verbose {
        let mut config = LoggingConfig::default();
        config.level = "off".to_string();
        return config;
    }

    let mut config = if let Some(ref config_path) = cli.config {
        ConfigLoader::load_from_file(config_path)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default()
    } else {
        ConfigLoader::load(&cli.workspace)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default()
    };

    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = file.clone();
    }

    config
}
