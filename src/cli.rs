//! CLI domain: parse, route, output, and presentation only.
//! No domain orchestration; single route table dispatches to the library.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, ConfigCommands};
pub use presentation::{
    format_config_validation, format_namespaces, format_route_match, format_settings_page,
    format_status, format_user, StatusReport, UserReport,
};
pub use route::RunContext;
