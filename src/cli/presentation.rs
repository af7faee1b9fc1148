//! CLI presentation: text and json formatters per command family.

mod settings;
mod shared;
mod status;

pub use settings::{format_route_match, format_settings_page};
pub use shared::format_config_validation;
pub use status::{format_namespaces, format_status, format_user, StatusReport, UserReport};
