//! Settings page and route presentation.

use super::shared::{format_section_heading, to_json};
use crate::error::ApiError;
use crate::routes::{Route, RouteMatch};
use crate::settings::{PageState, SettingsView};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use serde_json::json;

pub fn format_settings_page(
    page: &PageState<SettingsView>,
    format: &str,
) -> Result<String, ApiError> {
    match (page, format) {
        (PageState::Loading, "json") => to_json(&json!({ "loaded": false })),
        (PageState::Loading, _) => Ok("Loading settings...".to_string()),
        (PageState::LoadError(err), "json") => {
            to_json(&json!({ "loaded": true, "loadError": err.to_string() }))
        }
        (PageState::LoadError(err), _) => Ok(format!(
            "{}\n\nUnable to load settings: {}",
            format_section_heading("Settings"),
            err
        )),
        (PageState::Ready(view), "json") => {
            to_json(&json!({ "loaded": true, "settings": view }))
        }
        (PageState::Ready(view), _) => {
            let mut out = format!(
                "{}\n\nConfigure application settings and view system information for the \
                 Model Registry platform.\n",
                format_section_heading("Settings")
            );
            for section in &view.sections {
                out.push_str(&format!("\n{}\n", format_section_heading(section.title)));
                let mut table = Table::new();
                table.load_preset(UTF8_BORDERS_ONLY);
                for field in &section.fields {
                    table.add_row(vec![field.label, field.value.as_str()]);
                }
                out.push_str(&format!("{}\n", table));
            }
            Ok(out)
        }
    }
}

pub fn format_route_match(
    path: &str,
    matched: &RouteMatch,
    format: &str,
) -> Result<String, ApiError> {
    if format == "json" {
        return to_json(&json!({ "path": path, "match": matched }));
    }
    Ok(match matched {
        RouteMatch::Redirect { to } => format!("{} -> redirect to {}", path, to),
        RouteMatch::Render {
            route: Route::Settings,
        } => format!("{} -> settings", path),
        RouteMatch::Render {
            route: Route::NotFound,
        } => format!("{} -> not found", path),
    })
}
