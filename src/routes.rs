//! Route table for the admin pages.
//!
//! `/settings` only exists for cluster admins; for everyone else it falls
//! through to not-found like any unknown path.

use crate::auth::Authorization;
use serde::Serialize;

/// Landing route `/` redirects to.
pub const HOME_REDIRECT: &str = "/model-registry";

pub const SETTINGS_PATH: &str = "/settings";

/// Pages the route table can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Settings,
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RouteMatch {
    Render { route: Route },
    Redirect { to: String },
}

/// Match a path against the route table for the given authorization.
pub fn match_route(path: &str, auth: &Authorization) -> RouteMatch {
    let path = normalize(path);
    match path.as_str() {
        "/" => RouteMatch::Redirect {
            to: HOME_REDIRECT.to_string(),
        },
        SETTINGS_PATH if auth.cluster_admin => RouteMatch::Render {
            route: Route::Settings,
        },
        _ => RouteMatch::Render {
            route: Route::NotFound,
        },
    }
}

/// Paths visible to the given authorization.
pub fn visible_paths(auth: &Authorization) -> Vec<&'static str> {
    let mut paths = vec!["/"];
    if auth.cluster_admin {
        paths.push(SETTINGS_PATH);
    }
    paths
}

fn normalize(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}
