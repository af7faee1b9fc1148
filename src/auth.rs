//! User and authorization projection.

use crate::error::ApiError;
use crate::rest::ApiOptions;
use crate::state::ApiState;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Current user as reported by the BFF.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub user_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

impl UserInfo {
    /// Display name, falling back to the user id.
    pub fn display_label(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.user_id,
        }
    }
}

/// What the current user may see.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Authorization {
    pub cluster_admin: bool,
}

/// Fail closed: no user means no admin.
pub fn derive_authorization(user: Option<&UserInfo>) -> Authorization {
    Authorization {
        cluster_admin: user.map(|u| u.is_admin).unwrap_or(false),
    }
}

/// Result of loading the user for the current API state.
#[derive(Debug)]
pub enum UserStatus {
    /// No client yet; render as loading, not as an error.
    NotReady,
    Loaded(UserInfo),
    Failed(ApiError),
}

impl UserStatus {
    pub fn user(&self) -> Option<&UserInfo> {
        match self {
            UserStatus::Loaded(user) => Some(user),
            _ => None,
        }
    }

    pub fn load_error(&self) -> Option<&ApiError> {
        match self {
            UserStatus::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn authorization(&self) -> Authorization {
        derive_authorization(self.user())
    }
}

/// Fetch the user through the state's client.
pub async fn load_user(state: &ApiState, opts: &ApiOptions) -> UserStatus {
    let Some(client) = state.client() else {
        return UserStatus::NotReady;
    };
    match client.get_user(opts).await {
        Ok(user) => UserStatus::Loaded(user),
        Err(err) => {
            warn!(error = %err, host_path = %client.host_path(), "Failed to load user");
            UserStatus::Failed(err)
        }
    }
}
