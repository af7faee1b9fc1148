//! REST helpers for the BFF
//!
//! Thin layer over `reqwest`: issue a GET, turn non-success statuses into
//! [`ApiError::RequestFailed`], and check the `{ "data": ... }` envelope every
//! BFF response is wrapped in. Transport timeouts live here; nothing above
//! this layer retries or times out.

use crate::error::ApiError;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

const BFF_HTTP_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const BFF_HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Query parameter the BFF reads to validate a request without applying it.
pub const DRY_RUN_PARAM: (&str, &str) = ("dryRun", "All");

/// Per-call request options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiOptions {
    pub dry_run: bool,
    pub headers: Vec<(String, String)>,
}

impl ApiOptions {
    pub fn dry_run() -> Self {
        Self {
            dry_run: true,
            ..Self::default()
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Error body the BFF sends with non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    code: Option<String>,
    message: String,
}

/// Build the shared HTTP client. Performs no I/O.
pub fn build_http_client() -> Result<Client, ApiError> {
    Client::builder()
        .connect_timeout(BFF_HTTP_CONNECT_TIMEOUT)
        .timeout(BFF_HTTP_REQUEST_TIMEOUT)
        .build()
        .map_err(|e| ApiError::Transport(format!("Failed to create HTTP client: {}", e)))
}

fn map_http_error(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::Transport(format!("Request timeout: {}", error))
    } else if error.is_connect() {
        ApiError::Transport(format!("Connection error: {}", error))
    } else {
        ApiError::Transport(format!("HTTP error: {}", error))
    }
}

/// GET-only REST client bound to a server origin.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: Client,
    base_url: String,
}

impl RestClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` and return the decoded JSON body.
    pub async fn get(
        &self,
        path: &str,
        query: &[(&str, String)],
        opts: &ApiOptions,
    ) -> Result<Value, ApiError> {
        let url = self.url_for(path);
        debug!(url = %url, dry_run = opts.dry_run, "BFF GET");

        let mut request = self.http.get(&url).query(query);
        if opts.dry_run {
            request = request.query(&[DRY_RUN_PARAM]);
        }
        for (name, value) in &opts.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await.map_err(map_http_error)?;
        handle_rest_failures(response).await
    }
}

/// Map a non-success response to [`ApiError::RequestFailed`] and decode a
/// successful body as JSON.
pub async fn handle_rest_failures(response: reqwest::Response) -> Result<Value, ApiError> {
    let status = response.status();
    let body = response.bytes().await.map_err(map_http_error)?;

    if !status.is_success() {
        let (code, message) = match serde_json::from_slice::<ErrorBody>(&body) {
            Ok(parsed) => (parsed.error.code, parsed.error.message),
            Err(_) => {
                let text = String::from_utf8_lossy(&body).trim().to_string();
                let message = if text.is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                } else {
                    text
                };
                (None, message)
            }
        };
        warn!(status = status.as_u16(), message = %message, "BFF request failed");
        return Err(ApiError::RequestFailed {
            status: status.as_u16(),
            code,
            message,
        });
    }

    serde_json::from_slice(&body)
        .map_err(|e| ApiError::MalformedResponse(format!("Response is not valid JSON: {}", e)))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Check the `{ "data": T }` envelope and decode its payload.
pub fn parse_envelope<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    let mut object = match value {
        Value::Object(object) => object,
        other => {
            return Err(ApiError::MalformedResponse(format!(
                "Expected an object envelope, got {}",
                json_kind(&other)
            )))
        }
    };

    let data = object.remove("data").ok_or_else(|| {
        ApiError::MalformedResponse("Response envelope has no `data` field".to_string())
    })?;

    serde_json::from_value(data)
        .map_err(|e| ApiError::MalformedResponse(format!("Unexpected `data` payload: {}", e)))
}
