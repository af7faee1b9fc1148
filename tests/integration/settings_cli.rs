//! CLI commands end to end against a mock BFF

use registry_admin::cli::{map_error, Commands, RunContext};
use registry_admin::config::AdminConfig;
use registry_admin::error::ApiError;

use crate::integration::MockBff;

const ADMIN_USER: &str = r#"{"data":{"userId":"u1","displayName":"Alice","isAdmin":true}}"#;
const REGULAR_USER: &str = r#"{"data":{"userId":"u2","isAdmin":false}}"#;

fn run_context(bff: &MockBff, application: Option<&str>, namespaces: Option<&str>) -> RunContext {
    let mut config = AdminConfig::default();
    config.bff.base_url = bff.base_url();
    config.platform.deployment_mode = Some("standalone".to_string());
    RunContext::from_config(
        config,
        application.map(str::to_string),
        namespaces.map(str::to_string),
    )
}

fn json_format() -> String {
    "json".to_string()
}

#[tokio::test]
async fn test_status_reports_host_path() {
    let bff = MockBff::start(&[]).await;
    let ctx = run_context(&bff, Some("registry-ui"), Some("team-a,team-b"));

    let out = ctx
        .execute_async(&Commands::Status {
            format: json_format(),
        })
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["available"], true);
    assert_eq!(json["hostPath"], "/api/v1/app/registry-ui");
    assert_eq!(json["namespaces"], serde_json::json!(["team-a", "team-b"]));
    assert!(bff.requests().is_empty());
}

#[tokio::test]
async fn test_settings_for_admin() {
    let bff = MockBff::start(&[("/api/v1/user", 200, ADMIN_USER)]).await;
    let ctx = run_context(&bff, Some("registry-ui"), None);

    let out = ctx
        .execute_async(&Commands::Settings {
            format: json_format(),
        })
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["loaded"], true);

    let sections = json["settings"]["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 3);
    assert_eq!(sections[0]["title"], "User Information");
    assert_eq!(sections[0]["fields"][1]["value"], "Alice");
    assert_eq!(sections[1]["fields"][1]["value"], "standalone");
    assert_eq!(sections[1]["fields"][3]["value"], bff.base_url());

    let text = ctx
        .execute_async(&Commands::Settings {
            format: "text".to_string(),
        })
        .await
        .unwrap();
    assert!(text.contains("Application Configuration"));
    assert!(text.contains("Not configured"));
}

#[tokio::test]
async fn test_settings_for_regular_user_is_not_found() {
    let bff = MockBff::start(&[("/api/v1/user", 200, REGULAR_USER)]).await;
    let ctx = run_context(&bff, Some("registry-ui"), None);

    let out = ctx
        .execute_async(&Commands::Settings {
            format: "text".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(out, "/settings -> not found");
}

#[tokio::test]
async fn test_settings_load_error() {
    let bff = MockBff::start(&[("/api/v1/user", 200, r#"{"foo":1}"#)]).await;
    let ctx = run_context(&bff, Some("registry-ui"), None);

    let out = ctx
        .execute_async(&Commands::Settings {
            format: json_format(),
        })
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["loaded"], true);
    assert!(json["loadError"]
        .as_str()
        .unwrap()
        .starts_with("Malformed response"));
}

#[tokio::test]
async fn test_user_command() {
    let bff = MockBff::start(&[("/api/v1/user", 200, ADMIN_USER)]).await;
    let ctx = run_context(&bff, Some("registry-ui"), None);

    let out = ctx
        .execute_async(&Commands::User {
            format: json_format(),
        })
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["userId"], "u1");
    assert_eq!(json["isAdmin"], true);
    assert_eq!(json["clusterAdmin"], true);
}

#[tokio::test]
async fn test_user_command_surfaces_request_failure() {
    let bff = MockBff::start(&[(
        "/api/v1/user",
        401,
        r#"{"error":{"code":"401","message":"missing kubeflow-userid header"}}"#,
    )])
    .await;
    let ctx = run_context(&bff, Some("registry-ui"), None);

    let err = ctx
        .execute_async(&Commands::User {
            format: "text".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::RequestFailed { status: 401, .. }));
    assert!(map_error(&err).contains("missing kubeflow-userid header"));
}

#[tokio::test]
async fn test_namespaces_command() {
    let bff = MockBff::start(&[(
        "/api/v1/namespaces",
        200,
        r#"{"data":[{"name":"team-a"},{"name":"team-b"}]}"#,
    )])
    .await;
    let ctx = run_context(&bff, Some("registry-ui"), None);

    let out = ctx
        .execute_async(&Commands::Namespaces {
            format: "text".to_string(),
        })
        .await
        .unwrap();
    assert!(out.contains("team-a"));
    assert!(out.contains("team-b"));
}

#[tokio::test]
async fn test_route_command_for_admin() {
    let bff = MockBff::start(&[("/api/v1/user", 200, ADMIN_USER)]).await;
    let ctx = run_context(&bff, Some("registry-ui"), None);

    let settings = ctx
        .execute_async(&Commands::Route {
            path: "/settings/".to_string(),
            format: "text".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(settings, "/settings/ -> settings");

    let root = ctx
        .execute_async(&Commands::Route {
            path: "/".to_string(),
            format: "text".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(root, "/ -> redirect to /model-registry");
}

#[tokio::test]
async fn test_unavailable_error_has_hint() {
    let bff = MockBff::start(&[]).await;
    let ctx = run_context(&bff, None, None);

    let err = ctx
        .execute_async(&Commands::Namespaces {
            format: "text".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Unavailable(_)));
    assert!(map_error(&err).contains("--app"));
}
