//! Layered configuration: global file, workspace files, environment

use registry_admin::config::{global_config_path, ConfigLoader};
use std::fs;
use tempfile::TempDir;

use crate::integration::with_config_env;

fn write_global(test_dir: &TempDir, contents: &str) {
    let path = test_dir
        .path()
        .join("config-home")
        .join("registry-admin")
        .join("config.toml");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn write_workspace(workspace: &TempDir, name: &str, contents: &str) {
    let dir = workspace.path().join("config");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(name), contents).unwrap();
}

#[test]
fn test_global_config_path_follows_xdg() {
    let test_dir = TempDir::new().unwrap();
    with_config_env(&test_dir, || {
        let path = global_config_path().unwrap();
        assert_eq!(
            path,
            test_dir
                .path()
                .join("config-home")
                .join("registry-admin")
                .join("config.toml")
        );
    });
}

#[test]
fn test_defaults_without_any_source() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    with_config_env(&test_dir, || {
        let config = ConfigLoader::load(workspace.path()).unwrap();
        assert_eq!(config.bff.base_url, "http://localhost:4000");
        assert_eq!(config.bff.api_version, "v1");
        assert!(config.bff.application.is_none());
        assert_eq!(config.platform.build_version, "Development Build");
    });
}

#[test]
fn test_workspace_overrides_global() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    with_config_env(&test_dir, || {
        write_global(
            &test_dir,
            r#"
[bff]
base_url = "http://global:4000"
application = "global-app"

[platform]
environment = "Staging"
"#,
        );
        write_workspace(
            &workspace,
            "config.toml",
            r#"
[bff]
application = "registry-ui"
"#,
        );

        let config = ConfigLoader::load(workspace.path()).unwrap();
        assert_eq!(config.bff.base_url, "http://global:4000");
        assert_eq!(config.bff.application.as_deref(), Some("registry-ui"));
        assert_eq!(config.platform.environment, "Staging");
    });
}

#[test]
fn test_environment_specific_workspace_file() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    with_config_env(&test_dir, || {
        write_workspace(
            &workspace,
            "config.toml",
            "[platform]\ndeployment_mode = \"standalone\"\n",
        );
        write_workspace(
            &workspace,
            "production.toml",
            "[platform]\ndeployment_mode = \"integrated\"\n",
        );

        let config = ConfigLoader::load(workspace.path()).unwrap();
        assert_eq!(config.platform.deployment_mode.as_deref(), Some("standalone"));

        std::env::set_var("REGISTRY_ADMIN_ENV", "production");
        let config = ConfigLoader::load(workspace.path()).unwrap();
        assert_eq!(config.platform.deployment_mode.as_deref(), Some("integrated"));
    });
}

#[test]
fn test_environment_variables_win() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    with_config_env(&test_dir, || {
        write_workspace(
            &workspace,
            "config.toml",
            "[bff]\napplication = \"from-file\"\n",
        );
        std::env::set_var("REGISTRY_ADMIN__BFF__APPLICATION", "from-env");
        std::env::set_var("REGISTRY_ADMIN__BFF__BASE_URL", "https://bff.example.com");

        let config = ConfigLoader::load(workspace.path()).unwrap();
        assert_eq!(config.bff.application.as_deref(), Some("from-env"));
        assert_eq!(config.bff.base_url, "https://bff.example.com");
    });
}

#[test]
fn test_load_validated_rejects_bad_values() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    with_config_env(&test_dir, || {
        write_workspace(
            &workspace,
            "config.toml",
            "[bff]\nbase_url = \"ftp://bff\"\n\n[logging]\nformat = \"yaml\"\n",
        );

        let err = ConfigLoader::load_validated(workspace.path(), None).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("BFF:"));
        assert!(message.contains("Logging:"));
    });
}
