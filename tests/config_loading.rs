// tests/config_loading.rs

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use tempfile::TempDir;

use launchpad::config::{ConfigFile, RawConfigFile, load_and_validate, load_from_path};
use launchpad::engine::RunOptions;
use launchpad::errors::LaunchpadError;
use launchpad::exec::ShellSpawner;

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("Launchpad.toml");
    fs::write(&path, contents).unwrap();
    path
}

fn config_error(raw: RawConfigFile) -> String {
    match ConfigFile::try_from(raw) {
        Err(LaunchpadError::ConfigError(msg)) => msg,
        other => panic!("expected ConfigError, got {other:?}"),
    }
}

#[test]
fn missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();

    let cfg = load_and_validate(dir.path().join("absent.toml")).unwrap();

    assert_eq!(cfg.store.path, PathBuf::from("launchpad_profiles.json"));
    assert_eq!(cfg.run.tick(), Duration::from_secs(1));
    assert_eq!(cfg.launchers.default_compose_file, "docker-compose.yaml");
    assert!(cfg.terminal.command.iter().any(|a| a.contains("{command}")));
}

#[test]
fn partial_file_overrides_only_what_it_names() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[store]
path = "/var/lib/launchpad/profiles.json"

[launchers]
container_tool = "docker"

[terminal]
command = ["xterm", "-T", "{label}", "-e", "sh", "-c", "{command}"]

[run]
tick_millis = 250
"#,
    );

    let cfg = load_and_validate(&path).unwrap();

    assert_eq!(
        cfg.store.path,
        PathBuf::from("/var/lib/launchpad/profiles.json")
    );
    assert_eq!(cfg.launchers.container_tool, "docker");
    assert_eq!(cfg.launchers.java, "java");
    assert_eq!(cfg.terminal.command[0], "xterm");
    assert_eq!(RunOptions::from(cfg.run).tick, Duration::from_millis(250));
}

#[test]
fn malformed_toml_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[run\ntick_millis = ");

    assert!(matches!(
        load_from_path(&path),
        Err(LaunchpadError::TomlError(_))
    ));
}

#[test]
fn zero_tick_is_rejected() {
    let mut raw = RawConfigFile::default();
    raw.run.tick_millis = 0;

    assert!(config_error(raw).contains("tick_millis"));
}

#[test]
fn terminal_template_needs_command_placeholder() {
    let mut raw = RawConfigFile::default();
    raw.terminal.command = vec!["sh".to_string(), "-c".to_string(), "true".to_string()];
    assert!(config_error(raw).contains("{command}"));

    let mut raw = RawConfigFile::default();
    raw.terminal.command = Vec::new();
    assert!(config_error(raw).contains("program"));
}

#[test]
fn blank_launcher_is_rejected() {
    let mut raw = RawConfigFile::default();
    raw.launchers.container_tool = "  ".to_string();

    assert!(config_error(raw).contains("container_tool"));
}

#[test]
fn shell_spawner_expands_placeholders() {
    let spawner = ShellSpawner::new(vec![
        "xterm".to_string(),
        "-T".to_string(),
        "{label}".to_string(),
        "-e".to_string(),
        "sh -c '{command}'".to_string(),
    ]);

    assert_eq!(
        spawner.expand("podman start web", "dev - web"),
        vec!["xterm", "-T", "dev - web", "-e", "sh -c 'podman start web'"]
    );
}

#[tokio::test]
async fn shell_spawner_reports_launch_failures() {
    use launchpad::exec::{ProcessSpawner, SpawnError};

    let empty = ShellSpawner::new(Vec::new());
    assert!(matches!(
        empty.spawn("true", "x").await,
        Err(SpawnError::EmptyTemplate)
    ));

    let missing = ShellSpawner::new(vec![
        "/definitely/not/a/terminal".to_string(),
        "{command}".to_string(),
    ]);
    match missing.spawn("true", "x").await {
        Err(SpawnError::Launch { program, .. }) => {
            assert_eq!(program, "/definitely/not/a/terminal")
        }
        other => panic!("expected Launch error, got {other:?}"),
    }
}
