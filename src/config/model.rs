// src/config/model.rs

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Configuration as read from `Launchpad.toml`, before validation.
///
/// ```toml
/// [store]
/// path = "launchpad_profiles.json"
///
/// [launchers]
/// java = "java"
/// container_tool = "podman"
///
/// [terminal]
/// command = ["sh", "-c", "{command}"]
///
/// [run]
/// tick_millis = 1000
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub store: StoreSection,

    #[serde(default)]
    pub launchers: Launchers,

    #[serde(default)]
    pub terminal: TerminalSection,

    #[serde(default)]
    pub run: RunSection,
}

/// Validated configuration. Only obtainable through
/// `ConfigFile::try_from(RawConfigFile)`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub store: StoreSection,
    pub launchers: Launchers,
    pub terminal: TerminalSection,
    pub run: RunSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(raw: RawConfigFile) -> Self {
        Self {
            store: raw.store,
            launchers: raw.launchers,
            terminal: raw.terminal,
            run: raw.run,
        }
    }
}

/// `[store]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreSection {
    /// JSON document holding every profile.
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

fn default_store_path() -> PathBuf {
    PathBuf::from("launchpad_profiles.json")
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

/// `[launchers]` section: the executables and file names that validation
/// probes for and command synthesis writes into command lines.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Launchers {
    /// JVM used for `server_app` tasks.
    pub java: String,
    /// Container CLI (`podman`, `docker`).
    pub container_tool: String,
    /// Script under `<home>/bin` that starts the message broker.
    pub broker_launcher: String,
    /// Script under `<home>/bin` that starts the search engine.
    pub engine_launcher: String,
    /// Compose file used when a `compose_stack` task leaves it blank.
    pub default_compose_file: String,
    /// Shell builtin that changes into the compose directory.
    pub change_dir: String,
}

impl Default for Launchers {
    fn default() -> Self {
        let script = |name: &str| {
            if cfg!(windows) {
                format!("{name}.bat")
            } else {
                name.to_string()
            }
        };
        Self {
            java: "java".to_string(),
            container_tool: "podman".to_string(),
            broker_launcher: script("activemq"),
            engine_launcher: script("elasticsearch"),
            default_compose_file: "docker-compose.yaml".to_string(),
            change_dir: if cfg!(windows) { "cd /d" } else { "cd" }.to_string(),
        }
    }
}

/// `[terminal]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TerminalSection {
    /// Argv template used to launch a command line. `{command}` is replaced
    /// by the synthesized command line and `{label}` by the task label.
    #[serde(default = "default_terminal_command")]
    pub command: Vec<String>,
}

fn default_terminal_command() -> Vec<String> {
    let argv: &[&str] = if cfg!(windows) {
        &["cmd", "/C", "start", "{label}", "cmd", "/k", "{command}"]
    } else {
        &["sh", "-c", "{command}"]
    };
    argv.iter().map(|s| s.to_string()).collect()
}

impl Default for TerminalSection {
    fn default() -> Self {
        Self {
            command: default_terminal_command(),
        }
    }
}

/// `[run]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RunSection {
    /// Length of one delay tick in milliseconds. A `delay` task with
    /// `seconds = N` waits N ticks.
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,
}

fn default_tick_millis() -> u64 {
    1000
}

impl Default for RunSection {
    fn default() -> Self {
        Self {
            tick_millis: default_tick_millis(),
        }
    }
}

impl RunSection {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }
}
