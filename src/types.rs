// src/types.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The kind of a task inside a profile.
///
/// The set is closed: validator and synthesizer match on it exhaustively.
/// `Unrecognized` only appears when a persisted document names a kind this
/// build does not know; the label is kept so re-saving the document does not
/// lose it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskKind {
    ServerApp,
    MessageBroker,
    SearchEngine,
    ContainerStart,
    ContainerHostStart,
    ComposeStack,
    Delay,
    Unrecognized(String),
}

/// One parameter accepted by a task kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub required: bool,
}

const fn required(key: &'static str, label: &'static str) -> ParamSpec {
    ParamSpec {
        key,
        label,
        required: true,
    }
}

const fn optional(key: &'static str, label: &'static str) -> ParamSpec {
    ParamSpec {
        key,
        label,
        required: false,
    }
}

const SERVER_APP: &[ParamSpec] = &[
    required("path", "project directory"),
    required("jar", "path to the jar"),
    optional("run_config", "extra run arguments"),
];
const MESSAGE_BROKER: &[ParamSpec] = &[required("home", "broker home directory")];
const SEARCH_ENGINE: &[ParamSpec] = &[required("home", "search engine home directory")];
const CONTAINER_START: &[ParamSpec] = &[required("container", "container name")];
const COMPOSE_STACK: &[ParamSpec] = &[
    required("directory", "compose project directory"),
    optional("compose_file", "compose file name"),
];
const DELAY: &[ParamSpec] = &[required("seconds", "seconds to wait")];

impl TaskKind {
    /// Every kind this build knows about, in display order.
    pub const ALL: [TaskKind; 7] = [
        TaskKind::ServerApp,
        TaskKind::MessageBroker,
        TaskKind::SearchEngine,
        TaskKind::ContainerStart,
        TaskKind::ContainerHostStart,
        TaskKind::ComposeStack,
        TaskKind::Delay,
    ];

    /// Parameters accepted by this kind. `None` for unrecognized kinds,
    /// whose schema is unknown.
    pub fn parameters(&self) -> Option<&'static [ParamSpec]> {
        let params = match self {
            TaskKind::ServerApp => SERVER_APP,
            TaskKind::MessageBroker => MESSAGE_BROKER,
            TaskKind::SearchEngine => SEARCH_ENGINE,
            TaskKind::ContainerStart => CONTAINER_START,
            TaskKind::ContainerHostStart => &[],
            TaskKind::ComposeStack => COMPOSE_STACK,
            TaskKind::Delay => DELAY,
            TaskKind::Unrecognized(_) => return None,
        };
        Some(params)
    }

    pub fn accepts(&self, key: &str) -> bool {
        match self.parameters() {
            Some(params) => params.iter().any(|p| p.key == key),
            None => true,
        }
    }

    /// Canonical label used in the persisted document.
    pub fn as_str(&self) -> &str {
        match self {
            TaskKind::ServerApp => "server_app",
            TaskKind::MessageBroker => "message_broker",
            TaskKind::SearchEngine => "search_engine",
            TaskKind::ContainerStart => "container_start",
            TaskKind::ContainerHostStart => "container_host_start",
            TaskKind::ComposeStack => "compose_stack",
            TaskKind::Delay => "delay",
            TaskKind::Unrecognized(label) => label,
        }
    }

    fn from_label(s: &str) -> Option<TaskKind> {
        let kind = match s.trim().to_lowercase().as_str() {
            "server_app" | "spring boot" => TaskKind::ServerApp,
            "message_broker" | "activemq" => TaskKind::MessageBroker,
            "search_engine" | "elasticsearch" => TaskKind::SearchEngine,
            "container_start" | "podman" => TaskKind::ContainerStart,
            "container_host_start" | "podman machine" => TaskKind::ContainerHostStart,
            "compose_stack" | "docker compose" => TaskKind::ComposeStack,
            "delay" | "timer" => TaskKind::Delay,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parsing, used for user input. Persisted documents go through
/// `From<String>` instead so unknown labels survive a load/save cycle.
impl FromStr for TaskKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskKind::from_label(s).ok_or_else(|| {
            let known: Vec<&str> = TaskKind::ALL.iter().map(|k| k.as_str()).collect();
            format!("unknown task type: {s} (expected one of {})", known.join(", "))
        })
    }
}

impl From<String> for TaskKind {
    fn from(s: String) -> Self {
        TaskKind::from_label(&s).unwrap_or(TaskKind::Unrecognized(s))
    }
}

impl From<TaskKind> for String {
    fn from(kind: TaskKind) -> Self {
        kind.as_str().to_string()
    }
}
