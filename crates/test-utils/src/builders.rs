#![allow(dead_code)]

use std::sync::Arc;

use launchpad::config::{ConfigFile, Launchers, RawConfigFile};
use launchpad::engine::{Orchestrator, RunOptions};
use launchpad::fs::mock::MockFileSystem;
use launchpad::profile::{ProfileStore, TaskDescriptor};
use launchpad::types::TaskKind;

use crate::fake_spawner::RecordingSpawner;

/// Builder for `TaskDescriptor` to simplify test setup.
pub struct TaskBuilder {
    kind: TaskKind,
    name: String,
    params: Vec<(String, String)>,
}

impl TaskBuilder {
    pub fn new(kind: TaskKind, name: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
            params: Vec::new(),
        }
    }

    pub fn param(mut self, key: &str, value: &str) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    pub fn build(self) -> TaskDescriptor {
        TaskDescriptor::new(self.kind, self.name, self.params)
            .expect("Failed to build valid task from builder")
    }
}

pub fn server_app(name: &str, jar: &str) -> TaskDescriptor {
    TaskBuilder::new(TaskKind::ServerApp, name)
        .param("path", "/srv/app")
        .param("jar", jar)
        .build()
}

pub fn message_broker(name: &str, home: &str) -> TaskDescriptor {
    TaskBuilder::new(TaskKind::MessageBroker, name)
        .param("home", home)
        .build()
}

pub fn search_engine(name: &str, home: &str) -> TaskDescriptor {
    TaskBuilder::new(TaskKind::SearchEngine, name)
        .param("home", home)
        .build()
}

pub fn container(name: &str, container: &str) -> TaskDescriptor {
    TaskBuilder::new(TaskKind::ContainerStart, name)
        .param("container", container)
        .build()
}

pub fn container_host(name: &str) -> TaskDescriptor {
    TaskBuilder::new(TaskKind::ContainerHostStart, name).build()
}

pub fn compose(name: &str, directory: &str, compose_file: &str) -> TaskDescriptor {
    TaskBuilder::new(TaskKind::ComposeStack, name)
        .param("directory", directory)
        .param("compose_file", compose_file)
        .build()
}

pub fn delay(name: &str, seconds: &str) -> TaskDescriptor {
    TaskBuilder::new(TaskKind::Delay, name)
        .param("seconds", seconds)
        .build()
}

/// Launcher names with platform-independent values, so expected command
/// lines are the same everywhere.
pub fn unix_launchers() -> Launchers {
    Launchers {
        java: "java".to_string(),
        container_tool: "podman".to_string(),
        broker_launcher: "activemq".to_string(),
        engine_launcher: "elasticsearch".to_string(),
        default_compose_file: "docker-compose.yaml".to_string(),
        change_dir: "cd".to_string(),
    }
}

pub fn default_config() -> ConfigFile {
    ConfigFile::try_from(RawConfigFile::default()).expect("default config is valid")
}

/// A store backed by an in-memory filesystem, plus the filesystem handle.
pub fn mock_store(path: &str) -> (ProfileStore, MockFileSystem) {
    let fs = MockFileSystem::new();
    let store = ProfileStore::open(Arc::new(fs.clone()), path);
    (store, fs)
}

/// An orchestrator probing `fs`, launching through `spawner`, with a
/// one-second tick.
pub fn orchestrator(fs: &MockFileSystem, spawner: &RecordingSpawner) -> Orchestrator {
    Orchestrator::new(
        Arc::new(fs.clone()),
        Arc::new(spawner.clone()),
        unix_launchers(),
        RunOptions::default(),
    )
}
