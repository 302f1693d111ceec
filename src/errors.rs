// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

use crate::types::TaskKind;

#[derive(Error, Debug)]
pub enum LaunchpadError {
    #[error("Profile already exists: {0}")]
    DuplicateName(String),

    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    #[error("Task index {index} out of range for profile '{profile}' ({len} tasks)")]
    IndexOutOfRange {
        profile: String,
        index: usize,
        len: usize,
    },

    #[error("Failed to persist profile store: {0}")]
    PersistenceFailure(String),

    #[error("Unknown parameter '{key}' for task type {kind}")]
    UnknownParameter { kind: TaskKind, key: String },

    #[error("Task name must not be empty")]
    EmptyTaskName,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, LaunchpadError>;
