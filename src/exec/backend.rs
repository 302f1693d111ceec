// src/exec/backend.rs

//! Pluggable process spawner abstraction.
//!
//! The orchestrator talks to a `ProcessSpawner` instead of spawning OS
//! processes itself. This makes it easy to swap in a fake spawner in tests
//! while keeping the production implementation in [`spawner`].
//!
//! A spawn is fire-and-forget: the result only says whether the *attempt*
//! to start the process succeeded. Nothing tracks the process afterwards;
//! it is not a supervised child.
//!
//! [`spawner`]: crate::exec::spawner

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

/// Failure to start an external command.
#[derive(Error, Debug)]
pub enum SpawnError {
    #[error("terminal command template is empty")]
    EmptyTemplate,

    #[error("failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Rejected(String),
}

/// Future returned by [`ProcessSpawner::spawn`].
pub type SpawnFuture<'a> = Pin<Box<dyn Future<Output = Result<(), SpawnError>> + Send + 'a>>;

/// Trait abstracting how a command line is launched.
///
/// Production code uses [`ShellSpawner`](crate::exec::ShellSpawner); tests
/// provide implementations that record calls instead of starting processes.
pub trait ProcessSpawner: Send + Sync {
    /// Start `command_line` detached, optionally in a terminal titled
    /// `label`, and return as soon as the process has been created.
    fn spawn<'a>(&'a self, command_line: &'a str, label: &'a str) -> SpawnFuture<'a>;
}
