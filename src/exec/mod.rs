// src/exec/mod.rs

//! Process launching layer.
//!
//! - [`backend`] provides the `ProcessSpawner` trait the orchestrator talks
//!   to, plus `SpawnError`.
//! - [`spawner`] holds `ShellSpawner`, the production implementation built
//!   on `tokio::process::Command`.

pub mod backend;
pub mod spawner;

pub use backend::{ProcessSpawner, SpawnError, SpawnFuture};
pub use spawner::ShellSpawner;
