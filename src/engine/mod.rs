// src/engine/mod.rs

//! Launch orchestration engine.
//!
//! A run walks one profile snapshot in order: every task is validated, its
//! invocation synthesized, and then either waited out (delay tasks) or handed
//! to the process spawner. Progress is reported as a finite stream of
//! [`RunEvent`]s.
//!
//! The pure per-task decision logic lives in [`core`]; the async lane that
//! sleeps, spawns and emits events is implemented in [`runtime`].

use std::time::Duration;

use crate::config::RunSection;
use crate::types::TaskKind;

/// Identifies the task an event is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRef {
    /// Position in the profile snapshot.
    pub index: usize,
    pub name: String,
    pub kind: TaskKind,
}

/// Progress events emitted by a run, in order.
///
/// Every run ends with exactly one terminal event: `RunCompleted`, or
/// `Cancelled` when the caller asked it to stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunEvent {
    Starting { task: TaskRef },
    /// One delay tick elapsed; `remaining` ticks are left.
    Tick { task: TaskRef, remaining: u64 },
    Skipped { task: TaskRef, reason: String },
    Completed { task: TaskRef },
    Failed { task: TaskRef, error: String },
    RunCompleted,
    Cancelled,
}

impl RunEvent {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunEvent::RunCompleted | RunEvent::Cancelled)
    }

    pub fn task(&self) -> Option<&TaskRef> {
        match self {
            RunEvent::Starting { task }
            | RunEvent::Tick { task, .. }
            | RunEvent::Skipped { task, .. }
            | RunEvent::Completed { task }
            | RunEvent::Failed { task, .. } => Some(task),
            RunEvent::RunCompleted | RunEvent::Cancelled => None,
        }
    }
}

/// Where a run is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Idle,
    Running(usize),
    Completed,
    Cancelled,
}

/// Tunables shared by every run of an orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Duration of one delay tick.
    pub tick: Duration,
    /// Capacity of each run's event channel.
    pub event_capacity: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            tick: Duration::from_secs(1),
            event_capacity: 64,
        }
    }
}

impl From<RunSection> for RunOptions {
    fn from(run: RunSection) -> Self {
        Self {
            tick: run.tick(),
            ..Self::default()
        }
    }
}

pub mod core;
pub mod handle;
pub mod runtime;

pub use self::core::{RunCore, TaskAction, TaskStep, plan_task};
pub use self::handle::RunHandle;
pub use self::runtime::Orchestrator;
