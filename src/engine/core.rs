// src/engine/core.rs

//! Pure run state machine.
//!
//! `RunCore` walks a task snapshot and, for each task, decides what the
//! async lane should do with it. It has no channels, no Tokio types and
//! performs no IO beyond asking the probe, so it can be tested on its own.

use crate::config::Launchers;
use crate::engine::{RunPhase, TaskRef};
use crate::fs::Probe;
use crate::profile::TaskDescriptor;
use crate::task::{Invocation, synthesize, validate};

/// What the lane must do for one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    /// Report the task as skipped and move on.
    Skip { reason: String },
    /// Sleep `seconds` ticks, heartbeating each one.
    Wait { seconds: u64 },
    /// Hand `command_line` to the spawner.
    Exec { command_line: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskStep {
    pub task: TaskRef,
    pub action: TaskAction,
}

/// Validate then synthesize. Validation failures and unknown kinds both
/// become `Skip`.
pub fn plan_task(task: &TaskDescriptor, probe: &dyn Probe, launchers: &Launchers) -> TaskAction {
    if let Err(failure) = validate(task, probe, launchers) {
        return TaskAction::Skip {
            reason: failure.reason,
        };
    }
    match synthesize(task, launchers) {
        Invocation::Wait { seconds } => TaskAction::Wait { seconds },
        Invocation::Exec { command_line } => TaskAction::Exec { command_line },
        Invocation::Unrecognized { .. } => TaskAction::Skip {
            reason: "unknown type".to_string(),
        },
    }
}

#[derive(Debug)]
pub struct RunCore {
    tasks: Vec<TaskDescriptor>,
    next: usize,
    phase: RunPhase,
}

impl RunCore {
    pub fn new(tasks: Vec<TaskDescriptor>) -> Self {
        Self {
            tasks,
            next: 0,
            phase: RunPhase::Idle,
        }
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Move to the next task without planning it.
    ///
    /// Returns `None` once every task has been handed out, at which point
    /// the phase is `Completed`. A cancelled core hands out nothing.
    pub fn advance(&mut self) -> Option<(TaskRef, TaskDescriptor)> {
        if self.phase == RunPhase::Cancelled {
            return None;
        }

        let index = self.next;
        let Some(task) = self.tasks.get(index) else {
            self.phase = RunPhase::Completed;
            return None;
        };
        self.next += 1;
        self.phase = RunPhase::Running(index);

        let task_ref = TaskRef {
            index,
            name: task.name().to_string(),
            kind: task.kind().clone(),
        };
        Some((task_ref, task.clone()))
    }

    /// Move to the next task and plan it against `probe`.
    pub fn next_step(&mut self, probe: &dyn Probe, launchers: &Launchers) -> Option<TaskStep> {
        let (task, descriptor) = self.advance()?;
        Some(TaskStep {
            task,
            action: plan_task(&descriptor, probe, launchers),
        })
    }

    pub fn cancel(&mut self) {
        if self.phase != RunPhase::Completed {
            self.phase = RunPhase::Cancelled;
        }
    }
}
