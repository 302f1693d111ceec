// src/engine/runtime.rs

use std::fmt;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::Launchers;
use crate::exec::ProcessSpawner;
use crate::fs::Probe;
use crate::profile::TaskDescriptor;

use super::core::{RunCore, TaskAction, TaskStep, plan_task};
use super::handle::RunHandle;
use super::{RunEvent, RunOptions, RunPhase, TaskRef};

/// Starts runs.
///
/// Holds the collaborators every run needs. Each call to [`launch`] gets
/// its own Tokio task, event channel and cancellation token; runs share no
/// mutable state, so any number may be in flight at once.
///
/// [`launch`]: Orchestrator::launch
#[derive(Clone)]
pub struct Orchestrator {
    probe: Arc<dyn Probe>,
    spawner: Arc<dyn ProcessSpawner>,
    launchers: Launchers,
    options: RunOptions,
}

impl fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Orchestrator")
            .field("probe", &self.probe)
            .field("launchers", &self.launchers)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Orchestrator {
    pub fn new(
        probe: Arc<dyn Probe>,
        spawner: Arc<dyn ProcessSpawner>,
        launchers: Launchers,
        options: RunOptions,
    ) -> Self {
        Self {
            probe,
            spawner,
            launchers,
            options,
        }
    }

    /// Start a run over `tasks` and return immediately.
    ///
    /// `run_name` (normally the profile name) is used for logs and terminal
    /// labels. Must be called from within a Tokio runtime.
    pub fn launch(&self, run_name: impl Into<String>, tasks: Vec<TaskDescriptor>) -> RunHandle {
        let (tx, rx) = mpsc::channel(self.options.event_capacity.max(1));
        let cancel = CancellationToken::new();

        let lane = RunLane {
            name: run_name.into(),
            core: RunCore::new(tasks),
            orchestrator: self.clone(),
            events: tx,
            cancel: cancel.clone(),
        };
        let join = tokio::spawn(lane.run());

        RunHandle::new(rx, cancel, join)
    }
}

/// How a task ended, as far as the lane is concerned.
enum Flow {
    Continue,
    Cancelled,
    /// The consumer dropped its handle; nobody is listening.
    Detached,
}

/// One run's execution lane.
struct RunLane {
    name: String,
    core: RunCore,
    orchestrator: Orchestrator,
    events: mpsc::Sender<RunEvent>,
    cancel: CancellationToken,
}

impl RunLane {
    async fn run(mut self) -> RunPhase {
        info!(run = %self.name, tasks = self.core.len(), "run started");

        loop {
            if self.cancel.is_cancelled() {
                return self.finish_cancelled().await;
            }

            let Some(step) = self.next_step().await else {
                break;
            };

            match self.execute(step).await {
                Flow::Continue => {}
                Flow::Cancelled => return self.finish_cancelled().await,
                Flow::Detached => {
                    debug!(run = %self.name, "event consumer gone; abandoning run");
                    self.core.cancel();
                    return self.core.phase();
                }
            }
        }

        info!(run = %self.name, "run completed");
        let _ = self.events.send(RunEvent::RunCompleted).await;
        self.core.phase()
    }

    /// Plan the next task on the blocking pool; the probe may hit the
    /// filesystem.
    async fn next_step(&mut self) -> Option<TaskStep> {
        let (task, descriptor) = self.core.advance()?;
        let probe = Arc::clone(&self.orchestrator.probe);
        let launchers = self.orchestrator.launchers.clone();

        let action = tokio::task::spawn_blocking(move || {
            plan_task(&descriptor, probe.as_ref(), &launchers)
        })
        .await
        .unwrap_or_else(|err| {
            warn!(run = %self.name, task = %task.name, error = %err, "task planning aborted");
            TaskAction::Skip {
                reason: format!("validation aborted: {err}"),
            }
        });

        Some(TaskStep { task, action })
    }

    async fn execute(&mut self, step: TaskStep) -> Flow {
        let TaskStep { task, action } = step;
        info!(run = %self.name, index = task.index, task = %task.name, kind = %task.kind, "starting task");
        if !self.emit(RunEvent::Starting { task: task.clone() }).await {
            return Flow::Detached;
        }

        match action {
            TaskAction::Skip { reason } => {
                warn!(run = %self.name, index = task.index, task = %task.name, reason = %reason, "task skipped");
                self.emit_or_detach(RunEvent::Skipped { task, reason }).await
            }
            TaskAction::Wait { seconds } => self.wait(task, seconds).await,
            TaskAction::Exec { command_line } => self.exec(task, command_line).await,
        }
    }

    /// Block this lane for `seconds` ticks, emitting a heartbeat per tick.
    /// Cancellation is checked after every tick.
    async fn wait(&mut self, task: TaskRef, seconds: u64) -> Flow {
        let tick = self.orchestrator.options.tick;
        debug!(run = %self.name, task = %task.name, seconds, ?tick, "delay started");

        for elapsed in 1..=seconds {
            tokio::time::sleep(tick).await;
            if self.cancel.is_cancelled() {
                info!(run = %self.name, task = %task.name, elapsed, "delay interrupted by cancellation");
                return Flow::Cancelled;
            }
            let tick_event = RunEvent::Tick {
                task: task.clone(),
                remaining: seconds - elapsed,
            };
            if !self.emit(tick_event).await {
                return Flow::Detached;
            }
        }

        self.emit_or_detach(RunEvent::Completed { task }).await
    }

    /// Fire-and-forget: only the spawn attempt is observed.
    async fn exec(&mut self, task: TaskRef, command_line: String) -> Flow {
        let label = format!("{} - {}", self.name, task.name);
        info!(run = %self.name, task = %task.name, command = %command_line, "launching");

        let event = match self
            .orchestrator
            .spawner
            .spawn(&command_line, &label)
            .await
        {
            Ok(()) => RunEvent::Completed { task },
            Err(err) => {
                warn!(run = %self.name, task = %task.name, error = %err, "spawn failed");
                RunEvent::Failed {
                    task,
                    error: err.to_string(),
                }
            }
        };
        self.emit_or_detach(event).await
    }

    async fn finish_cancelled(&mut self) -> RunPhase {
        self.core.cancel();
        info!(run = %self.name, "run cancelled");
        let _ = self.events.send(RunEvent::Cancelled).await;
        self.core.phase()
    }

    /// Send an event; `false` when the receiver is gone.
    async fn emit(&self, event: RunEvent) -> bool {
        self.events.send(event).await.is_ok()
    }

    async fn emit_or_detach(&self, event: RunEvent) -> Flow {
        if self.emit(event).await {
            Flow::Continue
        } else {
            Flow::Detached
        }
    }
}
