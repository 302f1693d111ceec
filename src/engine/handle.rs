// src/engine/handle.rs

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_stream::wrappers::ReceiverStream;
use tokio_util::sync::CancellationToken;

use super::{RunEvent, RunPhase};

/// Caller side of a run.
///
/// Events arrive in order and end after the terminal event (`RunCompleted`
/// or `Cancelled`); `next_event` then returns `None`. The sequence is
/// single-consumer and not restartable: launch again for a fresh run.
/// Dropping the handle abandons the run after its current task.
#[derive(Debug)]
pub struct RunHandle {
    events: mpsc::Receiver<RunEvent>,
    cancel: CancellationToken,
    join: JoinHandle<RunPhase>,
}

impl RunHandle {
    pub(crate) fn new(
        events: mpsc::Receiver<RunEvent>,
        cancel: CancellationToken,
        join: JoinHandle<RunPhase>,
    ) -> Self {
        Self {
            events,
            cancel,
            join,
        }
    }

    pub async fn next_event(&mut self) -> Option<RunEvent> {
        self.events.recv().await
    }

    /// Ask the run to stop. Takes effect between tasks or at the next delay
    /// tick; an in-flight spawn call is not interrupted.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Token that cancels this run, for wiring into signal handlers.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Drain every remaining event.
    pub async fn collect(mut self) -> Vec<RunEvent> {
        let mut out = Vec::new();
        while let Some(event) = self.events.recv().await {
            out.push(event);
        }
        out
    }

    /// Let the run finish, discarding unread events, and return its final
    /// phase.
    pub async fn join(mut self) -> RunPhase {
        while self.events.recv().await.is_some() {}
        self.join.await.unwrap_or(RunPhase::Cancelled)
    }

    /// Split into an event stream and the run's cancellation token.
    pub fn into_stream(self) -> (ReceiverStream<RunEvent>, CancellationToken) {
        (ReceiverStream::new(self.events), self.cancel)
    }
}
