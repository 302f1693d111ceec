use std::sync::{Arc, Mutex};

use launchpad::exec::{ProcessSpawner, SpawnError, SpawnFuture};

/// A fake spawner that:
/// - records every `(command_line, label)` it is asked to launch
/// - fails any command line containing one of the configured needles.
#[derive(Debug, Clone, Default)]
pub struct RecordingSpawner {
    spawned: Arc<Mutex<Vec<(String, String)>>>,
    fail_on: Vec<String>,
}

impl RecordingSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject command lines containing `needle` with `SpawnError::Rejected`.
    pub fn failing_on(mut self, needle: &str) -> Self {
        self.fail_on.push(needle.to_string());
        self
    }

    /// Command lines launched so far, in order.
    pub fn commands(&self) -> Vec<String> {
        self.spawned
            .lock()
            .unwrap()
            .iter()
            .map(|(cmd, _)| cmd.clone())
            .collect()
    }

    pub fn labels(&self) -> Vec<String> {
        self.spawned
            .lock()
            .unwrap()
            .iter()
            .map(|(_, label)| label.clone())
            .collect()
    }
}

impl ProcessSpawner for RecordingSpawner {
    fn spawn<'a>(&'a self, command_line: &'a str, label: &'a str) -> SpawnFuture<'a> {
        Box::pin(async move {
            if let Some(needle) = self.fail_on.iter().find(|n| command_line.contains(n.as_str())) {
                return Err(SpawnError::Rejected(format!(
                    "launcher missing for '{needle}'"
                )));
            }
            self.spawned
                .lock()
                .unwrap()
                .push((command_line.to_string(), label.to_string()));
            Ok(())
        })
    }
}
