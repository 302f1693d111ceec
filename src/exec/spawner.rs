// src/exec/spawner.rs

//! Production spawner: expands the `[terminal]` argv template and starts
//! the result as a detached process.

use std::process::Stdio;

use tokio::process::Command;
use tracing::info;

use crate::config::TerminalSection;
use crate::exec::backend::{ProcessSpawner, SpawnError, SpawnFuture};

const COMMAND_PLACEHOLDER: &str = "{command}";
const LABEL_PLACEHOLDER: &str = "{label}";

#[derive(Debug, Clone)]
pub struct ShellSpawner {
    template: Vec<String>,
}

impl ShellSpawner {
    pub fn new(template: Vec<String>) -> Self {
        Self { template }
    }

    pub fn from_config(terminal: &TerminalSection) -> Self {
        Self::new(terminal.command.clone())
    }

    /// The argv that would be executed for `command_line`.
    pub fn expand(&self, command_line: &str, label: &str) -> Vec<String> {
        self.template
            .iter()
            .map(|arg| {
                arg.replace(LABEL_PLACEHOLDER, label)
                    .replace(COMMAND_PLACEHOLDER, command_line)
            })
            .collect()
    }

    fn spawn_detached(&self, command_line: &str, label: &str) -> Result<(), SpawnError> {
        let argv = self.expand(command_line, label);
        let (program, args) = argv.split_first().ok_or(SpawnError::EmptyTemplate)?;

        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(false);

        // Own process group: Ctrl-C on launchpad must not reach the children.
        #[cfg(unix)]
        cmd.process_group(0);

        let child = cmd.spawn().map_err(|source| SpawnError::Launch {
            program: program.clone(),
            source,
        })?;

        info!(
            label = %label,
            pid = ?child.id(),
            command = %command_line,
            "process launched"
        );
        // Dropping the handle leaves the process running.
        drop(child);
        Ok(())
    }
}

impl ProcessSpawner for ShellSpawner {
    fn spawn<'a>(&'a self, command_line: &'a str, label: &'a str) -> SpawnFuture<'a> {
        Box::pin(async move { self.spawn_detached(command_line, label) })
    }
}
