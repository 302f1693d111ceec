// src/task/synthesizer.rs

//! Turns a validated task into the action the orchestrator performs.

use crate::config::Launchers;
use crate::profile::TaskDescriptor;
use crate::task::{resolve_compose_file, trimmed};
use crate::types::TaskKind;

/// The external action derived from a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Block the run's lane for `seconds` ticks.
    Wait { seconds: u64 },
    /// Hand `command_line` to the process spawner.
    Exec { command_line: String },
    /// The task's kind is not supported by this build.
    Unrecognized { kind: String },
}

/// Build the invocation for `task`.
///
/// Pure string construction: no IO and no existence checks. The task is
/// expected to have passed validation.
pub fn synthesize(task: &TaskDescriptor, launchers: &Launchers) -> Invocation {
    let command_line = match task.kind() {
        TaskKind::Delay => {
            return Invocation::Wait {
                seconds: trimmed(task, "seconds").parse().unwrap_or(0),
            };
        }
        TaskKind::Unrecognized(kind) => {
            return Invocation::Unrecognized { kind: kind.clone() };
        }
        TaskKind::ServerApp => {
            let jar = trimmed(task, "jar");
            let run_config = trimmed(task, "run_config");
            format!("{} -jar \"{jar}\" {run_config}", launchers.java)
                .trim()
                .to_string()
        }
        TaskKind::MessageBroker => {
            let home = trimmed(task, "home");
            format!("\"{home}/bin/{}\" start", launchers.broker_launcher)
        }
        TaskKind::SearchEngine => {
            let home = trimmed(task, "home");
            format!("\"{home}/bin/{}\"", launchers.engine_launcher)
        }
        TaskKind::ContainerStart => {
            format!(
                "{} start {}",
                launchers.container_tool,
                trimmed(task, "container")
            )
        }
        TaskKind::ContainerHostStart => format!("{} machine start", launchers.container_tool),
        TaskKind::ComposeStack => {
            let directory = trimmed(task, "directory");
            let up = format!(
                "{} compose -f {} up -d",
                launchers.container_tool,
                resolve_compose_file(task, launchers)
            );
            if directory.is_empty() {
                up
            } else {
                format!("{} \"{directory}\" && {up}", launchers.change_dir)
            }
        }
    };

    Invocation::Exec { command_line }
}
