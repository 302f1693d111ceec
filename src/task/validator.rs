// src/task/validator.rs

//! Launch-time precondition checks.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::Launchers;
use crate::fs::Probe;
use crate::profile::TaskDescriptor;
use crate::task::{resolve_compose_file, trimmed};
use crate::types::TaskKind;

/// Why a task cannot be launched. Reported as a `Skipped` event; never
/// fatal to a run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct ValidationFailure {
    pub reason: String,
}

impl ValidationFailure {
    fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Check a task's preconditions against `probe`.
///
/// Pure with respect to its inputs: the same descriptor, launcher names and
/// probe answers always give the same outcome.
pub fn validate(
    task: &TaskDescriptor,
    probe: &dyn Probe,
    launchers: &Launchers,
) -> Result<(), ValidationFailure> {
    match task.kind() {
        TaskKind::ServerApp => {
            let jar = require(task, "jar", "jar path is not set")?;
            let jar = Path::new(jar);
            if !probe.exists(jar) {
                return Err(ValidationFailure::new(format!(
                    "jar not found: {}",
                    jar.display()
                )));
            }
            if !probe.is_readable(jar) {
                return Err(ValidationFailure::new(format!(
                    "jar is not readable: {}",
                    jar.display()
                )));
            }
            Ok(())
        }
        TaskKind::MessageBroker => {
            let home = require(task, "home", "broker home is not set")?;
            require_launcher(probe, home, &launchers.broker_launcher, "message broker")
        }
        TaskKind::SearchEngine => {
            let home = require(task, "home", "search engine home is not set")?;
            require_launcher(probe, home, &launchers.engine_launcher, "search engine")
        }
        TaskKind::ContainerStart => {
            require(task, "container", "container name is not set")?;
            Ok(())
        }
        TaskKind::ContainerHostStart => Ok(()),
        TaskKind::ComposeStack => {
            let directory = require(task, "directory", "compose directory is not set")?;
            let directory = Path::new(directory);
            if !probe.exists(directory) {
                return Err(ValidationFailure::new(format!(
                    "compose directory not found: {}",
                    directory.display()
                )));
            }
            let compose_path = directory.join(resolve_compose_file(task, launchers));
            if !probe.exists(&compose_path) {
                return Err(ValidationFailure::new(format!(
                    "compose file not found: {}",
                    compose_path.display()
                )));
            }
            Ok(())
        }
        TaskKind::Delay => {
            let seconds = require(task, "seconds", "delay seconds are not set")?;
            seconds.parse::<u64>().map(|_| ()).map_err(|_| {
                ValidationFailure::new(format!(
                    "delay seconds must be a non-negative integer: {seconds}"
                ))
            })
        }
        // Nothing to check; the synthesizer reports the unknown kind.
        TaskKind::Unrecognized(_) => Ok(()),
    }
}

fn require<'a>(
    task: &'a TaskDescriptor,
    key: &str,
    missing: &str,
) -> Result<&'a str, ValidationFailure> {
    let value = trimmed(task, key);
    if value.is_empty() {
        Err(ValidationFailure::new(missing))
    } else {
        Ok(value)
    }
}

fn require_launcher(
    probe: &dyn Probe,
    home: &str,
    launcher: &str,
    what: &str,
) -> Result<(), ValidationFailure> {
    let script: PathBuf = Path::new(home).join("bin").join(launcher);
    if probe.exists(&script) {
        Ok(())
    } else {
        Err(ValidationFailure::new(format!(
            "{what} launcher not found: {}",
            script.display()
        )))
    }
}
