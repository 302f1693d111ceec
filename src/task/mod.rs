// src/task/mod.rs

//! Per-kind task semantics.
//!
//! - [`validator`] checks a task's launch-time preconditions.
//! - [`synthesizer`] turns a validated task into an [`Invocation`].

pub mod synthesizer;
pub mod validator;

pub use synthesizer::{Invocation, synthesize};
pub use validator::{ValidationFailure, validate};

use crate::config::Launchers;
use crate::profile::TaskDescriptor;

/// Parameter value with surrounding whitespace removed.
pub(crate) fn trimmed<'a>(task: &'a TaskDescriptor, key: &str) -> &'a str {
    task.param(key).trim()
}

/// Compose file for a `compose_stack` task; blank falls back to the
/// configured default.
pub fn resolve_compose_file<'a>(task: &'a TaskDescriptor, launchers: &'a Launchers) -> &'a str {
    match trimmed(task, "compose_file") {
        "" => launchers.default_compose_file.trim(),
        file => file,
    }
}
