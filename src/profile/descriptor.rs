// src/profile/descriptor.rs

//! Task descriptors: one entry of a profile.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{LaunchpadError, Result};
use crate::types::TaskKind;

/// A task kind, a human label and the kind's parameters.
///
/// Construction only checks the *shape* (known keys, non-empty name).
/// Whether the values make sense is decided at launch time by the
/// validator, so an incomplete task can be saved and fixed later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawTask", into = "RawTask")]
pub struct TaskDescriptor {
    kind: TaskKind,
    name: String,
    parameters: BTreeMap<String, String>,
}

impl TaskDescriptor {
    /// Build a descriptor, rejecting keys the kind does not define.
    ///
    /// Keys the kind defines but `parameters` omits are stored as empty
    /// strings.
    pub fn new<I, K, V>(kind: TaskKind, name: impl Into<String>, parameters: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(LaunchpadError::EmptyTaskName);
        }

        let mut map = BTreeMap::new();
        for (key, value) in parameters {
            let key = key.into();
            if !kind.accepts(&key) {
                return Err(LaunchpadError::UnknownParameter { kind, key });
            }
            map.insert(key, value.into());
        }
        fill_missing(&kind, &mut map);

        Ok(Self {
            kind,
            name,
            parameters: map,
        })
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &BTreeMap<String, String> {
        &self.parameters
    }

    /// Raw value of a parameter, or `""` when absent.
    pub fn param(&self, key: &str) -> &str {
        self.parameters.get(key).map(String::as_str).unwrap_or("")
    }
}

fn fill_missing(kind: &TaskKind, map: &mut BTreeMap<String, String>) {
    if let Some(specs) = kind.parameters() {
        for spec in specs {
            map.entry(spec.key.to_string()).or_default();
        }
    }
}

/// On-disk shape: `{ "type": ..., "name": ..., <parameters flattened> }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawTask {
    #[serde(rename = "type")]
    kind: TaskKind,
    #[serde(default)]
    name: String,
    #[serde(flatten)]
    parameters: BTreeMap<String, String>,
}

/// Loading is lenient: the document may have been written by an older or
/// newer build, so stray keys are dropped rather than failing the whole
/// store.
impl From<RawTask> for TaskDescriptor {
    fn from(raw: RawTask) -> Self {
        let RawTask {
            kind,
            name,
            mut parameters,
        } = raw;

        parameters.retain(|key, _| {
            let keep = kind.accepts(key);
            if !keep {
                warn!(kind = %kind, key = %key, "dropping unknown task parameter");
            }
            keep
        });
        fill_missing(&kind, &mut parameters);

        let name = if name.trim().is_empty() {
            warn!(kind = %kind, "task without a name; using its type as name");
            kind.to_string()
        } else {
            name
        };

        Self {
            kind,
            name,
            parameters,
        }
    }
}

impl From<TaskDescriptor> for RawTask {
    fn from(task: TaskDescriptor) -> Self {
        Self {
            kind: task.kind,
            name: task.name,
            parameters: task.parameters,
        }
    }
}
