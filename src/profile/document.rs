// src/profile/document.rs

//! The persisted store document and its whole-file read/replace.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{LaunchpadError, Result};
use crate::fs::FileSystem;
use crate::profile::descriptor::TaskDescriptor;

/// A named, ordered list of tasks. Task order is execution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    name: String,
    #[serde(default, alias = "apps")]
    tasks: Vec<TaskDescriptor>,
}

impl Profile {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tasks: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tasks(&self) -> &[TaskDescriptor] {
        &self.tasks
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn tasks_mut(&mut self) -> &mut Vec<TaskDescriptor> {
        &mut self.tasks
    }
}

/// Top-level document:
///
/// ```json
/// { "profiles": [ { "name": "dev", "tasks": [ { "type": "delay", "name": "wait", "seconds": "5" } ] } ] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreDocument {
    /// Documents written by the older launcher call this `configs`.
    #[serde(default, alias = "configs")]
    pub profiles: Vec<Profile>,
}

impl StoreDocument {
    pub fn find(&self, name: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Profile> {
        self.profiles.iter_mut().find(|p| p.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }
}

/// Read the document at `path`.
///
/// A missing or unparsable file yields an empty document; this never fails.
pub fn load_document(fs: &dyn FileSystem, path: &Path) -> StoreDocument {
    if !fs.exists(path) {
        debug!(path = %path.display(), "no profile store on disk; starting empty");
        return StoreDocument::default();
    }

    let contents = match fs.read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "could not read profile store; starting empty");
            return StoreDocument::default();
        }
    };

    match serde_json::from_str::<StoreDocument>(&contents) {
        Ok(doc) => {
            debug!(
                path = %path.display(),
                profiles = doc.profiles.len(),
                "loaded profile store"
            );
            doc
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "profile store is not valid JSON; starting empty");
            StoreDocument::default()
        }
    }
}

/// Overwrite the document at `path` with `doc`.
pub fn save_document(fs: &dyn FileSystem, path: &Path, doc: &StoreDocument) -> Result<()> {
    let json = serde_json::to_string_pretty(doc)
        .map_err(|e| LaunchpadError::PersistenceFailure(e.to_string()))?;
    fs.write(path, json.as_bytes())
        .map_err(|e| LaunchpadError::PersistenceFailure(format!("{e:#}")))?;
    debug!(path = %path.display(), profiles = doc.profiles.len(), "persisted profile store");
    Ok(())
}
