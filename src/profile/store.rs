// src/profile/store.rs

//! Shared profile store.

use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

use tracing::{debug, info};

use crate::errors::{LaunchpadError, Result};
use crate::fs::FileSystem;
use crate::profile::descriptor::TaskDescriptor;
use crate::profile::document::{Profile, StoreDocument, load_document, save_document};

/// Owner of every profile.
///
/// All mutations take the write lock for the whole store, so they are
/// serialized against each other; reads share the read lock. Each mutation
/// is applied to a copy of the document, the copy is persisted, and only a
/// successful write commits it. A `PersistenceFailure` therefore leaves the
/// in-memory store equal to what is on disk.
#[derive(Debug)]
pub struct ProfileStore {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
    doc: RwLock<StoreDocument>,
}

impl ProfileStore {
    /// Load the store from `path`. Missing or unparsable files give an
    /// empty store.
    pub fn open(fs: Arc<dyn FileSystem>, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let doc = load_document(fs.as_ref(), &path);
        info!(
            path = %path.display(),
            profiles = doc.profiles.len(),
            "profile store opened"
        );
        Self {
            fs,
            path,
            doc: RwLock::new(doc),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn profile_names(&self) -> Vec<String> {
        self.read()
            .profiles
            .iter()
            .map(|p| p.name().to_string())
            .collect()
    }

    /// Read-only snapshot of a profile.
    pub fn get_profile(&self, name: &str) -> Option<Profile> {
        self.read().find(name).cloned()
    }

    /// Ordered task list of a profile, as handed to a run.
    pub fn snapshot(&self, name: &str) -> Result<Vec<TaskDescriptor>> {
        self.read()
            .find(name)
            .map(|p| p.tasks().to_vec())
            .ok_or_else(|| LaunchpadError::ProfileNotFound(name.to_string()))
    }

    pub fn create_profile(&self, name: &str) -> Result<()> {
        self.mutate(|doc| {
            if doc.contains(name) {
                return Err(LaunchpadError::DuplicateName(name.to_string()));
            }
            doc.profiles.push(Profile::new(name));
            Ok(())
        })?;
        info!(profile = %name, "profile created");
        Ok(())
    }

    /// Remove a profile. Deleting an absent profile is not an error.
    pub fn delete_profile(&self, name: &str) -> Result<()> {
        let removed = self.mutate(|doc| {
            let before = doc.profiles.len();
            doc.profiles.retain(|p| p.name() != name);
            Ok(doc.profiles.len() != before)
        })?;
        if removed {
            info!(profile = %name, "profile deleted");
        } else {
            debug!(profile = %name, "delete of absent profile ignored");
        }
        Ok(())
    }

    /// Rename a profile in place, keeping its tasks and its position.
    pub fn rename_profile(&self, from: &str, to: &str) -> Result<()> {
        if from == to {
            if self.read().contains(from) {
                return Ok(());
            }
            return Err(LaunchpadError::ProfileNotFound(from.to_string()));
        }
        self.mutate(|doc| {
            if doc.contains(to) {
                return Err(LaunchpadError::DuplicateName(to.to_string()));
            }
            let profile = doc
                .find_mut(from)
                .ok_or_else(|| LaunchpadError::ProfileNotFound(from.to_string()))?;
            profile.set_name(to.to_string());
            Ok(())
        })?;
        info!(from = %from, to = %to, "profile renamed");
        Ok(())
    }

    pub fn append_task(&self, profile: &str, task: TaskDescriptor) -> Result<()> {
        let index = self.mutate_tasks(profile, |_, tasks| {
            tasks.push(task);
            Ok(tasks.len() - 1)
        })?;
        debug!(profile = %profile, index, "task appended");
        Ok(())
    }

    pub fn remove_task(&self, profile: &str, index: usize) -> Result<TaskDescriptor> {
        let removed = self.mutate_tasks(profile, |name, tasks| {
            check_index(name, index, tasks.len())?;
            Ok(tasks.remove(index))
        })?;
        debug!(profile = %profile, index, task = %removed.name(), "task removed");
        Ok(removed)
    }

    /// Move a task by removing it at `from` and inserting it at `to` in the
    /// shortened list, so it ends up at exactly `to`. `to` may equal the
    /// post-removal length, which appends.
    pub fn move_task(&self, profile: &str, from: usize, to: usize) -> Result<()> {
        self.mutate_tasks(profile, |name, tasks| {
            check_index(name, from, tasks.len())?;
            // After removal the list is one shorter; `to` may point one past it.
            check_index(name, to, tasks.len())?;
            let task = tasks.remove(from);
            tasks.insert(to, task);
            Ok(())
        })?;
        debug!(profile = %profile, from, to, "task moved");
        Ok(())
    }

    /// Overwrite the task at `index`, keeping its position.
    pub fn replace_task(&self, profile: &str, index: usize, task: TaskDescriptor) -> Result<()> {
        self.mutate_tasks(profile, |name, tasks| {
            check_index(name, index, tasks.len())?;
            tasks[index] = task;
            Ok(())
        })?;
        debug!(profile = %profile, index, "task replaced");
        Ok(())
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreDocument> {
        self.doc.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn mutate<T>(&self, op: impl FnOnce(&mut StoreDocument) -> Result<T>) -> Result<T> {
        let mut guard = self.doc.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = guard.clone();
        let out = op(&mut next)?;
        save_document(self.fs.as_ref(), &self.path, &next)?;
        *guard = next;
        Ok(out)
    }

    fn mutate_tasks<T>(
        &self,
        profile: &str,
        op: impl FnOnce(&str, &mut Vec<TaskDescriptor>) -> Result<T>,
    ) -> Result<T> {
        self.mutate(|doc| {
            let p = doc
                .find_mut(profile)
                .ok_or_else(|| LaunchpadError::ProfileNotFound(profile.to_string()))?;
            op(profile, p.tasks_mut())
        })
    }
}

fn check_index(profile: &str, index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(LaunchpadError::IndexOutOfRange {
            profile: profile.to_string(),
            index,
            len,
        })
    }
}
