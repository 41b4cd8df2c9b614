//! JSON-file persistence for the task list.
//!
//! Persistence is deliberately decoupled from the core: nothing in the
//! task list, timer, or statistics engine touches disk. The caller loads
//! once at startup and schedules `flush` after mutations.

use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::task::Task;

const TASKS_FILE: &str = "tasks.json";

/// On-disk task store at `<data_dir>/tasks.json`.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    /// Store at the default data directory.
    pub fn open() -> Result<Self, StoreError> {
        Ok(TaskStore {
            path: super::data_dir()?.join(TASKS_FILE),
        })
    }

    /// Store at an explicit path (tests, alternate data dirs).
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        TaskStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the task list. A missing file is an empty list, not an error.
    pub fn load(&self) -> Result<Vec<Task>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let json = std::fs::read_to_string(&self.path).map_err(|source| {
            StoreError::ReadFailed {
                path: self.path.clone(),
                source,
            }
        })?;
        serde_json::from_str(&json).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Write the task list out. Explicit and separately schedulable; the
    /// core never calls this.
    pub fn flush(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(tasks).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, json).map_err(|source| StoreError::WriteFailed {
            path: self.path.clone(),
            source,
        })
    }
}
