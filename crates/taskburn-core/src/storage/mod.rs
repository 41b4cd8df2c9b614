mod config;
mod tasks;

pub use config::{Config, CustomExercise};
pub use tasks::TaskStore;

use std::path::PathBuf;

use crate::error::StoreError;

/// Returns `~/.config/taskburn[-dev]/` based on TASKBURN_ENV.
///
/// Set TASKBURN_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StoreError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("TASKBURN_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("taskburn-dev")
    } else {
        base_dir.join("taskburn")
    };

    std::fs::create_dir_all(&dir).map_err(|source| StoreError::OpenFailed {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
