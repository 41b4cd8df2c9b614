//! TOML-based application configuration.
//!
//! Stores user preferences:
//! - Custom exercise templates offered alongside the built-in ones
//! - Sprint behavior (whether finishing a sprint marks the task complete)
//!
//! Configuration is stored at `~/.config/taskburn/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::ConfigError;
use crate::exercise::{default_exercises, ExerciseSpec};

const CONFIG_FILE: &str = "config.toml";

/// A user-defined exercise template. Ids are assigned when the template
/// is materialized, so hand-edited config files stay simple.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomExercise {
    pub name: String,
    pub duration_secs: u32,
    #[serde(default)]
    pub description: String,
}

/// Exercise-related configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExercisesConfig {
    /// Extra templates listed after the built-in five.
    #[serde(default)]
    pub custom: Vec<CustomExercise>,
}

/// Sprint behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SprintConfig {
    /// Mark the task complete when its sprint finishes.
    #[serde(default = "default_true")]
    pub auto_complete_on_finish: bool,
}

impl Default for SprintConfig {
    fn default() -> Self {
        SprintConfig {
            auto_complete_on_finish: true,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub exercises: ExercisesConfig,
    #[serde(default)]
    pub sprint: SprintConfig,
}

impl Config {
    /// Path to the config file inside the data directory.
    pub fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from(CONFIG_FILE),
            message: e.to_string(),
        })?;
        Ok(dir.join(CONFIG_FILE))
    }

    /// Load the config, falling back to defaults when the file is absent.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    /// Load from an explicit path (tests, alternate data dirs).
    pub fn load_from(path: &std::path::Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&text).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    /// Save the config.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        self.save_to(&path)
    }

    /// Save to an explicit path.
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        let text = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, text).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Built-in templates followed by the user's custom ones.
    pub fn available_exercises(&self) -> Vec<ExerciseSpec> {
        let mut exercises = default_exercises();
        exercises.extend(self.exercises.custom.iter().map(|c| {
            ExerciseSpec::new(c.name.clone(), c.duration_secs, c.description.clone())
        }));
        exercises
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = Config::default();
        assert!(config.sprint.auto_complete_on_finish);
        assert_eq!(config.available_exercises().len(), 5);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert!(config.exercises.custom.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.sprint.auto_complete_on_finish = false;
        config.exercises.custom.push(CustomExercise {
            name: "Jumping Jacks".to_string(),
            duration_secs: 40,
            description: "30 jumping jacks".to_string(),
        });
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert!(!loaded.sprint.auto_complete_on_finish);
        let exercises = loaded.available_exercises();
        assert_eq!(exercises.len(), 6);
        assert_eq!(exercises[5].name, "Jumping Jacks");
        assert_eq!(exercises[5].base_duration_secs, 40);
    }

    #[test]
    fn partial_config_uses_field_defaults() {
        let config: Config = toml::from_str("[exercises]\n").unwrap();
        assert!(config.sprint.auto_complete_on_finish);
    }
}
