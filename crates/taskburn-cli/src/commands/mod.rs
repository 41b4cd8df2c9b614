pub mod config;
pub mod exercise;
pub mod sprint;
pub mod stats;
pub mod task;

use taskburn_core::{Config, ExerciseSpec};

/// Resolve an exercise template by name (case-insensitive) from the
/// built-in and custom templates. Falls back to the first built-in when
/// no name is given.
pub fn resolve_exercise(
    config: &Config,
    name: Option<&str>,
) -> Result<ExerciseSpec, Box<dyn std::error::Error>> {
    let mut exercises = config.available_exercises();
    match name {
        None => Ok(exercises.remove(0)),
        Some(name) => exercises
            .into_iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| format!("unknown exercise: {name}").into()),
    }
}

/// Parse an RFC3339 timestamp argument.
pub fn parse_instant(
    value: &str,
) -> Result<chrono::DateTime<chrono::Utc>, Box<dyn std::error::Error>> {
    Ok(chrono::DateTime::parse_from_rfc3339(value)?.with_timezone(&chrono::Utc))
}
