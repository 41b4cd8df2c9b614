//! Exercise templates.
//!
//! An [`ExerciseSpec`] describes a timed physical exercise that gets paired
//! with a task. Tasks always own their own copy of the spec, so editing a
//! shared template never retroactively changes existing tasks.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Immutable-by-id exercise template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseSpec {
    /// Unique identifier
    pub id: Uuid,
    /// Display name (e.g. "Squats")
    pub name: String,
    /// Countdown length in seconds. Always > 0; degenerate values are
    /// clamped to 1 at the points where a countdown is derived from it.
    pub base_duration_secs: u32,
    /// Human-readable instruction (e.g. "20 squats")
    pub description: String,
}

impl ExerciseSpec {
    /// Create a new template with a fresh id.
    pub fn new(
        name: impl Into<String>,
        base_duration_secs: u32,
        description: impl Into<String>,
    ) -> Self {
        ExerciseSpec {
            id: Uuid::new_v4(),
            name: name.into(),
            base_duration_secs,
            description: description.into(),
        }
    }

    /// The duration used when a countdown starts: never below 1 second.
    pub fn countdown_secs(&self) -> u32 {
        self.base_duration_secs.max(1)
    }
}

/// Built-in exercise templates shipped with the app.
pub fn default_exercises() -> Vec<ExerciseSpec> {
    vec![
        ExerciseSpec::new("Squats", 60, "20 squats"),
        ExerciseSpec::new("Burpees", 45, "10 burpees"),
        ExerciseSpec::new("Plank", 30, "Hold plank for 30 seconds"),
        ExerciseSpec::new("Push-ups", 60, "15 push-ups"),
        ExerciseSpec::new("Jog in Place", 120, "Jog in place for 2 minutes"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_exercises_have_positive_durations() {
        let exercises = default_exercises();
        assert_eq!(exercises.len(), 5);
        for exercise in &exercises {
            assert!(exercise.base_duration_secs > 0);
            assert!(!exercise.name.is_empty());
        }
    }

    #[test]
    fn countdown_secs_clamps_zero_duration() {
        let mut exercise = ExerciseSpec::new("Broken", 0, "");
        assert_eq!(exercise.countdown_secs(), 1);
        exercise.base_duration_secs = 45;
        assert_eq!(exercise.countdown_secs(), 45);
    }

    #[test]
    fn serialization_round_trip() {
        let exercise = ExerciseSpec::new("Plank", 30, "Hold plank for 30 seconds");
        let json = serde_json::to_string(&exercise).unwrap();
        let decoded: ExerciseSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, exercise);
    }
}
