use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::timer::SprintPhase;

/// Every sprint state change produces an Event.
/// The caller observes these to react to completion (mark the task done,
/// play a sound) -- those reactions live outside the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    SprintStarted {
        task_id: Uuid,
        task_title: String,
        exercise_name: String,
        duration_secs: u32,
        at: DateTime<Utc>,
    },
    SprintPaused {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    SprintResumed {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    /// Terminal event: the countdown ran out or the caller finished early.
    SprintFinished {
        task_id: Uuid,
        task_title: String,
        at: DateTime<Utc>,
    },
    SprintReset {
        at: DateTime<Utc>,
    },
    /// Full observable value of the timer at a point in time.
    StateSnapshot {
        phase: SprintPhase,
        task_id: Option<Uuid>,
        task_title: Option<String>,
        exercise_name: Option<String>,
        remaining_secs: u32,
        total_secs: u32,
        progress: f64,
        at: DateTime<Utc>,
    },
}
