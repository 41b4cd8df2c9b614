//! Sprint timer engine.
//!
//! The timer is a caller-driven state machine. It owns no threads and
//! schedules nothing -- the caller delivers one `tick()` per elapsed second
//! while the sprint runs. Because ticks only take effect in the `Running`
//! phase, cancellation (pause/finish/reset) is synchronous with the state
//! transition: a tick delivered after the fact is a no-op by construction.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> (Paused <-> Running) -> Finished -> Idle
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut timer = SprintTimer::new();
//! timer.start(&task, &list);
//! // Once per second:
//! timer.tick(); // Returns Some(Event::SprintFinished) when done
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;
use crate::task::{Task, TaskList};

/// Phase of the sprint timer state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SprintPhase {
    Idle,
    Running,
    Paused,
    Finished,
}

/// The active sprint: a task snapshot plus countdown state.
///
/// Transient and never persisted as part of a task. Edits to the source
/// task after start do not alter an in-progress session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SprintSession {
    /// Snapshot of the task taken at start time.
    pub task: Task,
    /// Seconds left on the countdown.
    pub remaining_secs: u32,
    /// Countdown length the sprint started from.
    pub total_secs: u32,
}

/// Sprint timer state machine.
///
/// Wrong-phase commands are silently ignored (`None`), never errors: the
/// machine is forgiving of redundant caller intent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SprintTimer {
    phase: SprintPhase,
    #[serde(default)]
    session: Option<SprintSession>,
}

impl SprintTimer {
    pub fn new() -> Self {
        SprintTimer {
            phase: SprintPhase::Idle,
            session: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> SprintPhase {
        self.phase
    }

    pub fn session(&self) -> Option<&SprintSession> {
        self.session.as_ref()
    }

    /// The task snapshot captured at start, if a session exists.
    pub fn current_task(&self) -> Option<&Task> {
        self.session.as_ref().map(|s| &s.task)
    }

    pub fn remaining_secs(&self) -> u32 {
        self.session.as_ref().map(|s| s.remaining_secs).unwrap_or(0)
    }

    pub fn total_secs(&self) -> u32 {
        self.session.as_ref().map(|s| s.total_secs).unwrap_or(0)
    }

    /// 0.0 .. 1.0 progress through the countdown.
    pub fn progress(&self) -> f64 {
        let total = self.total_secs();
        if total == 0 {
            return 0.0;
        }
        (1.0 - (self.remaining_secs() as f64 / total as f64)).clamp(0.0, 1.0)
    }

    /// Build a full state snapshot event (the observable current value).
    pub fn snapshot(&self) -> Event {
        let task = self.current_task();
        Event::StateSnapshot {
            phase: self.phase,
            task_id: task.map(|t| t.id),
            task_title: task.map(|t| t.title.clone()),
            exercise_name: task.map(|t| t.exercise.name.clone()),
            remaining_secs: self.remaining_secs(),
            total_secs: self.total_secs(),
            progress: self.progress(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin a sprint for `task`, valid from `Idle` or `Finished`.
    ///
    /// Prefers the live copy from the list when the task is still present,
    /// falling back to the passed-in value. Starting while `Running` or
    /// `Paused` is ignored; the caller must `reset()` first.
    pub fn start(&mut self, task: &Task, list: &TaskList) -> Option<Event> {
        match self.phase {
            SprintPhase::Idle | SprintPhase::Finished => {
                let snapshot = list.get(task.id).unwrap_or(task).clone();
                let total = snapshot.exercise.countdown_secs();
                let event = Event::SprintStarted {
                    task_id: snapshot.id,
                    task_title: snapshot.title.clone(),
                    exercise_name: snapshot.exercise.name.clone(),
                    duration_secs: total,
                    at: Utc::now(),
                };
                self.session = Some(SprintSession {
                    task: snapshot,
                    remaining_secs: total,
                    total_secs: total,
                });
                self.phase = SprintPhase::Running;
                Some(event)
            }
            SprintPhase::Running | SprintPhase::Paused => None,
        }
    }

    /// Freeze the countdown. No-op unless `Running`.
    pub fn pause(&mut self) -> Option<Event> {
        if self.phase != SprintPhase::Running {
            return None;
        }
        self.phase = SprintPhase::Paused;
        Some(Event::SprintPaused {
            remaining_secs: self.remaining_secs(),
            at: Utc::now(),
        })
    }

    /// Restart the countdown from the frozen remainder. No-op unless `Paused`.
    pub fn resume(&mut self) -> Option<Event> {
        if self.phase != SprintPhase::Paused {
            return None;
        }
        self.phase = SprintPhase::Running;
        Some(Event::SprintResumed {
            remaining_secs: self.remaining_secs(),
            at: Utc::now(),
        })
    }

    /// End the sprint early. Valid from `Running` or `Paused`; forces the
    /// remainder to 0.
    pub fn finish(&mut self) -> Option<Event> {
        match self.phase {
            SprintPhase::Running | SprintPhase::Paused => Some(self.complete()),
            _ => None,
        }
    }

    /// Return to `Idle` from any phase, clearing the session.
    pub fn reset(&mut self) -> Option<Event> {
        self.phase = SprintPhase::Idle;
        self.session = None;
        Some(Event::SprintReset { at: Utc::now() })
    }

    /// Deliver one second of countdown. Only meaningful while `Running`;
    /// in every other phase this is a no-op, which is what guarantees that
    /// no tick lands after pause/finish/reset.
    ///
    /// Returns `Some(Event::SprintFinished)` when the countdown completes.
    pub fn tick(&mut self) -> Option<Event> {
        if self.phase != SprintPhase::Running {
            return None;
        }
        let session = self.session.as_mut()?;
        if session.remaining_secs == 0 {
            // Started with an already-exhausted duration.
            return Some(self.complete());
        }
        session.remaining_secs -= 1;
        if session.remaining_secs == 0 {
            return Some(self.complete());
        }
        None
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn complete(&mut self) -> Event {
        if let Some(session) = self.session.as_mut() {
            session.remaining_secs = 0;
        }
        self.phase = SprintPhase::Finished;
        let task = self.current_task();
        Event::SprintFinished {
            task_id: task.map(|t| t.id).unwrap_or_default(),
            task_title: task.map(|t| t.title.clone()).unwrap_or_default(),
            at: Utc::now(),
        }
    }
}

impl Default for SprintTimer {
    fn default() -> Self {
        Self::new()
    }
}
