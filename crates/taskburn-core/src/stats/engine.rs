//! Snapshot publisher.
//!
//! Holds the latest [`StatisticsSnapshot`] and republishes it to
//! subscribers whenever the caller refreshes after a task-list mutation.
//! The engine owns no task data and does no scheduling of its own.

use chrono::{DateTime, Utc};

use super::completion::{compute_snapshot, StatisticsSnapshot};
use crate::task::Task;

type Subscriber = Box<dyn Fn(&StatisticsSnapshot) + Send>;

/// Current-value-plus-subscribe wrapper around [`compute_snapshot`].
pub struct StatisticsEngine {
    snapshot: StatisticsSnapshot,
    subscribers: Vec<Subscriber>,
}

impl StatisticsEngine {
    /// Engine holding an all-zero snapshot for `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        StatisticsEngine {
            snapshot: StatisticsSnapshot::empty(now),
            subscribers: Vec::new(),
        }
    }

    /// The latest published snapshot.
    pub fn snapshot(&self) -> &StatisticsSnapshot {
        &self.snapshot
    }

    /// Register a callback invoked on every refresh.
    pub fn subscribe(&mut self, callback: impl Fn(&StatisticsSnapshot) + Send + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    /// Recompute from `tasks` as of `now`, publish to subscribers, and
    /// return the fresh snapshot. Call after every task-list mutation.
    pub fn refresh(&mut self, tasks: &[Task], now: DateTime<Utc>) -> &StatisticsSnapshot {
        self.snapshot = compute_snapshot(tasks, now);
        for subscriber in &self.subscribers {
            subscriber(&self.snapshot);
        }
        &self.snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercise::ExerciseSpec;
    use std::sync::{Arc, Mutex};

    #[test]
    fn starts_empty() {
        let engine = StatisticsEngine::new(Utc::now());
        assert_eq!(engine.snapshot().completed_today, 0);
        assert_eq!(engine.snapshot().daily_histogram.len(), 7);
    }

    #[test]
    fn refresh_publishes_to_subscribers() {
        let now = Utc::now();
        let mut engine = StatisticsEngine::new(now);

        let seen: Arc<Mutex<Vec<u32>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        engine.subscribe(move |snapshot| {
            sink.lock().unwrap().push(snapshot.completed_today);
        });

        let mut task = Task::new("t", ExerciseSpec::new("Squats", 60, ""));
        engine.refresh(&[task.clone()], now);
        task.toggle_completion(now);
        engine.refresh(&[task], now);

        assert_eq!(*seen.lock().unwrap(), vec![0, 1]);
        assert_eq!(engine.snapshot().completed_today, 1);
    }
}
