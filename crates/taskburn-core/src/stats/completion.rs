//! Completion metrics over the task list.
//!
//! Everything here is a pure function of `(tasks, now)`: no side effects,
//! no stored state, identical inputs produce identical outputs. Days are
//! resolved in the local calendar.

use chrono::{DateTime, Days, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::task::Task;

/// One bucket of the trailing 7-day histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCompletion {
    /// Local calendar day
    pub day: NaiveDate,
    /// Number of tasks completed on that day
    pub count: u32,
}

/// Derived completion statistics. Recomputed on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSnapshot {
    /// Instant the snapshot was computed for
    pub as_of: DateTime<Utc>,
    /// Tasks completed today (local calendar)
    pub completed_today: u32,
    /// Tasks completed in the trailing 7-day window including today
    pub completed_this_week: u32,
    /// Lifetime sum of completed tasks' exercise durations, not windowed
    pub total_workout_seconds: u64,
    /// Exactly 7 buckets, oldest first, zero-count days present
    pub daily_histogram: Vec<DailyCompletion>,
}

impl StatisticsSnapshot {
    /// All-zero snapshot for `now`, histogram included.
    pub fn empty(now: DateTime<Utc>) -> Self {
        compute_snapshot(&[], now)
    }
}

/// Local calendar day a timestamp falls on.
fn local_day(ts: DateTime<Utc>) -> NaiveDate {
    ts.with_timezone(&Local).date_naive()
}

/// Compute the statistics snapshot for `tasks` as of `now`.
///
/// Tasks marked complete but missing a completion timestamp cannot be
/// dated: they count toward the lifetime total and nothing else.
/// Timestamps are taken as-is; no plausibility validation.
pub fn compute_snapshot(tasks: &[Task], now: DateTime<Utc>) -> StatisticsSnapshot {
    let today = local_day(now);
    let week_start = today - Days::new(6);

    let completed: Vec<&Task> = tasks.iter().filter(|t| t.is_completed).collect();

    let total_workout_seconds = completed
        .iter()
        .map(|t| t.exercise.base_duration_secs as u64)
        .sum();

    let mut daily_histogram: Vec<DailyCompletion> = (0..7)
        .map(|offset| DailyCompletion {
            day: week_start + Days::new(offset),
            count: 0,
        })
        .collect();

    let mut completed_today = 0;
    let mut completed_this_week = 0;
    for task in &completed {
        let Some(completed_at) = task.completed_at else {
            continue;
        };
        let day = local_day(completed_at);
        if day == today {
            completed_today += 1;
        }
        if day >= week_start && day <= today {
            completed_this_week += 1;
            let bucket = (day - week_start).num_days() as usize;
            daily_histogram[bucket].count += 1;
        }
    }

    StatisticsSnapshot {
        as_of: now,
        completed_today,
        completed_this_week,
        total_workout_seconds,
        daily_histogram,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercise::ExerciseSpec;
    use chrono::TimeZone;

    fn completed_task(duration_secs: u32, completed_at: Option<DateTime<Utc>>) -> Task {
        let mut task = Task::new("t", ExerciseSpec::new("Squats", duration_secs, ""));
        task.is_completed = true;
        task.completed_at = completed_at;
        task
    }

    fn pending_task(duration_secs: u32) -> Task {
        Task::new("t", ExerciseSpec::new("Squats", duration_secs, ""))
    }

    /// `now` shifted back by whole local days.
    fn days_ago(now: DateTime<Utc>, days: u64) -> DateTime<Utc> {
        now - chrono::Duration::days(days as i64)
    }

    /// Local midnight of the day `days` before today, as a Utc instant.
    fn local_midnight_days_ago(now: DateTime<Utc>, days: u64) -> DateTime<Utc> {
        let day = now.with_timezone(&Local).date_naive() - Days::new(days);
        Local
            .from_local_datetime(&day.and_hms_opt(0, 0, 0).unwrap())
            .earliest()
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn empty_list_yields_zeroes_and_full_histogram() {
        let now = Utc::now();
        let snapshot = compute_snapshot(&[], now);
        assert_eq!(snapshot.completed_today, 0);
        assert_eq!(snapshot.completed_this_week, 0);
        assert_eq!(snapshot.total_workout_seconds, 0);
        assert_eq!(snapshot.daily_histogram.len(), 7);
        assert!(snapshot.daily_histogram.iter().all(|d| d.count == 0));
    }

    #[test]
    fn histogram_is_ordered_oldest_first_with_no_gaps() {
        let now = Utc::now();
        let snapshot = StatisticsSnapshot::empty(now);
        let today = now.with_timezone(&Local).date_naive();
        for (offset, bucket) in snapshot.daily_histogram.iter().enumerate() {
            assert_eq!(bucket.day, today - Days::new(6 - offset as u64));
        }
        assert_eq!(snapshot.daily_histogram[6].day, today);
    }

    #[test]
    fn today_week_and_lifetime_counts_disagree_correctly() {
        let now = Utc::now();
        let tasks = vec![
            completed_task(60, Some(now)),
            completed_task(45, Some(days_ago(now, 8))),
            pending_task(30),
        ];

        let snapshot = compute_snapshot(&tasks, now);
        assert_eq!(snapshot.completed_today, 1);
        assert_eq!(snapshot.completed_this_week, 1);
        assert_eq!(snapshot.total_workout_seconds, 105);
        assert_eq!(snapshot.daily_histogram[6].count, 1);
        assert_eq!(
            snapshot.daily_histogram.iter().map(|d| d.count).sum::<u32>(),
            1
        );
    }

    #[test]
    fn lifetime_total_ignores_the_window() {
        let now = Utc::now();
        let tasks = vec![
            completed_task(60, Some(days_ago(now, 30))),
            completed_task(45, Some(now)),
        ];
        let snapshot = compute_snapshot(&tasks, now);
        assert_eq!(snapshot.total_workout_seconds, 105);
        assert_eq!(snapshot.completed_this_week, 1);
    }

    #[test]
    fn boundary_instants_are_inclusive() {
        let now = Utc::now();
        let tasks = vec![
            // Exactly at the start of the oldest window day.
            completed_task(10, Some(local_midnight_days_ago(now, 6))),
            // Exactly at the start of today.
            completed_task(10, Some(local_midnight_days_ago(now, 0))),
        ];
        let snapshot = compute_snapshot(&tasks, now);
        assert_eq!(snapshot.completed_this_week, 2);
        assert_eq!(snapshot.completed_today, 1);
        assert_eq!(snapshot.daily_histogram[0].count, 1);
        assert_eq!(snapshot.daily_histogram[6].count, 1);
    }

    #[test]
    fn just_outside_the_window_is_excluded() {
        let now = Utc::now();
        let tasks = vec![completed_task(
            10,
            // One second before the oldest window day began.
            Some(local_midnight_days_ago(now, 6) - chrono::Duration::seconds(1)),
        )];
        let snapshot = compute_snapshot(&tasks, now);
        assert_eq!(snapshot.completed_this_week, 0);
        assert_eq!(snapshot.total_workout_seconds, 10);
    }

    #[test]
    fn completed_without_timestamp_only_counts_toward_lifetime() {
        let now = Utc::now();
        let tasks = vec![completed_task(90, None)];
        let snapshot = compute_snapshot(&tasks, now);
        assert_eq!(snapshot.completed_today, 0);
        assert_eq!(snapshot.completed_this_week, 0);
        assert_eq!(snapshot.total_workout_seconds, 90);
        assert!(snapshot.daily_histogram.iter().all(|d| d.count == 0));
    }

    #[test]
    fn future_dated_completion_is_accepted_as_is() {
        let now = Utc::now();
        let tasks = vec![completed_task(
            20,
            Some(now + chrono::Duration::days(3)),
        )];
        let snapshot = compute_snapshot(&tasks, now);
        // Outside the trailing window, but still in the lifetime total.
        assert_eq!(snapshot.completed_this_week, 0);
        assert_eq!(snapshot.total_workout_seconds, 20);
    }

    #[test]
    fn multiple_completions_stack_in_one_bucket() {
        let now = Utc::now();
        let tasks = vec![
            completed_task(10, Some(now)),
            completed_task(10, Some(now)),
            completed_task(10, Some(days_ago(now, 2))),
        ];
        let snapshot = compute_snapshot(&tasks, now);
        assert_eq!(snapshot.completed_today, 2);
        assert_eq!(snapshot.completed_this_week, 3);
        assert_eq!(snapshot.daily_histogram[6].count, 2);
        assert_eq!(snapshot.daily_histogram[4].count, 1);
    }

    #[test]
    fn identical_inputs_produce_identical_snapshots() {
        let now = Utc::now();
        let tasks = vec![completed_task(60, Some(now)), pending_task(30)];
        assert_eq!(compute_snapshot(&tasks, now), compute_snapshot(&tasks, now));
    }
}
