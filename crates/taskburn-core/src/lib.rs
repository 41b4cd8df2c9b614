//! # Taskburn Core Library
//!
//! Core business logic for Taskburn, a task tracker that pairs each to-do
//! item with a timed physical exercise ("sprint"). It implements a
//! CLI-first philosophy: everything is available via the standalone CLI
//! binary, with any GUI being a thin layer over this same library.
//!
//! ## Architecture
//!
//! - **Sprint Timer**: a caller-driven state machine; the caller delivers
//!   one `tick()` per elapsed second while a sprint runs
//! - **Task List**: single-writer ordered store maintaining the
//!   completion-timestamp invariant
//! - **Statistics**: pure fold from (task list, now) to a snapshot of
//!   day/week counts and the trailing 7-day histogram
//! - **Storage**: JSON task persistence with an explicit flush, plus
//!   TOML configuration
//!
//! ## Key Components
//!
//! - [`SprintTimer`]: sprint countdown state machine
//! - [`TaskList`]: task store
//! - [`compute_snapshot`] / [`StatisticsEngine`]: statistics
//! - [`Config`]: application configuration

pub mod error;
pub mod events;
pub mod exercise;
pub mod stats;
pub mod storage;
pub mod task;
pub mod timer;

pub use error::{ConfigError, CoreError, StoreError};
pub use events::Event;
pub use exercise::{default_exercises, ExerciseSpec};
pub use stats::{compute_snapshot, DailyCompletion, StatisticsEngine, StatisticsSnapshot};
pub use storage::{Config, TaskStore};
pub use task::{Task, TaskList};
pub use timer::{SprintPhase, SprintSession, SprintTimer};
