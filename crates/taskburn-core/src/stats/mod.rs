//! Statistics for Taskburn
//!
//! Day/week completion metrics and the trailing 7-day histogram, derived
//! from the raw task list. Computation is a pure fold over the list; the
//! [`StatisticsEngine`] wraps it with a current-value-plus-subscribe
//! contract for callers that want to be notified on refresh.

mod completion;
mod engine;

pub use completion::{compute_snapshot, DailyCompletion, StatisticsSnapshot};
pub use engine::StatisticsEngine;
