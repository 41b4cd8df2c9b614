//! Task model and the ordered task list.
//!
//! The task list is the single owner of [`Task`] entities. Insertion order
//! is meaningful (it drives list display), and every mutation that touches
//! completion keeps the invariant that `completed_at` is set if and only if
//! `is_completed` is true.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::exercise::ExerciseSpec;

/// A to-do item paired with an exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: Uuid,
    /// Task title
    pub title: String,
    /// Whether the task is completed
    pub is_completed: bool,
    /// Owned copy of the exercise template chosen at creation/edit time.
    pub exercise: ExerciseSpec,
    /// Optional due date
    pub due_at: Option<DateTime<Utc>>,
    /// Completion timestamp. Set if and only if `is_completed` is true.
    pub completed_at: Option<DateTime<Utc>>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a new, incomplete task owning a copy of `exercise`.
    pub fn new(title: impl Into<String>, exercise: ExerciseSpec) -> Self {
        Task {
            id: Uuid::new_v4(),
            title: title.into(),
            is_completed: false,
            exercise,
            due_at: None,
            completed_at: None,
            created_at: Utc::now(),
        }
    }

    /// Flip completion, stamping or clearing `completed_at` in the same
    /// mutation so the invariant can never be observed broken.
    pub fn toggle_completion(&mut self, now: DateTime<Utc>) {
        self.is_completed = !self.is_completed;
        self.completed_at = if self.is_completed { Some(now) } else { None };
    }
}

/// Ordered, single-writer task store.
///
/// This is the in-memory half of the store; persistence lives in
/// [`crate::storage::TaskStore`] and is flushed explicitly by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        TaskList { tasks: Vec::new() }
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        TaskList { tasks }
    }

    /// Read contract: all tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a new task. The exercise is copied; a custom duration
    /// overrides the copy, clamped to at least 1 second.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        exercise: &ExerciseSpec,
        due_at: Option<DateTime<Utc>>,
        custom_duration_secs: Option<u32>,
    ) -> &Task {
        let mut exercise = exercise.clone();
        if let Some(duration) = custom_duration_secs {
            exercise.base_duration_secs = duration.max(1);
        }
        let mut task = Task::new(title, exercise);
        task.due_at = due_at;
        let index = self.tasks.len();
        self.tasks.push(task);
        &self.tasks[index]
    }

    /// Edit a task in place. Returns the updated task, or `None` if the id
    /// is unknown.
    pub fn update(
        &mut self,
        id: Uuid,
        title: impl Into<String>,
        exercise: &ExerciseSpec,
        due_at: Option<DateTime<Utc>>,
        custom_duration_secs: Option<u32>,
    ) -> Option<&Task> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.title = title.into();
        let mut exercise = exercise.clone();
        if let Some(duration) = custom_duration_secs {
            exercise.base_duration_secs = duration.max(1);
        }
        task.exercise = exercise;
        task.due_at = due_at;
        Some(task)
    }

    /// Flip completion for a task, stamping `completed_at` with the current
    /// instant or clearing it. Returns the updated task.
    pub fn toggle_completion(&mut self, id: Uuid) -> Option<&Task> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.toggle_completion(Utc::now());
        Some(task)
    }

    /// Remove a task by id. Returns true if something was removed.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Reorder: move the task at `from` so it ends up at index `to`.
    /// Out-of-range indices are ignored.
    pub fn move_task(&mut self, from: usize, to: usize) {
        if from >= self.tasks.len() || to >= self.tasks.len() {
            return;
        }
        let task = self.tasks.remove(from);
        self.tasks.insert(to, task);
    }

    /// Remove all tasks.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }
}
