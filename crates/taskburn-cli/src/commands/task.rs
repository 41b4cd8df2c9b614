//! Task management commands.

use clap::Subcommand;
use taskburn_core::{Config, TaskList, TaskStore};
use uuid::Uuid;

use super::{parse_instant, resolve_exercise};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a new task
    Add {
        /// Task title
        title: String,
        /// Exercise template name (default: Squats)
        #[arg(long)]
        exercise: Option<String>,
        /// Override the exercise duration in seconds
        #[arg(long)]
        duration: Option<u32>,
        /// Due date (RFC3339)
        #[arg(long)]
        due: Option<String>,
    },
    /// List tasks in display order
    List,
    /// Toggle completion for a task
    Toggle {
        /// Task ID
        id: String,
    },
    /// Update a task
    Update {
        /// Task ID
        id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New exercise template name
        #[arg(long)]
        exercise: Option<String>,
        /// New duration in seconds
        #[arg(long)]
        duration: Option<u32>,
        /// New due date (RFC3339)
        #[arg(long)]
        due: Option<String>,
    },
    /// Delete a task
    Remove {
        /// Task ID
        id: String,
    },
    /// Move a task to a new position
    Move {
        /// Current index
        from: usize,
        /// Target index
        to: usize,
    },
    /// Delete all tasks
    Clear,
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = TaskStore::open()?;
    let mut list = TaskList::from_tasks(store.load()?);
    let config = Config::load()?;

    match action {
        TaskAction::Add {
            title,
            exercise,
            duration,
            due,
        } => {
            let exercise = resolve_exercise(&config, exercise.as_deref())?;
            let due_at = due.as_deref().map(parse_instant).transpose()?;
            let task = list.add(title, &exercise, due_at, duration);
            println!("{}", serde_json::to_string_pretty(task)?);
        }
        TaskAction::List => {
            println!("{}", serde_json::to_string_pretty(list.tasks())?);
        }
        TaskAction::Toggle { id } => {
            let id = Uuid::parse_str(&id)?;
            let task = list
                .toggle_completion(id)
                .ok_or_else(|| format!("no task with id {id}"))?;
            println!("{}", serde_json::to_string_pretty(task)?);
        }
        TaskAction::Update {
            id,
            title,
            exercise,
            duration,
            due,
        } => {
            let id = Uuid::parse_str(&id)?;
            let current = list
                .get(id)
                .ok_or_else(|| format!("no task with id {id}"))?
                .clone();
            let exercise = match exercise {
                Some(name) => resolve_exercise(&config, Some(&name))?,
                None => current.exercise.clone(),
            };
            let due_at = match due {
                Some(value) => Some(parse_instant(&value)?),
                None => current.due_at,
            };
            let title = title.unwrap_or(current.title);
            let task = list
                .update(id, title, &exercise, due_at, duration)
                .ok_or_else(|| format!("no task with id {id}"))?;
            println!("{}", serde_json::to_string_pretty(task)?);
        }
        TaskAction::Remove { id } => {
            let id = Uuid::parse_str(&id)?;
            if !list.remove(id) {
                return Err(format!("no task with id {id}").into());
            }
            println!("{{\"type\": \"task_removed\"}}");
        }
        TaskAction::Move { from, to } => {
            list.move_task(from, to);
            println!("{}", serde_json::to_string_pretty(list.tasks())?);
        }
        TaskAction::Clear => {
            list.clear();
            println!("{{\"type\": \"tasks_cleared\"}}");
        }
    }

    store.flush(list.tasks())?;
    Ok(())
}
