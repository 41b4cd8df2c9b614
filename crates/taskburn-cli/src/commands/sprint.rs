//! Sprint timer commands.
//!
//! The core engine is tick-driven and owns no clock, so the CLI carries
//! the cadence: the persisted state remembers when the countdown was last
//! observed and delivers one tick per whole second elapsed since.

use chrono::{DateTime, Duration, Utc};
use clap::Subcommand;
use serde::{Deserialize, Serialize};
use taskburn_core::{storage, Config, Event, SprintPhase, SprintTimer, TaskList, TaskStore};
use uuid::Uuid;

const SPRINT_FILE: &str = "sprint.json";

#[derive(Subcommand)]
pub enum SprintAction {
    /// Start a sprint for a task
    Start {
        /// Task ID
        id: String,
    },
    /// Pause the running sprint
    Pause,
    /// Resume a paused sprint
    Resume,
    /// End the sprint early
    Finish,
    /// Reset to idle
    Reset,
    /// Print current sprint state as JSON
    Status,
}

/// Persisted timer plus the wall-clock instant of the last tick delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SprintState {
    timer: SprintTimer,
    #[serde(default)]
    last_observed_at: Option<DateTime<Utc>>,
}

impl Default for SprintState {
    fn default() -> Self {
        SprintState {
            timer: SprintTimer::new(),
            last_observed_at: None,
        }
    }
}

fn state_path() -> Result<std::path::PathBuf, Box<dyn std::error::Error>> {
    Ok(storage::data_dir()?.join(SPRINT_FILE))
}

fn load_state() -> SprintState {
    let Ok(path) = state_path() else {
        return SprintState::default();
    };
    if let Ok(json) = std::fs::read_to_string(path) {
        if let Ok(state) = serde_json::from_str::<SprintState>(&json) {
            return state;
        }
    }
    SprintState::default()
}

fn save_state(state: &SprintState) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(state)?;
    std::fs::write(state_path()?, json)?;
    Ok(())
}

/// Deliver the ticks owed since the last observation. Returns the finish
/// event if the countdown ran out while unobserved.
fn catch_up(state: &mut SprintState) -> Option<Event> {
    if state.timer.phase() != SprintPhase::Running {
        return None;
    }
    let last = state.last_observed_at?;
    let now = Utc::now();
    let elapsed = (now - last).num_seconds().max(0);

    let mut finished = None;
    for _ in 0..elapsed {
        if let Some(event) = state.timer.tick() {
            finished = Some(event);
            break;
        }
    }
    // Keep the sub-second remainder so ticks stay on a 1-second cadence.
    state.last_observed_at = Some(last + Duration::seconds(elapsed));
    finished
}

/// The caller-side reaction to a finished sprint: optionally mark the
/// task complete, per configuration.
fn handle_finish(event: &Event) -> Result<(), Box<dyn std::error::Error>> {
    let Event::SprintFinished { task_id, .. } = event else {
        return Ok(());
    };
    let config = Config::load()?;
    if !config.sprint.auto_complete_on_finish {
        return Ok(());
    }
    let store = TaskStore::open()?;
    let mut list = TaskList::from_tasks(store.load()?);
    let already_complete = match list.get(*task_id) {
        Some(task) => task.is_completed,
        None => return Ok(()), // task deleted mid-sprint
    };
    if !already_complete {
        list.toggle_completion(*task_id);
        store.flush(list.tasks())?;
    }
    Ok(())
}

fn print_event(event: &Event) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(event)?);
    Ok(())
}

pub fn run(action: SprintAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = load_state();

    match action {
        SprintAction::Start { id } => {
            let id = Uuid::parse_str(&id)?;
            let store = TaskStore::open()?;
            let list = TaskList::from_tasks(store.load()?);
            let task = list
                .get(id)
                .ok_or_else(|| format!("no task with id {id}"))?
                .clone();
            match state.timer.start(&task, &list) {
                Some(event) => {
                    state.last_observed_at = Some(Utc::now());
                    print_event(&event)?;
                }
                None => {
                    return Err("a sprint is already active; reset it first".into());
                }
            }
        }
        SprintAction::Pause => {
            if let Some(event) = catch_up(&mut state) {
                handle_finish(&event)?;
                print_event(&event)?;
            } else if let Some(event) = state.timer.pause() {
                state.last_observed_at = None;
                print_event(&event)?;
            } else {
                print_event(&state.timer.snapshot())?;
            }
        }
        SprintAction::Resume => {
            if let Some(event) = state.timer.resume() {
                state.last_observed_at = Some(Utc::now());
                print_event(&event)?;
            } else {
                print_event(&state.timer.snapshot())?;
            }
        }
        SprintAction::Finish => {
            if let Some(event) = state.timer.finish() {
                state.last_observed_at = None;
                handle_finish(&event)?;
                print_event(&event)?;
            } else {
                print_event(&state.timer.snapshot())?;
            }
        }
        SprintAction::Reset => {
            state.last_observed_at = None;
            if let Some(event) = state.timer.reset() {
                print_event(&event)?;
            }
        }
        SprintAction::Status => {
            let finished = catch_up(&mut state);
            print_event(&state.timer.snapshot())?;
            if let Some(event) = finished {
                handle_finish(&event)?;
                print_event(&event)?;
            }
        }
    }

    save_state(&state)?;
    Ok(())
}
