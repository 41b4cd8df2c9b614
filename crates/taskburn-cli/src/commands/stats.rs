use chrono::Utc;
use clap::Subcommand;
use taskburn_core::{compute_snapshot, TaskStore};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Completion snapshot: today/week counts and the 7-day histogram
    Show,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        StatsAction::Show => {
            let store = TaskStore::open()?;
            let tasks = store.load()?;
            let snapshot = compute_snapshot(&tasks, Utc::now());
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
    }
    Ok(())
}
