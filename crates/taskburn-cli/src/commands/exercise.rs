use clap::Subcommand;
use taskburn_core::Config;

#[derive(Subcommand)]
pub enum ExerciseAction {
    /// List available exercise templates (built-in plus custom)
    List,
}

pub fn run(action: ExerciseAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ExerciseAction::List => {
            let config = Config::load()?;
            let exercises = config.available_exercises();
            println!("{}", serde_json::to_string_pretty(&exercises)?);
        }
    }
    Ok(())
}
