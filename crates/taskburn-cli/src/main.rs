use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "taskburn-cli", version, about = "Taskburn CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Sprint timer control
    Sprint {
        #[command(subcommand)]
        action: commands::sprint::SprintAction,
    },
    /// Completion statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Exercise templates
    Exercise {
        #[command(subcommand)]
        action: commands::exercise::ExerciseAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Task { action } => commands::task::run(action),
        Commands::Sprint { action } => commands::sprint::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Exercise { action } => commands::exercise::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
