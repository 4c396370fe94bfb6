use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "quadplan-cli", version, about = "Quadplan CLI")]
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
    /// Day timeline and start time
    Day {
        #[command(subcommand)]
        action: commands::day::DayAction,
    },
    /// Day template management
    Template {
        #[command(subcommand)]
        action: commands::template::TemplateAction,
    },
    /// Week, month, and year summaries
    Overview {
        #[command(subcommand)]
        action: commands::overview::OverviewAction,
    },
    /// Notification planning and arming
    Notify {
        #[command(subcommand)]
        action: commands::notify::NotifyAction,
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
        Commands::Day { action } => commands::day::run(action),
        Commands::Template { action } => commands::template::run(action),
        Commands::Overview { action } => commands::overview::run(action),
        Commands::Notify { action } => commands::notify::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
