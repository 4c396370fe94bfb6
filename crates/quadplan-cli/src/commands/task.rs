//! Task management commands.

use clap::Subcommand;
use quadplan_core::{Planner, Quadrant};

use super::resolve_date;

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task to a day
    Add {
        /// Task title
        title: String,
        /// Priority quadrant (Q1..Q4)
        #[arg(short, long, default_value = "Q2")]
        quadrant: String,
        /// Duration in minutes
        #[arg(short, long, default_value_t = 30)]
        duration: u32,
        /// Day (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// List a day's tasks in schedule order
    List {
        /// Day (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Toggle a task's done flag
    Done {
        /// Task id
        id: String,
        #[arg(long)]
        date: Option<String>,
    },
    /// Remove a task
    Rm {
        /// Task id
        id: String,
        #[arg(long)]
        date: Option<String>,
    },
    /// Move a task to the next day
    Defer {
        /// Task id
        id: String,
        #[arg(long)]
        date: Option<String>,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut planner = Planner::open()?;

    match action {
        TaskAction::Add {
            title,
            quadrant,
            duration,
            date,
        } => {
            let date = resolve_date(&planner, date.as_deref())?;
            let quadrant: Quadrant = quadrant.parse()?;
            let task = planner.add_task(date, &title, quadrant, duration)?;
            println!(
                "Task created: {} [{} {} · {} min]",
                task.title,
                task.quadrant,
                task.quadrant.label(),
                task.duration
            );
            println!("id: {}", task.id);
        }
        TaskAction::List { date, json } => {
            let date = resolve_date(&planner, date.as_deref())?;
            let schedule = planner.schedule_for(date)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&schedule)?);
            } else if schedule.is_empty() {
                println!("No tasks. Add the first one.");
            } else {
                for entry in &schedule {
                    let marker = if entry.task.done { "x" } else { " " };
                    println!(
                        "[{marker}] {}  {} · {} · {} min  ({})",
                        entry.time_range(),
                        entry.task.quadrant,
                        entry.task.title,
                        entry.task.duration,
                        entry.task.id
                    );
                }
            }
        }
        TaskAction::Done { id, date } => {
            let date = resolve_date(&planner, date.as_deref())?;
            let done = planner.toggle_done(date, &id)?;
            println!("Task marked {}.", if done { "done" } else { "not done" });
        }
        TaskAction::Rm { id, date } => {
            let date = resolve_date(&planner, date.as_deref())?;
            let removed = planner.remove_task(date, &id)?;
            println!("Removed '{}'.", removed.title);
        }
        TaskAction::Defer { id, date } => {
            let date = resolve_date(&planner, date.as_deref())?;
            let moved_to = planner.move_to_tomorrow(date, &id)?;
            println!("Moved to {moved_to}.");
        }
    }
    Ok(())
}
