//! Day timeline commands.

use clap::Subcommand;
use quadplan_core::{date_key, Planner};

use super::resolve_date;

#[derive(Subcommand)]
pub enum DayAction {
    /// Show the derived timeline for a day
    Show {
        /// Day (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set the day's start time (HH:MM)
    Start {
        /// New start time, e.g. 08:30
        time: String,
        #[arg(long)]
        date: Option<String>,
    },
}

pub fn run(action: DayAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut planner = Planner::open()?;

    match action {
        DayAction::Show { date, json } => {
            let date = resolve_date(&planner, date.as_deref())?;
            let schedule = planner.schedule_for(date)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&schedule)?);
                return Ok(());
            }
            println!(
                "{} · starts {}",
                date_key(date),
                planner.start_time_for(date)
            );
            if schedule.is_empty() {
                println!("No tasks.");
            }
            for entry in &schedule {
                let marker = if entry.task.done { "x" } else { " " };
                println!(
                    "[{marker}] {}  {} · {}",
                    entry.time_range(),
                    entry.task.quadrant,
                    entry.task.title
                );
            }
        }
        DayAction::Start { time, date } => {
            let date = resolve_date(&planner, date.as_deref())?;
            planner.set_start_time(date, &time)?;
            println!("Start time for {} set to {}.", date_key(date), time);
        }
    }
    Ok(())
}
