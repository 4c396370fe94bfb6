//! Calendar overview commands.

use chrono::Datelike;
use clap::Subcommand;
use quadplan_core::{month_overview, week_overview, year_overview, Planner};

use super::resolve_date;

#[derive(Subcommand)]
pub enum OverviewAction {
    /// Done/total counts for the week of a date
    Week {
        /// Day (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Task counts for every day of a month
    Month {
        /// Day in the month (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Task totals per month of a year
    Year {
        /// Year, defaults to the current one
        #[arg(long)]
        year: Option<i32>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: OverviewAction) -> Result<(), Box<dyn std::error::Error>> {
    let planner = Planner::open()?;

    match action {
        OverviewAction::Week { date, json } => {
            let date = resolve_date(&planner, date.as_deref())?;
            let cells = week_overview(planner.data(), date);
            if json {
                println!("{}", serde_json::to_string_pretty(&cells)?);
            } else {
                for cell in cells {
                    println!(
                        "{} {}  {}/{} done",
                        cell.date.format("%a"),
                        cell.date,
                        cell.done,
                        cell.total
                    );
                }
            }
        }
        OverviewAction::Month { date, json } => {
            let date = resolve_date(&planner, date.as_deref())?;
            let cells = month_overview(planner.data(), date);
            if json {
                println!("{}", serde_json::to_string_pretty(&cells)?);
            } else {
                for cell in cells.iter().filter(|c| c.total > 0) {
                    println!("{}  {} tasks", cell.date, cell.total);
                }
            }
        }
        OverviewAction::Year { year, json } => {
            let year = year.unwrap_or_else(|| planner.today().year());
            let months = year_overview(planner.data(), year);
            if json {
                println!("{}", serde_json::to_string_pretty(&months)?);
            } else {
                for summary in months {
                    println!("{year}-{:02}  {} tasks", summary.month, summary.tasks);
                }
            }
        }
    }
    Ok(())
}
