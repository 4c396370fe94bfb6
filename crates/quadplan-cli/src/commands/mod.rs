//! CLI subcommand implementations.

pub mod config;
pub mod day;
pub mod notify;
pub mod overview;
pub mod task;
pub mod template;

use chrono::NaiveDate;
use quadplan_core::{parse_date_key, Planner};

/// Resolve an optional `YYYY-MM-DD` argument, defaulting to today.
fn resolve_date(
    planner: &Planner,
    date: Option<&str>,
) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match date {
        Some(value) => Ok(parse_date_key(value)?),
        None => Ok(planner.today()),
    }
}
