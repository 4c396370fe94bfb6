//! Calendar roll-ups: week, month, and year summaries.
//!
//! Pure aggregation over the planner document; rendering belongs to the
//! caller.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::storage::PlannerData;
use crate::time::date_key;

/// Task counts for one date.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub total: usize,
    pub done: usize,
}

/// Task count for one month of a year.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MonthSummary {
    pub month: u32,
    pub tasks: usize,
}

fn summarize(data: &PlannerData, date: NaiveDate) -> DaySummary {
    match data.day(&date_key(date)) {
        Some(day) => DaySummary {
            date,
            total: day.tasks.len(),
            done: day.done_count(),
        },
        None => DaySummary {
            date,
            total: 0,
            done: 0,
        },
    }
}

/// The seven days of `date`'s week, Monday first.
pub fn week_overview(data: &PlannerData, date: NaiveDate) -> Vec<DaySummary> {
    let monday = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
    (0..7)
        .map(|offset| summarize(data, monday + Duration::days(offset)))
        .collect()
}

/// Every day of `date`'s month, in order.
pub fn month_overview(data: &PlannerData, date: NaiveDate) -> Vec<DaySummary> {
    let mut cells = Vec::new();
    let mut cursor = date.with_day(1).unwrap_or(date);
    while cursor.month() == date.month() && cursor.year() == date.year() {
        cells.push(summarize(data, cursor));
        cursor = match cursor.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    cells
}

/// Task totals per month of `year`, via date-key prefix scan.
pub fn year_overview(data: &PlannerData, year: i32) -> Vec<MonthSummary> {
    (1..=12)
        .map(|month| MonthSummary {
            month,
            tasks: data.tasks_with_prefix(&format!("{year:04}-{month:02}")),
        })
        .collect()
}
