//! Schedule derivation: packing ordered tasks into a contiguous timeline.

use serde::{Deserialize, Serialize};

use crate::task::{order_tasks, Task};
use crate::time::{minutes_to_time, parse_time_to_minutes, TimeParseError};

/// A task enriched with computed start/end minute offsets from midnight.
///
/// Derived on every render from the day's task set and start time; never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduledTask {
    #[serde(flatten)]
    pub task: Task,
    /// Minutes since midnight.
    pub start: u32,
    pub end: u32,
}

impl ScheduledTask {
    /// `HH:MM–HH:MM` span for rendering.
    pub fn time_range(&self) -> String {
        format!(
            "{}–{}",
            minutes_to_time(self.start),
            minutes_to_time(self.end)
        )
    }
}

/// Derive a day's timeline: tasks ordered by quadrant then creation time,
/// packed back to back from `start_time` with no idle gaps.
///
/// The first entry starts exactly at the parsed start time, and every
/// entry's end equals the next entry's start. Priority and creation order
/// alone determine placement; there is no independent time-slot concept.
///
/// # Errors
///
/// Fails only if `start_time` is not an `HH:MM` string.
pub fn build_schedule(
    tasks: &[Task],
    start_time: &str,
) -> Result<Vec<ScheduledTask>, TimeParseError> {
    let mut cursor = parse_time_to_minutes(start_time)?;
    let schedule: Vec<ScheduledTask> = order_tasks(tasks)
        .into_iter()
        .map(|task| {
            let start = cursor;
            let end = start + task.duration;
            cursor = end;
            ScheduledTask { task, start, end }
        })
        .collect();
    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Quadrant;
    use chrono::{TimeZone, Utc};

    fn task(quadrant: Quadrant, duration: u32, created_secs: i64) -> Task {
        Task::new(
            "task",
            quadrant,
            duration,
            Utc.timestamp_opt(created_secs, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn packs_ordered_tasks_from_start_time() {
        // Day start 09:00 with a later-created Q2 and an earlier Q1.
        let tasks = vec![task(Quadrant::Q2, 30, 2), task(Quadrant::Q1, 15, 1)];
        let schedule = build_schedule(&tasks, "09:00").unwrap();

        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule[0].task.quadrant, Quadrant::Q1);
        assert_eq!((schedule[0].start, schedule[0].end), (540, 555));
        assert_eq!(schedule[1].task.quadrant, Quadrant::Q2);
        assert_eq!((schedule[1].start, schedule[1].end), (555, 585));
    }

    #[test]
    fn timeline_is_contiguous() {
        let tasks = vec![
            task(Quadrant::Q1, 25, 1),
            task(Quadrant::Q3, 50, 2),
            task(Quadrant::Q2, 5, 3),
            task(Quadrant::Q1, 40, 4),
        ];
        let schedule = build_schedule(&tasks, "07:30").unwrap();

        assert_eq!(schedule[0].start, 450);
        for pair in schedule.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        for entry in &schedule {
            assert_eq!(entry.end - entry.start, entry.task.duration);
        }
    }

    #[test]
    fn day_long_durations_keep_the_cursor_monotone() {
        // Three maximum-length tasks starting late; offsets keep growing
        // instead of wrapping, so end - start always equals the duration.
        let tasks = vec![
            task(Quadrant::Q1, 1440, 1),
            task(Quadrant::Q1, 1440, 2),
            task(Quadrant::Q1, 1440, 3),
        ];
        let schedule = build_schedule(&tasks, "23:59").unwrap();

        assert_eq!(schedule[0].start, 1439);
        for entry in &schedule {
            assert!(entry.end > entry.start);
            assert_eq!(entry.end - entry.start, entry.task.duration);
        }
        assert_eq!(schedule[2].end, 1439 + 3 * 1440);
    }

    #[test]
    fn empty_day_yields_empty_schedule() {
        assert!(build_schedule(&[], "08:00").unwrap().is_empty());
    }

    #[test]
    fn bad_start_time_is_an_error() {
        assert!(build_schedule(&[], "eight").is_err());
    }

    #[test]
    fn time_range_renders_span() {
        let schedule = build_schedule(&[task(Quadrant::Q1, 45, 1)], "09:15").unwrap();
        assert_eq!(schedule[0].time_range(), "09:15–10:00");
    }
}
