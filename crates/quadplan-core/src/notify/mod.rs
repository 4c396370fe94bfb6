//! Notification planning: deriving future reminder events from a timeline.
//!
//! The planner is pure: it filters and maps a built schedule into
//! [`PlannedNotification`]s. Arming timers is the epoch's job, and showing
//! the result belongs to the host via [`NotificationSink`].

mod epoch;

pub use epoch::{NotificationEpoch, NotificationSink};

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::schedule::ScheduledTask;
use crate::task::Quadrant;

/// Minutes before a task's start at which the early reminder fires.
pub const PRE_START_LEAD_MINUTES: i64 = 5;

/// Which reminder a planned event is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NotificationKind {
    /// Fires five minutes before the task starts
    PreStart,
    /// Fires at the task's start
    Start,
}

/// One reminder to arm: what to show, and when.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlannedNotification {
    pub fire_at: DateTime<Local>,
    pub kind: NotificationKind,
    pub task_id: String,
    pub title: String,
    pub quadrant: Quadrant,
}

impl PlannedNotification {
    /// Notification headline.
    pub fn summary(&self) -> &'static str {
        match self.kind {
            NotificationKind::PreStart => "Starting in 5 minutes",
            NotificationKind::Start => "Task starting",
        }
    }

    /// Notification body: title plus quadrant.
    pub fn body(&self) -> String {
        format!("{} ({})", self.title, self.quadrant)
    }
}

/// Compute the reminders to arm for a day's schedule.
///
/// Produces nothing unless `date` is the clock's current day. For each
/// not-done task a pre-start and a start reminder are considered, and only
/// those strictly in the future survive; past-due reminders are dropped,
/// never fired late. The result is unsorted; callers may sort by
/// `fire_at`.
pub fn plan_notifications(
    schedule: &[ScheduledTask],
    date: NaiveDate,
    clock: &dyn Clock,
) -> Vec<PlannedNotification> {
    if date != clock.today() {
        return Vec::new();
    }
    let now = clock.now();
    let midnight = date.and_time(NaiveTime::MIN);

    let mut planned = Vec::new();
    for entry in schedule {
        if entry.task.done {
            continue;
        }
        let start_naive = midnight + Duration::minutes(i64::from(entry.start));
        // Local times inside a DST gap don't resolve; skip them.
        let Some(start_at) = start_naive.and_local_timezone(Local).earliest() else {
            continue;
        };
        let pre_start = start_at - Duration::minutes(PRE_START_LEAD_MINUTES);
        for (kind, fire_at) in [
            (NotificationKind::PreStart, pre_start),
            (NotificationKind::Start, start_at),
        ] {
            if fire_at <= now {
                continue;
            }
            planned.push(PlannedNotification {
                fire_at,
                kind,
                task_id: entry.task.id.clone(),
                title: entry.task.title.clone(),
                quadrant: entry.task.quadrant,
            });
        }
    }
    planned
}
