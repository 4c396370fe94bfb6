//! Day templates: reusable snapshots of a day's shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::{Day, Task};

/// A named, date-independent snapshot of a day: start time plus task list.
///
/// Lives in the planner registry keyed by name; saving over an existing
/// name silently replaces it. Template tasks never share identifiers with
/// live tasks; ids are renewed both when capturing and when applying.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub start_time: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Template {
    /// Capture a day as a template.
    ///
    /// Tasks are deep-copied with fresh ids so the snapshot shares no
    /// identity (or ownership) with the live day; `done` and `created_at`
    /// are kept as captured.
    pub fn capture(day: &Day) -> Self {
        Self {
            start_time: day.start_time.clone(),
            tasks: day.tasks.iter().map(Task::with_fresh_id).collect(),
        }
    }

    /// Instantiate the template as a fresh day: new ids, nothing done, and
    /// `created_at` stamped with the given time.
    pub fn instantiate(&self, now: DateTime<Utc>) -> Day {
        Day {
            start_time: self.start_time.clone(),
            tasks: self
                .tasks
                .iter()
                .map(|task| {
                    let mut task = task.with_fresh_id();
                    task.done = false;
                    task.created_at = now;
                    task
                })
                .collect(),
        }
    }
}
