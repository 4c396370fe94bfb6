//! Task model: priority quadrants, tasks, ordering, and the per-day set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::ValidationError;

/// Start time given to days created without an explicit one.
pub const DEFAULT_START_TIME: &str = "08:00";

/// Longest accepted task duration, one full day in minutes. Keeps schedule
/// arithmetic comfortably inside `u32` no matter how a day is packed.
pub const MAX_DURATION_MINUTES: u32 = 1440;

/// Eisenhower priority quadrant. Lower precedence index schedules earlier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Quadrant {
    /// Urgent and important
    Q1,
    /// Important, not urgent
    Q2,
    /// Urgent, not important
    Q3,
    /// Neither urgent nor important
    Q4,
}

impl Quadrant {
    /// Position in the precedence list (0 for Q1 .. 3 for Q4).
    pub fn precedence(self) -> usize {
        match self {
            Quadrant::Q1 => 0,
            Quadrant::Q2 => 1,
            Quadrant::Q3 => 2,
            Quadrant::Q4 => 3,
        }
    }

    /// Human-readable label for rendering.
    pub fn label(self) -> &'static str {
        match self {
            Quadrant::Q1 => "urgent & important",
            Quadrant::Q2 => "important",
            Quadrant::Q3 => "urgent",
            Quadrant::Q4 => "neither",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quadrant::Q1 => write!(f, "Q1"),
            Quadrant::Q2 => write!(f, "Q2"),
            Quadrant::Q3 => write!(f, "Q3"),
            Quadrant::Q4 => write!(f, "Q4"),
        }
    }
}

impl FromStr for Quadrant {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "Q1" => Ok(Quadrant::Q1),
            "Q2" => Ok(Quadrant::Q2),
            "Q3" => Ok(Quadrant::Q3),
            "Q4" => Ok(Quadrant::Q4),
            other => Err(ValidationError::UnknownQuadrant(other.to_string())),
        }
    }
}

/// One unit of work on a given day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque unique id, immutable after creation.
    pub id: String,
    pub title: String,
    pub quadrant: Quadrant,
    /// Duration in minutes, within `1..=MAX_DURATION_MINUTES`.
    pub duration: u32,
    #[serde(default)]
    pub done: bool,
    /// Used only to break ordering ties among same-quadrant tasks.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a task with a fresh id, validating title and duration.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` for an empty (or whitespace) title or a
    /// duration outside `1..=MAX_DURATION_MINUTES`; no task is constructed
    /// in that case.
    pub fn new(
        title: impl Into<String>,
        quadrant: Quadrant,
        duration: u32,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if duration == 0 || duration > MAX_DURATION_MINUTES {
            return Err(ValidationError::InvalidDuration { minutes: duration });
        }
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            title,
            quadrant,
            duration,
            done: false,
            created_at,
        })
    }

    /// Copy with a freshly generated id; everything else as-is.
    pub(crate) fn with_fresh_id(&self) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            ..self.clone()
        }
    }
}

/// Order a day's tasks for scheduling: quadrant precedence first, then
/// creation time ascending. Stable, deterministic, and pure; the input is
/// never mutated.
pub fn order_tasks(tasks: &[Task]) -> Vec<Task> {
    let mut ordered = tasks.to_vec();
    ordered.sort_by_key(|task| (task.quadrant.precedence(), task.created_at));
    ordered
}

/// The unit of scheduling: a start time anchor plus the tasks of one date.
///
/// Days are created lazily on first reference to a date key and never
/// explicitly deleted; an absent day means an empty/default one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    /// `HH:MM` anchor for schedule derivation.
    #[serde(default = "default_start_time")]
    pub start_time: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

fn default_start_time() -> String {
    DEFAULT_START_TIME.to_string()
}

impl Default for Day {
    fn default() -> Self {
        Self::with_start(DEFAULT_START_TIME)
    }
}

impl Day {
    /// Empty day anchored at the given start time.
    pub fn with_start(start_time: impl Into<String>) -> Self {
        Self {
            start_time: start_time.into(),
            tasks: Vec::new(),
        }
    }

    /// Look up a task by id.
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Look up a task by id, mutably.
    pub fn task_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }

    /// Remove and return the task with the given id.
    pub fn take_task(&mut self, id: &str) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id == id)?;
        Some(self.tasks.remove(index))
    }

    /// Number of completed tasks.
    pub fn done_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.done).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn task(quadrant: Quadrant, created_secs: i64) -> Task {
        Task::new(
            "task",
            quadrant,
            30,
            Utc.timestamp_opt(created_secs, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn rejects_empty_title() {
        let err = Task::new("   ", Quadrant::Q1, 30, Utc::now()).unwrap_err();
        assert_eq!(err, ValidationError::EmptyTitle);
    }

    #[test]
    fn rejects_zero_duration() {
        let err = Task::new("write report", Quadrant::Q1, 0, Utc::now()).unwrap_err();
        assert_eq!(err, ValidationError::InvalidDuration { minutes: 0 });
    }

    #[test]
    fn rejects_oversized_duration() {
        let err = Task::new("write report", Quadrant::Q1, u32::MAX, Utc::now()).unwrap_err();
        assert_eq!(err, ValidationError::InvalidDuration { minutes: u32::MAX });
        assert!(Task::new("write report", Quadrant::Q1, MAX_DURATION_MINUTES + 1, Utc::now())
            .is_err());
        assert!(Task::new("write report", Quadrant::Q1, MAX_DURATION_MINUTES, Utc::now()).is_ok());
    }

    #[test]
    fn quadrant_parse_is_case_insensitive() {
        assert_eq!("q3".parse::<Quadrant>().unwrap(), Quadrant::Q3);
        assert!("Q5".parse::<Quadrant>().is_err());
    }

    #[test]
    fn quadrant_labels_spell_out_the_axes() {
        assert_eq!(Quadrant::Q1.label(), "urgent & important");
        assert_eq!(Quadrant::Q4.label(), "neither");
    }

    #[test]
    fn orders_by_quadrant_then_creation() {
        let tasks = vec![
            task(Quadrant::Q2, 2),
            task(Quadrant::Q1, 5),
            task(Quadrant::Q1, 1),
            task(Quadrant::Q4, 0),
        ];
        let ordered = order_tasks(&tasks);
        let ids: Vec<&str> = ordered.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                tasks[2].id.as_str(),
                tasks[1].id.as_str(),
                tasks[0].id.as_str(),
                tasks[3].id.as_str(),
            ]
        );
    }

    #[test]
    fn ordering_is_idempotent_and_pure() {
        let tasks = vec![task(Quadrant::Q3, 9), task(Quadrant::Q1, 4)];
        let snapshot = tasks.clone();
        let once = order_tasks(&tasks);
        assert_eq!(tasks, snapshot);
        assert_eq!(order_tasks(&once), once);
    }

    #[test]
    fn fresh_id_changes_identity_only() {
        let original = task(Quadrant::Q2, 7);
        let copy = original.with_fresh_id();
        assert_ne!(copy.id, original.id);
        assert_eq!(copy.title, original.title);
        assert_eq!(copy.created_at, original.created_at);
    }

    #[test]
    fn take_task_removes_by_id() {
        let mut day = Day::default();
        day.tasks.push(task(Quadrant::Q1, 1));
        let id = day.tasks[0].id.clone();
        assert!(day.take_task("missing").is_none());
        assert_eq!(day.take_task(&id).unwrap().id, id);
        assert!(day.tasks.is_empty());
    }
}
