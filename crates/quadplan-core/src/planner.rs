//! The planner service: every mutating operation over the persisted
//! document.
//!
//! Each operation is read-modify-write against the in-memory document,
//! then persisted, so a subsequent read never observes a partially-mutated
//! store. Validation happens before anything is touched.

use chrono::NaiveDate;

use crate::clock::{Clock, SystemClock};
use crate::error::{PlannerError, Result, TemplateError, ValidationError};
use crate::notify::{plan_notifications, PlannedNotification};
use crate::schedule::{build_schedule, ScheduledTask};
use crate::storage::{Config, PlannerData, PlannerStore};
use crate::task::{Day, Quadrant, Task};
use crate::template::Template;
use crate::time::{date_key, parse_time_to_minutes};

/// Owns the planner document, its store, and the clock.
pub struct Planner {
    store: PlannerStore,
    data: PlannerData,
    clock: Box<dyn Clock>,
    day_start: String,
}

impl Planner {
    /// Open against the default data directory, with the system clock and
    /// the configured default day start.
    pub fn open() -> Result<Self> {
        let store = PlannerStore::open()?;
        let config = Config::load_or_default();
        Ok(Self::with_parts(store, &config, Box::new(SystemClock)))
    }

    /// Assemble from explicit parts (tests, embedders).
    pub fn with_parts(store: PlannerStore, config: &Config, clock: Box<dyn Clock>) -> Self {
        let data = store.load();
        Self {
            store,
            data,
            clock,
            day_start: config.day_start.clone(),
        }
    }

    /// The in-memory document, read-only.
    pub fn data(&self) -> &PlannerData {
        &self.data
    }

    /// Current date per the planner's clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    fn day_entry(&mut self, date: NaiveDate) -> &mut Day {
        let start = self.day_start.clone();
        self.data
            .days
            .entry(date_key(date))
            .or_insert_with(|| Day::with_start(start))
    }

    fn persist(&self) -> Result<()> {
        self.store.save(&self.data)?;
        Ok(())
    }

    /// Create a task on the given date.
    ///
    /// Title and duration are validated before any state changes; the
    /// created task is returned.
    pub fn add_task(
        &mut self,
        date: NaiveDate,
        title: &str,
        quadrant: Quadrant,
        duration: u32,
    ) -> Result<Task> {
        let task = Task::new(title, quadrant, duration, self.clock.now_utc())?;
        self.day_entry(date).tasks.push(task.clone());
        self.persist()?;
        Ok(task)
    }

    /// Flip a task's completion flag; returns the new state.
    pub fn toggle_done(&mut self, date: NaiveDate, task_id: &str) -> Result<bool> {
        let key = date_key(date);
        let task = self
            .data
            .days
            .get_mut(&key)
            .and_then(|day| day.task_mut(task_id))
            .ok_or_else(|| PlannerError::TaskNotFound {
                id: task_id.to_string(),
                date: key.clone(),
            })?;
        task.done = !task.done;
        let done = task.done;
        self.persist()?;
        Ok(done)
    }

    /// Remove a task from the date; returns the removed task.
    pub fn remove_task(&mut self, date: NaiveDate, task_id: &str) -> Result<Task> {
        let key = date_key(date);
        let removed = self
            .data
            .days
            .get_mut(&key)
            .and_then(|day| day.take_task(task_id))
            .ok_or_else(|| PlannerError::TaskNotFound {
                id: task_id.to_string(),
                date: key,
            })?;
        self.persist()?;
        Ok(removed)
    }

    /// Move a task onto the next day's set, identity intact. Returns the
    /// destination date.
    pub fn move_to_tomorrow(&mut self, date: NaiveDate, task_id: &str) -> Result<NaiveDate> {
        let key = date_key(date);
        let task = self
            .data
            .days
            .get_mut(&key)
            .and_then(|day| day.take_task(task_id))
            .ok_or_else(|| PlannerError::TaskNotFound {
                id: task_id.to_string(),
                date: key,
            })?;
        let tomorrow = date + chrono::Duration::days(1);
        self.day_entry(tomorrow).tasks.push(task);
        self.persist()?;
        Ok(tomorrow)
    }

    /// Set the day's `HH:MM` anchor.
    ///
    /// The string is validated here, at the boundary; derivation assumes
    /// it is well-formed.
    pub fn set_start_time(&mut self, date: NaiveDate, start_time: &str) -> Result<()> {
        parse_time_to_minutes(start_time)?;
        self.day_entry(date).start_time = start_time.to_string();
        self.persist()
    }

    /// Snapshot the date's day under `name`, silently replacing any
    /// previous template with that name.
    pub fn save_template(&mut self, name: &str, date: NaiveDate) -> Result<()> {
        if name.is_empty() {
            return Err(ValidationError::EmptyTemplateName.into());
        }
        let day = self.day_entry(date).clone();
        self.data
            .templates
            .insert(name.to_string(), Template::capture(&day));
        self.persist()
    }

    /// Replace the date's day with an instance of the named template.
    pub fn apply_template(&mut self, name: &str, date: NaiveDate) -> Result<Day> {
        let template = self
            .data
            .templates
            .get(name)
            .ok_or_else(|| TemplateError::NotFound(name.to_string()))?;
        let day = template.instantiate(self.clock.now_utc());
        self.data.days.insert(date_key(date), day.clone());
        self.persist()?;
        Ok(day)
    }

    /// Drop the named template. Removing an absent name is a no-op.
    pub fn delete_template(&mut self, name: &str) -> Result<()> {
        self.data.templates.remove(name);
        self.persist()
    }

    /// Template names, sorted for stable display.
    pub fn template_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.data.templates.keys().cloned().collect();
        names.sort();
        names
    }

    /// Derive the date's timeline. An absent day is an empty schedule.
    pub fn schedule_for(&self, date: NaiveDate) -> Result<Vec<ScheduledTask>> {
        match self.data.day(&date_key(date)) {
            Some(day) => Ok(build_schedule(&day.tasks, &day.start_time)?),
            None => Ok(Vec::new()),
        }
    }

    /// The date's start time for display (the default when the day is
    /// absent).
    pub fn start_time_for(&self, date: NaiveDate) -> String {
        self.data
            .day(&date_key(date))
            .map(|day| day.start_time.clone())
            .unwrap_or_else(|| self.day_start.clone())
    }

    /// Reminders to arm for the date's schedule, per the planner's clock.
    pub fn notifications_for(&self, date: NaiveDate) -> Result<Vec<PlannedNotification>> {
        let schedule = self.schedule_for(date)?;
        Ok(plan_notifications(&schedule, date, self.clock.as_ref()))
    }
}
