//! # Quadplan Core Library
//!
//! Core business logic for the Quadplan day planner. The CLI (and any GUI)
//! is a thin layer over this crate: it hands the core plain data and gets
//! plain data back.
//!
//! ## Key components
//!
//! - [`build_schedule`]: turns a day's unordered task set into a
//!   contiguous, time-bounded timeline
//! - [`Template`]: named snapshots of a day's shape, with identity renewal
//!   on both save and apply
//! - [`plan_notifications`] / [`NotificationEpoch`]: reminder derivation
//!   from a built timeline, and ownership of the armed timers
//! - [`Planner`]: the mutating operations over the persisted document
//! - [`PlannerStore`] / [`Config`]: JSON document storage and TOML
//!   preferences under `~/.config/quadplan`

pub mod clock;
pub mod error;
pub mod notify;
pub mod overview;
pub mod planner;
pub mod schedule;
pub mod storage;
pub mod task;
pub mod template;
pub mod time;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{
    ConfigError, PlannerError, Result, StoreError, TemplateError, ValidationError,
};
pub use notify::{
    plan_notifications, NotificationEpoch, NotificationKind, NotificationSink,
    PlannedNotification, PRE_START_LEAD_MINUTES,
};
pub use overview::{month_overview, week_overview, year_overview, DaySummary, MonthSummary};
pub use planner::Planner;
pub use schedule::{build_schedule, ScheduledTask};
pub use storage::{data_dir, Config, PlannerData, PlannerStore};
pub use task::{order_tasks, Day, Quadrant, Task, DEFAULT_START_TIME, MAX_DURATION_MINUTES};
pub use template::Template;
pub use time::{
    date_key, minutes_to_time, parse_date_key, parse_time_to_minutes, TimeParseError,
};
