//! Injectable clock for schedule consumers and the notification planner.

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Source of "now" and "today". Injected so planning is testable.
pub trait Clock: Send + Sync {
    /// Current local wall-clock time.
    fn now(&self) -> DateTime<Local>;

    /// Current calendar date.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Current instant in UTC, for creation timestamps.
    fn now_utc(&self) -> DateTime<Utc> {
        self.now().with_timezone(&Utc)
    }
}

/// System wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock pinned to a fixed instant, for tests and replay.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
