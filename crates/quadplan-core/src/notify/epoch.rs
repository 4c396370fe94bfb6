//! Timer ownership for planned notifications.
//!
//! A [`NotificationEpoch`] owns every pending timer from one planning
//! pass. Rearming aborts the previous set before spawning the new one, so
//! at most one set of pending reminders exists at any time; dropping the
//! epoch cancels whatever is left. This is the replanning discipline every
//! caller must follow after a state change (task edited, start time moved,
//! date changed).

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::clock::Clock;

use super::PlannedNotification;

/// Host-side display for a fired reminder.
///
/// The host grants (or withholds) notification permission; while withheld,
/// nothing is armed and no error is raised.
pub trait NotificationSink: Send + Sync + 'static {
    /// Whether the host allows notifications right now.
    fn permitted(&self) -> bool {
        true
    }

    /// Show one reminder. Called at its `fire_at`, at most once.
    fn deliver(&self, notification: &PlannedNotification);
}

/// Owner of the pending timers from the most recent planning pass.
#[derive(Default)]
pub struct NotificationEpoch {
    handles: Vec<JoinHandle<()>>,
}

impl NotificationEpoch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort every outstanding timer.
    pub fn cancel_all(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }

    /// Replace the pending set: cancel everything outstanding, then arm one
    /// timer per planned reminder. Arms nothing when the sink lacks
    /// permission. Must be called from within a tokio runtime.
    pub fn rearm(
        &mut self,
        plan: Vec<PlannedNotification>,
        sink: Arc<dyn NotificationSink>,
        clock: &dyn Clock,
    ) {
        self.cancel_all();
        if !sink.permitted() {
            return;
        }
        let now = clock.now();
        for notification in plan {
            let delay = (notification.fire_at - now)
                .to_std()
                .unwrap_or(Duration::ZERO);
            let sink = Arc::clone(&sink);
            self.handles.push(tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                sink.deliver(&notification);
            }));
        }
    }

    /// Number of timers that have neither fired nor been cancelled.
    pub fn pending(&self) -> usize {
        self.handles
            .iter()
            .filter(|handle| !handle.is_finished())
            .count()
    }

    /// Wait for every armed timer to fire.
    pub async fn drain(&mut self) {
        for handle in self.handles.drain(..) {
            let _ = handle.await;
        }
    }
}

impl Drop for NotificationEpoch {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SystemClock;
    use crate::notify::NotificationKind;
    use crate::task::Quadrant;
    use chrono::Local;
    use std::sync::Mutex;

    struct RecordingSink {
        allowed: bool,
        fired: Mutex<Vec<String>>,
    }

    impl RecordingSink {
        fn new(allowed: bool) -> Arc<Self> {
            Arc::new(Self {
                allowed,
                fired: Mutex::new(Vec::new()),
            })
        }
    }

    impl NotificationSink for RecordingSink {
        fn permitted(&self) -> bool {
            self.allowed
        }

        fn deliver(&self, notification: &PlannedNotification) {
            self.fired
                .lock()
                .unwrap()
                .push(notification.task_id.clone());
        }
    }

    fn event(task_id: &str, seconds_ahead: i64) -> PlannedNotification {
        PlannedNotification {
            fire_at: Local::now() + chrono::Duration::seconds(seconds_ahead),
            kind: NotificationKind::Start,
            task_id: task_id.to_string(),
            title: "task".to_string(),
            quadrant: Quadrant::Q1,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn fires_each_reminder_once() {
        let sink = RecordingSink::new(true);
        let mut epoch = NotificationEpoch::new();
        epoch.rearm(vec![event("a", 1), event("b", 2)], sink.clone(), &SystemClock);
        epoch.drain().await;

        let mut fired = sink.fired.lock().unwrap().clone();
        fired.sort();
        assert_eq!(fired, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(epoch.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn rearm_cancels_the_previous_set() {
        let sink = RecordingSink::new(true);
        let mut epoch = NotificationEpoch::new();
        epoch.rearm(vec![event("stale", 60)], sink.clone(), &SystemClock);
        epoch.rearm(vec![event("fresh", 1)], sink.clone(), &SystemClock);
        epoch.drain().await;

        assert_eq!(*sink.fired.lock().unwrap(), vec!["fresh".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn without_permission_nothing_is_armed() {
        let sink = RecordingSink::new(false);
        let mut epoch = NotificationEpoch::new();
        epoch.rearm(vec![event("a", 1)], sink.clone(), &SystemClock);

        assert_eq!(epoch.pending(), 0);
        epoch.drain().await;
        assert!(sink.fired.lock().unwrap().is_empty());
    }
}
