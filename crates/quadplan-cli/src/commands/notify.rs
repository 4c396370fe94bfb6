//! Notification planning commands.

use std::sync::Arc;

use clap::Subcommand;
use quadplan_core::{
    Config, NotificationEpoch, NotificationSink, PlannedNotification, Planner, SystemClock,
};

use super::resolve_date;

#[derive(Subcommand)]
pub enum NotifyAction {
    /// Print the reminders the planner would arm for a day
    Plan {
        /// Day (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Arm the day's reminders and print each one as it fires
    Watch {
        /// Day (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
}

/// Prints fired reminders to the terminal; permission follows config.
struct TerminalSink {
    enabled: bool,
}

impl NotificationSink for TerminalSink {
    fn permitted(&self) -> bool {
        self.enabled
    }

    fn deliver(&self, notification: &PlannedNotification) {
        println!(
            "[{}] {}: {}",
            notification.fire_at.format("%H:%M"),
            notification.summary(),
            notification.body()
        );
    }
}

pub fn run(action: NotifyAction) -> Result<(), Box<dyn std::error::Error>> {
    let planner = Planner::open()?;

    match action {
        NotifyAction::Plan { date, json } => {
            let date = resolve_date(&planner, date.as_deref())?;
            let mut plan = planner.notifications_for(date)?;
            plan.sort_by_key(|event| event.fire_at);
            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else if plan.is_empty() {
                println!("Nothing to arm.");
            } else {
                for event in &plan {
                    println!(
                        "{}  {}  {}",
                        event.fire_at.format("%H:%M"),
                        event.summary(),
                        event.body()
                    );
                }
            }
        }
        NotifyAction::Watch { date } => {
            let date = resolve_date(&planner, date.as_deref())?;
            let plan = planner.notifications_for(date)?;
            if plan.is_empty() {
                println!("Nothing to arm.");
                return Ok(());
            }
            let config = Config::load_or_default();
            if !config.notifications.enabled {
                println!("Notifications are disabled in config.");
                return Ok(());
            }
            println!("Armed {} reminders; waiting...", plan.len());
            let sink = Arc::new(TerminalSink { enabled: true });
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(async move {
                let mut epoch = NotificationEpoch::new();
                epoch.rearm(plan, sink, &SystemClock);
                epoch.drain().await;
            });
        }
    }
    Ok(())
}
