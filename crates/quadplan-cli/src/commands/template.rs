//! Day template management commands.

use clap::Subcommand;
use quadplan_core::{date_key, Planner};

use super::resolve_date;

#[derive(Subcommand)]
pub enum TemplateAction {
    /// Save a day as a named template (overwrites an existing name)
    Save {
        /// Template name
        name: String,
        /// Source day (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Apply a template to a day, replacing the day's tasks
    Apply {
        /// Template name
        name: String,
        /// Target day (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Delete a template
    Delete {
        /// Template name
        name: String,
    },
    /// List saved templates
    List,
}

pub fn run(action: TemplateAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut planner = Planner::open()?;

    match action {
        TemplateAction::Save { name, date } => {
            let date = resolve_date(&planner, date.as_deref())?;
            planner.save_template(&name, date)?;
            println!("Template '{name}' saved from {}.", date_key(date));
        }
        TemplateAction::Apply { name, date } => {
            let date = resolve_date(&planner, date.as_deref())?;
            let day = planner.apply_template(&name, date)?;
            println!(
                "Applied '{name}' to {}: {} tasks, starts {}.",
                date_key(date),
                day.tasks.len(),
                day.start_time
            );
        }
        TemplateAction::Delete { name } => {
            planner.delete_template(&name)?;
            println!("Template '{name}' deleted.");
        }
        TemplateAction::List => {
            let names = planner.template_names();
            if names.is_empty() {
                println!("No templates saved.");
            }
            for name in names {
                let tasks = planner
                    .data()
                    .templates
                    .get(&name)
                    .map(|t| t.tasks.len())
                    .unwrap_or(0);
                println!("{name}  ({tasks} tasks)");
            }
        }
    }
    Ok(())
}
