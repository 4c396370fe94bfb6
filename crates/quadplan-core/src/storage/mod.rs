//! Persistence: data directory resolution, the JSON planner document, and
//! TOML configuration.

mod config;
mod store;

pub use config::Config;
pub use store::{PlannerData, PlannerStore};

use std::path::PathBuf;

use crate::error::StoreError;

/// Returns `~/.config/quadplan[-dev]/`, creating it if needed.
///
/// Set QUADPLAN_ENV=dev to use the development data directory.
///
/// # Errors
///
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StoreError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("QUADPLAN_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("quadplan-dev")
    } else {
        base_dir.join("quadplan")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
