//! The planner's single JSON document: every day and template.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::task::Day;
use crate::template::Template;

use super::data_dir;

/// The entire persisted state: date-key to Day, template name to Template.
/// Nothing else is ever written.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlannerData {
    #[serde(default)]
    pub days: HashMap<String, Day>,
    #[serde(default)]
    pub templates: HashMap<String, Template>,
}

impl PlannerData {
    /// Look up a day without creating it. Absent means empty/default.
    pub fn day(&self, date_key: &str) -> Option<&Day> {
        self.days.get(date_key)
    }

    /// Total tasks across every date key with the given prefix.
    pub fn tasks_with_prefix(&self, prefix: &str) -> usize {
        self.days
            .iter()
            .filter(|(key, _)| key.starts_with(prefix))
            .map(|(_, day)| day.tasks.len())
            .sum()
    }
}

/// File-backed store for [`PlannerData`]. Single device, last write wins.
pub struct PlannerStore {
    path: PathBuf,
}

impl PlannerStore {
    /// Open the store in the default data directory.
    pub fn open() -> Result<Self, StoreError> {
        Ok(Self {
            path: data_dir()?.join("planner.json"),
        })
    }

    /// Store at a custom path (tests, alternate data dirs).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the planner document.
    ///
    /// A missing or unparsable file yields the empty store; corruption is
    /// never surfaced to the caller.
    pub fn load(&self) -> PlannerData {
        let Ok(content) = std::fs::read_to_string(&self.path) else {
            return PlannerData::default();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Persist the whole document.
    pub fn save(&self, data: &PlannerData) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(data)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
