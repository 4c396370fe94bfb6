//! Core error types for quadplan-core.
//!
//! One umbrella `PlannerError` with per-concern enums underneath, all
//! built on thiserror.

use std::path::PathBuf;
use thiserror::Error;

pub use crate::time::TimeParseError;

/// Umbrella error type for planner operations.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Invalid task or template input, rejected before any mutation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Malformed time string or date key
    #[error("Time error: {0}")]
    Time(#[from] TimeParseError),

    /// Template registry errors
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    /// Persistence errors
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Referenced task does not exist on the given day
    #[error("No task with id '{id}' on {date}")]
    TaskNotFound { id: String, date: String },
}

/// Input validation errors. When one of these is returned, nothing was
/// constructed and no state was touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Task title was empty or whitespace
    #[error("task title must not be empty")]
    EmptyTitle,

    /// Task duration was zero or longer than a full day
    #[error("task duration must be within 1..=1440 minutes, got {minutes}")]
    InvalidDuration { minutes: u32 },

    /// Quadrant string was not one of Q1..Q4
    #[error("unknown quadrant '{0}', expected Q1..Q4")]
    UnknownQuadrant(String),

    /// Template name was empty
    #[error("template name must not be empty")]
    EmptyTemplateName,
}

/// Template registry errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// No template saved under the given name
    #[error("no template named '{0}'")]
    NotFound(String),
}

/// Persistence errors for the planner document.
#[derive(Error, Debug)]
pub enum StoreError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Data directory could not be resolved or created
    #[error("Failed to resolve data directory: {0}")]
    DataDir(String),

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Unknown configuration key
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for PlannerError
pub type Result<T, E = PlannerError> = std::result::Result<T, E>;
