//! Error types for the fallible edges of the designer.
//!
//! Editing itself never fails: unknown ids and out-of-range input are no-ops. Only
//! configuration I/O and command parsing report errors.

use thiserror::Error;

/// Errors that can occur while loading or saving settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// No platform configuration directory could be determined.
    #[error("No configuration directory available")]
    NoConfigDir,

    /// Reading or writing the settings file failed.
    #[error("Settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid JSON for `AppSettings`.
    #[error("Invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors produced by the JSON command protocol.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A single command could not be parsed.
    #[error("Invalid command JSON: {0}")]
    InvalidCommand(#[source] serde_json::Error),

    /// A command batch could not be parsed.
    #[error("Invalid commands JSON: {0}")]
    InvalidBatch(#[source] serde_json::Error),
}
