//! Unified application error type.
//! Every layer (db, remote, core, screens, cli) returns AppError so that
//! nothing escapes the repository boundary as a panic.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Local store
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Local store unavailable: {0}")]
    Store(String),

    // ---------------------------
    // Remote sources
    // ---------------------------
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{message} ({status})")]
    Api { status: u16, message: String },

    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Lookup / input errors
    // ---------------------------
    #[error("Job not found: {0}")]
    JobNotFound(i64),

    #[error("Invalid page number: {0} (pages start at 1)")]
    InvalidPage(u32),

    #[error("Invalid deep link: {0}")]
    InvalidDeepLink(String),

    #[error("Invalid alert frequency: {0}")]
    InvalidFrequency(String),

    #[error("Missing push token: {0}")]
    MissingToken(String),

    /// Error state reported by a screen, already worded for the user.
    #[error("{0}")]
    Screen(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Status code carried by an upstream API failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            AppError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
