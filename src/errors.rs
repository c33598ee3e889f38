//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep error
//! handling consistent across the binary.

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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("Organization {0} not found")]
    OrgNotFound(i64),

    #[error("Site {0} not found")]
    SiteNotFound(i64),

    #[error("Worker {0} not found")]
    WorkerNotFound(i64),

    #[error("Transaction {0} not found")]
    TxNotFound(i64),

    #[error("Task {0} not found")]
    TaskNotFound(i64),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Diary record for site {site} on {date} is signed; unlock it first")]
    DiaryLocked { site: i64, date: String },

    #[error("No diary record for site {site} on {date}")]
    DiaryNotFound { site: i64, date: String },

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
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
