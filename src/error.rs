//! Error types for syncframe
//!
//! Provides a unified error type for all operations.
//!
//! Corrupted or unrecognized candidates found while scanning are not errors;
//! see [`crate::protocol::Rejection`].

use thiserror::Error;

/// Result type alias using SyncFrameError
pub type Result<T> = std::result::Result<T, SyncFrameError>;

/// Unified error type for syncframe operations
#[derive(Debug, Error)]
pub enum SyncFrameError {
    // -------------------------------------------------------------------------
    // Encoding Errors
    // -------------------------------------------------------------------------
    #[error("Payload too large: {len} bytes (max 255)")]
    PayloadTooLarge { len: usize },

    // -------------------------------------------------------------------------
    // Schema Errors
    // -------------------------------------------------------------------------
    #[error("Schema error: {0}")]
    Schema(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serial port error: {0}")]
    SerialPort(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Concurrency Errors
    // -------------------------------------------------------------------------
    #[error("Lock poisoned: {0}")]
    LockPoisoned(String),
}
