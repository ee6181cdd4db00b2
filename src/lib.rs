//! # syncframe
//!
//! Framing for exchanging small fixed-shape records with an embedded peer
//! over a byte-oriented serial link with:
//! - A 4-byte sync marker for locating frames in a noisy stream
//! - An XOR checksum for detecting corruption
//! - A resynchronizing scanner that survives noise, false sync matches and
//!   frames split across reads
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Application                            │
//! └──────────┬─────────────────────────────────────▲────────────┘
//!            │ Record                              │ DecodedRecord
//! ┌──────────▼──────────┐               ┌──────────┴──────────┐
//! │    FrameEncoder     │               │ FrameBuffer/Scanner │
//! │ sync+len+id+payload │               │  (Schema, Checksum) │
//! │     +checksum       │               │                     │
//! └──────────┬──────────┘               └──────────▲──────────┘
//!            │ bytes                               │ bytes
//! ┌──────────▼─────────────────────────────────────┴──────────┐
//! │                 Transport (serial, loopback)               │
//! └────────────────────────────────────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod transport;
pub mod link;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{SyncFrameError, Result};
pub use config::Config;
pub use link::Link;
pub use protocol::{DecodedRecord, Pair, Record, Schema};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of syncframe
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
