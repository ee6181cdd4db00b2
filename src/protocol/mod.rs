//! Protocol Module
//!
//! Defines the framing used to exchange records over an unframed serial link.
//!
//! ## Frame Format
//! ```text
//! ┌────────┬──────┬──────────┬──────────────────────────────────────────┐
//! │ Offset │ Size │ Field    │ Value                                    │
//! ├────────┼──────┼──────────┼──────────────────────────────────────────┤
//! │ 0      │ 4    │ sync     │ AF AF AF AF                              │
//! │ 4      │ 1    │ length   │ payload byte count (0-255)               │
//! │ 5      │ 1    │ id       │ payload type                             │
//! │ 6      │ len  │ payload  │ id 9: i32 a (LE), i32 b (LE)             │
//! │ 6+len  │ 1    │ checksum │ XOR of bytes [0..6+len)                  │
//! └────────┴──────┴──────────┴──────────────────────────────────────────┘
//! ```
//!
//! ### Ids
//! - 0x09: PAIR - Payload: two little-endian i32 (8 bytes)
//!
//! Further ids are added by registering them in a [`Schema`].

mod buffer;
mod checksum;
mod encoder;
mod frame;
mod record;
mod scanner;
mod schema;

pub use buffer::FrameBuffer;
pub use checksum::{checksum, Checksum};
pub use encoder::{encode, encode_into, encode_pair, encode_record};
pub use frame::{frame_len, CHECKSUM_SIZE, HEADER_SIZE, MAX_PAYLOAD_LEN, SYNC_LEN, SYNC_MARKER};
pub use record::{DecodedRecord, Pair, Record};
pub use scanner::{scan, Rejection, ScanReport, ScanStats, Scanner};
pub use schema::{DecodeFn, Schema, SchemaEntry};
