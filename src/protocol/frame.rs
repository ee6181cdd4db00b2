//! Frame layout
//!
//! Constants describing the wire unit shared by the encoder and scanner.
//!
//! ```text
//! ┌──────────────┬─────────┬────────┬──────────────────┬──────────────┐
//! │ Sync (4)     │ Len (1) │ Id (1) │ Payload (Len)    │ Checksum (1) │
//! │ AF AF AF AF  │         │        │                  │              │
//! └──────────────┴─────────┴────────┴──────────────────┴──────────────┘
//! ```

/// Marker that opens every frame. Not unique in the stream.
pub const SYNC_MARKER: [u8; 4] = [0xAF; 4];

/// Length of the sync marker
pub const SYNC_LEN: usize = SYNC_MARKER.len();

/// Sync + length byte + id byte
pub const HEADER_SIZE: usize = SYNC_LEN + 2;

/// Trailing checksum byte
pub const CHECKSUM_SIZE: usize = 1;

/// Largest payload the one-byte length field can describe
pub const MAX_PAYLOAD_LEN: usize = u8::MAX as usize;

/// Offset of the length byte within a frame
pub(crate) const LENGTH_OFFSET: usize = SYNC_LEN;

/// Offset of the id byte within a frame
pub(crate) const ID_OFFSET: usize = SYNC_LEN + 1;

/// Total bytes on the wire for a payload of `payload_len` bytes
#[inline]
pub const fn frame_len(payload_len: usize) -> usize {
    HEADER_SIZE + payload_len + CHECKSUM_SIZE
}
