//! Frame buffer for accumulating partial reads.
//!
//! Uses `bytes::BytesMut` so consumed prefixes are released without copying
//! the retained tail. Reads may split a frame anywhere; the bytes of an
//! incomplete candidate stay buffered until the rest arrives.
//!
//! Between pushes at most one incomplete frame is retained, so the buffer
//! never holds more than `frame_len(MAX_PAYLOAD_LEN)` bytes at rest.
//!
//! # Example
//!
//! ```
//! use syncframe::protocol::{encode_pair, FrameBuffer, Schema};
//!
//! let mut buffer = FrameBuffer::new(Schema::standard());
//! let frame = encode_pair(100, 200);
//!
//! assert!(buffer.push(&frame[..9]).is_empty());
//! let records = buffer.push(&frame[9..]);
//! assert_eq!(records[0].record.as_pair().map(|p| (p.a, p.b)), Some((100, 200)));
//! ```

use bytes::{Buf, BytesMut};

use super::frame::{frame_len, MAX_PAYLOAD_LEN};
use super::record::DecodedRecord;
use super::scanner::{ScanStats, Scanner};
use super::schema::Schema;

/// Buffer for accumulating incoming bytes and extracting complete frames.
pub struct FrameBuffer {
    /// Accumulated bytes not yet consumed.
    buffer: BytesMut,
    /// Recognized payload types.
    schema: Schema,
    /// Counters across all pushes.
    stats: ScanStats,
}

impl FrameBuffer {
    /// Create a buffer sized for one maximal frame.
    pub fn new(schema: Schema) -> Self {
        Self::with_capacity(schema, frame_len(MAX_PAYLOAD_LEN))
    }

    /// Create a buffer with `capacity` bytes preallocated.
    pub fn with_capacity(schema: Schema, capacity: usize) -> Self {
        Self {
            buffer: BytesMut::with_capacity(capacity),
            schema,
            stats: ScanStats::default(),
        }
    }

    /// Push data into the buffer and extract all complete frames.
    ///
    /// Returns records in stream order (may be empty if still waiting for
    /// data). Offsets in the returned records are relative to the buffer
    /// contents at the time of this call.
    pub fn push(&mut self, data: &[u8]) -> Vec<DecodedRecord> {
        self.buffer.extend_from_slice(data);

        let (records, consumed, stats) = {
            let mut scanner = Scanner::new(&self.buffer, &self.schema);
            let records: Vec<DecodedRecord> = scanner.by_ref().collect();
            (records, scanner.consumed(), scanner.stats())
        };

        self.buffer.advance(consumed);
        self.stats.merge(&stats);

        tracing::debug!(
            pushed = data.len(),
            records = records.len(),
            consumed,
            retained = self.buffer.len(),
            "frame buffer push"
        );

        records
    }

    /// Get the number of buffered bytes.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Bytes currently retained for the next push.
    pub fn pending(&self) -> &[u8] {
        &self.buffer
    }

    /// Drop all buffered bytes. Counters are kept.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Counters accumulated across all pushes.
    pub fn stats(&self) -> ScanStats {
        self.stats
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new(Schema::standard())
    }
}
