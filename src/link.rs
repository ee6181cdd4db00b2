//! Link Module
//!
//! Couples a [`Transport`] with a [`FrameBuffer`]. Callers drive it with
//! explicit `send` and `poll` calls; the link owns no timers or threads.
//!
//! ## Responsibilities
//! - Encode records and write them to the transport
//! - Read whatever bytes are available and keep partial frames across reads
//! - Hand accepted records back in stream order

use crate::config::Config;
use crate::error::Result;
use crate::protocol::{
    encode_pair, encode_record, DecodedRecord, FrameBuffer, Pair, Record, ScanStats, Schema,
};
use crate::transport::Transport;

/// A framed link to the peer
///
/// ## Concurrency Model
/// The link owns its accumulation buffer, so appending and scanning never
/// race. Share it between threads by moving it, or wrap it in a `Mutex`.
pub struct Link<T> {
    transport: T,
    buffer: FrameBuffer,
    read_chunk: usize,
}

impl<T: Transport> Link<T> {
    /// Create a link recognizing the standard records
    pub fn new(transport: T, config: &Config) -> Result<Self> {
        Self::with_schema(transport, config, Schema::standard())
    }

    /// Create a link recognizing the ids in `schema`
    pub fn with_schema(transport: T, config: &Config, schema: Schema) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            transport,
            buffer: FrameBuffer::new(schema),
            read_chunk: config.read_chunk,
        })
    }

    /// Encode and write one record
    pub fn send(&mut self, record: &Record) -> Result<()> {
        let frame = encode_record(record)?;
        tracing::debug!(id = record.id(), len = frame.len(), "sending frame");
        self.transport.write(&frame)
    }

    /// Encode and write one pair record
    pub fn send_pair(&mut self, a: i32, b: i32) -> Result<()> {
        let frame = encode_pair(a, b);
        tracing::debug!(a, b, "sending pair");
        self.transport.write(&frame)
    }

    /// Perform one read and return every record it completed
    pub fn poll(&mut self) -> Result<Vec<DecodedRecord>> {
        let bytes = self.transport.read(self.read_chunk)?;
        if bytes.is_empty() {
            return Ok(Vec::new());
        }
        tracing::debug!(rx = %hex(&bytes), "raw rx");
        Ok(self.buffer.push(&bytes))
    }

    /// Poll and keep only pair records
    pub fn poll_pairs(&mut self) -> Result<Vec<Pair>> {
        Ok(self
            .poll()?
            .into_iter()
            .filter_map(|decoded| decoded.record.as_pair())
            .collect())
    }

    /// Bytes held back waiting for the rest of a frame
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Counters accumulated by the receive side
    pub fn stats(&self) -> ScanStats {
        self.buffer.stats()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_inner(self) -> T {
        self.transport
    }
}

/// Upper-case, space-separated hex
pub fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
