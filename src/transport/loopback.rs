//! In-memory transport pair

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::error::{Result, SyncFrameError};
use super::Transport;

type Queue = Arc<Mutex<VecDeque<u8>>>;

/// One end of an in-memory link
///
/// Bytes written on one end are read from the other. Reads can be capped to
/// simulate a link that delivers data in small chunks.
pub struct LoopbackTransport {
    rx: Queue,
    tx: Queue,
    chunk_limit: Option<usize>,
}

impl LoopbackTransport {
    /// Create two connected ends
    pub fn pair() -> (Self, Self) {
        let a_to_b: Queue = Arc::default();
        let b_to_a: Queue = Arc::default();
        let a = Self {
            rx: Arc::clone(&b_to_a),
            tx: Arc::clone(&a_to_b),
            chunk_limit: None,
        };
        let b = Self {
            rx: a_to_b,
            tx: b_to_a,
            chunk_limit: None,
        };
        (a, b)
    }

    /// Cap every read at `limit` bytes
    pub fn with_chunk_limit(mut self, limit: usize) -> Self {
        self.chunk_limit = Some(limit);
        self
    }

    /// Bytes waiting to be read on this end
    pub fn available(&self) -> Result<usize> {
        Ok(lock(&self.rx)?.len())
    }
}

fn lock(queue: &Queue) -> Result<std::sync::MutexGuard<'_, VecDeque<u8>>> {
    queue
        .lock()
        .map_err(|e| SyncFrameError::LockPoisoned(e.to_string()))
}

impl Transport for LoopbackTransport {
    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        lock(&self.tx)?.extend(bytes.iter().copied());
        Ok(())
    }

    fn read(&mut self, max_bytes: usize) -> Result<Vec<u8>> {
        let mut rx = lock(&self.rx)?;
        let limit = self.chunk_limit.map_or(max_bytes, |c| c.min(max_bytes));
        let n = limit.min(rx.len());
        Ok(rx.drain(..n).collect())
    }
}
