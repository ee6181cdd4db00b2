//! XOR checksum
//!
//! A single verification byte: the running XOR of the sync marker, length,
//! id and payload bytes, in that order. Not cryptographic.

/// XOR every byte of `bytes` together. The empty sequence yields `0`.
pub fn checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0, |acc, b| acc ^ b)
}

/// Incremental checksum for callers that feed frame fields piecewise
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Checksum {
    value: u8,
}

impl Checksum {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold more bytes into the running value
    pub fn update(&mut self, bytes: &[u8]) -> &mut Self {
        self.value ^= checksum(bytes);
        self
    }

    /// Fold a single byte into the running value
    pub fn push(&mut self, byte: u8) -> &mut Self {
        self.value ^= byte;
        self
    }

    pub fn value(&self) -> u8 {
        self.value
    }
}

/// Checksum over a frame's covered fields: sync, length, id, payload
pub(crate) fn frame_checksum(length: u8, id: u8, payload: &[u8]) -> u8 {
    Checksum::new()
        .update(&super::SYNC_MARKER)
        .push(length)
        .push(id)
        .update(payload)
        .value()
}
