//! Frame encoder
//!
//! Builds transmit-ready frames. Writing them out is the transport's job.

use bytes::{BufMut, BytesMut};

use crate::error::{Result, SyncFrameError};
use super::checksum::frame_checksum;
use super::frame::{frame_len, MAX_PAYLOAD_LEN, SYNC_MARKER};
use super::record::{Pair, Record};

/// Encode a frame
///
/// Format: sync (4) + length (1) + id (1) + payload + checksum (1)
pub fn encode(id: u8, payload: &[u8]) -> Result<Vec<u8>> {
    let mut frame = BytesMut::with_capacity(frame_len(payload.len()));
    encode_into(id, payload, &mut frame)?;
    Ok(frame.to_vec())
}

/// Append a frame to `dst`. `dst` is untouched on error.
pub fn encode_into(id: u8, payload: &[u8], dst: &mut BytesMut) -> Result<()> {
    if payload.len() > MAX_PAYLOAD_LEN {
        return Err(SyncFrameError::PayloadTooLarge {
            len: payload.len(),
        });
    }
    put_frame(dst, payload.len() as u8, id, payload);
    Ok(())
}

/// Encode a record under its own id
pub fn encode_record(record: &Record) -> Result<Vec<u8>> {
    encode(record.id(), &record.payload())
}

/// Encode an id-9 pair record
pub fn encode_pair(a: i32, b: i32) -> Vec<u8> {
    let payload = Pair::new(a, b).to_payload();
    let mut frame = BytesMut::with_capacity(frame_len(Pair::LEN));
    put_frame(&mut frame, Pair::LEN as u8, Pair::ID, &payload);
    frame.to_vec()
}

// Caller guarantees `length == payload.len()`.
fn put_frame(dst: &mut BytesMut, length: u8, id: u8, payload: &[u8]) {
    dst.reserve(frame_len(payload.len()));
    dst.put_slice(&SYNC_MARKER);
    dst.put_u8(length);
    dst.put_u8(id);
    dst.put_slice(payload);
    dst.put_u8(frame_checksum(length, id, payload));
}
