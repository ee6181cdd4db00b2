//! Payload schema table
//!
//! Maps a frame id to the payload length it requires and the function that
//! turns those bytes into a [`Record`]. The scanner consults this table and
//! never hard-codes ids, so new payload types only need a registration.

use std::fmt;

use crate::error::{Result, SyncFrameError};
use super::record::{Pair, Record};

/// Decodes an exactly-sized payload. `None` rejects the frame.
pub type DecodeFn = fn(&[u8]) -> Option<Record>;

/// One registered payload type
#[derive(Clone, Copy)]
pub struct SchemaEntry {
    /// Required payload length for this id
    pub len: u8,

    /// Payload decoder
    pub decode: DecodeFn,
}

impl fmt::Debug for SchemaEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaEntry").field("len", &self.len).finish()
    }
}

/// Id-indexed table of recognized payload types
#[derive(Clone)]
pub struct Schema {
    entries: [Option<SchemaEntry>; 256],
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.ids().map(|id| (id, self.expected_len(id))))
            .finish()
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::standard()
    }
}

impl Schema {
    /// A table with no recognized ids
    pub fn empty() -> Self {
        Self {
            entries: [None; 256],
        }
    }

    /// The protocol's built-in records: id 9 → [`Pair`]
    pub fn standard() -> Self {
        let mut schema = Self::empty();
        schema.entries[Pair::ID as usize] = Some(SchemaEntry {
            len: Pair::LEN as u8,
            decode: decode_pair,
        });
        schema
    }

    /// Register a payload type. Fails if `id` is already taken.
    ///
    /// `decode` must return a record carrying `id` ([`Record::Raw`] always
    /// does); a record with any other id, such as a [`Record::Pair`] under an
    /// id other than 9, is rejected at decode time.
    pub fn register(&mut self, id: u8, len: u8, decode: DecodeFn) -> Result<()> {
        let slot = &mut self.entries[id as usize];
        if slot.is_some() {
            return Err(SyncFrameError::Schema(format!(
                "id {} is already registered",
                id
            )));
        }
        *slot = Some(SchemaEntry { len, decode });
        Ok(())
    }

    /// Register an id whose payload is passed through as [`Record::Raw`]
    pub fn register_raw(&mut self, id: u8, len: u8) -> Result<()> {
        self.register(id, len, decode_raw)
    }

    /// Look up the entry for `id`
    pub fn get(&self, id: u8) -> Option<&SchemaEntry> {
        self.entries[id as usize].as_ref()
    }

    /// Required payload length for `id`, if recognized
    pub fn expected_len(&self, id: u8) -> Option<u8> {
        self.get(id).map(|entry| entry.len)
    }

    /// Decode `payload` under `id`, enforcing the registered length
    pub fn decode(&self, id: u8, payload: &[u8]) -> Option<Record> {
        let entry = self.get(id)?;
        if payload.len() != entry.len as usize {
            return None;
        }
        let record = match (entry.decode)(payload)? {
            Record::Raw { payload, .. } => Record::Raw { id, payload },
            other => other,
        };
        (record.id() == id).then_some(record)
    }

    /// Iterate over recognized ids
    pub fn ids(&self) -> impl Iterator<Item = u8> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.is_some())
            .map(|(id, _)| id as u8)
    }
}

fn decode_pair(payload: &[u8]) -> Option<Record> {
    Pair::from_payload(payload).map(Record::Pair)
}

// The real id is stamped on by `Schema::decode`.
fn decode_raw(payload: &[u8]) -> Option<Record> {
    Some(Record::Raw {
        id: 0,
        payload: payload.to_vec(),
    })
}
