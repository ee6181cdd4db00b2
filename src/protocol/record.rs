//! Record definitions
//!
//! Typed payloads carried inside frames.

/// Two signed 32-bit integers, little-endian on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pair {
    pub a: i32,
    pub b: i32,
}

impl Pair {
    /// Frame id for a pair record
    pub const ID: u8 = 9;

    /// Fixed payload size
    pub const LEN: usize = 8;

    pub fn new(a: i32, b: i32) -> Self {
        Self { a, b }
    }

    /// Pack as `a` (LE) followed by `b` (LE)
    pub fn to_payload(&self) -> [u8; Self::LEN] {
        let mut payload = [0u8; Self::LEN];
        payload[..4].copy_from_slice(&self.a.to_le_bytes());
        payload[4..].copy_from_slice(&self.b.to_le_bytes());
        payload
    }

    /// Unpack an exactly-8-byte payload
    pub fn from_payload(payload: &[u8]) -> Option<Self> {
        if payload.len() != Self::LEN {
            return None;
        }
        let a = i32::from_le_bytes(payload[..4].try_into().ok()?);
        let b = i32::from_le_bytes(payload[4..].try_into().ok()?);
        Some(Self { a, b })
    }
}

/// A decoded payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// Id 9
    Pair(Pair),

    /// Payload of an application-registered id, passed through untouched
    Raw { id: u8, payload: Vec<u8> },
}

impl Record {
    /// Frame id this record travels under
    pub fn id(&self) -> u8 {
        match self {
            Record::Pair(_) => Pair::ID,
            Record::Raw { id, .. } => *id,
        }
    }

    /// Payload bytes as they appear on the wire
    pub fn payload(&self) -> Vec<u8> {
        match self {
            Record::Pair(pair) => pair.to_payload().to_vec(),
            Record::Raw { payload, .. } => payload.clone(),
        }
    }

    pub fn as_pair(&self) -> Option<Pair> {
        match self {
            Record::Pair(pair) => Some(*pair),
            Record::Raw { .. } => None,
        }
    }
}

impl From<Pair> for Record {
    fn from(pair: Pair) -> Self {
        Record::Pair(pair)
    }
}

/// A record accepted by the scanner, with its position in the scanned buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedRecord {
    /// Offset of the frame's sync marker
    pub offset: usize,

    /// The decoded payload
    pub record: Record,
}
