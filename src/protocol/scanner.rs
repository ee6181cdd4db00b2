//! Frame scanner
//!
//! Recovers well-formed frames from an arbitrary byte buffer that may hold
//! noise, partial frames, back-to-back frames or corrupted bytes.
//!
//! ## Algorithm
//! 1. Every offset whose next four bytes equal the sync marker is a candidate,
//!    including offsets inside previously rejected candidates.
//! 2. A candidate without room for its full frame is *incomplete*. Scanning
//!    continues past it; if a later candidate is accepted the incomplete one
//!    is superseded, otherwise scanning ends at the earliest incomplete
//!    candidate and its bytes stay unconsumed.
//! 3. A complete candidate is accepted only if the checksum matches, the id is
//!    in the [`Schema`] and the length equals the id's registered length.
//!    Scanning then resumes after the frame.
//! 4. Any other candidate is skipped by advancing exactly one byte.

use std::iter::FusedIterator;

use super::checksum::frame_checksum;
use super::frame::{frame_len, HEADER_SIZE, ID_OFFSET, LENGTH_OFFSET, SYNC_LEN, SYNC_MARKER};
use super::record::{DecodedRecord, Record};
use super::schema::Schema;

/// Why a complete candidate was skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Transmitted checksum differs from the computed one
    ChecksumMismatch { expected: u8, actual: u8 },

    /// Checksum fine, but the id is unknown or the length is wrong for it
    UnrecognizedFrame { id: u8, length: u8 },
}

/// Counters describing what a scan saw
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub frames_accepted: u64,
    pub checksum_mismatches: u64,
    pub unrecognized_frames: u64,
    /// Consumed bytes that did not belong to an accepted frame
    pub bytes_discarded: u64,
}

impl ScanStats {
    /// Add another scan's counters to these
    pub fn merge(&mut self, other: &ScanStats) {
        self.frames_accepted += other.frames_accepted;
        self.checksum_mismatches += other.checksum_mismatches;
        self.unrecognized_frames += other.unrecognized_frames;
        self.bytes_discarded += other.bytes_discarded;
    }

    /// Total rejected candidates
    pub fn rejected(&self) -> u64 {
        self.checksum_mismatches + self.unrecognized_frames
    }
}

/// Result of an eager [`scan`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    /// Accepted records, in buffer order
    pub records: Vec<DecodedRecord>,

    /// Length of the prefix that can be dropped; `buffer[consumed..]` must be
    /// kept and rescanned once more bytes arrive
    pub consumed: usize,

    /// A candidate at `consumed` is waiting for more bytes
    pub pending: bool,

    pub stats: ScanStats,
}

/// Outcome of evaluating one candidate
enum Candidate {
    Accepted { record: Record, end: usize },
    Rejected(Rejection),
    Incomplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Running,
    /// Ended with an incomplete candidate at this offset
    Halted(usize),
    /// Ran out of candidates
    Exhausted,
}

/// Lazy scanner over a borrowed buffer
///
/// Yields accepted records left to right. Once it returns `None`,
/// [`Scanner::consumed`] says how much of the buffer may be dropped.
pub struct Scanner<'a> {
    buf: &'a [u8],
    schema: &'a Schema,
    pos: usize,
    state: State,
    accepted_bytes: usize,
    stats: ScanStats,
    /// Earliest incomplete candidate not yet superseded by an accepted frame
    deferred: Option<usize>,
    /// Rejections seen after `deferred`; final only once a later frame is accepted
    deferred_stats: ScanStats,
}

impl<'a> Scanner<'a> {
    pub fn new(buf: &'a [u8], schema: &'a Schema) -> Self {
        Self {
            buf,
            schema,
            pos: 0,
            state: State::Running,
            accepted_bytes: 0,
            stats: ScanStats::default(),
            deferred: None,
            deferred_stats: ScanStats::default(),
        }
    }

    /// Bytes at the front of the buffer that are fully processed
    ///
    /// While the scanner is still running this is the end of the last
    /// accepted frame. After exhaustion it also covers trailing noise, except
    /// for a tail that could be the beginning of a sync marker.
    pub fn consumed(&self) -> usize {
        match self.state {
            State::Running => self.pos,
            State::Halted(offset) => offset,
            State::Exhausted => sync_prefix_start(self.buf, self.pos),
        }
    }

    /// Whether scanning ended at an incomplete candidate
    pub fn is_pending(&self) -> bool {
        matches!(self.state, State::Halted(_))
    }

    /// Counters so far; `bytes_discarded` is filled in once scanning ends
    pub fn stats(&self) -> ScanStats {
        let mut stats = self.stats;
        if self.state != State::Running {
            stats.bytes_discarded = (self.consumed() - self.accepted_bytes) as u64;
        }
        stats
    }

    fn evaluate(&self, offset: usize) -> Candidate {
        let buf = self.buf;
        if buf.len() < offset + HEADER_SIZE {
            return Candidate::Incomplete;
        }

        let length = buf[offset + LENGTH_OFFSET];
        let id = buf[offset + ID_OFFSET];
        let end = offset + frame_len(length as usize);
        // Inclusive: a frame whose checksum is the last buffered byte is complete
        if end > buf.len() {
            return Candidate::Incomplete;
        }

        let payload = &buf[offset + HEADER_SIZE..end - 1];
        let actual = buf[end - 1];
        let expected = frame_checksum(length, id, payload);
        if expected != actual {
            return Candidate::Rejected(Rejection::ChecksumMismatch { expected, actual });
        }

        if self.schema.expected_len(id) != Some(length) {
            return Candidate::Rejected(Rejection::UnrecognizedFrame { id, length });
        }

        match self.schema.decode(id, payload) {
            Some(record) => Candidate::Accepted { record, end },
            None => Candidate::Rejected(Rejection::UnrecognizedFrame { id, length }),
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = DecodedRecord;

    fn next(&mut self) -> Option<DecodedRecord> {
        if self.state != State::Running {
            return None;
        }

        while self.pos + SYNC_LEN <= self.buf.len() {
            let offset = self.pos;
            if self.buf[offset..offset + SYNC_LEN] != SYNC_MARKER {
                self.pos += 1;
                continue;
            }

            match self.evaluate(offset) {
                Candidate::Accepted { record, end } => {
                    if let Some(superseded) = self.deferred.take() {
                        tracing::trace!(superseded, offset, "incomplete candidate superseded");
                        self.stats.merge(&std::mem::take(&mut self.deferred_stats));
                    }
                    tracing::trace!(offset, id = record.id(), "frame accepted");
                    self.stats.frames_accepted += 1;
                    self.accepted_bytes += end - offset;
                    self.pos = end;
                    return Some(DecodedRecord { offset, record });
                }
                Candidate::Rejected(rejection) => {
                    tracing::trace!(offset, ?rejection, "candidate rejected");
                    let stats = if self.deferred.is_some() {
                        &mut self.deferred_stats
                    } else {
                        &mut self.stats
                    };
                    match rejection {
                        Rejection::ChecksumMismatch { .. } => stats.checksum_mismatches += 1,
                        Rejection::UnrecognizedFrame { .. } => stats.unrecognized_frames += 1,
                    }
                    self.pos = offset + 1;
                }
                Candidate::Incomplete => {
                    tracing::trace!(offset, buffered = self.buf.len() - offset, "frame incomplete");
                    self.deferred.get_or_insert(offset);
                    self.pos = offset + 1;
                }
            }
        }

        // Rejections after a still-pending candidate are seen again on rescan
        self.deferred_stats = ScanStats::default();
        self.state = match self.deferred {
            Some(offset) => State::Halted(offset),
            None => State::Exhausted,
        };
        None
    }
}

impl FusedIterator for Scanner<'_> {}

/// Scan `buffer` eagerly
pub fn scan(buffer: &[u8], schema: &Schema) -> ScanReport {
    let mut scanner = Scanner::new(buffer, schema);
    let records: Vec<DecodedRecord> = scanner.by_ref().collect();

    ScanReport {
        records,
        consumed: scanner.consumed(),
        pending: scanner.is_pending(),
        stats: scanner.stats(),
    }
}

/// Start of the longest tail at or after `from` that is a proper prefix of
/// the sync marker, or `buf.len()` if there is none.
fn sync_prefix_start(buf: &[u8], from: usize) -> usize {
    let from = from.min(buf.len());
    let earliest = from.max(buf.len().saturating_sub(SYNC_LEN - 1));
    (earliest..buf.len())
        .find(|&start| SYNC_MARKER.starts_with(&buf[start..]))
        .unwrap_or(buf.len())
}
