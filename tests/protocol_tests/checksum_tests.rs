//! Checksum Tests

use syncframe::protocol::{checksum, encode_pair, Checksum, SYNC_MARKER};

// =============================================================================
// One-shot Checksum
// =============================================================================

#[test]
fn test_checksum_empty_is_zero() {
    assert_eq!(checksum(&[]), 0);
}

#[test]
fn test_checksum_single_byte() {
    assert_eq!(checksum(&[0x5A]), 0x5A);
}

#[test]
fn test_checksum_sync_marker_cancels_out() {
    assert_eq!(checksum(&SYNC_MARKER), 0);
}

#[test]
fn test_checksum_order_independent() {
    let bytes = [0x01, 0x80, 0x7F, 0xAF, 0x33];
    let mut reversed = bytes;
    reversed.reverse();
    assert_eq!(checksum(&bytes), checksum(&reversed));
}

#[test]
fn test_checksum_of_pair_example() {
    // AF^AF^AF^AF ^ 08 ^ 09 ^ 64 ^ C8
    let frame = encode_pair(100, 200);
    assert_eq!(checksum(&frame[..14]), 0xAD);
    assert_eq!(frame[14], 0xAD);
}

#[test]
fn test_checksum_whole_frame_is_zero() {
    // Including the checksum byte itself cancels everything
    for (a, b) in [(0, 0), (-1, 1), (i32::MIN, i32::MAX)] {
        assert_eq!(checksum(&encode_pair(a, b)), 0);
    }
}

// =============================================================================
// Incremental Checksum
// =============================================================================

#[test]
fn test_incremental_matches_one_shot() {
    let bytes: Vec<u8> = (0..=255).collect();

    let mut running = Checksum::new();
    for chunk in bytes.chunks(7) {
        running.update(chunk);
    }

    assert_eq!(running.value(), checksum(&bytes));
}

#[test]
fn test_incremental_push() {
    let mut running = Checksum::new();
    running.push(0x0F).push(0xF0);
    assert_eq!(running.value(), 0xFF);
}
