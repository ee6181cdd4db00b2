//! Frame Buffer Tests
//!
//! Persistent accumulation across reads split at arbitrary points.

use syncframe::protocol::{encode, encode_pair, scan, FrameBuffer, Pair, Schema};

use crate::common::{concat, noise, sync_free_noise};

// =============================================================================
// Helper Functions
// =============================================================================

fn push_pairs(buffer: &mut FrameBuffer, data: &[u8]) -> Vec<(i32, i32)> {
    buffer
        .push(data)
        .into_iter()
        .filter_map(|decoded| decoded.record.as_pair())
        .map(|pair| (pair.a, pair.b))
        .collect()
}

// =============================================================================
// Complete Frames
// =============================================================================

#[test]
fn test_single_complete_frame() {
    let mut buffer = FrameBuffer::default();

    assert_eq!(push_pairs(&mut buffer, &encode_pair(100, 200)), vec![(100, 200)]);
    assert!(buffer.is_empty());
    assert_eq!(buffer.stats().frames_accepted, 1);
}

#[test]
fn test_multiple_frames_in_one_push() {
    let mut buffer = FrameBuffer::default();
    let data = concat(&[&encode_pair(1, 1), &encode_pair(2, 2), &encode_pair(3, 3)]);

    assert_eq!(push_pairs(&mut buffer, &data), vec![(1, 1), (2, 2), (3, 3)]);
    assert!(buffer.is_empty());
}

// =============================================================================
// Fragmented Frames
// =============================================================================

#[test]
fn test_frame_split_at_every_point() {
    let frame = encode_pair(-5, 5);

    for split in 1..frame.len() {
        let mut buffer = FrameBuffer::default();

        assert!(push_pairs(&mut buffer, &frame[..split]).is_empty(), "split {}", split);
        assert_eq!(buffer.len(), split, "split {}", split);
        assert_eq!(push_pairs(&mut buffer, &frame[split..]), vec![(-5, 5)], "split {}", split);
        assert!(buffer.is_empty(), "split {}", split);
    }
}

#[test]
fn test_byte_at_a_time() {
    let mut buffer = FrameBuffer::default();
    let frame = encode_pair(i32::MAX, i32::MIN);

    let mut received = Vec::new();
    for byte in &frame {
        received.extend(push_pairs(&mut buffer, &[*byte]));
    }

    assert_eq!(received, vec![(i32::MAX, i32::MIN)]);
}

#[test]
fn test_mixed_complete_and_partial() {
    let mut buffer = FrameBuffer::default();
    let second = encode_pair(2, 2);

    let data = concat(&[&encode_pair(1, 1), &second[..5]]);
    assert_eq!(push_pairs(&mut buffer, &data), vec![(1, 1)]);
    assert_eq!(buffer.pending(), &second[..5]);

    assert_eq!(push_pairs(&mut buffer, &second[5..]), vec![(2, 2)]);
}

#[test]
fn test_noisy_stream_in_small_chunks() {
    let mut stream = Vec::new();
    for i in 0..10 {
        stream.extend_from_slice(&sync_free_noise(100 + i, 13));
        stream.extend_from_slice(&encode_pair(i as i32, (i * 10) as i32));
    }
    stream.extend_from_slice(&sync_free_noise(999, 4));

    let mut buffer = FrameBuffer::default();
    let mut received = Vec::new();
    for chunk in stream.chunks(6) {
        received.extend(push_pairs(&mut buffer, chunk));
    }

    let expected: Vec<(i32, i32)> = (0..10).map(|i| (i, i * 10)).collect();
    assert_eq!(received, expected);
    assert!(buffer.is_empty());
    assert_eq!(buffer.stats().bytes_discarded, 10 * 13 + 4);
}

#[test]
fn test_chunked_delivery_matches_whole_buffer() {
    let mut stream = Vec::new();
    for i in 0..25 {
        stream.extend_from_slice(&noise(500 + i, (i as usize * 7) % 11));
        stream.extend_from_slice(&encode_pair(i as i32 * 3, -(i as i32)));
    }
    let expected: Vec<(i32, i32)> = (0..25).map(|i| (i * 3, -i)).collect();

    let whole: Vec<(i32, i32)> = scan(&stream, &Schema::standard())
        .records
        .into_iter()
        .filter_map(|decoded| decoded.record.as_pair())
        .map(|pair| (pair.a, pair.b))
        .collect();
    assert_eq!(whole, expected);

    for size in [1, 3, 7, 16] {
        let mut buffer = FrameBuffer::default();
        let mut received = Vec::new();
        for chunk in stream.chunks(size) {
            received.extend(push_pairs(&mut buffer, chunk));
        }
        assert_eq!(received, expected, "chunks of {}", size);
    }
}

// =============================================================================
// Retention Rules
// =============================================================================

#[test]
fn test_noise_is_dropped() {
    let mut buffer = FrameBuffer::default();
    buffer.push(&sync_free_noise(1, 64));
    assert!(buffer.is_empty());
}

#[test]
fn test_sync_split_across_pushes() {
    let mut buffer = FrameBuffer::default();
    let frame = encode_pair(8, 9);

    let head = concat(&[&sync_free_noise(2, 20), &frame[..2]]);
    assert!(push_pairs(&mut buffer, &head).is_empty());
    assert_eq!(buffer.pending(), &frame[..2]);

    assert_eq!(push_pairs(&mut buffer, &frame[2..]), vec![(8, 9)]);
}

#[test]
fn test_corrupted_frame_then_valid_frame_across_pushes() {
    let mut buffer = FrameBuffer::default();
    let mut bad = encode_pair(1, 1);
    bad[7] ^= 0x01;
    let good = encode_pair(2, 2);

    assert!(push_pairs(&mut buffer, &concat(&[&bad, &good[..3]])).is_empty());
    assert_eq!(push_pairs(&mut buffer, &good[3..]), vec![(2, 2)]);
    assert_eq!(buffer.stats().checksum_mismatches, 1);
}

#[test]
fn test_clear_drops_pending_bytes() {
    let mut buffer = FrameBuffer::default();
    let frame = encode_pair(1, 2);

    buffer.push(&frame[..10]);
    assert_eq!(buffer.len(), 10);

    buffer.clear();
    assert!(buffer.is_empty());
    assert!(push_pairs(&mut buffer, &frame[10..]).is_empty());
}

#[test]
fn test_custom_schema_records() {
    let mut schema = Schema::standard();
    schema.register_raw(0x30, 0).unwrap();
    let mut buffer = FrameBuffer::new(schema);

    let data = concat(&[&encode(0x30, &[]).unwrap(), &encode_pair(4, 4)]);
    let records = buffer.push(&data);

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].record.id(), 0x30);
    assert_eq!(records[1].record.as_pair(), Some(Pair::new(4, 4)));
}
