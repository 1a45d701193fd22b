//! Rack engine tests - end-to-end behavior through the public API

use piece_rack::core::{PieceRack, RandomSource, SequenceSource};
use piece_rack::types::{
    Piece, PieceKind, RackError, BULK_SWAP_COUNT, QUEUE_CAPACITY, RESERVE_CAPACITY,
};

fn deterministic_rack() -> PieceRack<SequenceSource> {
    PieceRack::new(SequenceSource::cycling_all())
}

// ============== Capacity invariants ==============

#[test]
fn test_queue_full_after_construction() {
    let rack = deterministic_rack();
    assert_eq!(rack.queue_len(), QUEUE_CAPACITY);
    assert_eq!(rack.reserve_len(), 0);
}

#[test]
fn test_queue_stays_full_across_plays_and_reserves() {
    let mut rack = deterministic_rack();

    for _ in 0..20 {
        rack.play().unwrap();
        assert_eq!(rack.queue_len(), QUEUE_CAPACITY);
    }

    rack.reserve_next().unwrap();
    assert_eq!(rack.queue_len(), QUEUE_CAPACITY);
    assert_eq!(rack.reserve_len(), 1);
}

#[test]
fn test_reserve_stays_within_bounds() {
    let mut rack = deterministic_rack();

    for expected_len in 1..=RESERVE_CAPACITY {
        rack.reserve_next().unwrap();
        assert_eq!(rack.reserve_len(), expected_len);
    }
    assert_eq!(rack.reserve_next(), Err(RackError::NoCapacity));
    assert_eq!(rack.reserve_len(), RESERVE_CAPACITY);

    rack.swap_front().unwrap();
    rack.swap_bulk(BULK_SWAP_COUNT).unwrap();
    assert_eq!(rack.reserve_len(), RESERVE_CAPACITY);

    rack.use_reserved().unwrap();
    assert_eq!(rack.reserve_len(), RESERVE_CAPACITY - 1);
}

#[test]
fn test_ids_are_unique_and_monotonic() {
    let mut rack = PieceRack::new(RandomSource::new(777));
    let mut seen = Vec::new();

    for _ in 0..30 {
        let piece = rack.play().unwrap();
        assert!(!seen.contains(&piece.id));
        if let Some(&last) = seen.last() {
            assert!(piece.id > last);
        }
        seen.push(piece.id);
    }
}

// ============== Scenario A: construction and play ==============

#[test]
fn test_scenario_initial_queue_and_first_play() {
    let mut rack = deterministic_rack();

    let snapshot = rack.snapshot();
    let expected = [
        Piece::new(PieceKind::I, 0),
        Piece::new(PieceKind::O, 1),
        Piece::new(PieceKind::T, 2),
        Piece::new(PieceKind::L, 3),
        Piece::new(PieceKind::I, 4),
    ];
    assert_eq!(snapshot.queue.as_slice(), &expected);

    let played = rack.play().unwrap();
    assert_eq!(played, Piece::new(PieceKind::I, 0));

    let snapshot = rack.snapshot();
    assert_eq!(snapshot.queue.len(), QUEUE_CAPACITY);
    assert_eq!(snapshot.queue.as_slice()[..4], expected[1..]);
    // The refill piece continues the cycle with the next id.
    assert_eq!(snapshot.queue[4], Piece::new(PieceKind::O, 5));
}

// ============== Scenario B: reserving to capacity ==============

#[test]
fn test_scenario_reserve_until_full() {
    let mut rack = deterministic_rack();
    rack.play().unwrap();

    let first = rack.reserve_next().unwrap();
    let second = rack.reserve_next().unwrap();
    let third = rack.reserve_next().unwrap();

    // Bottom of the reserve is the first piece sent there.
    let snapshot = rack.snapshot();
    assert_eq!(snapshot.reserve.as_slice(), &[third, second, first]);
    assert_eq!(first, Piece::new(PieceKind::O, 1));

    // A fourth reserve must fail and leave the queue untouched.
    let queue_before = rack.snapshot().queue;
    assert_eq!(rack.reserve_next(), Err(RackError::NoCapacity));
    assert_eq!(rack.snapshot().queue, queue_before);
    assert_eq!(rack.reserve_len(), RESERVE_CAPACITY);
}

// ============== Scenario C: refused bulk swap ==============

#[test]
fn test_scenario_bulk_swap_refused_leaves_state() {
    let mut rack = deterministic_rack();
    rack.reserve_next().unwrap();
    let before = rack.snapshot();
    assert_eq!(before.reserve.len(), 1);

    assert_eq!(rack.swap_bulk(BULK_SWAP_COUNT), Err(RackError::Insufficient));
    assert_eq!(rack.snapshot(), before);
}

// ============== Swap correctness ==============

#[test]
fn test_swap_front_round_trip() {
    let mut rack = deterministic_rack();
    rack.reserve_next().unwrap();
    let before = rack.snapshot();

    rack.swap_front().unwrap();
    let mid = rack.snapshot();
    assert_eq!(mid.queue[0], before.reserve[0]);
    assert_eq!(mid.reserve[0], before.queue[0]);

    // Swapping back restores the original arrangement.
    rack.swap_front().unwrap();
    assert_eq!(rack.snapshot(), before);
}

#[test]
fn test_bulk_swap_pairwise_exchange() {
    let mut rack = deterministic_rack();
    for _ in 0..BULK_SWAP_COUNT {
        rack.reserve_next().unwrap();
    }
    let before = rack.snapshot();

    rack.swap_bulk(BULK_SWAP_COUNT).unwrap();
    let after = rack.snapshot();

    for i in 0..BULK_SWAP_COUNT {
        assert_eq!(after.queue[i], before.reserve[i]);
        assert_eq!(after.reserve[i], before.queue[i]);
    }
    assert_eq!(&after.queue[BULK_SWAP_COUNT..], &before.queue[BULK_SWAP_COUNT..]);
}

// ============== Failure idempotence ==============

#[test]
fn test_use_reserved_failure_repeats_cleanly() {
    let mut rack = deterministic_rack();
    let before = rack.snapshot();

    for _ in 0..5 {
        assert_eq!(rack.use_reserved(), Err(RackError::Empty));
        assert_eq!(rack.snapshot(), before);
    }
}

#[test]
fn test_swap_failures_repeat_cleanly() {
    let mut rack = deterministic_rack();
    let before = rack.snapshot();

    for _ in 0..5 {
        assert_eq!(rack.swap_front(), Err(RackError::Insufficient));
        assert_eq!(rack.swap_bulk(BULK_SWAP_COUNT), Err(RackError::Insufficient));
        assert_eq!(rack.snapshot(), before);
    }
}

// ============== Source substitution ==============

#[test]
fn test_custom_kind_sequence_and_starting_id() {
    let mut rack = PieceRack::new(SequenceSource::new(
        vec![PieceKind::T, PieceKind::T, PieceKind::L],
        100,
    ));

    let snapshot = rack.snapshot();
    assert_eq!(snapshot.queue[0], Piece::new(PieceKind::T, 100));
    assert_eq!(snapshot.queue[2], Piece::new(PieceKind::L, 102));
    assert_eq!(snapshot.queue[4], Piece::new(PieceKind::T, 104));

    assert_eq!(rack.play().unwrap().id, 100);
}

#[test]
fn test_random_source_same_seed_same_rack() {
    let rack_a = PieceRack::new(RandomSource::new(2024));
    let rack_b = PieceRack::new(RandomSource::new(2024));
    assert_eq!(rack_a.snapshot(), rack_b.snapshot());
}
