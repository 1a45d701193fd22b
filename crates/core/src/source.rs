//! Piece sources - where fresh pieces come from.
//!
//! The rack asks a [`PieceSource`] for a piece exactly when a queue slot must
//! be refilled. Sources carry their own id counter so every generated piece
//! gets a unique, monotonically increasing id.
//!
//! Also provides a simple LCG for self-contained randomness.

use crate::types::{Piece, PieceKind};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Issues freshly identified pieces on demand.
///
/// Generation never fails; the only side effect is advancing the internal
/// id counter. The rack holds a source by value (dependency injection), so
/// tests can substitute a deterministic implementation.
pub trait PieceSource {
    fn generate(&mut self) -> Piece;
}

/// Random source: uniform kind selection via [`SimpleRng`].
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: SimpleRng,
    next_id: u32,
}

impl RandomSource {
    /// Create a new source with the given RNG seed, ids starting at 0.
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            next_id: 0,
        }
    }
}

impl PieceSource for RandomSource {
    fn generate(&mut self) -> Piece {
        let kind = PieceKind::ALL[self.rng.next_range(PieceKind::ALL.len() as u32) as usize];
        let id = self.next_id;
        self.next_id += 1;
        Piece::new(kind, id)
    }
}

/// Deterministic source cycling through a fixed kind sequence.
///
/// Intended for tests and demos where the exact pieces matter.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    kinds: Vec<PieceKind>,
    index: usize,
    next_id: u32,
}

impl SequenceSource {
    /// Cycle through `kinds` forever, ids starting at `first_id`.
    pub fn new(kinds: Vec<PieceKind>, first_id: u32) -> Self {
        debug_assert!(!kinds.is_empty());
        Self {
            kinds,
            index: 0,
            next_id: first_id,
        }
    }

    /// Cycle through every kind in declaration order, ids starting at 0.
    pub fn cycling_all() -> Self {
        Self::new(PieceKind::ALL.to_vec(), 0)
    }
}

impl PieceSource for SequenceSource {
    fn generate(&mut self) -> Piece {
        let kind = self.kinds[self.index];
        self.index = (self.index + 1) % self.kinds.len();
        let id = self.next_id;
        self.next_id += 1;
        Piece::new(kind, id)
    }
}
