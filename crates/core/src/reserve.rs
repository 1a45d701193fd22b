//! Bounded reserve stack of held-back pieces.
//!
//! LIFO with a fixed capacity. Only the most recently reserved piece is
//! directly accessible; the stack never refills itself and is allowed to
//! stay non-full.

use arrayvec::ArrayVec;

use crate::types::{Piece, RackError, RESERVE_CAPACITY};

/// Bounded LIFO of reserved pieces.
#[derive(Debug, Clone, Default)]
pub struct ReserveStack {
    pieces: ArrayVec<Piece, RESERVE_CAPACITY>,
}

impl ReserveStack {
    /// Create an empty reserve.
    pub fn new() -> Self {
        Self {
            pieces: ArrayVec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.pieces.is_full()
    }

    /// Push a piece onto the top, refusing when the reserve is full.
    pub fn push(&mut self, piece: Piece) -> Result<(), RackError> {
        self.pieces
            .try_push(piece)
            .map_err(|_| RackError::NoCapacity)
    }

    /// Pop and return the top piece.
    pub fn pop(&mut self) -> Option<Piece> {
        self.pieces.pop()
    }

    pub fn top(&self) -> Option<&Piece> {
        self.pieces.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Piece> {
        self.pieces.last_mut()
    }

    /// Piece at a logical depth from the top (0 = top).
    pub fn get_from_top(&self, depth: usize) -> Option<&Piece> {
        let len = self.pieces.len();
        if depth >= len {
            return None;
        }
        self.pieces.get(len - 1 - depth)
    }

    /// Mutable access at a logical depth from the top, for in-place swaps.
    pub fn get_from_top_mut(&mut self, depth: usize) -> Option<&mut Piece> {
        let len = self.pieces.len();
        if depth >= len {
            return None;
        }
        self.pieces.get_mut(len - 1 - depth)
    }

    /// Iterate top to base.
    pub fn iter_top_down(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().rev()
    }
}
