//! Fixed-capacity circular queue of upcoming pieces.
//!
//! Array-backed ring buffer keyed by head index and count, with wraparound
//! index arithmetic modulo the capacity. No dynamic growth: an insertion
//! into a full queue is refused rather than silently dropping a piece.

use crate::types::{Piece, RackError, QUEUE_CAPACITY};

/// Bounded FIFO of upcoming pieces.
///
/// The front element is the next piece to be played; insertion happens only
/// at the back.
#[derive(Debug, Clone)]
pub struct PieceQueue {
    slots: [Option<Piece>; QUEUE_CAPACITY],
    head: usize,
    len: usize,
}

impl PieceQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            slots: [None; QUEUE_CAPACITY],
            head: 0,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == QUEUE_CAPACITY
    }

    /// Physical slot index for a logical offset from the front.
    fn slot(&self, offset: usize) -> usize {
        (self.head + offset) % QUEUE_CAPACITY
    }

    /// Append a piece at the back, refusing when the queue is full.
    pub fn push_back(&mut self, piece: Piece) -> Result<(), RackError> {
        if self.is_full() {
            return Err(RackError::NoCapacity);
        }
        let tail = self.slot(self.len);
        self.slots[tail] = Some(piece);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the front piece.
    pub fn pop_front(&mut self) -> Option<Piece> {
        if self.is_empty() {
            return None;
        }
        let piece = self.slots[self.head].take();
        self.head = (self.head + 1) % QUEUE_CAPACITY;
        self.len -= 1;
        piece
    }

    /// Piece at a logical offset from the front (0 = front).
    pub fn get(&self, offset: usize) -> Option<&Piece> {
        if offset >= self.len {
            return None;
        }
        self.slots[self.slot(offset)].as_ref()
    }

    /// Mutable access at a logical offset from the front, for in-place swaps.
    pub fn get_mut(&mut self, offset: usize) -> Option<&mut Piece> {
        if offset >= self.len {
            return None;
        }
        let idx = self.slot(offset);
        self.slots[idx].as_mut()
    }

    pub fn front(&self) -> Option<&Piece> {
        self.get(0)
    }

    pub fn front_mut(&mut self) -> Option<&mut Piece> {
        self.get_mut(0)
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> + '_ {
        (0..self.len).filter_map(move |offset| self.get(offset))
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new()
    }
}
