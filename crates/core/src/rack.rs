//! Piece rack - the container engine.
//!
//! Owns the upcoming-piece queue and the reserve stack, and implements every
//! operation that moves pieces between them. The swap operations reach into
//! both containers at once, which is why queue and reserve live behind one
//! engine instead of two independent values.
//!
//! Refill policy: the queue is pre-filled to capacity at construction and
//! refilled with one fresh piece after every successful `play` or
//! `reserve_next`, so its length stays at [`QUEUE_CAPACITY`] across those
//! calls. `use_reserved` and the swaps never call the source.
//!
//! Every operation either fully succeeds or reports a [`RackError`] with no
//! observable state change.

use std::mem;

use crate::queue::PieceQueue;
use crate::reserve::ReserveStack;
use crate::snapshot::RackSnapshot;
use crate::source::PieceSource;
use crate::types::{Piece, RackError, QUEUE_CAPACITY};

/// The piece-container engine: queue + reserve + source.
#[derive(Debug, Clone)]
pub struct PieceRack<S: PieceSource> {
    queue: PieceQueue,
    reserve: ReserveStack,
    source: S,
}

impl<S: PieceSource> PieceRack<S> {
    /// Create a rack and pre-fill the queue with exactly
    /// [`QUEUE_CAPACITY`] generated pieces.
    pub fn new(mut source: S) -> Self {
        let mut queue = PieceQueue::new();
        for _ in 0..QUEUE_CAPACITY {
            let _ = queue.push_back(source.generate());
        }
        Self {
            queue,
            reserve: ReserveStack::new(),
            source,
        }
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn reserve_len(&self) -> usize {
        self.reserve.len()
    }

    /// Remove and return the front queue piece, then refill the queue.
    pub fn play(&mut self) -> Result<Piece, RackError> {
        let piece = self.queue.pop_front().ok_or(RackError::Empty)?;
        self.refill_queue();
        Ok(piece)
    }

    /// Move the front queue piece onto the reserve top, refill the queue,
    /// and return the reserved piece.
    ///
    /// Checks the reserve first: a full reserve fails with `NoCapacity`
    /// before the queue is touched.
    pub fn reserve_next(&mut self) -> Result<Piece, RackError> {
        if self.reserve.is_full() {
            return Err(RackError::NoCapacity);
        }
        let piece = self.queue.pop_front().ok_or(RackError::Empty)?;
        // Cannot fail: fullness was checked above.
        let _ = self.reserve.push(piece);
        self.refill_queue();
        Ok(piece)
    }

    /// Pop and return the reserve top. The queue is not refilled: this
    /// operation only shrinks the reserve.
    pub fn use_reserved(&mut self) -> Result<Piece, RackError> {
        self.reserve.pop().ok_or(RackError::Empty)
    }

    /// Exchange the queue front with the reserve top, in place.
    ///
    /// Both containers keep their lengths; no piece is generated.
    pub fn swap_front(&mut self) -> Result<(), RackError> {
        match (self.queue.front_mut(), self.reserve.top_mut()) {
            (Some(front), Some(top)) => {
                mem::swap(front, top);
                Ok(())
            }
            _ => Err(RackError::Insufficient),
        }
    }

    /// Exchange `count` pieces pairwise: queue front+i with reserve top-i.
    ///
    /// All-or-nothing: unless both containers hold at least `count` pieces
    /// the swap is refused and nothing moves. Untouched pieces keep their
    /// positions and relative order.
    pub fn swap_bulk(&mut self, count: usize) -> Result<(), RackError> {
        if self.queue.len() < count || self.reserve.len() < count {
            return Err(RackError::Insufficient);
        }
        for i in 0..count {
            if let (Some(queued), Some(reserved)) =
                (self.queue.get_mut(i), self.reserve.get_from_top_mut(i))
            {
                mem::swap(queued, reserved);
            }
        }
        Ok(())
    }

    /// Ordered, side-effect-free copies of both containers.
    pub fn snapshot(&self) -> RackSnapshot {
        let mut snapshot = RackSnapshot::default();
        snapshot.queue.extend(self.queue.iter().copied());
        snapshot.reserve.extend(self.reserve.iter_top_down().copied());
        snapshot
    }

    /// One piece was just removed, so exactly one slot is free.
    fn refill_queue(&mut self) {
        let fresh = self.source.generate();
        let _ = self.queue.push_back(fresh);
    }

    /// Empty the queue without refilling, to reach states the public
    /// operations never produce.
    #[cfg(test)]
    fn drain_queue(&mut self) {
        while self.queue.pop_front().is_some() {}
    }
}
