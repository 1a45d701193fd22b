//! Read-only view of the rack's containers, taken for display.

use arrayvec::ArrayVec;

use crate::types::{Piece, QUEUE_CAPACITY, RESERVE_CAPACITY};

/// Ordered copies of both containers at a point in time.
///
/// The queue is listed front to back, the reserve top to base. Taking a
/// snapshot has no side effects; renderers consume it without touching the
/// rack itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RackSnapshot {
    pub queue: ArrayVec<Piece, QUEUE_CAPACITY>,
    pub reserve: ArrayVec<Piece, RESERVE_CAPACITY>,
}

impl RackSnapshot {
    pub fn queue_is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn reserve_is_empty(&self) -> bool {
        self.reserve.is_empty()
    }
}
