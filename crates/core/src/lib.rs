//! Core piece-container logic - pure, deterministic, and testable
//!
//! This crate owns the two bounded containers and every rule that moves
//! pieces between them. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: a [`SequenceSource`] reproduces exact piece sequences
//! - **Testable**: every operation is a plain in-memory mutation
//! - **Portable**: usable from any frontend (terminal, headless, tests)
//!
//! # Module Structure
//!
//! - [`queue`]: fixed-capacity circular queue of upcoming pieces
//! - [`reserve`]: fixed-capacity LIFO holding area
//! - [`source`]: the [`PieceSource`] trait plus random and cycling sources
//! - [`rack`]: the [`PieceRack`] engine tying queue, reserve, and source together
//! - [`snapshot`]: ordered read-only copies of both containers for display
//!
//! # Container rules
//!
//! - The queue holds exactly 5 pieces after construction and after every
//!   successful play or reserve: removing the front always triggers one
//!   fresh generation.
//! - The reserve holds at most 3 pieces, grows only by explicit reserving,
//!   and shrinks only by using or swapping.
//! - Swaps are all-or-nothing in-place exchanges; they never generate.
//! - Failed operations change nothing and report a [`RackError`].
//!
//! # Example
//!
//! ```
//! use piece_rack_core::{PieceRack, SequenceSource};
//!
//! let mut rack = PieceRack::new(SequenceSource::cycling_all());
//! let played = rack.play().unwrap();
//! assert_eq!(played.id, 0);
//! assert_eq!(rack.queue_len(), 5);
//! ```

pub mod queue;
pub mod rack;
pub mod reserve;
pub mod snapshot;
pub mod source;

pub use piece_rack_types as types;

// Re-export commonly used types for convenience
pub use queue::PieceQueue;
pub use rack::PieceRack;
pub use reserve::ReserveStack;
pub use snapshot::RackSnapshot;
pub use source::{PieceSource, RandomSource, SequenceSource, SimpleRng};
