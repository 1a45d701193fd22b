//! Shared types module - data structures and constants for the piece rack
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, key mapping).
//!
//! # Container capacities
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `QUEUE_CAPACITY` | 5 | Upcoming-piece queue, always kept full |
//! | `RESERVE_CAPACITY` | 3 | Reserve stack, filled only on demand |
//! | `BULK_SWAP_COUNT` | 3 | Pieces exchanged by a bulk swap |
//!
//! # Examples
//!
//! ```
//! use piece_rack_types::{Piece, PieceKind, QUEUE_CAPACITY};
//!
//! let piece = Piece::new(PieceKind::T, 0);
//! assert_eq!(piece.to_string(), "[T 0]");
//! assert_eq!(QUEUE_CAPACITY, 5);
//! ```

use std::error::Error;
use std::fmt;

/// Capacity of the upcoming-piece queue (5 slots)
pub const QUEUE_CAPACITY: usize = 5;

/// Capacity of the reserve stack (3 slots)
pub const RESERVE_CAPACITY: usize = 3;

/// Number of piece pairs exchanged by a bulk swap (3)
pub const BULK_SWAP_COUNT: usize = 3;

/// Piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
}

impl PieceKind {
    /// All kinds, in the order a cycling source walks through them.
    pub const ALL: [PieceKind; 4] = [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L];

    /// Parse piece kind from a character (case-insensitive)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'I' => Some(PieceKind::I),
            'O' => Some(PieceKind::O),
            'T' => Some(PieceKind::T),
            'L' => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Letter used when displaying the piece
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A single piece: a kind plus a unique, monotonically increasing id.
///
/// Pieces are immutable once created and move between containers by value.
/// Ids are assigned by the source at generation time and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub id: u32,
}

impl Piece {
    pub fn new(kind: PieceKind, id: u32) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind, self.id)
    }
}

/// Failure kinds reported by rack operations.
///
/// Every failure is non-fatal and leaves the rack unchanged; the driving
/// loop decides how to surface it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RackError {
    /// Removal attempted from a container with zero elements.
    Empty,
    /// Insertion attempted into a container already at capacity.
    NoCapacity,
    /// Swap attempted without the minimum element count on both sides.
    Insufficient,
}

impl fmt::Display for RackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RackError::Empty => write!(f, "container is empty"),
            RackError::NoCapacity => write!(f, "container is full"),
            RackError::Insufficient => write!(f, "not enough pieces to swap"),
        }
    }
}

impl Error for RackError {}

/// Menu actions offered by the interactive binaries.
///
/// Each binary enables a subset of these; the key mapping itself is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Play,
    Reserve,
    UseReserved,
    SwapFront,
    SwapBulk,
    Quit,
}

impl MenuAction {
    /// Number key bound to the action in every menu
    pub fn key(&self) -> char {
        match self {
            MenuAction::Play => '1',
            MenuAction::Reserve => '2',
            MenuAction::UseReserved => '3',
            MenuAction::SwapFront => '4',
            MenuAction::SwapBulk => '5',
            MenuAction::Quit => '0',
        }
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::Play => "Play the front piece",
            MenuAction::Reserve => "Reserve the front piece",
            MenuAction::UseReserved => "Use the reserved piece",
            MenuAction::SwapFront => "Swap queue front with reserve top",
            MenuAction::SwapBulk => "Swap the first 3 of each container",
            MenuAction::Quit => "Quit",
        }
    }
}
