//! Piece rack (workspace facade crate).
//!
//! This package keeps a stable `piece_rack::{core,term,input,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.
//! The shared interactive loop used by the three binaries lives in [`app`].

pub mod app;

pub use piece_rack_core as core;
pub use piece_rack_input as input;
pub use piece_rack_term as term;
pub use piece_rack_types as types;
