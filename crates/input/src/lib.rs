//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::MenuAction`]. The
//! mapping is shared by every binary; menu filtering happens in the app
//! loop, not here.

pub mod map;

pub use piece_rack_types as types;

pub use map::{handle_key_event, should_quit};
