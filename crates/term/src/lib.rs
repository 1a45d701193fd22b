//! Terminal output module.
//!
//! [`RackView`] turns a rack snapshot plus menu into styled lines with no
//! I/O, so rendering stays unit-testable. [`TerminalRenderer`] owns the
//! crossterm side: raw mode, alternate screen, and flushing the lines.

pub mod rack_view;
pub mod renderer;

pub use piece_rack_core as core;
pub use piece_rack_types as types;

pub use rack_view::{kind_color, line_text, Line, RackView, Span};
pub use renderer::TerminalRenderer;
