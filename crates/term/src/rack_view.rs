//! RackView: maps a `core::RackSnapshot` into styled terminal lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crossterm::style::Color;

use crate::core::RackSnapshot;
use crate::types::{MenuAction, Piece, PieceKind};

/// One styled fragment of a rendered line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub color: Option<Color>,
    pub bold: bool,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            bold: false,
        }
    }

    pub fn colored(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
            bold: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            bold: true,
        }
    }
}

/// A full terminal row as a sequence of spans.
pub type Line = Vec<Span>;

/// Collect the plain text of a line, dropping all styling.
pub fn line_text(line: &Line) -> String {
    line.iter().map(|span| span.text.as_str()).collect()
}

/// Terminal color for a piece kind.
pub fn kind_color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::I => Color::Cyan,
        PieceKind::O => Color::Yellow,
        PieceKind::T => Color::Magenta,
        PieceKind::L => Color::DarkYellow,
    }
}

/// Renders rack state, menu, and status into lines for a terminal screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct RackView;

impl RackView {
    /// Render one full screen.
    ///
    /// Allocation is fine here: this runs once per keypress, not per frame.
    pub fn render(
        &self,
        title: &str,
        snapshot: &RackSnapshot,
        actions: &[MenuAction],
        status: &str,
    ) -> Vec<Line> {
        let mut lines = Vec::new();

        lines.push(vec![Span::bold(format!("=== {title} ==="))]);
        lines.push(Vec::new());

        lines.push(container_line(
            "Queue (front -> back):  ",
            snapshot.queue.iter(),
        ));
        lines.push(container_line(
            "Reserve (top -> base):  ",
            snapshot.reserve.iter(),
        ));
        lines.push(Vec::new());

        for action in actions {
            lines.push(vec![Span::plain(format!(
                "  {} - {}",
                action.key(),
                action.label()
            ))]);
        }
        lines.push(Vec::new());

        if !status.is_empty() {
            lines.push(vec![Span::plain(format!("> {status}"))]);
        }

        lines
    }
}

fn container_line<'a>(label: &str, pieces: impl Iterator<Item = &'a Piece>) -> Line {
    let mut line = vec![Span::plain(label)];
    let mut any = false;
    for piece in pieces {
        if any {
            line.push(Span::plain(" "));
        }
        line.push(Span::colored(piece.to_string(), kind_color(piece.kind)));
        any = true;
    }
    if !any {
        line.push(Span::plain("[empty]"));
    }
    line
}
