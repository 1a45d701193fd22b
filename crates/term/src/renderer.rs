//! TerminalRenderer: flushes rendered lines to a real terminal.
//!
//! The drawing API is intentionally small: full-screen redraws of a short
//! menu screen, queued into a byte buffer and flushed in one write.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::rack_view::Line;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Redraw the whole screen from `lines`.
    pub fn draw(&mut self, lines: &[Line]) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(cursor::MoveTo(0, 0))?;

        for (row, line) in lines.iter().enumerate() {
            self.buf.queue(cursor::MoveTo(0, row as u16))?;
            for span in line {
                if span.bold {
                    self.buf.queue(SetAttribute(Attribute::Bold))?;
                }
                if let Some(color) = span.color {
                    self.buf.queue(SetForegroundColor(color))?;
                }
                self.buf.queue(Print(span.text.as_str()))?;
                self.buf.queue(ResetColor)?;
                if span.bold {
                    self.buf.queue(SetAttribute(Attribute::Reset))?;
                }
            }
        }

        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}
