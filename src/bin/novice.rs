//! Novice-mode runner: play pieces from the queue, nothing else.

use anyhow::Result;

use piece_rack::app;
use piece_rack::types::MenuAction;

fn main() -> Result<()> {
    app::run("Piece Rack - Novice", &[MenuAction::Play])
}
