//! Adventurer-mode runner: play, reserve, and use reserved pieces.

use anyhow::Result;

use piece_rack::app;
use piece_rack::types::MenuAction;

fn main() -> Result<()> {
    app::run(
        "Piece Rack - Adventurer",
        &[
            MenuAction::Play,
            MenuAction::Reserve,
            MenuAction::UseReserved,
        ],
    )
}
