//! Master-mode runner (default binary).
//!
//! Offers the full menu: play, reserve, use the reserve, and both swap
//! operations.

use anyhow::Result;

use piece_rack::app;
use piece_rack::types::MenuAction;

fn main() -> Result<()> {
    app::run(
        "Piece Rack - Master",
        &[
            MenuAction::Play,
            MenuAction::Reserve,
            MenuAction::UseReserved,
            MenuAction::SwapFront,
            MenuAction::SwapBulk,
        ],
    )
}
