//! Shared interactive session loop.
//!
//! Each binary picks a title and a menu (a subset of the five rack
//! actions); everything else - terminal setup, key handling, rendering,
//! and surfacing operation outcomes - is identical across the variants.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::core::{PieceRack, PieceSource, RandomSource};
use crate::input::{handle_key_event, should_quit};
use crate::term::{RackView, TerminalRenderer};
use crate::types::{MenuAction, RackError, BULK_SWAP_COUNT};

/// Run an interactive session until the user quits.
///
/// `actions` lists the rack operations this variant offers, in menu order;
/// `Quit` is appended automatically.
pub fn run(title: &str, actions: &[MenuAction]) -> Result<()> {
    let mut rack = PieceRack::new(RandomSource::new(time_seed()));

    let mut menu: Vec<MenuAction> = actions.to_vec();
    menu.push(MenuAction::Quit);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = session(&mut term, title, &menu, &mut rack);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn session<S: PieceSource>(
    term: &mut TerminalRenderer,
    title: &str,
    menu: &[MenuAction],
    rack: &mut PieceRack<S>,
) -> Result<()> {
    let view = RackView;
    let mut status = String::from("pick an option");

    loop {
        let lines = view.render(title, &rack.snapshot(), menu, &status);
        term.draw(&lines)?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if should_quit(key) {
                return Ok(());
            }
            let Some(action) = handle_key_event(key) else {
                continue;
            };
            if action == MenuAction::Quit {
                return Ok(());
            }
            if !menu.contains(&action) {
                status = String::from("that option is not in this menu");
                continue;
            }
            status = apply(rack, action);
        }
    }
}

/// Apply one action and describe the outcome for the status line.
fn apply<S: PieceSource>(rack: &mut PieceRack<S>, action: MenuAction) -> String {
    match action {
        MenuAction::Play => match rack.play() {
            Ok(piece) => format!("played {piece}"),
            Err(err) => warning(err),
        },
        MenuAction::Reserve => match rack.reserve_next() {
            Ok(piece) => format!("reserved {piece}"),
            Err(err) => warning(err),
        },
        MenuAction::UseReserved => match rack.use_reserved() {
            Ok(piece) => format!("used reserved {piece}"),
            Err(err) => warning(err),
        },
        MenuAction::SwapFront => match rack.swap_front() {
            Ok(()) => String::from("swapped queue front with reserve top"),
            Err(err) => warning(err),
        },
        MenuAction::SwapBulk => match rack.swap_bulk(BULK_SWAP_COUNT) {
            Ok(()) => format!("swapped the first {BULK_SWAP_COUNT} pieces of each container"),
            Err(err) => warning(err),
        },
        MenuAction::Quit => String::new(),
    }
}

fn warning(err: RackError) -> String {
    format!("cannot do that: {err}")
}

/// Seed the piece source from wall-clock time.
fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
