//! Key mapping from terminal events to menu actions.

use crate::types::MenuAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to menu actions.
///
/// Every binary shares one mapping; binaries that offer fewer actions
/// simply ignore the ones outside their menu.
pub fn handle_key_event(key: KeyEvent) -> Option<MenuAction> {
    match key.code {
        KeyCode::Char('1') => Some(MenuAction::Play),
        KeyCode::Char('2') => Some(MenuAction::Reserve),
        KeyCode::Char('3') => Some(MenuAction::UseReserved),
        KeyCode::Char('4') => Some(MenuAction::SwapFront),
        KeyCode::Char('5') => Some(MenuAction::SwapBulk),
        KeyCode::Char('0') | KeyCode::Esc => Some(MenuAction::Quit),
        _ => None,
    }
}

/// Check if key should quit immediately, regardless of the menu.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_number_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('1'))),
            Some(MenuAction::Play)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('2'))),
            Some(MenuAction::Reserve)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('3'))),
            Some(MenuAction::UseReserved)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('4'))),
            Some(MenuAction::SwapFront)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('5'))),
            Some(MenuAction::SwapBulk)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('0'))),
            Some(MenuAction::Quit)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Esc)),
            Some(MenuAction::Quit)
        );
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('6'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Enter)), None);
    }
}
