//! Key event translation.
//!
//! Maps crossterm key events to [`BrowserAction`]s, depending on which
//! area currently has focus: printable keys only edit the count input when
//! the form is focused, and Enter means "submit" there but "activate the
//! cursor row" inside a panel.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::actions::BrowserAction;
use crate::model::Focus;

/// Translate a key event into a browser action.
pub fn action_for_key(key: KeyEvent, focus: Focus) -> Option<BrowserAction> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(BrowserAction::Quit)
        }
        KeyCode::Esc => Some(BrowserAction::Quit),
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(BrowserAction::ToggleMenu)
        }
        KeyCode::Tab => Some(BrowserAction::FocusNext),
        KeyCode::BackTab => Some(BrowserAction::FocusPrev),
        KeyCode::Up => Some(BrowserAction::CursorUp),
        KeyCode::Down => Some(BrowserAction::CursorDown),
        KeyCode::Enter => match focus {
            Focus::CountInput => Some(BrowserAction::SubmitCount),
            _ => Some(BrowserAction::Activate),
        },
        KeyCode::Backspace if focus == Focus::CountInput => Some(BrowserAction::InputBackspace),
        KeyCode::Char(c)
            if focus == Focus::CountInput && !key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Some(BrowserAction::InputChar(c))
        }
        _ => None,
    }
}
