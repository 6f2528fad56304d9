use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::LineInput;

/// Outcome of feeding a key to a single-line input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum LineAction {
    Submit,
    Cancel,
    /// Buffer or cursor changed (or the key was swallowed)
    Edited,
}

/// Apply an editing key to `input`
pub(super) fn apply_line_key(input: &mut LineInput, key: KeyEvent) -> LineAction {
    match key.code {
        KeyCode::Enter => return LineAction::Submit,
        KeyCode::Esc => return LineAction::Cancel,
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.home(),
        KeyCode::End => input.end(),
        KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => input.home(),
        KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => input.end(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => input.clear(),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            input.insert_char(c)
        }
        _ => {}
    }
    LineAction::Edited
}

/// Terminals disagree on whether Shift+letter arrives as uppercase; make it
/// always uppercase.
pub(super) fn normalize_key(mut key: KeyEvent) -> KeyEvent {
    if let KeyCode::Char(c) = key.code
        && key.modifiers.contains(KeyModifiers::SHIFT)
        && c.is_ascii_lowercase()
    {
        key.code = KeyCode::Char(c.to_ascii_uppercase());
    }
    key
}
