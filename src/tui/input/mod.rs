mod common;
mod edit;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::io::storage::KeyValueStore;

use super::app::{App, Mode};

use common::normalize_key;
use edit::{handle_add, handle_edit};
use navigate::handle_navigate;

/// Handle a key event in the current mode
pub fn handle_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Ctrl-C quits from every mode
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    let key = normalize_key(key);
    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Add => handle_add(app, key),
        Mode::Edit => handle_edit(app, key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::{app_with_tasks, key, type_text};

    fn ctrl_c() -> KeyEvent {
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
    }

    #[test]
    fn ctrl_c_quits_while_adding() {
        let mut app = app_with_tasks(&[]);
        handle_key(&mut app, key(KeyCode::Char('a')));
        type_text(&mut app, "draft");
        handle_key(&mut app, ctrl_c());
        assert!(app.should_quit);
        assert_eq!(app.form.text, "draft");
        assert!(app.store.tasks().is_empty());
    }

    #[test]
    fn ctrl_c_quits_while_editing() {
        let mut app = app_with_tasks(&["A"]);
        handle_key(&mut app, key(KeyCode::Char('e')));
        assert_eq!(app.mode, Mode::Edit);
        handle_key(&mut app, ctrl_c());
        assert!(app.should_quit);
        assert_eq!(app.store.tasks()[0].text, "A");
    }

    #[test]
    fn ctrl_c_quits_from_navigate() {
        let mut app = app_with_tasks(&[]);
        handle_key(&mut app, ctrl_c());
        assert!(app.should_quit);
    }
}
