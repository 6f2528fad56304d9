use crossterm::event::KeyEvent;

use crate::io::storage::KeyValueStore;
use crate::model::task::normalize_text;
use crate::tui::app::{App, Mode};

use super::common::{LineAction, apply_line_key};

/// Keys while the add-task form has focus
pub(super) fn handle_add<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) {
    match apply_line_key(&mut app.form, key) {
        LineAction::Submit => {
            // Blank submissions do nothing; the form keeps focus either way
            if app.store.add_task(&app.form.text).is_some() {
                app.form.clear();
                app.cursor = 0;
                app.scroll_offset = 0;
            }
        }
        LineAction::Cancel => app.mode = Mode::Navigate,
        LineAction::Edited => {}
    }
}

/// Keys while a task row is being edited inline
pub(super) fn handle_edit<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) {
    let Some(editing) = app.editing.as_mut() else {
        app.mode = Mode::Navigate;
        return;
    };
    match apply_line_key(&mut editing.input, key) {
        LineAction::Submit => {
            // A blank edit is not applied; keep the editor open
            if normalize_text(&editing.input.text).is_none() {
                return;
            }
            let (id, text) = (editing.id, editing.input.text.clone());
            app.store.edit_task(id, &text);
            close_editor(app);
        }
        LineAction::Cancel => close_editor(app),
        LineAction::Edited => {}
    }
}

fn close_editor<S: KeyValueStore>(app: &mut App<S>) {
    app.editing = None;
    app.mode = Mode::Navigate;
    app.clamp_cursor();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::input::handle_key;
    use crate::tui::render::test_helpers::{app_with_tasks, key, type_text, visible_texts};
    use crossterm::event::KeyCode;

    #[test]
    fn submit_adds_trimmed_task_and_clears_form() {
        let mut app = app_with_tasks(&["A"]);
        app.mode = Mode::Add;
        type_text(&mut app, "  Buy milk ");
        handle_add(&mut app, key(KeyCode::Enter));

        assert_eq!(visible_texts(&mut app), vec!["Buy milk", "A"]);
        assert_eq!(app.form.text, "");
        assert_eq!(app.mode, Mode::Add);
    }

    #[test]
    fn blank_submit_is_ignored() {
        let mut app = app_with_tasks(&[]);
        app.mode = Mode::Add;
        type_text(&mut app, "   ");
        handle_add(&mut app, key(KeyCode::Enter));
        assert!(app.store.tasks().is_empty());
        assert_eq!(app.form.text, "   ");
    }

    #[test]
    fn esc_leaves_form_keeping_draft() {
        let mut app = app_with_tasks(&[]);
        app.mode = Mode::Add;
        type_text(&mut app, "draft");
        handle_add(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.form.text, "draft");
    }

    #[test]
    fn edit_saves_on_enter() {
        let mut app = app_with_tasks(&["A"]);
        handle_key(&mut app, key(KeyCode::Char('e')));
        handle_key(&mut app, key(KeyCode::Backspace));
        type_text(&mut app, " Alpha ");
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(visible_texts(&mut app), vec!["Alpha"]);
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.editing.is_none());
    }

    #[test]
    fn blank_edit_keeps_editor_open() {
        let mut app = app_with_tasks(&["A"]);
        handle_key(&mut app, key(KeyCode::Char('e')));
        handle_key(&mut app, key(KeyCode::Backspace));
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.mode, Mode::Edit);
        assert_eq!(visible_texts(&mut app), vec!["A"]);
    }

    #[test]
    fn esc_cancels_edit() {
        let mut app = app_with_tasks(&["A"]);
        handle_key(&mut app, key(KeyCode::Char('e')));
        type_text(&mut app, "xyz");
        handle_key(&mut app, key(KeyCode::Esc));

        assert_eq!(visible_texts(&mut app), vec!["A"]);
        assert_eq!(app.mode, Mode::Navigate);
    }

    #[test]
    fn editing_a_deleted_task_just_closes() {
        let mut app = app_with_tasks(&["A"]);
        handle_key(&mut app, key(KeyCode::Char('e')));
        let id = app.editing.as_ref().unwrap().id;
        app.store.delete_task(id);
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(app.store.tasks().is_empty());
        assert_eq!(app.mode, Mode::Navigate);
    }
}
