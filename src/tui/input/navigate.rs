use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use crate::io::storage::KeyValueStore;
use crate::model::Filter;
use crate::tui::app::{App, EditState, LineInput, Mode};

pub(super) fn handle_navigate<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q')) => app.should_quit = true,

        // Movement
        (_, KeyCode::Char('j') | KeyCode::Down) => move_cursor(app, 1),
        (_, KeyCode::Char('k') | KeyCode::Up) => move_cursor(app, -1),
        (_, KeyCode::Char('g') | KeyCode::Home) => app.cursor = 0,
        (_, KeyCode::Char('G') | KeyCode::End) => {
            app.cursor = usize::MAX;
            app.clamp_cursor();
        }

        // Task operations
        (_, KeyCode::Char(' ') | KeyCode::Char('x') | KeyCode::Enter) => {
            if let Some(id) = app.selected_id() {
                app.store.toggle_task(id);
                app.clamp_cursor();
            }
        }
        (_, KeyCode::Char('d') | KeyCode::Delete) => {
            if let Some(id) = app.selected_id() {
                app.store.delete_task(id);
                app.clamp_cursor();
            }
        }
        (_, KeyCode::Char('e')) => begin_edit(app),
        (_, KeyCode::Char('a') | KeyCode::Char('i')) => app.mode = Mode::Add,

        // Filters and theme
        (_, KeyCode::Char('f') | KeyCode::Tab) => app.cycle_filter(),
        (_, KeyCode::Char('1')) => app.set_filter(Filter::All),
        (_, KeyCode::Char('2')) => app.set_filter(Filter::Pending),
        (_, KeyCode::Char('3')) => app.set_filter(Filter::Completed),
        (_, KeyCode::Char('t')) => {
            app.store.toggle_theme();
        }
        _ => {}
    }
}

fn move_cursor<S: KeyValueStore>(app: &mut App<S>, delta: isize) {
    app.cursor = app.cursor.saturating_add_signed(delta);
    app.clamp_cursor();
}

/// Open the inline editor on the selected task, prefilled with its text
fn begin_edit<S: KeyValueStore>(app: &mut App<S>) {
    let Some(id) = app.selected_id() else {
        return;
    };
    let Some(task) = app.store.task(id) else {
        return;
    };
    debug!(%id, "editing task");
    app.editing = Some(EditState {
        id,
        input: LineInput::with_text(&task.text),
    });
    app.mode = Mode::Edit;
}
