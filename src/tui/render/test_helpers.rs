use chrono::{TimeZone, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::io::storage::{MemoryStore, Storage};
use crate::model::UiConfig;
use crate::ops::task_store::TaskStore;
use crate::tui::app::App;
use crate::tui::input::handle_key;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return it.
pub fn render_to_buffer<F>(w: u16, h: u16, f: F) -> Buffer
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();
    terminal.backend().buffer().clone()
}

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let buf = render_to_buffer(w, h, f);
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// An App over an in-memory store with a fixed clock, with `texts` added
/// in order (so the last one is shown first).
pub fn app_with_tasks(texts: &[&str]) -> App<MemoryStore> {
    let mut store = TaskStore::open_with_clock(
        Storage::new(MemoryStore::new()),
        Box::new(|| Utc.with_ymd_and_hms(2025, 5, 14, 9, 0, 0).unwrap()),
    );
    for text in texts {
        store.add_task(text);
    }
    App::new(store, &UiConfig::default())
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Feed each character of `text` through the key handler
pub fn type_text(app: &mut App<MemoryStore>, text: &str) {
    for c in text.chars() {
        handle_key(app, key(KeyCode::Char(c)));
    }
}

/// Texts of the tasks visible under the active filter
pub fn visible_texts(app: &mut App<MemoryStore>) -> Vec<String> {
    app.view
        .filtered(&app.store)
        .iter()
        .map(|t| t.text.clone())
        .collect()
}
