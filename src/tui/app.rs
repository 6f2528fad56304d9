use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::io::storage::KeyValueStore;
use crate::model::{Filter, TaskId, UiConfig};
use crate::ops::task_store::TaskStore;
use crate::ops::view::{Counts, ViewProjector};
use crate::util::unicode;

use super::input;
use super::render;
use super::theme::{Palette, Palettes};

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing into the "add a new task" form
    Add,
    /// Editing the text of an existing task inline
    Edit,
}

/// Single-line text buffer with a grapheme-aware cursor (byte offset)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineInput {
    pub text: String,
    pub cursor: usize,
}

impl LineInput {
    pub fn with_text(text: &str) -> Self {
        LineInput {
            text: text.to_string(),
            cursor: text.len(),
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.text, self.cursor) {
            self.text.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.text, self.cursor) {
            self.text.replace_range(self.cursor..next, "");
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.text.len();
    }
}

/// Inline editor state for one task row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    pub id: TaskId,
    pub input: LineInput,
}

/// Main application state. Durable data lives in `store`; everything else
/// is per-session view state.
pub struct App<S: KeyValueStore> {
    pub store: TaskStore<S>,
    pub view: ViewProjector,
    pub palettes: Palettes,
    pub mode: Mode,
    pub should_quit: bool,
    pub show_key_hints: bool,
    /// Cursor index into the filtered list
    pub cursor: usize,
    /// First visible row of the list
    pub scroll_offset: usize,
    /// The add-task form
    pub form: LineInput,
    pub editing: Option<EditState>,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(store: TaskStore<S>, ui: &UiConfig) -> Self {
        App {
            store,
            view: ViewProjector::new(),
            palettes: Palettes::from_config(ui),
            mode: Mode::Navigate,
            should_quit: false,
            show_key_hints: ui.show_key_hints,
            cursor: 0,
            scroll_offset: 0,
            form: LineInput::default(),
            editing: None,
        }
    }

    /// Colors for the current theme
    pub fn palette(&self) -> &Palette {
        self.palettes.for_theme(self.store.theme())
    }

    pub fn counts(&mut self) -> Counts {
        self.view.counts(&self.store)
    }

    /// Ids of the tasks visible under the active filter, in display order
    pub fn visible_ids(&mut self) -> Vec<TaskId> {
        self.view.filtered(&self.store).iter().map(|t| t.id).collect()
    }

    /// Task under the cursor, if the list is not empty
    pub fn selected_id(&mut self) -> Option<TaskId> {
        self.clamp_cursor();
        self.visible_ids().get(self.cursor).copied()
    }

    /// Keep the cursor inside the filtered list
    pub fn clamp_cursor(&mut self) {
        let len = self.view.filtered(&self.store).len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    pub fn set_filter(&mut self, filter: Filter) {
        if self.view.filter() != filter {
            self.view.set_filter(filter);
            self.cursor = 0;
            self.scroll_offset = 0;
        }
    }

    pub fn cycle_filter(&mut self) {
        self.set_filter(self.view.filter().next());
    }
}

/// Run the TUI application
pub fn run<S: KeyValueStore>(
    store: TaskStore<S>,
    ui: &UiConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(store, ui);
    info!(tasks = app.store.tasks().len(), "tui starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("tui stopped");
    result
}

fn run_event_loop<S: KeyValueStore>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<S>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
