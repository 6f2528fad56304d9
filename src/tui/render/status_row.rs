use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::io::storage::KeyValueStore;
use crate::tui::app::{App, Mode};

use super::helpers::push_right_aligned;

/// Key hints for each mode
fn key_hints(mode: Mode) -> &'static str {
    match mode {
        Mode::Navigate => "a add  e edit  x done  d del  f filter  t theme  q quit",
        Mode::Add => "Enter add  Esc back",
        Mode::Edit => "Enter save  Esc cancel",
    }
}

/// Render the footer: counts on the left, key hints on the right
pub fn render_status_row<S: KeyValueStore>(frame: &mut Frame, app: &mut App<S>, area: Rect) {
    let counts = app.counts();
    let palette = app.palette();
    let bg = palette.background;
    let label = Style::default().fg(palette.dim).bg(bg);
    let value = Style::default()
        .fg(palette.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![
        Span::styled(" Total: ", label),
        Span::styled(counts.total.to_string(), value),
        Span::styled("  Completed: ", label),
        Span::styled(counts.completed.to_string(), value),
    ];
    if app.show_key_hints {
        let hints = vec![Span::styled(format!("{} ", key_hints(app.mode)), label)];
        push_right_aligned(&mut spans, hints, area.width as usize, Style::default().bg(bg));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
