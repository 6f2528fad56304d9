use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::io::storage::KeyValueStore;
use crate::tui::app::{App, Mode};

use super::helpers::input_spans;

pub const PLACEHOLDER: &str = "Add a new task...";

/// Render the add-task input line
pub fn render_form<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let palette = app.palette();
    let bg = palette.background;
    let focused = app.mode == Mode::Add;

    let prompt_style = if focused {
        Style::default().fg(palette.highlight).bg(bg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.dim).bg(bg)
    };
    let mut spans = vec![Span::styled(" + ", prompt_style)];

    if app.form.text.is_empty() && !focused {
        spans.push(Span::styled(PLACEHOLDER, Style::default().fg(palette.dim).bg(bg)));
    } else {
        spans.extend(input_spans(
            &app.form,
            Style::default().fg(palette.text_bright).bg(bg),
            Style::default().fg(bg).bg(palette.highlight),
            focused,
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)), area);
}
