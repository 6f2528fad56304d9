use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::io::storage::KeyValueStore;
use crate::ops::view::empty_message;
use crate::tui::app::{App, Mode};
use crate::util::unicode;

use super::helpers::{checkbox, input_spans, spans_width};

/// Render the filtered tasks, or the empty-state sentence
pub fn render_task_list<S: KeyValueStore>(frame: &mut Frame, app: &mut App<S>, area: Rect) {
    let height = area.height as usize;
    let width = area.width as usize;

    // Keep cursor visible
    app.clamp_cursor();
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if height > 0 && app.cursor >= app.scroll_offset + height {
        app.scroll_offset = app.cursor + 1 - height;
    }

    let palette = app.palettes.for_theme(app.store.theme());
    let bg = palette.background;
    let bg_style = Style::default().bg(bg);
    let filter = app.view.filter();
    let rows = app.view.filtered(&app.store);

    if rows.is_empty() {
        let line = Line::from(Span::styled(
            format!("   {}", empty_message(filter)),
            Style::default().fg(palette.dim).bg(bg),
        ));
        frame.render_widget(Paragraph::new(line).style(bg_style), area);
        return;
    }

    let mut lines: Vec<Line> = Vec::with_capacity(height);
    for (idx, task) in rows.iter().enumerate().skip(app.scroll_offset).take(height) {
        let is_cursor = idx == app.cursor;
        let editing = app.editing.as_ref().filter(|e| e.id == task.id);
        let row_bg = if is_cursor { palette.selection_bg } else { bg };
        let row_style = Style::default().bg(row_bg);

        let marker = if is_cursor && app.mode != Mode::Add {
            Span::styled(" \u{258C} ", Style::default().fg(palette.highlight).bg(row_bg))
        } else {
            Span::styled("   ", row_style)
        };
        let box_style = if task.completed {
            Style::default().fg(palette.green).bg(row_bg)
        } else {
            Style::default().fg(palette.text).bg(row_bg)
        };
        let mut spans = vec![
            marker,
            Span::styled(checkbox(task.completed), box_style),
            Span::styled(" ", row_style),
        ];

        match editing {
            Some(edit) => {
                spans.extend(input_spans(
                    &edit.input,
                    Style::default().fg(palette.text_bright).bg(row_bg),
                    Style::default().fg(bg).bg(palette.highlight),
                    app.mode == Mode::Edit,
                ));
            }
            None => {
                let text_style = if task.completed {
                    Style::default()
                        .fg(palette.dim)
                        .bg(row_bg)
                        .add_modifier(Modifier::CROSSED_OUT)
                } else if is_cursor {
                    Style::default().fg(palette.text_bright).bg(row_bg)
                } else {
                    Style::default().fg(palette.text).bg(row_bg)
                };
                let budget = width.saturating_sub(spans_width(&spans));
                spans.push(Span::styled(
                    unicode::truncate_to_width(&task.text, budget),
                    text_style,
                ));
            }
        }

        // Fill the rest of the row so the selection background spans the width
        let used = spans_width(&spans);
        if used < width {
            spans.push(Span::styled(" ".repeat(width - used), row_style));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).style(bg_style), area);
}
