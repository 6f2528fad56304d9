use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::io::storage::KeyValueStore;
use crate::model::{Filter, Theme};
use crate::tui::app::App;

use super::helpers::push_right_aligned;

/// Render the filter chips, the counts, and the theme toggle label
pub fn render_filter_bar<S: KeyValueStore>(frame: &mut Frame, app: &mut App<S>, area: Rect) {
    let counts = app.counts();
    let active = app.view.filter();
    let theme = app.store.theme();
    let palette = app.palette();
    let bg = palette.background;
    let bg_style = Style::default().bg(bg);

    let mut spans: Vec<Span> = vec![Span::styled(" ", bg_style)];
    for filter in Filter::ORDER {
        let style = if filter == active {
            Style::default()
                .fg(bg)
                .bg(palette.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text).bg(bg)
        };
        spans.push(Span::styled(format!(" {} ", filter.label()), style));
        spans.push(Span::styled(" ", bg_style));
    }

    spans.push(Span::styled(" Total: ", Style::default().fg(palette.dim).bg(bg)));
    spans.push(Span::styled(
        counts.total.to_string(),
        Style::default().fg(palette.text_bright).bg(bg),
    ));
    spans.push(Span::styled("  Completed: ", Style::default().fg(palette.dim).bg(bg)));
    spans.push(Span::styled(
        counts.completed.to_string(),
        Style::default().fg(palette.green).bg(bg),
    ));

    let icon = match theme {
        Theme::Light => "\u{263C}", // ☼
        Theme::Dark => "\u{263E}",  // ☾
    };
    let toggle = vec![Span::styled(
        format!("{} {} ", icon, theme.label()),
        Style::default().fg(palette.text).bg(bg),
    )];
    push_right_aligned(&mut spans, toggle, area.width as usize, bg_style);

    let paragraph = Paragraph::new(Line::from(spans)).style(bg_style);
    frame.render_widget(paragraph, area);
}
