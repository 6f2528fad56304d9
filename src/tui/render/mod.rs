pub mod filter_bar;
pub mod form;
pub mod helpers;
pub mod status_row;
pub mod task_list;
#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::io::storage::KeyValueStore;

use super::app::App;

pub const TITLE: &str = "To-Do List";
pub const SUBTITLE: &str = "Keep track of what needs to get done.";

/// Draw one frame: header, filter bar, form, list, and footer
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &mut App<S>) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.palette().background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header | filter bar | separator | form | list | footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title + subtitle
            Constraint::Length(1), // filter chips, counts, theme toggle
            Constraint::Length(1), // separator
            Constraint::Length(1), // add form
            Constraint::Min(1),    // task list
            Constraint::Length(1), // footer
        ])
        .split(area);

    render_header(frame, app, chunks[0]);
    filter_bar::render_filter_bar(frame, app, chunks[1]);
    render_separator(frame, app, chunks[2]);
    form::render_form(frame, app, chunks[3]);
    task_list::render_task_list(frame, app, chunks[4]);
    status_row::render_status_row(frame, app, chunks[5]);
}

fn render_header<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let palette = app.palette();
    let bg = palette.background;
    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", TITLE),
            Style::default()
                .fg(palette.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {}", SUBTITLE),
            Style::default().fg(palette.dim).bg(bg),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

fn render_separator<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let palette = app.palette();
    let line = Line::from(Span::styled(
        "\u{2500}".repeat(area.width as usize),
        Style::default().fg(palette.dim).bg(palette.background),
    ));
    frame.render_widget(Paragraph::new(line), area);
}
