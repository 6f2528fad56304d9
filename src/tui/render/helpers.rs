use ratatui::style::Style;
use ratatui::text::Span;

use crate::tui::app::LineInput;
use crate::util::unicode;

/// Checkbox for a task row
pub(super) fn checkbox(completed: bool) -> &'static str {
    if completed { "[x]" } else { "[ ]" }
}

/// Spans for a single-line input. With `show_cursor`, the grapheme under the
/// cursor (or a trailing blank) is drawn in `cursor_style`.
pub(super) fn input_spans(
    input: &LineInput,
    style: Style,
    cursor_style: Style,
    show_cursor: bool,
) -> Vec<Span<'static>> {
    if !show_cursor {
        return vec![Span::styled(input.text.clone(), style)];
    }
    let text = &input.text;
    let cursor = input.cursor.min(text.len());
    let next = unicode::next_grapheme_boundary(text, cursor).unwrap_or(text.len());

    let mut spans = Vec::new();
    if cursor > 0 {
        spans.push(Span::styled(text[..cursor].to_string(), style));
    }
    if next > cursor {
        spans.push(Span::styled(text[cursor..next].to_string(), cursor_style));
    } else {
        spans.push(Span::styled(" ", cursor_style));
    }
    if next < text.len() {
        spans.push(Span::styled(text[next..].to_string(), style));
    }
    spans
}

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// Push `right` after `left`, padded to sit flush against `width`.
/// `right` is dropped when it does not fit.
pub(super) fn push_right_aligned<'a>(
    left: &mut Vec<Span<'a>>,
    right: Vec<Span<'a>>,
    width: usize,
    pad_style: Style,
) {
    let used = spans_width(left);
    let right_width = spans_width(&right);
    if used + right_width < width {
        left.push(Span::styled(" ".repeat(width - used - right_width), pad_style));
        left.extend(right);
    }
}
