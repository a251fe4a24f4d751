use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, INPUT_BORDER};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key bindings shown in the footer, in priority order.
const KEY_HINTS: [(&str, &str); 4] = [
    ("Esc/Ctrl+Q", "Quit"),
    ("Type", "Search"),
    ("Backspace", "Delete"),
    ("Ctrl+U", "Clear"),
];

const SEPARATOR: &str = " │ ";

/// Bordered footer with key hints on the left and the version on the right.
pub fn footer(area: Rect) -> Paragraph<'static> {
    let content_width = usize::from(area.width.saturating_sub(2));
    Paragraph::new(footer_line(content_width)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

/// Footer content for `width` cells. Hints that don't fit are dropped from the
/// end of [`KEY_HINTS`]; the version is dropped last.
pub fn footer_line(width: usize) -> Line<'static> {
    let version = format!("v{VERSION} ");
    let version_width = version.chars().count();
    let hint_budget = width.saturating_sub(version_width);

    let key_style = Style::default().fg(INPUT_BORDER).add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let separator_style = Style::default().fg(HEADER_SEPARATOR);

    let mut spans = vec![Span::raw(" ")];
    let mut used = 1;
    for (key, action) in KEY_HINTS {
        let separator = if used > 1 { SEPARATOR } else { "" };
        let action = format!(": {action}");
        let hint_width = separator.chars().count() + key.chars().count() + action.chars().count();
        if used + hint_width > hint_budget {
            break;
        }
        if !separator.is_empty() {
            spans.push(Span::styled(separator, separator_style));
        }
        spans.push(Span::styled(key, key_style));
        spans.push(Span::styled(action, text_style));
        used += hint_width;
    }

    if used + version_width <= width {
        spans.push(Span::raw(" ".repeat(width - used - version_width)));
        spans.push(Span::styled(version, text_style));
    }

    Line::from(spans)
}
