//! The record card: name, sprite, type badges and base stats.

use crate::api::Record;
use crate::lookup::{display_name, stat_bar, stat_label, type_color};
use crate::ui::theme::{type_badge_style, HEADER_TEXT, STAT_BAR};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Width of the stat label column.
const LABEL_WIDTH: usize = 16;
/// Width of the base value column.
const VALUE_WIDTH: usize = 4;

/// Lines for `record`, with stat bars fitted into `width` columns.
pub fn record_lines(record: &Record, width: u16) -> Vec<Line<'static>> {
    let text = Style::default().fg(HEADER_TEXT);
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        display_name(&record.name),
        text.add_modifier(Modifier::BOLD),
    )));
    if !record.image_url.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Sprite: ", text.add_modifier(Modifier::DIM)),
            Span::styled(record.image_url.clone(), text),
        ]));
    }
    lines.push(Line::from(""));

    let mut badges = Vec::new();
    for (idx, type_name) in record.types.iter().enumerate() {
        if idx > 0 {
            badges.push(Span::raw(" "));
        }
        badges.push(Span::styled(
            format!(" {} ", type_name),
            type_badge_style(type_color(type_name)).add_modifier(Modifier::BOLD),
        ));
    }
    lines.push(Line::from(badges));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Base Stats",
        text.add_modifier(Modifier::BOLD),
    )));
    let bar_width = (width as usize)
        .saturating_sub(LABEL_WIDTH + VALUE_WIDTH + 2)
        .max(1);
    for stat in &record.stats {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<width$}", stat_label(&stat.name), width = LABEL_WIDTH),
                text,
            ),
            Span::styled(stat_bar(stat.base_value, bar_width), Style::default().fg(STAT_BAR)),
            Span::styled(
                format!(" {:>width$}", stat.base_value, width = VALUE_WIDTH),
                text,
            ),
        ]));
    }

    lines
}
