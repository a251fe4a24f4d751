use crate::ui::app::App;
use crate::ui::card::record_lines;
use crate::ui::footer::footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, search_regions};
use crate::ui::theme::{
    ERROR_BORDER, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, INPUT_BORDER, SPINNER,
    STATUS_ERROR,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const PLACEHOLDER: &str = "Search Pokémon by name or ID";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer_area) = layout_regions(area);

    frame.render_widget(Header::new().widget(), header);
    frame.render_widget(Clear, body);

    let (search, content) = search_regions(body);
    draw_search(frame, app, search);
    draw_content(frame, app, content);

    frame.render_widget(footer(footer_area), footer_area);
}

fn draw_search(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let query = app.query();
    let line = if query.is_empty() {
        Line::from(Span::styled(PLACEHOLDER, Style::default().fg(HEADER_SEPARATOR)))
    } else {
        Line::from(Span::styled(query.to_string(), Style::default().fg(HEADER_TEXT)))
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(INPUT_BORDER));
    frame.render_widget(Paragraph::new(line).block(block), area);

    if area.width > 2 && area.height > 2 {
        let typed = query.chars().count() as u16;
        let x = area.x + 1 + typed.min(area.width - 3);
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn draw_content(frame: &mut Frame<'_>, app: &App, area: Rect) {
    if area.height == 0 {
        return;
    }
    let snapshot = app.snapshot();

    if snapshot.is_loading {
        let line = Line::from(vec![
            Span::styled(app.spinner_frame(), Style::default().fg(SPINNER)),
            Span::styled(" Loading…", Style::default().fg(HEADER_TEXT)),
        ]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
        return;
    }

    if let Some(error) = &snapshot.error {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ERROR_BORDER));
        let widget = Paragraph::new(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(STATUS_ERROR),
        )))
        .alignment(Alignment::Center)
        .block(block);
        let height = area.height.min(3);
        frame.render_widget(widget, Rect { height, ..area });
        return;
    }

    if let Some(record) = &snapshot.record {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let inner_width = area.width.saturating_sub(2);
        let widget = Paragraph::new(record_lines(record, inner_width))
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(widget, area);
    }
}
