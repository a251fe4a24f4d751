use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, TITLE_BLUE, TITLE_PURPLE};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let bold = Modifier::BOLD;
        let line = Line::from(vec![
            Span::styled("Poké", Style::default().fg(TITLE_BLUE).add_modifier(bold)),
            Span::styled("dex", Style::default().fg(TITLE_PURPLE).add_modifier(bold)),
            Span::styled("  │  ", Style::default().fg(HEADER_SEPARATOR)),
            Span::styled("Explore Pokémon Wonders", Style::default().fg(HEADER_TEXT)),
        ]);

        Paragraph::new(line).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
