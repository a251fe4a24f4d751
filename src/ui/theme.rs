use ratatui::style::{Color, Style};

use crate::lookup::TypeColor;

pub const TITLE_BLUE: Color = Color::Rgb(0x25, 0x63, 0xeb);
pub const TITLE_PURPLE: Color = Color::Rgb(0x93, 0x33, 0xea);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const INPUT_BORDER: Color = Color::Rgb(0x93, 0xc5, 0xfd);
pub const SPINNER: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const STAT_BAR: Color = Color::Rgb(0x25, 0x63, 0xeb);
pub const STATUS_ERROR: Color = Color::Rgb(0xb9, 0x1c, 0x1c);
pub const ERROR_BORDER: Color = Color::Rgb(0xfe, 0xca, 0xca);

/// Badge style for a type color token: dark text on a light tint.
pub fn type_badge_style(color: TypeColor) -> Style {
    let (fg, bg) = match color {
        TypeColor::Orange => (Color::Rgb(0x9a, 0x34, 0x12), Color::Rgb(0xff, 0xed, 0xd5)),
        TypeColor::Blue => (Color::Rgb(0x1e, 0x40, 0xaf), Color::Rgb(0xdb, 0xea, 0xfe)),
        TypeColor::Green => (Color::Rgb(0x16, 0x65, 0x34), Color::Rgb(0xdc, 0xfc, 0xe7)),
        TypeColor::Yellow => (Color::Rgb(0x85, 0x4d, 0x0e), Color::Rgb(0xfe, 0xf9, 0xc3)),
        TypeColor::Pink => (Color::Rgb(0x9d, 0x17, 0x4d), Color::Rgb(0xfc, 0xe7, 0xf3)),
        TypeColor::Cyan => (Color::Rgb(0x15, 0x5e, 0x75), Color::Rgb(0xcf, 0xfa, 0xfe)),
        TypeColor::Indigo => (Color::Rgb(0x37, 0x30, 0xa3), Color::Rgb(0xe0, 0xe7, 0xff)),
        TypeColor::Gray => (Color::Rgb(0x1f, 0x29, 0x37), Color::Rgb(0xf3, 0xf4, 0xf6)),
    };
    Style::default().fg(fg).bg(bg)
}
