//! Pure helpers shared by the renderers.

/// Style token for an elemental type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeColor {
    Orange,
    Blue,
    Green,
    Yellow,
    Pink,
    Cyan,
    Indigo,
    Gray,
}

impl TypeColor {
    /// Stable name of the token, e.g. for JSON output.
    pub fn token(self) -> &'static str {
        match self {
            TypeColor::Orange => "orange",
            TypeColor::Blue => "blue",
            TypeColor::Green => "green",
            TypeColor::Yellow => "yellow",
            TypeColor::Pink => "pink",
            TypeColor::Cyan => "cyan",
            TypeColor::Indigo => "indigo",
            TypeColor::Gray => "gray",
        }
    }
}

/// Map a type name to its color token. Unknown names get [`TypeColor::Gray`].
pub fn type_color(type_name: &str) -> TypeColor {
    match type_name {
        "fire" => TypeColor::Orange,
        "water" => TypeColor::Blue,
        "grass" => TypeColor::Green,
        "electric" => TypeColor::Yellow,
        "psychic" => TypeColor::Pink,
        "ice" => TypeColor::Cyan,
        "dragon" => TypeColor::Indigo,
        _ => TypeColor::Gray,
    }
}

/// `special-attack` → `Special Attack`. Only the first hyphen is replaced.
pub fn stat_label(stat_name: &str) -> String {
    display_name(&stat_name.replacen('-', " ", 1))
}

/// Capitalize the first character of every space-separated word.
pub fn display_name(name: &str) -> String {
    name.split(' ').map(capitalize).collect::<Vec<_>>().join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Bar fill in percent; base values above 100 fill the bar.
pub fn stat_bar_percent(base_value: u32) -> u16 {
    base_value.min(100) as u16
}

/// Text bar `width` cells wide, filled to [`stat_bar_percent`].
pub fn stat_bar(base_value: u32, width: usize) -> String {
    let filled = width * usize::from(stat_bar_percent(base_value)) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
