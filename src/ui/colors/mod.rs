use crate::engine::Present;
use crate::ui::themes::{self, Theme};
use once_cell::sync::Lazy;
use ratatui::style::{Color, Modifier, Style};
use std::sync::Mutex;

/// Concrete runtime styles derived from the active `Theme`. Widgets read
/// these through `current()` so a theme change needs no plumbing.
#[derive(Clone, Debug)]
pub struct Colors {
    pub header_style: Style,
    pub list_block_style: Style,
    pub input_block_style: Style,
    pub placeholder_style: Style,
    pub name_style: Style,
    pub help_style: Style,
}

static CURRENT: Lazy<Mutex<Colors>> = Lazy::new(|| Mutex::new(derive_colors(&Theme::festive())));

pub fn current() -> Colors {
    CURRENT.lock().unwrap().clone()
}

/// Resolve `name` (built-in theme, or palette file path) and install it.
pub fn set_theme(name: &str) {
    set_from_theme(&themes::resolve(name));
}

/// Derive concrete runtime Styles from the provided Theme and store them.
pub fn set_from_theme(theme: &Theme) {
    *CURRENT.lock().unwrap() = derive_colors(theme);
}

fn derive_colors(theme: &Theme) -> Colors {
    Colors {
        header_style: Style::default()
            .fg(theme.accent)
            .bg(theme.bg)
            .add_modifier(Modifier::BOLD),
        list_block_style: Style::default().fg(theme.fg).bg(theme.bg),
        input_block_style: Style::default().fg(theme.accent).bg(theme.bg),
        placeholder_style: Style::default()
            .fg(theme.accent)
            .bg(theme.bg)
            .add_modifier(Modifier::DIM),
        name_style: Style::default()
            .fg(theme.fg)
            .bg(theme.bg)
            .add_modifier(Modifier::BOLD),
        help_style: Style::default().fg(theme.fg).bg(theme.bg),
    }
}

/// Style for a present glyph. Variant colors are the artwork, not the
/// theme, so they stay fixed across themes.
pub fn present_style(p: Present) -> Style {
    let fg = match p {
        Present::Green => Color::Green,
        Present::Blue => Color::Blue,
        Present::Red => Color::Red,
    };
    Style::default().fg(fg)
}
