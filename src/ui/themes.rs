use ratatui::style::{Color, Style};
use serde::Deserialize;
use tracing::warn;

#[derive(Clone, Debug)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
}

#[derive(Deserialize)]
struct Pal {
    bg: String,
    fg: String,
    accent: String,
}

impl Theme {
    /// Default palette, taken from the app artwork: red backdrop, white
    /// text, gold trim.
    pub fn festive() -> Self {
        Self {
            bg: Color::Rgb(0xd3, 0x2f, 0x2f),
            fg: Color::White,
            accent: Color::Rgb(0xff, 0xd7, 0x00),
        }
    }

    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(11, 12, 13),
            fg: Color::Gray,
            accent: Color::Cyan,
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            accent: Color::Blue,
        }
    }

    /// Parse a `[palette]` table with hex `bg`/`fg`/`accent` entries.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let v: toml::Value = toml::from_str(s)?;
        if let Some(p) = v.get("palette") {
            let p: Pal = p.clone().try_into()?;
            return Ok(Self {
                bg: parse_hex(&p.bg),
                fg: parse_hex(&p.fg),
                accent: parse_hex(&p.accent),
            });
        }
        Ok(Self::festive())
    }
}

/// Resolve a theme by built-in name; anything else is tried as a path to a
/// palette TOML file. Unknown names and broken files fall back to the
/// festive default with a warning rather than blocking startup.
pub fn resolve(name: &str) -> Theme {
    match name {
        "festive" => Theme::festive(),
        "dark" => Theme::dark(),
        "light" => Theme::light(),
        other => match std::fs::read_to_string(other) {
            Ok(raw) => Theme::from_toml(&raw).unwrap_or_else(|e| {
                warn!(theme = other, "bad palette file, using festive: {e}");
                Theme::festive()
            }),
            Err(_) => {
                warn!(theme = other, "unknown theme, using festive");
                Theme::festive()
            }
        },
    }
}

fn parse_hex(s: &str) -> Color {
    let s = s.trim_start_matches('#');
    if s.len() == 6 {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&s[0..2], 16),
            u8::from_str_radix(&s[2..4], 16),
            u8::from_str_radix(&s[4..6], 16),
        ) {
            return Color::Rgb(r, g, b);
        }
    }
    Color::Reset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_toml_round_trips_hex_colors() {
        let t = Theme::from_toml(
            "[palette]\nbg = \"#013220\"\nfg = \"#ffffff\"\naccent = \"#da9100\"\n",
        )
        .unwrap();
        assert_eq!(t.bg, Color::Rgb(0x01, 0x32, 0x20));
        assert_eq!(t.fg, Color::Rgb(0xff, 0xff, 0xff));
        assert_eq!(t.accent, Color::Rgb(0xda, 0x91, 0x00));
    }

    #[test]
    fn missing_palette_table_gives_default() {
        let t = Theme::from_toml("other = 1").unwrap();
        assert_eq!(t.bg, Theme::festive().bg);
    }

    #[test]
    fn malformed_hex_parses_to_reset() {
        assert_eq!(parse_hex("zzz"), Color::Reset);
        assert_eq!(parse_hex("#12345"), Color::Reset);
    }

    #[test]
    fn resolve_falls_back_for_unknown_names() {
        let t = resolve("no-such-theme-or-file");
        assert_eq!(t.bg, Theme::festive().bg);
    }
}
