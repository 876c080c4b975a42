// Centralised keybind predicates for the application.
//
// Small, well-named helpers like `is_quit` and `is_draw` so the handlers
// refer to key actions rather than raw `KeyCode` patterns. The collect
// screen feeds printable characters into the name buffer, so its commands
// live on non-character keys only.

use crate::input::KeyCode;

pub fn is_enter(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Enter)
}

pub fn is_backspace(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Backspace)
}

pub fn is_esc(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Esc)
}

/// Draw names. F2 so it never collides with name text.
pub fn is_draw(code: &KeyCode) -> bool {
    matches!(code, KeyCode::F(2))
}

pub fn is_up(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Up)
}

pub fn is_down(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Down)
}

pub fn is_page_up(code: &KeyCode) -> bool {
    matches!(code, KeyCode::PageUp)
}

pub fn is_page_down(code: &KeyCode) -> bool {
    matches!(code, KeyCode::PageDown)
}

pub fn is_char(code: &KeyCode, want: char) -> bool {
    matches!(code, &KeyCode::Char(c) if c == want)
}
