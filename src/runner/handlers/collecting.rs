use crate::app::settings::keybinds;
use crate::app::App;
use crate::input::KeyCode;

/// Keys on the collect screen. Printable characters edit the name buffer,
/// so screen commands live on non-character keys (see the help bar).
pub fn handle_collecting(app: &mut App, code: KeyCode) -> anyhow::Result<bool> {
    if keybinds::is_enter(&code) {
        app.submit_name();
    } else if keybinds::is_backspace(&code) {
        app.pop_input();
    } else if keybinds::is_draw(&code) {
        app.draw_names();
    } else if keybinds::is_esc(&code) {
        return Ok(true);
    } else if let KeyCode::Char(c) = code {
        app.push_input(c);
    }
    Ok(false)
}
