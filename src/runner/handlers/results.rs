use crate::app::settings::keybinds;
use crate::app::App;
use crate::input::KeyCode;

/// Keys on the results screen. No text entry here, so plain letters are
/// available as commands.
pub fn handle_results(app: &mut App, code: KeyCode, page_size: usize) -> anyhow::Result<bool> {
    if keybinds::is_enter(&code) || keybinds::is_char(&code, 'r') {
        app.redraw();
    } else if keybinds::is_char(&code, 'a') {
        app.back_to_collecting();
    } else if keybinds::is_down(&code) {
        app.scroll_results_down(1, page_size);
    } else if keybinds::is_up(&code) {
        app.scroll_results_up(1);
    } else if keybinds::is_page_down(&code) {
        app.scroll_results_down(page_size, page_size);
    } else if keybinds::is_page_up(&code) {
        app.scroll_results_up(page_size);
    } else if keybinds::is_esc(&code) || keybinds::is_char(&code, 'q') {
        return Ok(true);
    }
    Ok(false)
}
