//! Split handlers: one submodule per screen to keep file sizes manageable.

pub mod collecting;
pub mod results;

pub use collecting::handle_collecting;
pub use results::handle_results;

use crate::app::{App, Screen};
use crate::input::KeyCode;

/// Top-level key handler that dispatches on the current screen.
/// Returns `Ok(true)` when the application should exit.
pub fn handle_key(app: &mut App, code: KeyCode, page_size: usize) -> anyhow::Result<bool> {
    match app.screen {
        Screen::Collecting => handle_collecting(app, code),
        Screen::Results => handle_results(app, code, page_size),
    }
}
