use crate::app::App;
use crate::input::{poll, read_event, InputEvent};
use crate::runner::handlers;
use crate::runner::terminal::{init_terminal, restore_terminal};
use crate::ui;

use std::time::Duration;

/// Run the main event loop until the user quits. The caller builds the
/// `App` (seeded or not) so the CLI and tests share one construction path.
///
/// Each key event runs to completion before the next is processed; there is
/// no background work and no shared state outside `app`.
pub fn run_app(mut app: App) -> anyhow::Result<()> {
    let mut terminal = init_terminal()?;

    loop {
        terminal.draw(|f| ui::ui(f, &app))?;

        // Viewport height for list scrolling: total minus the header (3),
        // the help bar (1) and the list borders (2).
        let page_size = (terminal.size()?.height as usize).saturating_sub(6);

        if poll(Duration::from_millis(100))? {
            match read_event()? {
                InputEvent::Key(key) => {
                    if handlers::handle_key(&mut app, key.code, page_size)? {
                        break;
                    }
                }
                InputEvent::Resize(_, _) => { /* redraw on next loop */ }
                InputEvent::Other => {}
            }
        }
    }

    restore_terminal(terminal)?;
    Ok(())
}
