use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::app::{App, Screen};

pub mod colors;
pub mod themes;
pub mod widgets;

pub use themes::Theme;

/// Draw one frame from the application state. Read-only: all state changes
/// happen in the key handlers.
pub fn ui(f: &mut Frame, app: &App) {
    // header (3), main (min), help bar (1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(f.area());

    widgets::header::render(f, chunks[0], app.screen);

    match app.screen {
        Screen::Collecting => {
            // roster above, the input line pinned under it
            let main = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
                .split(chunks[1]);
            widgets::roster_list::render(f, main[0], &app.roster.names);
            widgets::input_box::render(f, main[1], &app.name_input);
        }
        Screen::Results => {
            widgets::results_list::render(f, chunks[1], &app.results, app.results_offset);
        }
    }

    widgets::help_bar::render(f, chunks[2], app.screen);
}
