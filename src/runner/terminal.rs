use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::io::Stdout;
use thiserror::Error;

/// Errors returned by terminal initialization/restore helpers.
#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Term = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal (enter alternate screen + enable raw mode) and
/// return a ready `Terminal`.
pub fn init_terminal() -> Result<Term, TerminalError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

/// Restore terminal state (leave alternate screen + disable raw mode) and
/// show the cursor again.
pub fn restore_terminal(mut terminal: Term) -> Result<(), TerminalError> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
