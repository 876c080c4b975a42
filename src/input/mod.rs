// Keyboard input wrappers and type aliases so the rest of the crate never
// imports crossterm directly.
pub use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crossterm::event::{self, Event};
use std::io;
use std::time::Duration;

/// Terminal input events the runner cares about.
pub enum InputEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Other,
}

/// Poll for a pending event with `timeout`.
pub fn poll(timeout: Duration) -> io::Result<bool> {
    event::poll(timeout)
}

/// Read the next event, mapping it into `InputEvent`.
pub fn read_event() -> io::Result<InputEvent> {
    Ok(match event::read()? {
        Event::Key(k) => InputEvent::Key(k),
        Event::Resize(w, h) => InputEvent::Resize(w, h),
        _ => InputEvent::Other,
    })
}
