pub mod app;
pub mod engine;
pub mod input;
pub mod runner;
pub mod ui;

pub use crate::app::{App, Roster, Screen, Settings};
pub use crate::engine::{cycle_pairs, draw_assignments, Assignment, Present};
