pub mod assign;
pub mod present;

pub use assign::{cycle_pairs, draw_assignments, Assignment};
pub use present::Present;
