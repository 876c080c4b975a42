use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use unicode_segmentation::UnicodeSegmentation;

use self::roster::Roster;
use super::settings::Settings;
use super::types::{ResultRow, Screen};
use crate::engine::{draw_assignments, Present};

pub mod roster;

/// The whole application state tree: roster, input buffer, assignment set,
/// screen mode and the random generator. Mutated exclusively by the active
/// key handler, one event at a time; there are no ambient globals and no
/// concurrent access.
pub struct App {
    pub roster: Roster,
    /// In-progress participant name (the text input buffer).
    pub name_input: String,
    /// Current assignment set, one row per participant. Discarded and
    /// recomputed in full on every draw.
    pub results: Vec<ResultRow>,
    pub screen: Screen,
    /// Scroll offset of the results list (index of the top visible row).
    pub results_offset: usize,
    pub settings: Settings,
    rng: StdRng,
}

impl App {
    /// New app with an OS-seeded generator (the normal case).
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// New app with a fixed seed, for reproducible draws (`--seed`) and
    /// deterministic tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        App {
            roster: Roster::new(),
            name_input: String::new(),
            results: Vec::new(),
            screen: Screen::Collecting,
            results_offset: 0,
            settings: Settings::default(),
            rng,
        }
    }

    /// Append a character to the name buffer.
    pub fn push_input(&mut self, c: char) {
        self.name_input.push(c);
    }

    /// Delete the last grapheme from the name buffer. Grapheme-aware so a
    /// single backspace removes one user-visible character, not one byte.
    pub fn pop_input(&mut self) {
        if let Some((idx, _)) = self.name_input.grapheme_indices(true).last() {
            self.name_input.truncate(idx);
        }
    }

    /// Submit the buffer as a participant and clear it. A blank buffer is
    /// silently ignored and left in place for further editing.
    pub fn submit_name(&mut self) {
        if self.roster.add(&self.name_input) {
            debug!(name = %self.name_input, total = self.roster.len(), "participant added");
            self.name_input.clear();
        }
    }

    /// Draw names: recompute the full assignment set and switch to the
    /// results screen. With an empty roster this is an accepted no-op (the
    /// engine would return an empty set; there is nothing to show).
    pub fn draw_names(&mut self) {
        if self.roster.is_empty() {
            debug!("draw requested with empty roster, ignoring");
            return;
        }
        self.results = draw_assignments(&self.roster.names, &mut self.rng)
            .into_iter()
            .map(|assignment| ResultRow {
                present: Present::random(&mut self.rng),
                assignment,
            })
            .collect();
        self.results_offset = 0;
        self.screen = Screen::Results;
        info!(participants = self.roster.len(), "names drawn");
    }

    /// Draw again: a fresh independent draw, nothing carried over from the
    /// previous assignment set.
    pub fn redraw(&mut self) {
        self.results.clear();
        self.draw_names();
    }

    /// Return to the collect screen, discarding the assignment set. The
    /// roster is kept unless settings say otherwise.
    pub fn back_to_collecting(&mut self) {
        if !self.settings.keep_roster {
            self.roster.clear();
        }
        self.results.clear();
        self.results_offset = 0;
        self.screen = Screen::Collecting;
    }

    /// Scroll the results list down by `step`, clamped so the viewport never
    /// runs past the last row.
    pub fn scroll_results_down(&mut self, step: usize, viewport: usize) {
        let max_offset = self.results.len().saturating_sub(viewport.max(1));
        self.results_offset = std::cmp::min(self.results_offset.saturating_add(step), max_offset);
    }

    /// Scroll the results list up by `step`, saturating at the top.
    pub fn scroll_results_up(&mut self, step: usize) {
        self.results_offset = self.results_offset.saturating_sub(step);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
