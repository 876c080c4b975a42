use crate::engine::{Assignment, Present};

/// Which screen the application is showing. Both screens are non-terminal;
/// the only exit is the quit key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    /// Collecting participant names.
    Collecting,
    /// Showing the drawn assignments.
    Results,
}

/// One row of the results screen: an assignment plus the decorative present
/// chosen for it. The present is fixed when the draw happens so rows are
/// stable across frames.
#[derive(Clone, Debug)]
pub struct ResultRow {
    pub assignment: Assignment,
    pub present: Present,
}
