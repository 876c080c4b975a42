/// Ordered participant roster, append-only from the UI.
///
/// Stores only UI-independent state so it can be unit-tested without
/// rendering. Insertion order is preserved; duplicate names are allowed and
/// treated as distinct entries by position.
pub struct Roster {
    pub names: Vec<String>,
}

impl Roster {
    pub fn new() -> Self {
        Roster { names: Vec::new() }
    }

    /// Append one participant. Empty or whitespace-only names are silently
    /// ignored (no error is surfaced for them). Returns whether the name
    /// was accepted.
    pub fn add(&mut self, name: &str) -> bool {
        if name.trim().is_empty() {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}
