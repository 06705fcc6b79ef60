/// The location fragment and its history stack.
///
/// Fragments include the leading `#`; an empty string means no fragment.
pub trait History {
    fn fragment(&self) -> &str;

    /// Pushes a new history entry.
    fn push(&mut self, fragment: &str);

    /// Overwrites the current history entry.
    fn replace(&mut self, fragment: &str);
}

/// In-process history with back/forward support.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("")
    }
}

impl MemoryHistory {
    #[must_use]
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            cursor: 0,
        }
    }

    /// Moves one entry back. Returns `false` at the start of history.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Moves one entry forward. Returns `false` at the end of history.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl History for MemoryHistory {
    fn fragment(&self) -> &str {
        &self.entries[self.cursor]
    }

    fn push(&mut self, fragment: &str) {
        // A push after going back drops the forward entries.
        self.entries.truncate(self.cursor + 1);
        self.entries.push(fragment.to_string());
        self.cursor += 1;
    }

    fn replace(&mut self, fragment: &str) {
        self.entries[self.cursor] = fragment.to_string();
    }
}

/// Strips the leading `#` from a fragment.
#[must_use]
pub fn fragment_route(fragment: &str) -> &str {
    fragment.strip_prefix('#').unwrap_or(fragment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_then_back_and_forward() {
        let mut history = MemoryHistory::new("#welcome");
        history.push("#choose-quiz");
        assert_eq!(history.fragment(), "#choose-quiz");
        assert!(history.back());
        assert_eq!(history.fragment(), "#welcome");
        assert!(!history.back());
        assert!(history.forward());
        assert_eq!(history.fragment(), "#choose-quiz");
        assert!(!history.forward());
    }

    #[test]
    fn replace_keeps_length() {
        let mut history = MemoryHistory::new("#bogus");
        history.replace("#welcome");
        assert_eq!(history.len(), 1);
        assert_eq!(history.fragment(), "#welcome");
    }

    #[test]
    fn push_after_back_drops_forward_entries() {
        let mut history = MemoryHistory::new("#a");
        history.push("#b");
        history.push("#c");
        history.back();
        history.back();
        history.push("#d");
        assert_eq!(history.len(), 2);
        assert!(!history.can_go_forward());
    }

    #[test]
    fn fragment_route_strips_hash() {
        assert_eq!(fragment_route("#quiz"), "quiz");
        assert_eq!(fragment_route(""), "");
        assert_eq!(fragment_route("quiz"), "quiz");
    }
}
