/// Search box state: the raw text typed so far and the settled query.
///
/// Each keystroke bumps a generation counter. A timer started for a keystroke
/// may only commit the query when no later keystroke happened, which is what
/// makes the query debounced: only the last value of a burst is committed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    raw: String,
    query: String,
    generation: u64,
}

impl SearchState {
    /// Text shown in the input box
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Committed query, the only value ever sent to the server
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Record a keystroke; returns the generation a settle timer must present
    pub fn input(&mut self, raw: impl Into<String>) -> u64 {
        self.raw = raw.into();
        self.generation += 1;
        self.generation
    }

    /// Commit the raw text after the quiet period.
    ///
    /// Returns `true` when the committed query changed. A stale generation (a
    /// newer keystroke exists) commits nothing.
    pub fn settle(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        let next = self.raw.trim();
        if next == self.query {
            return false;
        }
        self.query = next.to_string();
        true
    }

    /// Reset raw text and query at once, cancelling pending timers
    pub fn clear(&mut self) {
        self.raw.clear();
        self.query.clear();
        self.generation += 1;
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_commits_only_last_value() {
        let mut search = SearchState::default();
        let first = search.input("ab");
        let second = search.input("abc");

        assert!(!search.settle(first));
        assert_eq!(search.query(), "");
        assert!(search.settle(second));
        assert_eq!(search.query(), "abc");
        assert_eq!(search.raw(), "abc");
    }

    #[test]
    fn test_unchanged_query_does_not_commit() {
        let mut search = SearchState::default();
        let generation = search.input("abc");
        assert!(search.settle(generation));

        let generation = search.input("abc ");
        assert!(!search.settle(generation));
        assert_eq!(search.query(), "abc");
    }

    #[test]
    fn test_typing_back_to_empty_changes_query() {
        let mut search = SearchState::default();
        let generation = search.input("x");
        assert!(search.settle(generation));
        let generation = search.input("");
        assert!(search.settle(generation));
        assert!(!search.is_active());
    }

    #[test]
    fn test_clear_cancels_pending_timer() {
        let mut search = SearchState::default();
        let generation = search.input("pending");
        search.clear();
        assert!(!search.settle(generation));
        assert_eq!(search.raw(), "");
        assert_eq!(search.query(), "");
    }
}
