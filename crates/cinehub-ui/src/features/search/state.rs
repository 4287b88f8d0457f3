//! Search view state with a latest-request guard.
//!
//! # Design
//! - Submissions are not debounced or cancelled; instead each carries a
//!   sequence number and only the newest one may write results back, so a
//!   slow earlier response can never clobber a later one.
//! - The caller allocates sequence numbers (they must be strictly
//!   increasing per submission).

use cinehub_models::MovieSummary;

/// Search page state.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SearchState {
    /// Results of the last applied search.
    pub results: Vec<MovieSummary>,
    /// Whether a search is in flight.
    pub loading: bool,
    /// Whether any search was submitted yet.
    pub searched: bool,
    latest_seq: u32,
}

impl SearchState {
    /// Record a new submission with its caller-allocated sequence number.
    pub const fn begin(&mut self, seq: u32) {
        self.latest_seq = seq;
        self.loading = true;
        self.searched = true;
    }

    /// Apply a response; dropped (returns `false`) unless it belongs to the
    /// newest submission.
    pub fn finish(&mut self, seq: u32, results: Vec<MovieSummary>) -> bool {
        if seq != self.latest_seq {
            return false;
        }
        self.results = results;
        self.loading = false;
        true
    }

    /// Mark the newest submission as failed; stale failures are ignored.
    pub const fn fail(&mut self, seq: u32) -> bool {
        if seq != self.latest_seq {
            return false;
        }
        self.loading = false;
        true
    }

    /// Whether the empty-state message should show.
    #[must_use]
    pub const fn shows_empty_state(&self) -> bool {
        self.searched && !self.loading && self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u64) -> MovieSummary {
        MovieSummary {
            id,
            title: format!("movie-{id}"),
            poster_path: None,
            vote_average: 7.0,
            release_date: None,
            overview: None,
        }
    }

    #[test]
    fn latest_submission_wins() {
        let mut state = SearchState::default();
        state.begin(1);
        state.begin(2);
        assert!(!state.finish(1, vec![movie(1)]));
        assert!(state.loading);
        assert!(state.finish(2, vec![movie(2)]));
        assert_eq!(state.results[0].id, 2);
        assert!(!state.loading);
    }

    #[test]
    fn stale_failures_keep_the_spinner() {
        let mut state = SearchState::default();
        state.begin(1);
        state.begin(2);
        assert!(!state.fail(1));
        assert!(state.loading);
        assert!(state.fail(2));
        assert!(!state.loading);
    }

    #[test]
    fn empty_state_needs_a_completed_search() {
        let mut state = SearchState::default();
        assert!(!state.shows_empty_state());
        state.begin(1);
        assert!(!state.shows_empty_state());
        assert!(state.finish(1, Vec::new()));
        assert!(state.shows_empty_state());
        state.begin(2);
        assert!(state.finish(2, vec![movie(1)]));
        assert!(!state.shows_empty_state());
    }
}
