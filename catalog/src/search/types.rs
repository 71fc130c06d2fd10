//! Search feature state.

use crate::index::SearchQuery;

/// State of the search box and the filter it drives
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    /// Debounce generation; only the newest generation may commit
    pub generation: u64,

    /// The query currently applied to the sidebar, if any
    pub active_query: Option<SearchQuery>,

    /// Match count of the last committed filter (display feedback)
    pub last_match_count: Option<usize>,
}

impl SearchState {
    /// Whether a filter is currently applied
    #[must_use]
    pub const fn is_filtered(&self) -> bool {
        self.active_query.is_some()
    }

    /// Bump the generation, invalidating every pending debounce commit
    pub const fn supersede(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }
}
