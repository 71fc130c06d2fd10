//! Search feature actions.

/// Everything that can happen to the search box
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchAction {
    /// The input text changed (one action per edit, not per commit)
    InputChanged {
        /// Raw field contents, un-normalized
        text: String,
    },

    /// A scheduled debounce delay elapsed
    ///
    /// Carries the generation it was scheduled under and the text captured
    /// at that moment; the reducer discards it if the generation is stale.
    DebounceElapsed {
        /// Generation this commit was scheduled under
        generation: u64,
        /// Input text captured when the delay was scheduled
        text: String,
    },

    /// Escape pressed in the search field
    EscapePressed,
}
