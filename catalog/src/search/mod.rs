//! Debounced search-as-you-type over the navigation catalog.
//!
//! Keystrokes never filter directly. Each input edit bumps a generation
//! counter and schedules a delayed commit carrying that generation; by the
//! time the delay fires, only the latest generation is still current and
//! every earlier one is discarded on arrival. Clearing the field or pressing
//! Escape resets the sidebar immediately, without waiting out the delay.

mod actions;
mod environment;
mod reducer;
mod types;

pub use actions::SearchAction;
pub use environment::SearchEnvironment;
pub use reducer::SearchReducer;
pub use types::SearchState;
