//! Navigation search for the design-system documentation site.
//!
//! This crate owns the searchable catalog of the rendered page and the
//! search interaction built on top of it:
//!
//! - [`ContentManifest`]: an explicit enumeration of everything navigable -
//!   sidebar sections and links, headings, design tokens, component groups
//!   and the fixed demo components. The UI layer renders *from* this
//!   manifest; the index builder consumes it directly instead of re-deriving
//!   content from rendered output.
//! - [`SearchIndex`]: built once per page load, an immutable list of
//!   [`IndexEntry`] values with pre-lowered search keys.
//! - [`NavigationPlan`]: the visibility and expansion a set of matches
//!   implies for the sidebar, resolved purely and applied idempotently.
//! - [`SearchReducer`]: the debounced keystroke-to-filter state machine.
//!
//! # Architecture
//!
//! ```text
//! keystroke → SearchAction::InputChanged
//!              ↓ bumps generation, schedules Effect::Delay (150 ms)
//! timer     → SearchAction::DebounceElapsed { generation, .. }
//!              ↓ stale generation? discard : commit
//!              SearchIndex::filter → NavigationPlan → surface writes
//!              ↓
//!              notify("3 results found")
//! ```
//!
//! Superseded debounce generations are discarded on arrival, not tracked as
//! cancelled state.

pub mod index;
pub mod manifest;
pub mod navigation;
pub mod search;

pub use index::{EntryKind, IndexEntry, SearchIndex, SearchQuery};
pub use manifest::{ComponentEntry, ContentManifest, Heading, NavLink, NavSection, TokenEntry};
pub use navigation::{NavigationPlan, reset_navigation};
pub use search::{SearchAction, SearchEnvironment, SearchReducer, SearchState};
