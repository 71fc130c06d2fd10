//! Page assembly: builds the content manifest, the search index and one
//! store per interactive widget.
//!
//! The calendar and booking widgets are optional page regions. A page whose
//! manifest does not declare them simply gets no store for them; nothing
//! else on the page changes. Search is always present.

use std::sync::Arc;

use vitrine_booking::{BookingEnvironment, BookingReducer, BookingState};
use vitrine_calendar::{CalendarEnvironment, CalendarReducer, CalendarState, PricingTable};
use vitrine_catalog::search::{SearchEnvironment, SearchReducer, SearchState};
use vitrine_catalog::{
    ComponentEntry, ContentManifest, Heading, NavLink, NavSection, SearchIndex, TokenEntry,
};
use vitrine_core::environment::Clock;
use vitrine_runtime::Store;
use vitrine_surface::{DocumentSurface, Notifier};

/// Store driving the search box
pub type SearchStore =
    Store<SearchState, vitrine_catalog::SearchAction, SearchEnvironment, SearchReducer>;

/// Store driving the calendar widget
pub type CalendarStore =
    Store<CalendarState, vitrine_calendar::CalendarAction, CalendarEnvironment, CalendarReducer>;

/// Store driving the booking widget
pub type BookingStore =
    Store<BookingState, vitrine_booking::BookingAction, BookingEnvironment, BookingReducer>;

/// Name of the calendar demo component in the manifest
const CALENDAR_COMPONENT: &str = "Calendar";

/// All stores for one rendered page
pub struct Site {
    manifest: Arc<ContentManifest>,
    index: Arc<SearchIndex>,
    search: SearchStore,
    calendar: Option<CalendarStore>,
    booking: Option<BookingStore>,
}

impl Site {
    /// Wire the page's widgets onto stores
    ///
    /// The search store always exists. The calendar store exists only when
    /// the manifest declares the calendar component, and the booking store
    /// only when the booking widget region is present.
    #[must_use]
    pub fn new(
        manifest: ContentManifest,
        surface: Arc<dyn DocumentSurface>,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let manifest = Arc::new(manifest);
        let index = Arc::new(SearchIndex::build(&manifest));

        let search = Store::new(
            SearchState::default(),
            SearchReducer,
            SearchEnvironment::new(
                Arc::clone(&index),
                Arc::clone(&manifest),
                surface,
                Arc::clone(&notifier),
            ),
        );

        let calendar = manifest.has_component(CALENDAR_COMPONENT).then(|| {
            Store::new(
                CalendarState::showing(clock.today()),
                CalendarReducer,
                CalendarEnvironment::new(
                    Arc::clone(&clock),
                    Arc::new(PricingTable::for_2025()),
                    Arc::clone(&notifier),
                ),
            )
        });

        let booking = manifest.has_booking_widget.then(|| {
            Store::new(
                BookingState::default(),
                BookingReducer,
                BookingEnvironment::new(Arc::clone(&notifier)),
            )
        });

        tracing::info!(
            index_entries = index.len(),
            calendar = calendar.is_some(),
            booking = booking.is_some(),
            "site wired"
        );

        Self {
            manifest,
            index,
            search,
            calendar,
            booking,
        }
    }

    /// The page's content manifest
    #[must_use]
    pub fn manifest(&self) -> &ContentManifest {
        &self.manifest
    }

    /// The search index built at page load
    #[must_use]
    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    /// The search store
    #[must_use]
    pub const fn search(&self) -> &SearchStore {
        &self.search
    }

    /// The calendar store, absent when the page has no calendar
    #[must_use]
    pub const fn calendar(&self) -> Option<&CalendarStore> {
        self.calendar.as_ref()
    }

    /// The booking store, absent when the page has no booking widget
    #[must_use]
    pub const fn booking(&self) -> Option<&BookingStore> {
        self.booking.as_ref()
    }
}

/// Manifest of the design-system documentation page
///
/// Mirrors the rendered page: two sidebar groups, the token table, the
/// component groups and the three fixed demo components. The accordion and
/// the demo cards match on terms that do not appear in their labels.
#[must_use]
pub fn design_system_manifest() -> ContentManifest {
    ContentManifest {
        nav_sections: vec![
            NavSection::new(
                "foundations",
                vec![
                    NavLink::new("overview", "Overview"),
                    NavLink::new("colors", "Colors"),
                    NavLink::new("typography", "Typography"),
                    NavLink::new("tokens", "Design Tokens"),
                ],
            ),
            NavSection::new(
                "components",
                vec![
                    NavLink::new("buttons", "Buttons"),
                    NavLink::new("cards", "Cards"),
                    NavLink::new("accordion", "Accordion"),
                    NavLink::new("calendar", "Calendar"),
                ],
            ),
        ],
        headings: vec![
            Heading::new("overview", "Getting Started"),
            Heading::new("colors", "Brand Palette"),
            Heading::new("colors", "Neutral Palette"),
            Heading::new("typography", "Type Scale"),
            Heading::new("buttons", "Button States"),
        ],
        tokens: vec![
            TokenEntry::new("--color-deep-blue", "#00064f"),
            TokenEntry::new("--color-accent", "#ff5a5f"),
            TokenEntry::new("--color-surface", "#f7f7f9"),
            TokenEntry::new("--font-family-base", "Inter, sans-serif"),
            TokenEntry::new("--spacing-md", "16px"),
            TokenEntry::new("--radius-card", "12px"),
        ],
        component_groups: vec![
            ComponentEntry::with_terms("buttons", "Primary Buttons", "primary buttons button"),
            ComponentEntry::with_terms("buttons", "Secondary Buttons", "secondary buttons button"),
            ComponentEntry::with_terms("buttons", "Ghost Buttons", "ghost buttons button"),
            ComponentEntry::new("colors", "Brand Colors"),
            ComponentEntry::new("colors", "Neutral Colors"),
            ComponentEntry::new("typography", "Headings"),
            ComponentEntry::new("typography", "Body Text"),
        ],
        components: vec![
            ComponentEntry::with_terms("cards", "Explore Cards", "explore cards card"),
            ComponentEntry::with_terms("accordion", "Accordion", "accordion collapse expand"),
            ComponentEntry::with_terms("calendar", "Calendar", "calendar date picker booking"),
        ],
        has_booking_widget: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_surface::{InMemorySurface, RecordingNotifier};
    use vitrine_testing::test_clock;

    fn site_for(manifest: ContentManifest) -> Site {
        Site::new(
            manifest,
            Arc::new(InMemorySurface::default()),
            Arc::new(RecordingNotifier::default()),
            Arc::new(test_clock()),
        )
    }

    #[test]
    fn full_page_gets_all_three_stores() {
        let site = site_for(design_system_manifest());
        assert!(site.calendar().is_some());
        assert!(site.booking().is_some());
        assert!(!site.index().is_empty());
    }

    #[test]
    fn page_without_demo_widgets_skips_their_stores() {
        let mut manifest = design_system_manifest();
        manifest.components.retain(|c| c.name != "Calendar");
        manifest.has_booking_widget = false;

        let site = site_for(manifest);
        assert!(site.calendar().is_none());
        assert!(site.booking().is_none());
    }

    #[test]
    fn manifest_indexes_every_category() {
        let manifest = design_system_manifest();
        let index = SearchIndex::build(&manifest);
        // 8 nav links, 5 headings, 6 tokens, 7 groups, 3 components.
        assert_eq!(index.len(), 29);
    }
}
