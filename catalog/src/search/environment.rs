//! Search feature environment.

use std::sync::Arc;
use std::time::Duration;

use vitrine_surface::{DocumentSurface, Notifier};

use crate::index::SearchIndex;
use crate::manifest::ContentManifest;

/// Quiet period between the last keystroke and the filter commit
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(150);

/// Dependencies of the search reducer
#[derive(Clone)]
pub struct SearchEnvironment {
    /// Immutable index built at page load
    pub index: Arc<SearchIndex>,

    /// Manifest the navigation plan resolves against
    pub manifest: Arc<ContentManifest>,

    /// Where visibility and class writes land
    pub surface: Arc<dyn DocumentSurface>,

    /// Transient user feedback ("3 results found")
    pub notifier: Arc<dyn Notifier>,

    /// Debounce quiet period
    pub debounce: Duration,
}

impl SearchEnvironment {
    /// Create an environment with the default debounce period
    #[must_use]
    pub fn new(
        index: Arc<SearchIndex>,
        manifest: Arc<ContentManifest>,
        surface: Arc<dyn DocumentSurface>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            index,
            manifest,
            surface,
            notifier,
            debounce: DEFAULT_DEBOUNCE,
        }
    }

    /// Override the debounce period (tests use short delays)
    #[must_use]
    pub const fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }
}
