//! Calendar feature environment.

use std::sync::Arc;

use vitrine_core::environment::Clock;
use vitrine_surface::Notifier;

use crate::pricing::PricingTable;

/// Dependencies of the calendar reducer
#[derive(Clone)]
pub struct CalendarEnvironment {
    /// Source of "today" for past-date checks
    pub clock: Arc<dyn Clock>,

    /// Per-date prices for the rendered grid
    pub pricing: Arc<PricingTable>,

    /// Transient feedback on selection
    pub notifier: Arc<dyn Notifier>,
}

impl CalendarEnvironment {
    /// Create a calendar environment
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock>,
        pricing: Arc<PricingTable>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            clock,
            pricing,
            notifier,
        }
    }
}
