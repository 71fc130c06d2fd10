//! Booking feature environment.

use std::sync::Arc;
use std::time::Duration;

use vitrine_surface::Notifier;

/// Simulated processing time for the demo confirmation
pub const DEFAULT_CONFIRMATION_DELAY: Duration = Duration::from_millis(2000);

/// Dependencies of the booking reducer
#[derive(Clone)]
pub struct BookingEnvironment {
    /// Transient user feedback (validation and success messages)
    pub notifier: Arc<dyn Notifier>,

    /// How long the simulated confirmation takes
    pub confirmation_delay: Duration,
}

impl BookingEnvironment {
    /// Create an environment with the default confirmation delay
    #[must_use]
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            notifier,
            confirmation_delay: DEFAULT_CONFIRMATION_DELAY,
        }
    }

    /// Override the confirmation delay (tests use short delays)
    #[must_use]
    pub const fn with_confirmation_delay(mut self, delay: Duration) -> Self {
        self.confirmation_delay = delay;
        self
    }
}
