//! Ticket booking widget for the documentation site's demo calendar.
//!
//! Four fixed ticket categories, a quantity ledger with stepper-style
//! adjustment (clamped at zero), an exact cents-based cost summary and a
//! simulated confirmation flow: confirming a non-empty order enters a
//! `Processing` phase, waits out a fixed delay and returns to `Ready` with
//! a success notification. No order ever leaves the page.

mod actions;
mod environment;
mod reducer;
mod types;

pub use actions::BookingAction;
pub use environment::BookingEnvironment;
pub use reducer::BookingReducer;
pub use types::{
    BookingLedger, BookingPhase, BookingState, BookingSummary, SummaryLine, TicketCategory,
};
