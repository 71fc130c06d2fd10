//! Booking calendar for the documentation site's demo widget.
//!
//! A month view with Monday-first weeks, per-date pricing and single-date
//! selection. Rendering is a pure projection: [`month_grid`] turns a
//! `(year, month)` pair plus the [`PricingTable`] into a flat list of
//! [`DayCell`] values whose length is always a multiple of seven. The
//! [`CalendarReducer`] owns month navigation and selection; month changes
//! wrap across year boundaries and clear any selection.
//!
//! Prices outside the hard-coded special table fall back to the standard
//! rate, so every selectable day shows a price.

pub mod grid;
pub mod pricing;

mod actions;
mod environment;
mod reducer;
mod types;

pub use actions::CalendarAction;
pub use environment::CalendarEnvironment;
pub use grid::{DayCell, MonthRelation, month_grid};
pub use pricing::{PricingRecord, PricingTable, STANDARD_PRICE};
pub use reducer::CalendarReducer;
pub use types::CalendarState;
