//! Calendar feature actions.

use chrono::NaiveDate;

/// Everything that can happen to the calendar widget
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CalendarAction {
    /// Advance to the next month (wraps December into January)
    NextMonth,

    /// Go back one month (wraps January into December)
    PrevMonth,

    /// A day cell was clicked
    SelectDay {
        /// The clicked date
        date: NaiveDate,
    },
}
