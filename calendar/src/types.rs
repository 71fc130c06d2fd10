//! Calendar feature state.

use chrono::NaiveDate;

/// Month names as rendered in the calendar title
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The displayed month and the current selection
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarState {
    /// Displayed year
    pub year: i32,

    /// Displayed month, zero-based (January is 0)
    pub month0: u32,

    /// Selected date, if any; always within the displayed month
    pub selected: Option<NaiveDate>,
}

impl CalendarState {
    /// State showing the given month with no selection
    #[must_use]
    pub const fn new(year: i32, month0: u32) -> Self {
        Self {
            year,
            month0,
            selected: None,
        }
    }

    /// State showing the month containing `today`
    #[must_use]
    pub fn showing(today: NaiveDate) -> Self {
        use chrono::Datelike;
        Self::new(today.year(), today.month0())
    }

    /// Title as rendered above the grid ("June 2025")
    #[must_use]
    pub fn title(&self) -> String {
        let name = MONTH_NAMES
            .get(self.month0 as usize)
            .copied()
            .unwrap_or("Unknown");
        format!("{name} {}", self.year)
    }
}
