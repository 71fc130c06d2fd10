//! Pure month-grid projection.
//!
//! Weeks run Monday through Sunday. The grid pads the first week with the
//! previous month's tail and the last week with the next month's head, so
//! its length is always a multiple of seven and the trailing pad is always
//! shorter than a full week.

use chrono::{Datelike, NaiveDate};
use vitrine_core::Money;

use crate::pricing::PricingTable;

/// Which month a grid cell belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MonthRelation {
    /// Leading pad from the previous month
    Previous,
    /// A day of the displayed month
    Current,
    /// Trailing pad from the next month
    Next,
}

/// One cell of the rendered month grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayCell {
    /// Day-of-month number as displayed
    pub day_number: u32,

    /// Whether the cell belongs to the displayed month or a pad
    pub relation: MonthRelation,

    /// Strictly before today (displayed-month cells only)
    pub is_past: bool,

    /// Whether clicking the cell selects a date
    pub is_selectable: bool,

    /// Day price; pad cells and past days carry none
    pub price: Option<Money>,

    /// Whether the price is a promotional rate
    pub is_special: bool,

    /// Whether this cell is the currently selected date
    pub is_selected: bool,
}

impl DayCell {
    const fn pad(day_number: u32, relation: MonthRelation) -> Self {
        Self {
            day_number,
            relation,
            is_past: false,
            is_selectable: false,
            price: None,
            is_special: false,
            is_selected: false,
        }
    }
}

/// Number of days in a month
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next.and_then(|d| d.pred_opt()).map_or(30, |d| d.day())
}

/// Project a month into grid cells
///
/// `month0` is zero-based (January is 0), matching the navigation state.
/// Pad cells are never selectable and carry no price; displayed-month cells
/// before `today` are visible but not selectable.
#[must_use]
pub fn month_grid(
    year: i32,
    month0: u32,
    selected: Option<NaiveDate>,
    today: NaiveDate,
    pricing: &PricingTable,
) -> Vec<DayCell> {
    let month = month0 + 1;
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    let leading = first.weekday().num_days_from_monday();
    let day_count = days_in_month(year, month);

    let mut cells = Vec::with_capacity(42);

    // Tail of the previous month, in ascending order.
    let (prev_year, prev_month) = if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    };
    let prev_days = days_in_month(prev_year, prev_month);
    for offset in (0..leading).rev() {
        cells.push(DayCell::pad(prev_days - offset, MonthRelation::Previous));
    }

    for day in 1..=day_count {
        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            continue;
        };
        let is_past = date < today;
        // Past days show neither a price nor a special marker.
        let record = (!is_past).then(|| pricing.price_for(date));
        cells.push(DayCell {
            day_number: day,
            relation: MonthRelation::Current,
            is_past,
            is_selectable: !is_past,
            price: record.map(|r| r.price),
            is_special: record.is_some_and(|r| r.special),
            is_selected: selected == Some(date),
        });
    }

    // Head of the next month, up to the next full week.
    let trailing = u32::try_from((7 - cells.len() % 7) % 7).unwrap_or(0);
    for day in 1..=trailing {
        cells.push(DayCell::pad(day, MonthRelation::Next));
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[allow(clippy::unwrap_used)] // Test code
    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn february_2025_grid_shape() {
        // Feb 1, 2025 is a Saturday: five leading pad cells, then 28 days,
        // then two trailing cells for a 35-cell grid.
        let pricing = PricingTable::for_2025();
        let cells = month_grid(2025, 1, None, date(2025, 1, 1), &pricing);

        assert_eq!(cells.len(), 35);
        let leading = cells
            .iter()
            .take_while(|c| c.relation == MonthRelation::Previous)
            .count();
        let current = cells
            .iter()
            .filter(|c| c.relation == MonthRelation::Current)
            .count();
        let trailing = cells
            .iter()
            .rev()
            .take_while(|c| c.relation == MonthRelation::Next)
            .count();
        assert_eq!((leading, current, trailing), (5, 28, 2));

        // Leading pad shows the end of January.
        assert_eq!(cells[0].day_number, 27);
        assert_eq!(cells[4].day_number, 31);
        assert_eq!(cells[33].day_number, 1);
    }

    #[test]
    fn past_days_are_visible_but_not_selectable() {
        let pricing = PricingTable::for_2025();
        let today = date(2025, 6, 15);
        let cells = month_grid(2025, 5, None, today, &pricing);

        let day_10 = cells
            .iter()
            .find(|c| c.relation == MonthRelation::Current && c.day_number == 10);
        let day_20 = cells
            .iter()
            .find(|c| c.relation == MonthRelation::Current && c.day_number == 20);
        assert!(matches!(
            day_10,
            Some(c) if c.is_past && !c.is_selectable && c.price.is_none()
        ));
        assert!(matches!(
            day_20,
            Some(c) if !c.is_past && c.is_selectable
        ));
        // Today itself stays selectable.
        let day_15 = cells
            .iter()
            .find(|c| c.relation == MonthRelation::Current && c.day_number == 15);
        assert!(matches!(day_15, Some(c) if c.is_selectable));
    }

    #[test]
    fn special_and_standard_prices_land_on_cells() {
        let pricing = PricingTable::for_2025();
        let cells = month_grid(2025, 9, None, date(2025, 1, 1), &pricing);

        let halloween = cells
            .iter()
            .find(|c| c.relation == MonthRelation::Current && c.day_number == 31);
        assert!(matches!(
            halloween,
            Some(c) if c.is_special && c.price == Some(Money::from_cents(2000))
        ));

        let ordinary = cells
            .iter()
            .find(|c| c.relation == MonthRelation::Current && c.day_number == 1);
        assert!(matches!(
            ordinary,
            Some(c) if !c.is_special && c.price == Some(Money::from_cents(2995))
        ));
    }

    #[test]
    fn selection_marks_exactly_one_cell() {
        let pricing = PricingTable::for_2025();
        let selected = date(2025, 6, 20);
        let cells = month_grid(2025, 5, Some(selected), date(2025, 6, 1), &pricing);
        let marked: Vec<_> = cells.iter().filter(|c| c.is_selected).collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].day_number, 20);
    }

    #[test]
    fn selection_in_another_month_marks_nothing() {
        let pricing = PricingTable::for_2025();
        let selected = date(2025, 6, 20);
        let cells = month_grid(2025, 6, Some(selected), date(2025, 6, 1), &pricing);
        assert!(cells.iter().all(|c| !c.is_selected));
    }

    proptest! {
        #[test]
        fn grid_is_whole_weeks_with_short_trailing(
            year in 2020i32..2030,
            month0 in 0u32..12,
        ) {
            let pricing = PricingTable::for_2025();
            let cells = month_grid(year, month0, None, date(2025, 6, 1), &pricing);

            prop_assert!(!cells.is_empty());
            prop_assert_eq!(cells.len() % 7, 0);

            let trailing = cells
                .iter()
                .rev()
                .take_while(|c| c.relation == MonthRelation::Next)
                .count();
            prop_assert!(trailing < 7);

            // No trailing pad exactly when the month already fills its rows.
            let filled = cells.len() - trailing;
            prop_assert_eq!(trailing == 0, filled % 7 == 0);

            // Pad cells never carry a price and are never selectable.
            for cell in &cells {
                if cell.relation != MonthRelation::Current {
                    prop_assert!(cell.price.is_none());
                    prop_assert!(!cell.is_selectable);
                }
            }
        }
    }
}
