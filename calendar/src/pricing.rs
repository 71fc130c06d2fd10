//! Per-date ticket pricing.
//!
//! A small hard-coded table of special prices for 2025, with a standard
//! rate for every other day. Lookups never fail: a date without a special
//! entry gets the standard price, marked as not special.

use std::collections::HashMap;

use chrono::NaiveDate;
use vitrine_core::Money;

/// Standard adult day rate, $29.95
pub const STANDARD_PRICE: Money = Money::from_cents(2995);

/// Price for one date
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingRecord {
    /// Adult price for the day
    pub price: Money,

    /// Whether this is a special (promotional) rate
    pub special: bool,
}

/// Special-price lookup keyed by date
#[derive(Clone, Debug, Default)]
pub struct PricingTable {
    special: HashMap<NaiveDate, Money>,
}

impl PricingTable {
    /// The 2025 promotional calendar
    #[must_use]
    pub fn for_2025() -> Self {
        #[rustfmt::skip]
        const SPECIALS: &[(u32, u32, u64)] = &[
            (1, 3, 2250), (1, 11, 2495), (1, 19, 2300), (1, 27, 2550),
            (2, 5, 2600), (2, 14, 2400), (2, 21, 2395), (2, 28, 2595),
            (3, 7, 2450), (3, 15, 2650), (3, 23, 2295), (3, 30, 2500),
            (4, 4, 2350), (4, 12, 2400), (4, 18, 2695), (4, 26, 2200),
            (5, 2, 2550), (5, 9, 2495), (5, 17, 2350), (5, 25, 2600),
            (6, 6, 2500), (6, 13, 2450), (6, 20, 2500), (6, 22, 2500), (6, 29, 2395),
            (7, 5, 2650), (7, 11, 2400), (7, 19, 2595), (7, 26, 2300),
            (8, 1, 2250), (8, 8, 2550), (8, 16, 2495), (8, 24, 2600), (8, 31, 2350),
            (9, 6, 2400), (9, 14, 2595), (9, 21, 2395), (9, 28, 2650),
            (10, 3, 2500), (10, 10, 2450), (10, 18, 2295), (10, 25, 2550), (10, 31, 2000),
            (11, 7, 2350), (11, 15, 2595), (11, 22, 2400), (11, 29, 2600),
            (12, 5, 2495), (12, 12, 2300), (12, 19, 2550), (12, 26, 2250), (12, 31, 1995),
        ];

        let special = SPECIALS
            .iter()
            .filter_map(|&(month, day, cents)| {
                NaiveDate::from_ymd_opt(2025, month, day)
                    .map(|date| (date, Money::from_cents(cents)))
            })
            .collect();

        Self { special }
    }

    /// Price for a date; standard rate when no special entry exists
    #[must_use]
    pub fn price_for(&self, date: NaiveDate) -> PricingRecord {
        self.special.get(&date).map_or(
            PricingRecord {
                price: STANDARD_PRICE,
                special: false,
            },
            |&price| PricingRecord {
                price,
                special: true,
            },
        )
    }

    /// Number of special-price dates
    #[must_use]
    pub fn special_count(&self) -> usize {
        self.special.len()
    }
}
