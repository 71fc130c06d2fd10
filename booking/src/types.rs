//! Ticket categories, the quantity ledger and the cost summary.

use serde::{Deserialize, Serialize};
use vitrine_core::Money;

/// The four fixed ticket categories, in display order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketCategory {
    /// Full-price adult ticket
    Adults,
    /// Ages 4 through 13
    Child,
    /// Concession rate
    Concession,
    /// Ages 3 and under, free of charge
    Infant,
}

impl TicketCategory {
    /// All categories in display order
    pub const ALL: [Self; 4] = [Self::Adults, Self::Child, Self::Concession, Self::Infant];

    /// Display label as rendered in the widget
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Adults => "Adults",
            Self::Child => "Child (4-13 Years)",
            Self::Concession => "Concession",
            Self::Infant => "Infants (3 & Under)",
        }
    }

    /// Price per ticket
    #[must_use]
    pub const fn unit_price(self) -> Money {
        match self {
            Self::Adults => Money::from_cents(2995),
            Self::Child => Money::from_cents(1500),
            Self::Concession => Money::from_cents(2395),
            Self::Infant => Money::ZERO,
        }
    }
}

/// Quantities per category, all starting at zero
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingLedger {
    quantities: [u32; 4],
}

impl BookingLedger {
    const fn index(category: TicketCategory) -> usize {
        match category {
            TicketCategory::Adults => 0,
            TicketCategory::Child => 1,
            TicketCategory::Concession => 2,
            TicketCategory::Infant => 3,
        }
    }

    /// Quantity for a category
    #[must_use]
    pub const fn quantity(&self, category: TicketCategory) -> u32 {
        self.quantities[Self::index(category)]
    }

    /// Adjust a category by a signed step, clamping at zero
    ///
    /// Decrementing an empty category is a quiet no-op, never an error and
    /// never a negative count.
    pub fn adjust(&mut self, category: TicketCategory, delta: i32) {
        let slot = &mut self.quantities[Self::index(category)];
        *slot = if delta.is_negative() {
            slot.saturating_sub(delta.unsigned_abs())
        } else {
            slot.saturating_add(delta.unsigned_abs())
        };
    }

    /// Total tickets across all categories
    #[must_use]
    pub fn total_count(&self) -> u32 {
        self.quantities.iter().sum()
    }

    /// Exact total cost in cents
    #[must_use]
    pub fn total_cost(&self) -> Money {
        TicketCategory::ALL
            .iter()
            .fold(Money::ZERO, |total, &category| {
                total.add(category.unit_price().multiply(self.quantity(category)))
            })
    }

    /// Whether no tickets are selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_count() == 0
    }

    /// Project the ledger into its display summary
    #[must_use]
    pub fn summary(&self) -> BookingSummary {
        let lines = TicketCategory::ALL
            .iter()
            .filter(|&&category| self.quantity(category) > 0)
            .map(|&category| SummaryLine {
                category,
                quantity: self.quantity(category),
                cost: category.unit_price().multiply(self.quantity(category)),
            })
            .collect();

        BookingSummary {
            total_count: self.total_count(),
            total_cost: self.total_cost(),
            lines,
        }
    }
}

/// One line of the order breakdown
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SummaryLine {
    /// Ticket category
    pub category: TicketCategory,

    /// Number of tickets
    pub quantity: u32,

    /// Line cost (quantity times unit price)
    pub cost: Money,
}

impl SummaryLine {
    /// Breakdown text as rendered ("2 x Adults")
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} x {}", self.quantity, self.category.label())
    }
}

/// Display projection of the ledger
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingSummary {
    /// Total tickets
    pub total_count: u32,

    /// Total cost
    pub total_cost: Money,

    /// Non-zero categories in display order
    pub lines: Vec<SummaryLine>,
}

impl BookingSummary {
    /// Whether the placeholder ("no tickets selected") shows instead of lines
    #[must_use]
    pub fn show_placeholder(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Confirmation phase of the widget
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BookingPhase {
    /// Accepting adjustments and confirmation requests
    #[default]
    Ready,

    /// A confirmation is in flight; further requests are ignored
    Processing,
}

/// Full state of the booking widget
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingState {
    /// Quantities per category
    pub ledger: BookingLedger,

    /// Confirmation phase
    pub phase: BookingPhase,
}

impl BookingState {
    /// Whether the widget accepts a confirmation request
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self.phase, BookingPhase::Ready)
    }
}
