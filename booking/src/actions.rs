//! Booking feature actions.

use crate::types::TicketCategory;

/// Everything that can happen to the booking widget
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BookingAction {
    /// A stepper button was pressed
    Adjust {
        /// Category being adjusted
        category: TicketCategory,
        /// Signed step, usually plus or minus one
        delta: i32,
    },

    /// The confirm button was pressed
    ConfirmRequested,

    /// The simulated processing delay elapsed
    ConfirmResolved,
}
