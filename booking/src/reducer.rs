//! Booking reducer: quantity adjustment and the simulated confirm flow.

use vitrine_core::{Effect, Reducer, SmallVec, smallvec};

use super::actions::BookingAction;
use super::environment::BookingEnvironment;
use super::types::{BookingPhase, BookingState};

/// Message shown when confirming an empty order
const EMPTY_ORDER_MESSAGE: &str = "Please select at least one ticket to continue.";

/// Message shown when the simulated confirmation resolves
const SUCCESS_MESSAGE: &str = "Booking successful! This is a demo - no actual booking was made.";

/// Quantity ledger plus Ready/Processing confirmation machine
#[derive(Clone)]
pub struct BookingReducer;

impl Reducer for BookingReducer {
    type State = BookingState;
    type Action = BookingAction;
    type Environment = BookingEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            BookingAction::Adjust { category, delta } => {
                state.ledger.adjust(category, delta);
                smallvec![Effect::None]
            },

            BookingAction::ConfirmRequested => {
                if !state.is_ready() {
                    // A confirmation is already in flight.
                    return smallvec![Effect::None];
                }
                if state.ledger.is_empty() {
                    env.notifier.notify(EMPTY_ORDER_MESSAGE);
                    return smallvec![Effect::None];
                }

                state.phase = BookingPhase::Processing;
                tracing::debug!(
                    tickets = state.ledger.total_count(),
                    total = %state.ledger.total_cost(),
                    "booking confirmation started"
                );
                smallvec![Effect::delay(
                    env.confirmation_delay,
                    BookingAction::ConfirmResolved,
                )]
            },

            BookingAction::ConfirmResolved => {
                state.phase = BookingPhase::Ready;
                env.notifier.notify(SUCCESS_MESSAGE);
                smallvec![Effect::None]
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TicketCategory;
    use std::sync::Arc;
    use std::time::Duration;
    use vitrine_surface::RecordingNotifier;
    use vitrine_testing::{ReducerTest, assertions};

    fn environment() -> (BookingEnvironment, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::default());
        let env = BookingEnvironment::new(notifier.clone())
            .with_confirmation_delay(Duration::from_millis(1));
        (env, notifier)
    }

    #[test]
    fn confirm_with_empty_order_warns_and_stays_ready() {
        let (env, notifier) = environment();
        let mut state = BookingState::default();

        let effects = BookingReducer.reduce(&mut state, BookingAction::ConfirmRequested, &env);
        assertions::assert_no_effects(&effects);
        assert!(state.is_ready());
        assert_eq!(
            notifier.last().as_deref(),
            Some("Please select at least one ticket to continue.")
        );
    }

    #[test]
    fn confirm_with_tickets_enters_processing_and_schedules_resolution() {
        let (env, _) = environment();
        let mut state = BookingState::default();
        state.ledger.adjust(TicketCategory::Adults, 2);

        ReducerTest::new(BookingReducer)
            .with_env(env)
            .given_state(state)
            .when_action(BookingAction::ConfirmRequested)
            .then_state(|state| {
                assert_eq!(state.phase, BookingPhase::Processing);
            })
            .then_effects(|effects| {
                assertions::assert_has_delay_effect(effects);
                assertions::assert_effects_count(effects, 1);
            })
            .run();
    }

    #[test]
    fn confirm_while_processing_is_ignored() {
        let (env, notifier) = environment();
        let mut state = BookingState::default();
        state.ledger.adjust(TicketCategory::Adults, 1);

        let _ = BookingReducer.reduce(&mut state, BookingAction::ConfirmRequested, &env);
        assert_eq!(state.phase, BookingPhase::Processing);

        // Second press while processing schedules nothing and warns nothing.
        let effects = BookingReducer.reduce(&mut state, BookingAction::ConfirmRequested, &env);
        assertions::assert_no_effects(&effects);
        assert!(notifier.messages().is_empty());
    }

    #[test]
    fn resolution_returns_to_ready_with_success_message() {
        let (env, notifier) = environment();
        let mut state = BookingState::default();
        state.ledger.adjust(TicketCategory::Child, 1);

        let _ = BookingReducer.reduce(&mut state, BookingAction::ConfirmRequested, &env);
        let _ = BookingReducer.reduce(&mut state, BookingAction::ConfirmResolved, &env);

        assert!(state.is_ready());
        assert_eq!(
            notifier.last().as_deref(),
            Some("Booking successful! This is a demo - no actual booking was made.")
        );
        // Quantities survive the confirmation.
        assert_eq!(state.ledger.quantity(TicketCategory::Child), 1);
    }

    #[test]
    fn adjustments_flow_through_the_ledger() {
        let (env, _) = environment();
        let mut state = BookingState::default();

        let _ = BookingReducer.reduce(
            &mut state,
            BookingAction::Adjust {
                category: TicketCategory::Adults,
                delta: 1,
            },
            &env,
        );
        let _ = BookingReducer.reduce(
            &mut state,
            BookingAction::Adjust {
                category: TicketCategory::Adults,
                delta: -1,
            },
            &env,
        );
        let _ = BookingReducer.reduce(
            &mut state,
            BookingAction::Adjust {
                category: TicketCategory::Infant,
                delta: -1,
            },
            &env,
        );
        assert!(state.ledger.is_empty());
    }
}
