//! Calendar reducer: month navigation and date selection.

use chrono::Datelike;
use vitrine_core::{Effect, Reducer, SmallVec, smallvec};

use super::actions::CalendarAction;
use super::environment::CalendarEnvironment;
use super::types::CalendarState;

/// Month navigation and single-date selection
#[derive(Clone)]
pub struct CalendarReducer;

impl Reducer for CalendarReducer {
    type State = CalendarState;
    type Action = CalendarAction;
    type Environment = CalendarEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            CalendarAction::NextMonth => {
                if state.month0 == 11 {
                    state.month0 = 0;
                    state.year += 1;
                } else {
                    state.month0 += 1;
                }
                state.selected = None;
                smallvec![Effect::None]
            },

            CalendarAction::PrevMonth => {
                if state.month0 == 0 {
                    state.month0 = 11;
                    state.year -= 1;
                } else {
                    state.month0 -= 1;
                }
                state.selected = None;
                smallvec![Effect::None]
            },

            CalendarAction::SelectDay { date } => {
                // Pad cells and past days are not selectable; the reducer
                // re-checks rather than trusting the view.
                let in_month = date.year() == state.year && date.month0() == state.month0;
                let today = env.clock.today();
                if !in_month || date < today {
                    tracing::trace!(%date, "selection rejected");
                    return smallvec![Effect::None];
                }

                state.selected = Some(date);
                let message = format!("Selected: {}", date.format("%A, %B %-d, %Y"));
                env.notifier.notify(&message);
                smallvec![Effect::None]
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::PricingTable;
    use chrono::NaiveDate;
    use std::sync::Arc;
    use vitrine_surface::RecordingNotifier;
    use vitrine_testing::{ReducerTest, assertions, test_clock};

    fn environment() -> (CalendarEnvironment, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::default());
        let env = CalendarEnvironment::new(
            Arc::new(test_clock()),
            Arc::new(PricingTable::for_2025()),
            notifier.clone(),
        );
        (env, notifier)
    }

    #[allow(clippy::unwrap_used)] // Test code
    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn next_month_wraps_december_into_january() {
        let (env, _) = environment();
        ReducerTest::new(CalendarReducer)
            .with_env(env)
            .given_state(CalendarState::new(2025, 11))
            .when_action(CalendarAction::NextMonth)
            .then_state(|state| {
                assert_eq!((state.year, state.month0), (2026, 0));
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn prev_month_wraps_january_into_december() {
        let (env, _) = environment();
        ReducerTest::new(CalendarReducer)
            .with_env(env)
            .given_state(CalendarState::new(2025, 0))
            .when_action(CalendarAction::PrevMonth)
            .then_state(|state| {
                assert_eq!((state.year, state.month0), (2024, 11));
            })
            .run();
    }

    #[test]
    fn month_change_clears_selection() {
        let (env, _) = environment();
        let mut state = CalendarState::new(2025, 5);
        state.selected = Some(date(2025, 6, 20));

        let _ = CalendarReducer.reduce(&mut state, CalendarAction::NextMonth, &env);
        assert!(state.selected.is_none());
    }

    #[test]
    fn selecting_a_future_day_notifies() {
        // test_clock pins today at 2025-06-01.
        let (env, notifier) = environment();
        let mut state = CalendarState::new(2025, 5);

        let _ = CalendarReducer.reduce(
            &mut state,
            CalendarAction::SelectDay {
                date: date(2025, 6, 14),
            },
            &env,
        );
        assert_eq!(state.selected, Some(date(2025, 6, 14)));
        assert_eq!(
            notifier.last().as_deref(),
            Some("Selected: Saturday, June 14, 2025")
        );
    }

    #[test]
    fn selecting_today_is_allowed() {
        let (env, _) = environment();
        let mut state = CalendarState::new(2025, 5);

        let _ = CalendarReducer.reduce(
            &mut state,
            CalendarAction::SelectDay {
                date: date(2025, 6, 1),
            },
            &env,
        );
        assert_eq!(state.selected, Some(date(2025, 6, 1)));
    }

    #[test]
    fn past_and_out_of_month_selections_are_rejected() {
        let (env, notifier) = environment();
        let mut state = CalendarState::new(2025, 5);

        let _ = CalendarReducer.reduce(
            &mut state,
            CalendarAction::SelectDay {
                date: date(2025, 5, 20),
            },
            &env,
        );
        let _ = CalendarReducer.reduce(
            &mut state,
            CalendarAction::SelectDay {
                date: date(2025, 7, 4),
            },
            &env,
        );
        assert!(state.selected.is_none());
        assert!(notifier.messages().is_empty());
    }
}
