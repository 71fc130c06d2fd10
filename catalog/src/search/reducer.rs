//! Search reducer: keystrokes in, surface writes and notifications out.

use vitrine_core::{Effect, Reducer, SmallVec, smallvec};

use crate::index::SearchQuery;
use crate::navigation::{NavigationPlan, reset_navigation};

use super::actions::SearchAction;
use super::environment::SearchEnvironment;
use super::types::SearchState;

/// The debounced keystroke-to-filter state machine
#[derive(Clone)]
pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Action = SearchAction;
    type Environment = SearchEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            SearchAction::InputChanged { text } => {
                let generation = state.supersede();
                tracing::trace!(generation, "input changed, debounce scheduled");
                smallvec![Effect::delay(
                    env.debounce,
                    SearchAction::DebounceElapsed { generation, text },
                )]
            },

            SearchAction::DebounceElapsed { generation, text } => {
                if generation != state.generation {
                    tracing::trace!(
                        generation,
                        current = state.generation,
                        "stale debounce discarded"
                    );
                    return smallvec![Effect::None];
                }
                commit(state, &text, env);
                smallvec![Effect::None]
            },

            SearchAction::EscapePressed => {
                // Immediate reset; the bump also invalidates any commit
                // still in flight.
                state.supersede();
                state.active_query = None;
                state.last_match_count = None;
                reset_navigation(&env.manifest, env.surface.as_ref());
                smallvec![Effect::None]
            },
        }
    }
}

/// Apply the current input text to the sidebar
fn commit(state: &mut SearchState, text: &str, env: &SearchEnvironment) {
    match SearchQuery::parse(text) {
        None => {
            // Cleared field: restore everything, no notification.
            state.active_query = None;
            state.last_match_count = None;
            reset_navigation(&env.manifest, env.surface.as_ref());
        },
        Some(query) => {
            let matches = env.index.filter(&query);
            let plan = NavigationPlan::for_matches(&matches, &env.manifest);
            plan.apply(&env.manifest, env.surface.as_ref());

            let message = match matches.len() {
                0 => "No results found".to_owned(),
                1 => "1 result found".to_owned(),
                n => format!("{n} results found"),
            };
            env.notifier.notify(&message);

            state.last_match_count = Some(matches.len());
            state.active_query = Some(query);
        },
    }
}
