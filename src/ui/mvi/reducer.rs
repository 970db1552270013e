use super::intent::Intent;
use super::state::UiState;

/// Pure state transition: `(state, intent) -> state`.
///
/// Reducers are the only place state changes. Side effects such as
/// scheduling a deadline or handing a payload to the mail worker happen at
/// the dispatch site, keyed off the state the reducer returned.
pub trait Reducer {
    type State: UiState;

    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
