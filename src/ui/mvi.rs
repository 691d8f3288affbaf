//! Model-View-Intent primitives.
//!
//! All interactive features (wizard, assistant) follow the same
//! unidirectional flow: an intent describes what happened, a pure reducer
//! folds it into a new state, and the view renders from state alone.

/// Marker trait for feature state.
///
/// State is cloned to produce successors and compared to detect changes;
/// it must carry everything its view needs.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for user actions and system events a reducer consumes.
pub trait Intent: Send + 'static {}

/// Folds intents into state.
///
/// `reduce` must be a pure function: no I/O, no clocks, no randomness.
/// Anything impure (canned replies, voucher references, timestamps) is
/// resolved by the caller and passed in through the intent.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
