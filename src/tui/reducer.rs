use tracing::trace;

use super::action::Action;
use super::effects::Effect;
use super::state::AppState;

use crate::tui::reducers::{reduce_data_loading, reduce_navigation};

/// Pure state reducer - like Redux reducer
///
/// Takes current state and an action, returns new state and an effect.
/// No I/O happens here; fetches are described by `Effect::Fetch` and run by
/// the runtime.
///
/// Ownership is passed through the sub-reducer chain to avoid cloning:
/// - Each sub-reducer returns Ok((state, effect)) if it handled the action
/// - Or Err(state) to pass ownership back for the next reducer to try
pub fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
    trace!("REDUCE: {:?}", action);

    let state = match reduce_navigation(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    let state = match reduce_data_loading(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    match action {
        Action::UpdateTerminalWidth(width) => {
            let mut new_state = state;
            new_state.system.terminal_width = width;
            (new_state, Effect::None)
        }

        // Quit is handled by the main loop
        _ => (state, Effect::None),
    }
}
