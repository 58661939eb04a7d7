use tracing::{debug, trace};

use crate::tui::action::Action;
use crate::tui::effects::Effect;
use crate::tui::reducers::start_refresh;
use crate::tui::state::AppState;
use crate::tui::types::Tab;
use crate::tui::widgets::card_grid::columns_for_width;

/// Handle tab switching and content scrolling
///
/// Returns Ok((new_state, effect)) if the action was handled,
/// or Err(state) to pass ownership back to the caller.
pub fn reduce_navigation(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::NavigateTab(tab) => Ok(activate_tab(state, *tab)),
        Action::NavigateTabLeft => {
            let tab = state.navigation.current_tab.prev();
            Ok(activate_tab(state, tab))
        }
        Action::NavigateTabRight => {
            let tab = state.navigation.current_tab.next();
            Ok(activate_tab(state, tab))
        }
        Action::ScrollDown(rows) => Ok(scroll_by(state, i32::from(*rows))),
        Action::ScrollUp(rows) => Ok(scroll_by(state, -i32::from(*rows))),
        Action::ScrollToTop => {
            let mut new_state = state;
            let tab = new_state.navigation.current_tab;
            new_state.ui.set_scroll_offset(tab, 0);
            Ok((new_state, Effect::None))
        }
        _ => Err(state),
    }
}

/// Switch to a tab, refreshing its panel when the tab guard asks for it
///
/// Standings tabs refetch only while they have nothing good to show, so
/// flipping back and forth between populated tabs costs no requests. News
/// is left to the timer and the refresh key.
fn activate_tab(state: AppState, tab: Tab) -> (AppState, Effect) {
    trace!("Navigating to tab: {:?}", tab);
    let mut new_state = state;
    new_state.navigation.current_tab = tab;

    let panel = tab.panel();
    if panel.guards_tab_activation() && new_state.panels.needs_refresh_on_activate(panel) {
        debug!(
            "NAV: {} tab activated while {} - refreshing",
            tab.label(),
            new_state.panels.state_name(panel)
        );
        let effect = start_refresh(&mut new_state, panel);
        return (new_state, effect);
    }

    (new_state, Effect::None)
}

fn scroll_by(state: AppState, delta: i32) -> (AppState, Effect) {
    let mut new_state = state;
    let tab = new_state.navigation.current_tab;

    let count = new_state.panels.item_count(tab.panel());
    let columns = columns_for_width(new_state.system.terminal_width);
    let rows = count.div_ceil(columns);
    let max_offset = i32::try_from(rows.saturating_sub(1)).unwrap_or(i32::MAX);

    let current = i32::from(new_state.ui.scroll_offset(tab));
    let offset = (current + delta).clamp(0, max_offset.min(i32::from(u16::MAX)));
    new_state.ui.set_scroll_offset(tab, offset as u16);

    (new_state, Effect::None)
}
