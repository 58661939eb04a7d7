/// Keyboard event to action mapping
///
/// This module handles converting crossterm KeyEvents into Actions.
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::trace;

use super::action::Action;
use super::state::AppState;
use super::types::Tab;

/// Card rows moved by PageUp/PageDown
const PAGE_SCROLL_ROWS: u16 = 3;

/// Handle global keys that work regardless of tab
fn handle_global_keys(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::RefreshCurrent),
        _ => None,
    }
}

/// Handle direct tab switching via number keys (1-3)
fn handle_number_keys(key_code: KeyCode) -> Option<Action> {
    let KeyCode::Char(c) = key_code else {
        return None;
    };
    Tab::all()
        .into_iter()
        .find(|tab| tab.shortcut() == c)
        .map(Action::NavigateTab)
}

fn handle_tab_bar_navigation(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Left => Some(Action::NavigateTabLeft),
        KeyCode::Right => Some(Action::NavigateTabRight),
        _ => None,
    }
}

fn handle_scroll_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Down => Some(Action::ScrollDown(1)),
        KeyCode::Up => Some(Action::ScrollUp(1)),
        KeyCode::PageDown => Some(Action::ScrollDown(PAGE_SCROLL_ROWS)),
        KeyCode::PageUp => Some(Action::ScrollUp(PAGE_SCROLL_ROWS)),
        KeyCode::Home => Some(Action::ScrollToTop),
        _ => None,
    }
}

/// Convert a KeyEvent into an Action based on current application state
pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    trace!("KEY: {:?} (tab={:?})", key.code, state.navigation.current_tab);

    handle_global_keys(key)
        .or_else(|| handle_number_keys(key.code))
        .or_else(|| handle_tab_bar_navigation(key.code))
        .or_else(|| handle_scroll_keys(key.code))
}
