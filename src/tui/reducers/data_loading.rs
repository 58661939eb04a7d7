use std::time::SystemTime;
use tracing::debug;

use crate::error::FetchError;
use crate::panel::PanelKind;
use crate::tui::action::Action;
use crate::tui::effects::Effect;
use crate::tui::state::AppState;
use crate::tui::types::Tab;

/// Handle refresh triggers and fetch results
///
/// Returns Ok((new_state, effect)) if the action was handled,
/// or Err(state) to pass ownership back to the caller.
pub fn reduce_data_loading(
    state: AppState,
    action: &Action,
) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::RefreshPanel(panel) => {
            let mut new_state = state;
            let effect = start_refresh(&mut new_state, *panel);
            Ok((new_state, effect))
        }
        Action::RefreshCurrent => {
            let mut new_state = state;
            let panel = new_state.navigation.current_tab.panel();
            let effect = start_refresh(&mut new_state, panel);
            Ok((new_state, effect))
        }
        Action::RefreshAll => Ok(handle_refresh_all(state)),
        Action::NewsLoaded(token, result) => {
            let mut new_state = state;
            let applied = new_state.panels.news.apply(*token, result.clone());
            Ok(settle(new_state, PanelKind::News, applied, result.as_ref().err()))
        }
        Action::DriversLoaded(token, result) => {
            let mut new_state = state;
            let applied = new_state.panels.drivers.apply(*token, result.clone());
            Ok(settle(new_state, PanelKind::Drivers, applied, result.as_ref().err()))
        }
        Action::ConstructorsLoaded(token, result) => {
            let mut new_state = state;
            let applied = new_state.panels.constructors.apply(*token, result.clone());
            Ok(settle(new_state, PanelKind::Constructors, applied, result.as_ref().err()))
        }
        _ => Err(state),
    }
}

/// Put a panel into Loading and return the fetch that will settle it
///
/// The panel's scroll position goes back to the top since its cards are
/// about to be replaced.
pub fn start_refresh(state: &mut AppState, panel: PanelKind) -> Effect {
    let token = match panel {
        PanelKind::News => state.panels.news.begin_refresh(),
        PanelKind::Drivers => state.panels.drivers.begin_refresh(),
        PanelKind::Constructors => state.panels.constructors.begin_refresh(),
    };
    state.ui.set_scroll_offset(Tab::from(panel), 0);
    Effect::Fetch { panel, token }
}

fn handle_refresh_all(state: AppState) -> (AppState, Effect) {
    debug!("DATA: Refreshing all panels");
    let mut new_state = state;
    let effects = PanelKind::all()
        .into_iter()
        .map(|panel| start_refresh(&mut new_state, panel))
        .collect();
    (new_state, Effect::Batch(effects))
}

fn settle(
    state: AppState,
    panel: PanelKind,
    applied: bool,
    error: Option<&FetchError>,
) -> (AppState, Effect) {
    let mut new_state = state;
    if !applied {
        return (new_state, Effect::None);
    }

    match error {
        None => {
            new_state.system.last_refresh = Some(SystemTime::now());
            if new_state.system.status_is_error {
                // Another panel may still be down
                let still_failed = PanelKind::all()
                    .into_iter()
                    .find(|kind| new_state.panels.has_failed(*kind));
                match still_failed {
                    Some(failed) => new_state
                        .system
                        .set_status_error_message(failed.error_message().to_string()),
                    None => new_state.system.reset_status_message(),
                }
            }
        }
        Some(_) => {
            new_state
                .system
                .set_status_error_message(panel.error_message().to_string());
        }
    }
    (new_state, Effect::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_refresh_all_starts_three_fetches() {
        let (state, effect) =
            reduce_data_loading(AppState::default(), &Action::RefreshAll).unwrap();

        assert_eq!(
            effect.fetched_panels(),
            vec![PanelKind::News, PanelKind::Drivers, PanelKind::Constructors]
        );
        for kind in PanelKind::all() {
            assert_eq!(state.panels.state_name(kind), "Loading");
        }
    }

    #[test]
    fn test_refresh_current_uses_active_tab() {
        let mut state = AppState::default();
        state.navigation.current_tab = Tab::Constructors;

        let (state, effect) = reduce_data_loading(state, &Action::RefreshCurrent).unwrap();
        assert_eq!(effect.fetched_panels(), vec![PanelKind::Constructors]);
        assert_eq!(state.panels.state_name(PanelKind::News), "Idle");
    }

    #[test]
    fn test_refresh_resets_scroll() {
        let mut state = AppState::default();
        state.ui.set_scroll_offset(Tab::News, 3);

        let (state, _) =
            reduce_data_loading(state, &Action::RefreshPanel(PanelKind::News)).unwrap();
        assert_eq!(state.ui.scroll_offset(Tab::News), 0);
    }

    #[test]
    fn test_news_loaded_populates_and_stamps_refresh() {
        let mut state = AppState::default();
        let token = state.panels.news.begin_refresh();

        let action = Action::NewsLoaded(token, Ok(fixtures::create_mock_news()));
        let (state, _) = reduce_data_loading(state, &action).unwrap();

        assert_eq!(state.panels.item_count(PanelKind::News), 3);
        assert!(state.system.last_refresh.is_some());
    }

    #[test]
    fn test_failed_load_sets_error_status() {
        let mut state = AppState::default();
        let token = state.panels.constructors.begin_refresh();

        let action = Action::ConstructorsLoaded(
            token,
            Err(FetchError::Network("connection refused".to_string())),
        );
        let (state, _) = reduce_data_loading(state, &action).unwrap();

        assert_eq!(state.panels.state_name(PanelKind::Constructors), "Error");
        assert!(state.system.status_is_error);
        assert_eq!(
            state.system.status_message.as_deref(),
            Some(PanelKind::Constructors.error_message())
        );
    }

    #[test]
    fn test_stale_load_is_ignored() {
        let mut state = AppState::default();
        let old = state.panels.drivers.begin_refresh();
        let new = state.panels.drivers.begin_refresh();

        let action = Action::DriversLoaded(
            old,
            Err(FetchError::Network("late".to_string())),
        );
        let (state, _) = reduce_data_loading(state, &action).unwrap();
        assert_eq!(state.panels.state_name(PanelKind::Drivers), "Loading");
        assert!(!state.system.status_is_error);

        let action = Action::DriversLoaded(new, Ok(fixtures::create_mock_driver_standings()));
        let (state, _) = reduce_data_loading(state, &action).unwrap();
        assert_eq!(state.panels.state_name(PanelKind::Drivers), "Populated");
    }

    #[test]
    fn test_success_clears_previous_error_status() {
        let mut state = AppState::default();
        state.system.set_status_error_message("Failed".to_string());
        let token = state.panels.news.begin_refresh();

        let (state, _) =
            reduce_data_loading(state, &Action::NewsLoaded(token, Ok(Vec::new()))).unwrap();
        assert!(!state.system.status_is_error);
        assert_eq!(state.panels.state_name(PanelKind::News), "Empty");
    }

    #[test]
    fn test_success_keeps_error_status_while_another_panel_failed() {
        let mut state = AppState::default();
        let news = state.panels.news.begin_refresh();
        let drivers = state.panels.drivers.begin_refresh();

        let action = Action::NewsLoaded(news, Err(FetchError::Decode("bad json".to_string())));
        let (state, _) = reduce_data_loading(state, &action).unwrap();
        let action = Action::DriversLoaded(drivers, Ok(fixtures::create_mock_driver_standings()));
        let (state, _) = reduce_data_loading(state, &action).unwrap();

        assert_eq!(state.panels.state_name(PanelKind::Drivers), "Populated");
        assert!(state.system.status_is_error);
        assert_eq!(
            state.system.status_message.as_deref(),
            Some(PanelKind::News.error_message())
        );
    }
}
