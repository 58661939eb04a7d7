//! Screen composition: tab bar, current panel, status bar

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
};

use super::state::{AppState, DEFAULT_STATUS_MESSAGE};
use super::types::Tab;
use super::widgets::{PanelView, RenderableWidget, StatusBar, TabBar};

/// Draw the whole screen for the current state
pub fn render(state: &AppState, area: Rect, buf: &mut Buffer) {
    let display = state.system.config.display();
    let [tabs_area, content_area, status_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(2),
    ])
    .areas(area);

    let current = state.navigation.current_tab;
    let failed = Tab::all()
        .into_iter()
        .filter(|tab| state.panels.has_failed(tab.panel()))
        .collect();
    TabBar::new(current)
        .with_failed(failed)
        .render(tabs_area, buf, &display);

    let content = state.panels.content(current.panel(), &display);
    PanelView::new(content, state.ui.scroll_offset(current)).render(content_area, buf, &display);

    let message = state
        .system
        .status_message
        .clone()
        .unwrap_or_else(|| DEFAULT_STATUS_MESSAGE.to_string());
    StatusBar::new()
        .with_message(Some(message), state.system.status_is_error)
        .with_last_refresh(state.system.last_refresh)
        .with_time_format(state.system.config.time_format.clone())
        .render(status_area, buf, &display);
}
