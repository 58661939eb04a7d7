use std::time::SystemTime;

use crate::cards::PanelContent;
use crate::config::{Config, DisplayConfig};
use crate::panel::{Panel, PanelKind, ViewState};
use crate::types::{ConstructorStanding, DriverStanding, NewsItem};

use super::types::Tab;

/// Root application state - single source of truth
///
/// All state changes happen through the reducer.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Which tab is showing
    pub navigation: NavigationState,

    /// The three panel controllers
    pub panels: PanelsState,

    /// Per-tab UI state
    pub ui: UiState,

    /// System state
    pub system: SystemState,
}

#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    pub current_tab: Tab,
}

#[derive(Debug, Clone, Default)]
pub struct PanelsState {
    pub news: Panel<NewsItem>,
    pub drivers: Panel<DriverStanding>,
    pub constructors: Panel<ConstructorStanding>,
}

impl PanelsState {
    pub fn needs_refresh_on_activate(&self, kind: PanelKind) -> bool {
        match kind {
            PanelKind::News => self.news.needs_refresh_on_activate(),
            PanelKind::Drivers => self.drivers.needs_refresh_on_activate(),
            PanelKind::Constructors => self.constructors.needs_refresh_on_activate(),
        }
    }

    pub fn content(&self, kind: PanelKind, display: &DisplayConfig) -> PanelContent {
        match kind {
            PanelKind::News => self.news.content(display),
            PanelKind::Drivers => self.drivers.content(display),
            PanelKind::Constructors => self.constructors.content(display),
        }
    }

    /// Number of cards on display
    pub fn item_count(&self, kind: PanelKind) -> usize {
        match kind {
            PanelKind::News => self.news.items().map_or(0, <[_]>::len),
            PanelKind::Drivers => self.drivers.items().map_or(0, <[_]>::len),
            PanelKind::Constructors => self.constructors.items().map_or(0, <[_]>::len),
        }
    }

    pub fn has_failed(&self, kind: PanelKind) -> bool {
        match kind {
            PanelKind::News => matches!(self.news.state(), ViewState::Error(_)),
            PanelKind::Drivers => matches!(self.drivers.state(), ViewState::Error(_)),
            PanelKind::Constructors => matches!(self.constructors.state(), ViewState::Error(_)),
        }
    }

    pub fn state_name(&self, kind: PanelKind) -> &'static str {
        match kind {
            PanelKind::News => self.news.state().name(),
            PanelKind::Drivers => self.drivers.state().name(),
            PanelKind::Constructors => self.constructors.state().name(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// First visible card row, per tab
    pub scroll: [u16; 3],
}

impl UiState {
    pub fn scroll_offset(&self, tab: Tab) -> u16 {
        self.scroll[tab.index()]
    }

    pub fn set_scroll_offset(&mut self, tab: Tab, offset: u16) {
        self.scroll[tab.index()] = offset;
    }
}

/// Default help message shown in the status bar
pub const DEFAULT_STATUS_MESSAGE: &str =
    "Keys: ←→ switch tab | 1-3 jump to tab | r refresh | ↑↓ scroll | q quit";

#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub last_refresh: Option<SystemTime>,
    pub config: Config,
    pub status_message: Option<String>,
    pub status_is_error: bool,
    pub terminal_width: u16,
}

impl SystemState {
    pub fn set_status_error_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = true;
    }

    pub fn reset_status_message(&mut self) {
        self.status_message = Some(DEFAULT_STATUS_MESSAGE.to_string());
        self.status_is_error = false;
    }
}
