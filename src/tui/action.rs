use crate::error::FetchError;
use crate::panel::{PanelKind, RequestToken};
use crate::types::{ConstructorStanding, DriverStanding, NewsItem};

use super::types::Tab;

/// Global actions - like Redux actions
///
/// All state changes in the application happen through actions.
/// Actions are dispatched from:
/// - User input (key events)
/// - Effects (async data loading)
/// - The news refresh timer
#[derive(Debug, Clone)]
pub enum Action {
    // Navigation actions
    NavigateTab(Tab),
    NavigateTabLeft,
    NavigateTabRight,

    // Refresh triggers
    RefreshPanel(PanelKind),
    RefreshCurrent,
    RefreshAll,

    // Data loaded (from effects)
    NewsLoaded(RequestToken, Result<Vec<NewsItem>, FetchError>),
    DriversLoaded(RequestToken, Result<Vec<DriverStanding>, FetchError>),
    ConstructorsLoaded(RequestToken, Result<Vec<ConstructorStanding>, FetchError>),

    // Content scrolling (card rows)
    ScrollDown(u16),
    ScrollUp(u16),
    ScrollToTop,

    // System actions
    Quit,
    UpdateTerminalWidth(u16),
}
