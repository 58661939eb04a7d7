//! Panel controller: the view state of one independently refreshable feed.
//!
//! A refresh is split in two so the controller stays synchronous and pure:
//! `begin_refresh` flips the panel to Loading and hands out a token, the
//! caller performs the fetch, and `apply` folds the result back in. A result
//! carrying anything but the latest token is discarded, so overlapping
//! refreshes always settle on the newest request.

use std::sync::Arc;

use tracing::{debug, error};

use crate::cards::{Alert, AlertKind, CardTemplate, PanelContent};
use crate::config::DisplayConfig;
use crate::data_provider::{CONSTRUCTOR_STANDINGS_PATH, DRIVER_STANDINGS_PATH, NEWS_PATH};
use crate::error::FetchError;

/// The three dashboard feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    News,
    Drivers,
    Constructors,
}

impl PanelKind {
    pub fn all() -> [Self; 3] {
        [Self::News, Self::Drivers, Self::Constructors]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::News => "News",
            Self::Drivers => "Drivers",
            Self::Constructors => "Constructors",
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::News => NEWS_PATH,
            Self::Drivers => DRIVER_STANDINGS_PATH,
            Self::Constructors => CONSTRUCTOR_STANDINGS_PATH,
        }
    }

    /// Id of the container element this panel owns in the page markup
    pub fn container_id(&self) -> &'static str {
        match self {
            Self::News => "newsContainer",
            Self::Drivers => "driversContainer",
            Self::Constructors => "constructorsContainer",
        }
    }

    pub fn loading_message(&self) -> &'static str {
        match self {
            Self::News => "Loading F1 news...",
            Self::Drivers => "Loading driver standings...",
            Self::Constructors => "Loading constructor standings...",
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            Self::News => "No news available at the moment.",
            Self::Drivers | Self::Constructors => "No standings available at the moment.",
        }
    }

    pub fn error_message(&self) -> &'static str {
        match self {
            Self::News => "Failed to load news. Please try again later.",
            Self::Drivers => "Failed to load driver standings. Please try again later.",
            Self::Constructors => "Failed to load constructor standings. Please try again later.",
        }
    }

    /// Whether activating this panel's tab may trigger a refresh
    pub fn guards_tab_activation(&self) -> bool {
        !matches!(self, Self::News)
    }
}

/// Generation number of a refresh; only the latest one may settle a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// What a panel is currently showing
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    /// Nothing requested yet
    Idle,
    Loading,
    Populated(Arc<Vec<T>>),
    Empty,
    Error(FetchError),
}

impl<T> ViewState<T> {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Loading => "Loading",
            Self::Populated(_) => "Populated",
            Self::Empty => "Empty",
            Self::Error(_) => "Error",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Panel<T> {
    state: ViewState<T>,
    generation: u64,
}

impl<T> Default for Panel<T> {
    fn default() -> Self {
        Self {
            state: ViewState::Idle,
            generation: 0,
        }
    }
}

impl<T: CardTemplate> Panel<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(&self) -> PanelKind {
        T::KIND
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    /// Token of the most recent refresh, if any was started
    pub fn latest_token(&self) -> Option<RequestToken> {
        (self.generation > 0).then_some(RequestToken(self.generation))
    }

    /// Items on display, only while Populated
    pub fn items(&self) -> Option<&[T]> {
        match &self.state {
            ViewState::Populated(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Enter Loading immediately, dropping whatever was displayed
    pub fn begin_refresh(&mut self) -> RequestToken {
        self.generation += 1;
        self.state = ViewState::Loading;
        debug!(
            "PANEL: {} -> Loading (generation {})",
            T::KIND.label(),
            self.generation
        );
        RequestToken(self.generation)
    }

    /// Settle the panel with a fetch result
    ///
    /// Returns false when the result belongs to a superseded request and was
    /// dropped without touching the panel.
    pub fn apply(&mut self, token: RequestToken, result: Result<Vec<T>, FetchError>) -> bool {
        if token.0 != self.generation {
            debug!(
                "PANEL: {} dropping stale response (generation {}, latest {})",
                T::KIND.label(),
                token.0,
                self.generation
            );
            return false;
        }

        self.state = match result {
            Ok(items) if items.is_empty() => ViewState::Empty,
            Ok(items) => ViewState::Populated(Arc::new(items)),
            Err(e) => {
                error!("Error fetching {}: {}", T::KIND.endpoint(), e);
                ViewState::Error(e)
            }
        };
        debug!("PANEL: {} -> {}", T::KIND.label(), self.state.name());
        true
    }

    /// Revisiting a tab only refetches when there is nothing good on screen
    pub fn needs_refresh_on_activate(&self) -> bool {
        !matches!(self.state, ViewState::Populated(_))
    }

    /// Render the current state; same state in, same content out
    pub fn content(&self, display: &DisplayConfig) -> PanelContent {
        match &self.state {
            ViewState::Idle => PanelContent::Blank,
            ViewState::Loading => PanelContent::Loading(T::KIND.loading_message().to_string()),
            ViewState::Populated(items) => PanelContent::Cards(
                items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| item.card(index, display))
                    .collect(),
            ),
            ViewState::Empty => PanelContent::Alert(Alert {
                kind: AlertKind::Info,
                message: T::KIND.empty_message().to_string(),
            }),
            ViewState::Error(_) => PanelContent::Alert(Alert {
                kind: AlertKind::Danger,
                message: T::KIND.error_message().to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::types::{ConstructorStanding, DriverStanding, NewsItem};

    fn network_error() -> FetchError {
        FetchError::Network("connection reset".to_string())
    }

    #[test]
    fn test_new_panel_is_idle_and_blank() {
        let panel: Panel<NewsItem> = Panel::new();
        assert_eq!(panel.state(), &ViewState::Idle);
        assert_eq!(panel.content(&DisplayConfig::default()), PanelContent::Blank);
        assert_eq!(panel.latest_token(), None);
        assert!(panel.needs_refresh_on_activate());
    }

    #[test]
    fn test_begin_refresh_clears_previous_content() {
        let mut panel: Panel<DriverStanding> = Panel::new();
        let token = panel.begin_refresh();
        panel.apply(token, Ok(fixtures::create_mock_driver_standings()));
        assert!(panel.items().is_some());

        panel.begin_refresh();
        assert_eq!(panel.state(), &ViewState::Loading);
        assert!(panel.items().is_none());
        let content = panel.content(&DisplayConfig::default());
        assert_eq!(content, PanelContent::Loading("Loading driver standings...".to_string()));
        assert!(content.cards().is_empty());
    }

    #[test]
    fn test_non_empty_result_renders_one_card_per_item_in_order() {
        let mut panel: Panel<DriverStanding> = Panel::new();
        let standings = vec![
            fixtures::driver(3, "Third", "T", "X", 5.0, 0),
            fixtures::driver(1, "First", "T", "X", 25.0, 1),
            fixtures::driver(2, "Second", "T", "X", 18.0, 0),
        ];
        let token = panel.begin_refresh();
        assert!(panel.apply(token, Ok(standings)));

        let content = panel.content(&DisplayConfig::default());
        let titles: Vec<&str> = content.cards().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Third", "First", "Second"]);
        assert_eq!(content.alert(), None);
    }

    #[test]
    fn test_empty_news_shows_info_placeholder() {
        let mut panel: Panel<NewsItem> = Panel::new();
        let token = panel.begin_refresh();
        panel.apply(token, Ok(Vec::new()));

        assert_eq!(panel.state(), &ViewState::Empty);
        let content = panel.content(&DisplayConfig::default());
        assert!(content.cards().is_empty());
        assert_eq!(
            content.alert(),
            Some(&Alert {
                kind: AlertKind::Info,
                message: "No news available at the moment.".to_string(),
            })
        );
    }

    #[test]
    fn test_failure_shows_single_danger_alert() {
        let mut panel: Panel<ConstructorStanding> = Panel::new();
        let token = panel.begin_refresh();
        panel.apply(token, Err(network_error()));

        let content = panel.content(&DisplayConfig::default());
        assert!(content.cards().is_empty());
        assert!(!content.is_loading());
        let alert = content.alert().unwrap();
        assert_eq!(alert.kind, AlertKind::Danger);
        assert_eq!(
            alert.message,
            "Failed to load constructor standings. Please try again later."
        );
    }

    #[test]
    fn test_failure_discards_previous_success() {
        let mut panel: Panel<ConstructorStanding> = Panel::new();
        let token = panel.begin_refresh();
        panel.apply(token, Ok(fixtures::create_mock_constructor_standings()));

        let token = panel.begin_refresh();
        panel.apply(token, Err(FetchError::Decode("expected value".to_string())));

        assert!(panel.items().is_none());
        assert!(panel.content(&DisplayConfig::default()).cards().is_empty());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut panel: Panel<NewsItem> = Panel::new();
        let first = panel.begin_refresh();
        let second = panel.begin_refresh();
        assert!(second > first);

        // Newer request resolves first
        assert!(panel.apply(second, Ok(Vec::new())));
        // Older one resolves late and must not win
        assert!(!panel.apply(first, Ok(fixtures::create_mock_news())));

        assert_eq!(panel.state(), &ViewState::Empty);
    }

    #[test]
    fn test_stale_response_while_loading_keeps_loading() {
        let mut panel: Panel<NewsItem> = Panel::new();
        let first = panel.begin_refresh();
        panel.begin_refresh();

        assert!(!panel.apply(first, Err(network_error())));
        assert_eq!(panel.state(), &ViewState::Loading);
    }

    #[test]
    fn test_needs_refresh_on_activate() {
        let mut panel: Panel<DriverStanding> = Panel::new();
        let token = panel.begin_refresh();
        assert!(panel.needs_refresh_on_activate());

        panel.apply(token, Ok(fixtures::create_mock_driver_standings()));
        assert!(!panel.needs_refresh_on_activate());

        let token = panel.begin_refresh();
        panel.apply(token, Ok(Vec::new()));
        assert!(panel.needs_refresh_on_activate());

        let token = panel.begin_refresh();
        panel.apply(token, Err(network_error()));
        assert!(panel.needs_refresh_on_activate());
    }

    #[test]
    fn test_rendering_same_response_twice_is_identical() {
        let display = DisplayConfig::default();
        let mut panel: Panel<NewsItem> = Panel::new();

        let token = panel.begin_refresh();
        panel.apply(token, Ok(fixtures::create_mock_news()));
        let first = panel.content(&display);

        let token = panel.begin_refresh();
        panel.apply(token, Ok(fixtures::create_mock_news()));
        let second = panel.content(&display);

        assert_eq!(first, second);
    }

    #[test]
    fn test_panel_kind_metadata() {
        assert_eq!(PanelKind::News.endpoint(), "/api/news");
        assert_eq!(PanelKind::Drivers.container_id(), "driversContainer");
        assert_eq!(PanelKind::Constructors.endpoint(), "/api/constructor-standings");
        assert!(!PanelKind::News.guards_tab_activation());
        assert!(PanelKind::Drivers.guards_tab_activation());
    }
}
