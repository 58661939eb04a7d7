pub mod html;
pub mod panels;

use std::future::Future;

use anyhow::Result;

use crate::cards::{CardTemplate, PanelContent};
use crate::config::DisplayConfig;
use crate::data_provider::F1DataProvider;
use crate::error::{FetchError, FetchResult};
use crate::panel::{Panel, PanelKind, ViewState};

/// Outcome of a single refresh cycle run outside the TUI
#[derive(Debug)]
pub struct Loaded {
    pub kind: PanelKind,
    pub content: PanelContent,
    pub error: Option<FetchError>,
}

impl Loaded {
    /// Fail when the panel ended in its error state
    pub fn check(self) -> Result<()> {
        match self.error {
            Some(e) => Err(anyhow::Error::new(e)
                .context(format!("Failed to fetch {}", self.kind.endpoint()))),
            None => Ok(()),
        }
    }
}

/// Fetch one panel through the same controller the TUI uses
pub async fn load(client: &dyn F1DataProvider, kind: PanelKind, display: &DisplayConfig) -> Loaded {
    match kind {
        PanelKind::News => refresh_once(client.news(), display).await,
        PanelKind::Drivers => refresh_once(client.driver_standings(), display).await,
        PanelKind::Constructors => refresh_once(client.constructor_standings(), display).await,
    }
}

async fn refresh_once<T, F>(fetch: F, display: &DisplayConfig) -> Loaded
where
    T: CardTemplate,
    F: Future<Output = FetchResult<Vec<T>>>,
{
    let mut panel: Panel<T> = Panel::new();
    let token = panel.begin_refresh();
    panel.apply(token, fetch.await);

    let error = match panel.state() {
        ViewState::Error(e) => Some(e.clone()),
        _ => None,
    };
    Loaded {
        kind: T::KIND,
        content: panel.content(display),
        error,
    }
}
