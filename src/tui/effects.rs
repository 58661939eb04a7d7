use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use super::action::Action;
use crate::data_provider::F1DataProvider;
use crate::panel::{PanelKind, RequestToken};

/// Side effects returned by the reducer
pub enum Effect {
    None,
    Batch(Vec<Effect>),
    /// Fetch one panel's feed; resolved to `Async` by the runtime
    Fetch { panel: PanelKind, token: RequestToken },
    Async(Pin<Box<dyn Future<Output = Action> + Send>>),
}

impl Effect {
    /// Panels this effect will fetch, in order
    pub fn fetched_panels(&self) -> Vec<PanelKind> {
        match self {
            Effect::Fetch { panel, .. } => vec![*panel],
            Effect::Batch(effects) => effects.iter().flat_map(Effect::fetched_panels).collect(),
            Effect::None | Effect::Async(_) => Vec::new(),
        }
    }
}

/// Effect handler for data fetching operations
///
/// Each method returns an Effect that will dispatch the matching *Loaded
/// action, tagged with the request token, when the fetch completes.
pub struct DataEffects {
    client: Arc<dyn F1DataProvider>,
}

impl DataEffects {
    pub fn new(client: Arc<dyn F1DataProvider>) -> Self {
        Self { client }
    }

    pub fn fetch(&self, panel: PanelKind, token: RequestToken) -> Effect {
        match panel {
            PanelKind::News => self.fetch_news(token),
            PanelKind::Drivers => self.fetch_driver_standings(token),
            PanelKind::Constructors => self.fetch_constructor_standings(token),
        }
    }

    pub fn fetch_news(&self, token: RequestToken) -> Effect {
        let client = self.client.clone();
        Effect::Async(Box::pin(async move {
            Action::NewsLoaded(token, client.news().await)
        }))
    }

    pub fn fetch_driver_standings(&self, token: RequestToken) -> Effect {
        let client = self.client.clone();
        Effect::Async(Box::pin(async move {
            Action::DriversLoaded(token, client.driver_standings().await)
        }))
    }

    pub fn fetch_constructor_standings(&self, token: RequestToken) -> Effect {
        let client = self.client.clone();
        Effect::Async(Box::pin(async move {
            Action::ConstructorsLoaded(token, client.constructor_standings().await)
        }))
    }
}
