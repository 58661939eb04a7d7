use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, trace, warn};

use super::action::Action;
use super::effects::{DataEffects, Effect};
use super::reducer::reduce;
use super::state::AppState;
use crate::panel::PanelKind;

/// Session runtime - owns the state and everything that feeds it
///
/// The Runtime is responsible for:
/// - Managing the application state
/// - Dispatching actions through the reducer
/// - Executing side effects asynchronously
/// - Driving the periodic news refresh
///
/// Background tasks are aborted by `shutdown`, which also runs on drop.
pub struct Runtime {
    /// Current application state
    state: AppState,

    /// Channel for dispatching actions
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,

    /// Channel for queuing effects
    effect_tx: mpsc::UnboundedSender<Effect>,

    /// Data effects handler
    data_effects: Arc<DataEffects>,

    executor: JoinHandle<()>,
    news_timer: Option<JoinHandle<()>>,
}

impl Runtime {
    /// Create a new runtime with initial state and data effects handler
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(initial_state: AppState, data_effects: Arc<DataEffects>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (effect_tx, mut effect_rx) = mpsc::unbounded_channel();

        let action_tx_clone = action_tx.clone();
        let executor = tokio::spawn(async move {
            Self::run_effect_executor(&mut effect_rx, action_tx_clone).await;
        });

        Self {
            state: initial_state,
            action_tx,
            action_rx,
            effect_tx,
            data_effects,
            executor,
            news_timer: None,
        }
    }

    /// Get a reference to the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Dispatch an action to be processed by the reducer
    ///
    /// Uses mem::take to avoid cloning AppState.
    pub fn dispatch(&mut self, action: Action) {
        trace!("ACTION: Dispatching {:?}", action);

        let state = std::mem::take(&mut self.state);
        let (new_state, effect) = reduce(state, action);
        self.state = new_state;

        self.execute_effect(effect);
    }

    /// Turn fetch descriptions into futures and queue them for the executor
    fn execute_effect(&self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::Fetch { panel, token } => {
                debug!(
                    "EFFECT: Fetching {} (generation {})",
                    panel.endpoint(),
                    token.generation()
                );
                let fetch_effect = self.data_effects.fetch(panel, token);
                let _ = self.effect_tx.send(fetch_effect);
            }
            Effect::Batch(effects) => {
                for e in effects {
                    self.execute_effect(e);
                }
            }
            Effect::Async(_) => {
                trace!("ACTION: Queueing effect for async execution");
                let _ = self.effect_tx.send(effect);
            }
        }
    }

    /// Process all pending actions in the queue
    ///
    /// Returns the number of actions processed
    pub fn process_actions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            count += 1;
        }
        count
    }

    /// Get a sender for dispatching actions from external sources
    pub fn action_sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }

    /// Refresh the news panel every `period`, starting one period from now
    ///
    /// Replaces any timer already running. A zero period leaves the timer off.
    pub fn start_news_timer(&mut self, period: Duration) {
        self.stop_news_timer();
        if period.is_zero() {
            debug!("TIMER: news refresh disabled");
            return;
        }

        debug!("TIMER: refreshing news every {:?}", period);
        let action_tx = self.action_tx.clone();
        self.news_timer = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                trace!("TIMER: news refresh tick");
                if action_tx.send(Action::RefreshPanel(PanelKind::News)).is_err() {
                    break;
                }
            }
        }));
    }

    pub fn has_news_timer(&self) -> bool {
        self.news_timer.as_ref().is_some_and(|t| !t.is_finished())
    }

    fn stop_news_timer(&mut self) {
        if let Some(timer) = self.news_timer.take() {
            timer.abort();
        }
    }

    /// Stop the news timer and the effect executor
    ///
    /// Fetches already in flight may still complete, but nothing will read
    /// their results.
    pub fn shutdown(&mut self) {
        self.stop_news_timer();
        self.executor.abort();
    }

    /// Execute effects asynchronously
    ///
    /// This runs in a separate tokio task and processes effects as they come in.
    /// Effects dispatch new actions which feed back into the runtime.
    async fn run_effect_executor(
        effect_rx: &mut mpsc::UnboundedReceiver<Effect>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) {
        while let Some(effect) = effect_rx.recv().await {
            Self::process_effect_async(effect, &action_tx);
        }
    }

    fn process_effect_async(effect: Effect, action_tx: &mpsc::UnboundedSender<Action>) {
        match effect {
            Effect::None => {}
            Effect::Batch(effects) => {
                for e in effects {
                    Self::process_effect_async(e, action_tx);
                }
            }
            Effect::Async(future) => {
                let action_tx = action_tx.clone();
                tokio::spawn(async move {
                    let action = future.await;
                    let _ = action_tx.send(action);
                });
            }
            // Resolved by execute_effect() before queueing
            Effect::Fetch { panel, .. } => {
                warn!("Fetch effect for {} reached async executor", panel.label());
            }
        }
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        self.shutdown();
    }
}
