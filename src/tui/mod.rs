// Module declarations
pub mod widgets;

pub mod action;
pub mod effects;
pub mod keys;
pub mod reducer;
pub mod reducers;
pub mod runtime;
pub mod state;
pub mod types;
pub mod view;

#[cfg(test)]
pub mod testing;


pub use action::Action;
pub use effects::{DataEffects, Effect};
pub use keys::key_to_action;
pub use reducer::reduce;
pub use runtime::Runtime;
pub use state::AppState;
pub use types::Tab;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::Config;
use crate::data_provider::F1DataProvider;

type Term = Terminal<CrosstermBackend<io::Stdout>>;

/// Main entry point for TUI mode
pub async fn run(client: Arc<dyn F1DataProvider>, config: Config) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let data_effects = Arc::new(DataEffects::new(client));

    let news_period = Duration::from_secs(config.news_refresh_interval);
    let mut initial_state = AppState::default();
    initial_state.system.config = config;
    initial_state.system.reset_status_message();

    let mut runtime = Runtime::new(initial_state, data_effects);
    runtime.dispatch(Action::UpdateTerminalWidth(terminal.size()?.width));

    // Every panel loads on startup; after that news follows the timer
    runtime.dispatch(Action::RefreshAll);
    runtime.start_news_timer(news_period);

    let result = event_loop(&mut terminal, &mut runtime);
    runtime.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(terminal: &mut Term, runtime: &mut Runtime) -> Result<(), io::Error> {
    loop {
        // Process any actions from effects FIRST (so data loads trigger re-render)
        let actions_processed = runtime.process_actions();
        if actions_processed > 0 {
            tracing::debug!("LOOP: Processed {} actions", actions_processed);
        }

        terminal.draw(|f| {
            let area = f.area();
            view::render(runtime.state(), area, f.buffer_mut());
        })?;

        // Re-render right away when async data arrived
        if actions_processed > 0 {
            continue;
        }

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let Some(action) = key_to_action(key, runtime.state()) else {
                    continue;
                };
                if matches!(action, Action::Quit) {
                    tracing::debug!("ACTION: Quitting application");
                    return Ok(());
                }
                runtime.dispatch(action);
            }
            Event::Resize(width, _) => runtime.dispatch(Action::UpdateTerminalWidth(width)),
            _ => {}
        }
    }
}
