//! General test utilities for TUI tests.
//!
//! For widget-specific rendering helpers, see `crate::tui::widgets::testing`.

use std::sync::Arc;
use std::time::Duration;

use ratatui::buffer::Buffer;

use crate::fixtures::MockClient;
use crate::tui::{AppState, DataEffects, Runtime};

/// Runtime over a mock client, returning the client to inspect call counts
pub fn create_runtime(client: MockClient) -> (Runtime, Arc<MockClient>) {
    let client = Arc::new(client);
    let data_effects = Arc::new(DataEffects::new(client.clone()));
    (Runtime::new(AppState::default(), data_effects), client)
}

/// Let spawned fetches finish, then reduce their results
pub async fn settle(runtime: &mut Runtime) -> usize {
    tokio::time::sleep(Duration::from_millis(50)).await;
    runtime.process_actions()
}

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}
