pub mod cards;
pub mod commands;
pub mod config;
pub mod data_provider;
pub mod error;
pub mod formatting;
pub mod markup;
pub mod panel;
pub mod tui;
pub mod types;

#[cfg(any(test, feature = "development"))]
pub mod fixtures;
