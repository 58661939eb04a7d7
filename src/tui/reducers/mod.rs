//! Sub-reducers for different action categories
//!
//! The main reducer tries each of these in turn, passing ownership of the
//! state along until one of them handles the action.

mod data_loading;
mod navigation;

pub use data_loading::{reduce_data_loading, start_refresh};
pub use navigation::reduce_navigation;
