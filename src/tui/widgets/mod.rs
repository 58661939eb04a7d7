/// Widget-based rendering infrastructure for TUI
///
/// Widgets are small, focused components that render straight into a ratatui
/// Buffer and can be composed into the full screen.

#[cfg(test)]
pub mod testing;

pub mod card_grid;
pub use card_grid::{columns_for_width, CardGrid, CardWidget, CARD_HEIGHT};

pub mod panel_view;
pub use panel_view::PanelView;

pub mod status_bar;
pub use status_bar::StatusBar;

pub mod tab_bar;
pub use tab_bar::TabBar;

mod text;

use ratatui::{buffer::Buffer, layout::Rect};

use crate::config::DisplayConfig;

/// Core trait for renderable widgets
///
/// Widgets render themselves directly to a ratatui Buffer, avoiding string-based
/// intermediate representations. This enables:
/// - Direct styling without character position calculations
/// - Composability (widgets can contain other widgets)
/// - Testability (can render to test buffers)
///
/// # Object Safety
///
/// This trait is object-safe, meaning you can use trait objects to store
/// different widget types in collections.
pub trait RenderableWidget {
    /// Render this widget into the provided buffer
    ///
    /// # Arguments
    ///
    /// * `area` - The rectangular area to render into
    /// * `buf` - The buffer to write to
    /// * `config` - Display configuration (colors, box chars, etc.)
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig);

    /// Get the preferred height of this widget
    ///
    /// Returns None if the widget can adapt to any height.
    fn preferred_height(&self) -> Option<u16> {
        None
    }
}
