/// StatusBar widget - displays status information at the bottom of the screen
///
/// This widget renders a two-line status bar with:
/// - Top line: horizontal separator with connector aligned to the vertical bar
/// - Bottom line: left status message (or error) │ right last-refresh time
///
/// Error messages are displayed with the error color.

use std::time::SystemTime;

use chrono::{DateTime, Local};
use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;
use crate::formatting::{format_datetime, DEFAULT_TIME_FORMAT};
use crate::tui::widgets::text::truncate;
use crate::tui::widgets::RenderableWidget;

const NEVER_REFRESHED: &str = "Not loaded";

/// Widget for displaying the status message and refresh time
#[derive(Debug)]
pub struct StatusBar {
    pub message: Option<String>,
    pub is_error: bool,
    pub last_refresh: Option<SystemTime>,
    pub time_format: String,
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            message: None,
            is_error: false,
            last_refresh: None,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }

    pub fn with_message(mut self, message: Option<String>, is_error: bool) -> Self {
        self.message = message;
        self.is_error = is_error;
        self
    }

    pub fn with_last_refresh(mut self, last_refresh: Option<SystemTime>) -> Self {
        self.last_refresh = last_refresh;
        self
    }

    pub fn with_time_format(mut self, time_format: impl Into<String>) -> Self {
        self.time_format = time_format.into();
        self
    }

    /// Build the right side text
    fn build_right_text(&self) -> String {
        self.last_refresh
            .and_then(|t| {
                let local: DateTime<Local> = t.into();
                format_datetime(&local, &self.time_format, DEFAULT_TIME_FORMAT)
            })
            .map(|time| format!("Updated {}", time))
            .unwrap_or_else(|| NEVER_REFRESHED.to_string())
    }

    /// Build the top separator line with connector
    fn build_separator_line(&self, area_width: usize, bar_position: usize, config: &DisplayConfig) -> String {
        let horizontal = &config.box_chars.horizontal;
        format!(
            "{}{}{}",
            horizontal.repeat(bar_position),
            config.box_chars.connector3,
            horizontal.repeat(area_width.saturating_sub(bar_position + 1))
        )
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderableWidget for StatusBar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height < 2 {
            return;
        }

        let right_text = self.build_right_text();

        // Layout: [space] [message] [padding] │ [space] [right_text] [space]
        let bar_position = (area.width as usize).saturating_sub(right_text.width() + 3);

        let separator = self.build_separator_line(area.width as usize, bar_position, config);
        buf.set_stringn(area.x, area.y, &separator, area.width as usize, Style::default());

        let y = area.y + 1;
        if let Some(message) = &self.message {
            let style = if self.is_error {
                Style::default().fg(config.error_fg)
            } else {
                Style::default()
            };
            let room = bar_position.saturating_sub(2);
            buf.set_string(area.x + 1, y, truncate(message, room), style);
        }

        let right = format!("{} {} ", config.box_chars.vertical, right_text);
        buf.set_stringn(
            area.x + bar_position as u16,
            y,
            &right,
            (area.width as usize).saturating_sub(bar_position),
            Style::default(),
        );
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2) // Separator line + status line
    }
}
