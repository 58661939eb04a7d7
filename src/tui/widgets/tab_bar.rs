/// TabBar widget - displays main navigation tabs
///
/// This widget renders a horizontal bar showing one tab per panel with
/// box-drawing characters. The current tab is highlighted and tabs whose panel
/// failed to load are drawn in the error color.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;
use crate::tui::types::Tab;
use crate::tui::widgets::RenderableWidget;

/// Widget for displaying navigation tabs as a horizontal bar
#[derive(Debug)]
pub struct TabBar {
    pub current_tab: Tab,
    /// Tabs whose panel is in the Error state
    pub failed: Vec<Tab>,
}

impl TabBar {
    pub fn new(current_tab: Tab) -> Self {
        Self {
            current_tab,
            failed: Vec::new(),
        }
    }

    pub fn with_failed(mut self, failed: Vec<Tab>) -> Self {
        self.failed = failed;
        self
    }

    fn tab_style(&self, tab: Tab, config: &DisplayConfig) -> Style {
        if tab == self.current_tab {
            Style::default().fg(config.selection_fg)
        } else if self.failed.contains(&tab) {
            Style::default().fg(config.error_fg)
        } else {
            Style::default()
        }
    }

    /// Build the tab line with separators
    fn build_tab_line(&self, config: &DisplayConfig) -> Vec<(String, Style)> {
        let separator = format!(" {} ", config.box_chars.vertical);
        let mut segments = Vec::new();

        for (i, tab) in Tab::all().into_iter().enumerate() {
            if i > 0 {
                segments.push((separator.clone(), Style::default()));
            }
            segments.push((tab.label().to_string(), self.tab_style(tab, config)));
        }

        segments
    }

    /// Build the separator line with connectors under tab gaps
    fn build_separator_line(&self, area_width: usize, config: &DisplayConfig) -> String {
        let horizontal = &config.box_chars.horizontal;
        let connector = &config.box_chars.connector2;

        let mut line = String::new();
        let mut pos = 0;

        for (i, tab) in Tab::all().into_iter().enumerate() {
            if i > 0 {
                line.push_str(horizontal);
                line.push_str(connector);
                line.push_str(horizontal);
                pos += 3;
            }
            let tab_width = tab.label().width();
            line.push_str(&horizontal.repeat(tab_width));
            pos += tab_width;
        }

        if pos < area_width {
            line.push_str(&horizontal.repeat(area_width - pos));
        }

        line
    }
}

impl RenderableWidget for TabBar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height < 2 {
            return;
        }

        let mut x = area.x;
        for (text, style) in self.build_tab_line(config) {
            if x >= area.right() {
                break;
            }
            buf.set_stringn(x, area.y, &text, (area.right() - x) as usize, style);
            x += text.width() as u16; // Display width, not byte length
        }

        let separator = self.build_separator_line(area.width as usize, config);
        buf.set_stringn(area.x, area.y + 1, &separator, area.width as usize, Style::default());
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2) // Tab line + separator line
    }
}
