/// PanelView widget - the content area for one panel
///
/// Renders whatever the panel's `PanelContent` says: a loading line, a single
/// alert box, or the card grid.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthStr;

use crate::cards::{Alert, AlertKind, PanelContent};
use crate::config::DisplayConfig;
use crate::tui::widgets::text::truncate;
use crate::tui::widgets::{CardGrid, RenderableWidget};

const ALERT_HEIGHT: u16 = 3;

#[derive(Debug)]
pub struct PanelView {
    pub content: PanelContent,
    /// First visible card row
    pub scroll: u16,
}

impl PanelView {
    pub fn new(content: PanelContent, scroll: u16) -> Self {
        Self { content, scroll }
    }

    fn render_loading(&self, message: &str, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let glyph = if config.use_unicode { "⟳" } else { "*" };
        let text = truncate(&format!("{} {}", glyph, message), area.width as usize);
        let x = area.x + (area.width.saturating_sub(text.width() as u16)) / 2;
        let y = area.y + area.height.min(2) / 2;
        buf.set_string(x, y, text, Style::default().fg(config.info_fg));
    }

    fn render_alert(&self, alert: &Alert, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width < 4 || area.height < ALERT_HEIGHT {
            return;
        }
        let (color, icon) = match (alert.kind, config.use_unicode) {
            (AlertKind::Info, true) => (config.info_fg, "ℹ"),
            (AlertKind::Info, false) => (config.info_fg, "i"),
            (AlertKind::Danger, true) => (config.error_fg, "⚠"),
            (AlertKind::Danger, false) => (config.error_fg, "!"),
        };
        let style = Style::default().fg(color);
        let chars = &config.box_chars;
        let inner_width = area.width.saturating_sub(2) as usize;

        buf.set_string(
            area.x,
            area.y,
            format!("{}{}{}", chars.top_left, chars.horizontal.repeat(inner_width), chars.top_right),
            style,
        );
        buf.set_string(area.x, area.y + 1, &chars.vertical, style);
        let message = truncate(
            &format!("{} {}", icon, alert.message),
            inner_width.saturating_sub(2),
        );
        buf.set_string(area.x + 2, area.y + 1, message, style);
        buf.set_string(area.right() - 1, area.y + 1, &chars.vertical, style);
        buf.set_string(
            area.x,
            area.y + 2,
            format!(
                "{}{}{}",
                chars.bottom_left,
                chars.horizontal.repeat(inner_width),
                chars.bottom_right
            ),
            style,
        );
    }
}

impl RenderableWidget for PanelView {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        match &self.content {
            PanelContent::Blank => {}
            PanelContent::Loading(message) => self.render_loading(message, area, buf, config),
            PanelContent::Alert(alert) => self.render_alert(alert, area, buf, config),
            PanelContent::Cards(cards) => CardGrid::new(cards, self.scroll).render(area, buf, config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardTemplate;
    use crate::fixtures;
    use crate::panel::PanelKind;
    use crate::tui::widgets::testing::*;
    use crate::tui::widgets::CARD_HEIGHT;

    fn alert(kind: AlertKind, message: &str) -> PanelContent {
        PanelContent::Alert(Alert {
            kind,
            message: message.to_string(),
        })
    }

    #[test]
    fn test_blank_renders_nothing() {
        let buf = render_widget(&PanelView::new(PanelContent::Blank, 0), 40, 5);
        assert_eq!(buffer_to_string(&buf).trim(), "");
    }

    #[test]
    fn test_loading_message_is_centered() {
        let content = PanelContent::Loading(PanelKind::News.loading_message().to_string());
        let buf = render_widget(&PanelView::new(content, 0), 40, 5);

        let line = buffer_line(&buf, 1);
        assert_eq!(line.trim(), "⟳ Loading F1 news...");
        assert!(line.starts_with("          "));
    }

    #[test]
    fn test_danger_alert() {
        let content = alert(AlertKind::Danger, PanelKind::Drivers.error_message());
        let buf = render_widget(&PanelView::new(content, 0), 70, 5);

        assert_buffer_line(
            &buf,
            1,
            "│ ⚠ Failed to load driver standings. Please try again later.         │",
        );
        assert_eq!(buf[(2, 1)].fg, test_config().error_fg);
        assert_eq!(buffer_line(&buf, 3).trim(), "");
    }

    #[test]
    fn test_info_alert_ascii() {
        let content = alert(AlertKind::Info, PanelKind::News.empty_message());
        let buf = render_widget_with_config(&PanelView::new(content, 0), 40, 3, &test_config_ascii());

        assert_buffer_line(&buf, 0, "+--------------------------------------+");
        assert_buffer_line(&buf, 1, "| i No news available at the moment.   |");
        assert_eq!(buf[(0, 0)].fg, test_config().info_fg);
    }

    #[test]
    fn test_cards_render_through_grid() {
        let config = test_config();
        let cards = fixtures::create_mock_constructor_standings()
            .iter()
            .enumerate()
            .map(|(i, c)| c.card(i, &config))
            .collect();
        let buf = render_widget(&PanelView::new(PanelContent::Cards(cards), 0), 60, CARD_HEIGHT);

        assert!(buffer_line(&buf, 1).contains("Red Bull"));
        assert!(buffer_line(&buf, 2).contains("Nationality: Austrian"));
    }
}
