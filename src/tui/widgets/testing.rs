/// Buffer helpers for rendering widgets in isolation

use ratatui::{buffer::Buffer, layout::Rect, style::Color};

use crate::config::DisplayConfig;
use crate::formatting::{BoxChars, DEFAULT_DATE_FORMAT};
use super::RenderableWidget;

/// DisplayConfig with unicode box characters and fixed colors
pub fn test_config() -> DisplayConfig {
    DisplayConfig {
        use_unicode: true,
        selection_fg: Color::Rgb(255, 200, 0),
        unfocused_selection_fg: None,
        info_fg: Color::LightBlue,
        error_fg: Color::Red,
        date_format: DEFAULT_DATE_FORMAT.to_string(),
        box_chars: BoxChars::unicode(),
    }
}

/// Create a test DisplayConfig with ASCII box characters
///
/// Useful for tests that want predictable ASCII-only output.
pub fn test_config_ascii() -> DisplayConfig {
    DisplayConfig {
        use_unicode: false,
        box_chars: BoxChars::ascii(),
        ..test_config()
    }
}

/// Render a widget with the unicode test config
pub fn render_widget(
    widget: &impl RenderableWidget,
    width: u16,
    height: u16,
) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    let config = test_config();
    widget.render(buf.area, &mut buf, &config);
    buf
}

/// Render a widget to a buffer with a custom config
pub fn render_widget_with_config(
    widget: &impl RenderableWidget,
    width: u16,
    height: u16,
    config: &DisplayConfig,
) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    widget.render(buf.area, &mut buf, config);
    buf
}

/// Whole buffer as text, rows joined by newlines
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area();
    let mut output = String::new();

    for y in 0..area.height {
        for x in 0..area.width {
            let cell = &buf[(x, y)];
            output.push_str(cell.symbol());
        }
        if y < area.height - 1 {
            output.push('\n');
        }
    }

    output
}

/// Text of one buffer row, padding included
pub fn buffer_line(buf: &Buffer, line: u16) -> String {
    let area = buf.area();
    let mut output = String::new();

    for x in 0..area.width {
        let cell = &buf[(x, line)];
        output.push_str(cell.symbol());
    }

    output
}

/// Assert that a buffer line matches the expected string
pub fn assert_buffer_line(buf: &Buffer, line: u16, expected: &str) {
    let actual = buffer_line(buf, line);
    assert_eq!(
        actual, expected,
        "\nLine {} mismatch:\nExpected: {}\nActual:   {}",
        line, expected, actual
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Style;

    struct Label(&'static str);

    impl RenderableWidget for Label {
        fn render(&self, area: Rect, buf: &mut Buffer, _config: &DisplayConfig) {
            buf.set_string(area.x, area.y, self.0, Style::default());
        }
    }

    #[test]
    fn test_buffer_to_string_pads_every_row() {
        let buf = render_widget(&Label("P1"), 5, 2);
        assert_eq!(buffer_to_string(&buf), "P1   \n     ");
    }

    #[test]
    fn test_assert_buffer_line_compares_padded_row() {
        let buf = render_widget(&Label("Ferrari"), 10, 1);
        assert_buffer_line(&buf, 0, "Ferrari   ");
    }

    #[test]
    #[should_panic(expected = "Line 0 mismatch")]
    fn test_assert_buffer_line_reports_row() {
        let buf = render_widget(&Label("McLaren"), 10, 1);
        assert_buffer_line(&buf, 0, "Mercedes");
    }

    #[test]
    fn test_configs_differ_only_in_box_chars() {
        let unicode = test_config();
        let ascii = test_config_ascii();
        assert_eq!(unicode.box_chars.top_left, "╭");
        assert_eq!(ascii.box_chars.top_left, "+");
        assert_eq!(unicode.date_format, ascii.date_format);
        assert_eq!(unicode.error_fg, ascii.error_fg);
    }
}
