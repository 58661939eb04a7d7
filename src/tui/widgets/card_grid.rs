/// Card widgets - one bordered box per feed item, laid out in a grid
///
/// The grid is responsive: one column on narrow terminals, two on medium
/// ones and three from 120 columns up. Scrolling moves by whole card rows.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};

use crate::cards::{Card, CardStyle};
use crate::config::DisplayConfig;
use crate::formatting::strip_html;
use crate::tui::widgets::text::{truncate, wrap};
use crate::tui::widgets::RenderableWidget;

/// Rows taken by one card, borders included
pub const CARD_HEIGHT: u16 = 8;

const MEDIUM_WIDTH: u16 = 80;
const WIDE_WIDTH: u16 = 120;

/// Lines of summary text a news card shows
const SUMMARY_LINES: usize = 3;

/// Number of card columns for a terminal width
pub fn columns_for_width(width: u16) -> usize {
    if width >= WIDE_WIDTH {
        3
    } else if width >= MEDIUM_WIDTH {
        2
    } else {
        1
    }
}

/// A single card
#[derive(Debug)]
pub struct CardWidget<'a> {
    pub card: &'a Card,
}

impl<'a> CardWidget<'a> {
    pub fn new(card: &'a Card) -> Self {
        Self { card }
    }

    fn render_border(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let chars = &config.box_chars;
        let inner_width = area.width.saturating_sub(2) as usize;
        let style = Style::default().fg(Color::DarkGray);

        let top = format!("{}{}{}", chars.top_left, chars.horizontal.repeat(inner_width), chars.top_right);
        let bottom = format!(
            "{}{}{}",
            chars.bottom_left,
            chars.horizontal.repeat(inner_width),
            chars.bottom_right
        );
        buf.set_string(area.x, area.y, top, style);
        for y in area.y + 1..area.bottom() - 1 {
            buf.set_string(area.x, y, &chars.vertical, style);
            buf.set_string(area.right() - 1, y, &chars.vertical, style);
        }
        buf.set_string(area.x, area.bottom() - 1, bottom, style);
    }

    /// Body lines of a standings card: badge and name, then one line per field
    fn render_standing(&self, x: u16, y: u16, width: usize, buf: &mut Buffer, config: &DisplayConfig) {
        let card = self.card;
        let mut title_x = x;
        if let Some(badge) = &card.badge {
            let accent = match card.style {
                CardStyle::Constructor => config.unfocused_selection_fg(),
                _ => config.selection_fg,
            };
            let badge = format!(" {} ", badge);
            buf.set_stringn(x, y, &badge, width, Style::default().fg(Color::Black).bg(accent));
            title_x += badge.chars().count() as u16 + 1;
        }
        let room = width.saturating_sub((title_x - x) as usize);
        buf.set_string(
            title_x,
            y,
            truncate(&card.title, room),
            Style::default().add_modifier(Modifier::BOLD),
        );

        for (i, field) in card.fields.iter().enumerate() {
            let line_y = y + 1 + i as u16;
            let label = format!("{}: ", field.label);
            let label_room = width.min(label.chars().count());
            buf.set_stringn(x, line_y, &label, label_room, Style::default().fg(Color::DarkGray));
            let value_room = width.saturating_sub(label_room);
            buf.set_string(
                x + label_room as u16,
                line_y,
                truncate(&field.value, value_room),
                Style::default(),
            );
        }
    }

    /// Body lines of a news card: title, summary, date line, link
    fn render_news(&self, x: u16, y: u16, width: usize, buf: &mut Buffer, config: &DisplayConfig) {
        let card = self.card;
        buf.set_string(
            x,
            y,
            truncate(&card.title, width),
            Style::default().fg(config.selection_fg).add_modifier(Modifier::BOLD),
        );

        if let Some(text) = &card.text {
            for (i, line) in wrap(&strip_html(text), width, SUMMARY_LINES).into_iter().enumerate() {
                buf.set_string(x, y + 1 + i as u16, line, Style::default());
            }
        }

        let footer_y = y + 1 + SUMMARY_LINES as u16;
        if let Some(footer) = &card.footer {
            let line = match &footer.source {
                Some(source) => format!("{} {} {}", footer.date, config.box_chars.bullet, source),
                None => footer.date.clone(),
            };
            buf.set_string(x, footer_y, truncate(&line, width), Style::default().fg(Color::DarkGray));
        }
        if let Some(link) = &card.link {
            buf.set_string(
                x,
                footer_y + 1,
                truncate(link, width),
                Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            );
        }
    }
}

impl RenderableWidget for CardWidget<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        // Border plus one column of padding on each side
        if area.width < 6 || area.height < CARD_HEIGHT {
            return;
        }

        self.render_border(area, buf, config);

        let x = area.x + 2;
        let y = area.y + 1;
        let width = area.width.saturating_sub(4) as usize;
        match self.card.style {
            CardStyle::News => self.render_news(x, y, width, buf, config),
            CardStyle::Driver | CardStyle::Constructor => self.render_standing(x, y, width, buf, config),
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(CARD_HEIGHT)
    }
}

/// Cards in a responsive grid, starting at `scroll` card rows down
#[derive(Debug)]
pub struct CardGrid<'a> {
    pub cards: &'a [Card],
    pub scroll: u16,
}

impl<'a> CardGrid<'a> {
    pub fn new(cards: &'a [Card], scroll: u16) -> Self {
        Self { cards, scroll }
    }
}

impl RenderableWidget for CardGrid<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let columns = columns_for_width(area.width);
        let card_width = area.width / columns as u16;
        let visible_rows = (area.height / CARD_HEIGHT) as usize;
        let first = self.scroll as usize * columns;

        for (i, card) in self.cards.iter().enumerate().skip(first) {
            let row = (i - first) / columns;
            if row >= visible_rows {
                break;
            }
            let column = (i - first) % columns;
            let card_area = Rect::new(
                area.x + column as u16 * card_width,
                area.y + row as u16 * CARD_HEIGHT,
                card_width,
                CARD_HEIGHT,
            );
            CardWidget::new(card).render(card_area, buf, config);
        }
    }
}
