use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::config::DisplayConfig;

/// en-US `toLocaleDateString()` shape
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

pub const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S";

/// Shown when a `published` timestamp cannot be parsed
pub const INVALID_DATE: &str = "Invalid Date";

/// Box-drawing characters for card borders and separators
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: String,
    pub double_horizontal: String,
    pub vertical: String,
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
    pub connector2: String,
    pub connector3: String,
    pub bullet: String,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─".to_string(),
            double_horizontal: "═".to_string(),
            vertical: "│".to_string(),
            top_left: "╭".to_string(),
            top_right: "╮".to_string(),
            bottom_left: "╰".to_string(),
            bottom_right: "╯".to_string(),
            connector2: "┴".to_string(),
            connector3: "┬".to_string(),
            bullet: "•".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-".to_string(),
            double_horizontal: "=".to_string(),
            vertical: "|".to_string(),
            top_left: "+".to_string(),
            top_right: "+".to_string(),
            bottom_left: "+".to_string(),
            bottom_right: "+".to_string(),
            connector2: "-".to_string(),
            connector3: "-".to_string(),
            bullet: "*".to_string(),
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

/// Format a header with text and underline
///
/// # Arguments
/// * `text` - The header text to display
/// * `double_line` - If true, uses double-line (═/=), otherwise single-line (─/-)
/// * `display` - Display configuration to determine unicode vs ASCII
pub fn format_header(text: &str, double_line: bool, display: &DisplayConfig) -> String {
    let separator_char = if double_line {
        &display.box_chars.double_horizontal
    } else {
        &display.box_chars.horizontal
    };
    format!("{}\n{}\n", text, separator_char.repeat(text.chars().count()))
}

/// Format a feed timestamp as a local calendar date
///
/// Accepts RFC 2822 (RSS `pubDate`), RFC 3339, `YYYY-MM-DDTHH:MM:SS` and
/// `YYYY-MM-DD`. Anything else yields [`INVALID_DATE`].
pub fn format_published(published: &str, date_format: &str) -> String {
    parse_published(published.trim())
        .and_then(|dt| format_datetime(&dt, date_format, DEFAULT_DATE_FORMAT))
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

fn parse_published(s: &str) -> Option<DateTime<Local>> {
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Local));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }
    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d").map(|d| d.and_time(NaiveTime::MIN)))
        .ok()?;
    naive.and_local_timezone(Local).earliest()
}

/// Format with a user-supplied strftime string, using `fallback` when the
/// string has bad specifiers
pub fn format_datetime(dt: &DateTime<Local>, format: &str, fallback: &str) -> Option<String> {
    let format = if is_valid_format(format) { format } else { fallback };
    let mut out = String::new();
    write!(out, "{}", dt.format(format)).ok()?;
    Some(out)
}

/// chrono panics while displaying a format string with bad specifiers
pub fn is_valid_format(format: &str) -> bool {
    StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}

/// Championship points, without a trailing `.0` for whole numbers
pub fn format_points(points: f64) -> String {
    format!("{}", points)
}

/// Reduce an HTML fragment (RSS descriptions often carry markup) to plain text
pub fn strip_html(input: &str) -> String {
    let mut text = String::with_capacity(input.len());
    let mut in_tag = false;

    for c in input.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                text.push(' ');
            }
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }

    let decoded = text
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}
