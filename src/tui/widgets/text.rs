//! Width-aware text fitting shared by the widgets

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Cut `text` to at most `width` display columns, marking the cut with an ellipsis
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push(ELLIPSIS);
    out
}

/// Greedy word wrap into at most `max_lines` lines of `width` columns
///
/// Overflow is marked with an ellipsis on the last line.
pub fn wrap(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut words = text.split_whitespace().peekable();

    while let Some(word) = words.next() {
        let candidate_width = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };

        if candidate_width <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if lines.len() == max_lines {
            break;
        }
        current = truncate(word, width);
        if words.peek().is_none() {
            break;
        }
    }

    let overflow = lines.len() == max_lines;
    if !current.is_empty() && !overflow {
        lines.push(current);
    }

    let consumed_all = !overflow && words.peek().is_none();
    if !consumed_all {
        if let Some(last) = lines.last_mut() {
            let mut marked = truncate(last, width.saturating_sub(1));
            if !marked.ends_with(ELLIPSIS) {
                marked.push(ELLIPSIS);
            }
            *last = marked;
        }
    }
    lines
}
