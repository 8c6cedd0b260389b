//! Text and layout helpers
//!
//! All width calculations use unicode display width, not byte length.

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a string as terminal columns
#[inline]
pub fn display_width(s: &str) -> u16 {
    UnicodeWidthStr::width(s).min(u16::MAX as usize) as u16
}

/// Wrap a line at word boundaries to fit within `max_width`
///
/// Words longer than `max_width` are broken by character.
pub fn wrap_line(line: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 || UnicodeWidthStr::width(line) <= max_width {
        return vec![line.to_string()];
    }

    let mut result = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in line.split_whitespace() {
        let word_width = UnicodeWidthStr::width(word);

        if current.is_empty() {
            current = word.to_string();
            current_width = word_width;
        } else if current_width + 1 + word_width <= max_width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            result.push(std::mem::take(&mut current));
            current = word.to_string();
            current_width = word_width;
        }
    }
    if !current.is_empty() {
        result.push(current);
    }

    result
        .into_iter()
        .flat_map(|s| {
            if UnicodeWidthStr::width(s.as_str()) <= max_width {
                return vec![s];
            }
            let mut chunks = Vec::new();
            let mut chunk = String::new();
            let mut chunk_width = 0usize;
            for c in s.chars() {
                let w = c.width().unwrap_or(0);
                if chunk_width + w > max_width && !chunk.is_empty() {
                    chunks.push(std::mem::take(&mut chunk));
                    chunk_width = 0;
                }
                chunk.push(c);
                chunk_width += w;
            }
            if !chunk.is_empty() {
                chunks.push(chunk);
            }
            chunks
        })
        .collect()
}

/// A `width` x `height` rect centered in `area`, clipped to it
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_line() {
        assert_eq!(wrap_line("sweet", 10), vec!["sweet"]);
    }

    #[test]
    fn test_wrap_at_words() {
        assert_eq!(
            wrap_line("fizzing stardust chews", 10),
            vec!["fizzing", "stardust", "chews"]
        );
        assert_eq!(wrap_line("a b c d", 3), vec!["a b", "c d"]);
    }

    #[test]
    fn test_wrap_breaks_long_words() {
        assert_eq!(wrap_line("marshmallow", 4), vec!["mars", "hmal", "low"]);
    }

    #[test]
    fn test_wrap_wide_chars() {
        // Each CJK character is two columns
        assert_eq!(wrap_line("糖果糖果", 4), vec!["糖果", "糖果"]);
        assert_eq!(display_width("糖果"), 4);
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(10, 5, 20, 10);
        assert_eq!(centered_rect(area, 6, 2), Rect::new(17, 9, 6, 2));
        assert_eq!(centered_rect(area, 50, 50), area);
    }
}
