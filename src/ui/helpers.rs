use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Word-wrap text to fit within a given width. Explicit newlines are kept.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current_line = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();

            // Hard-break tokens (URLs etc.) that can never fit on one line
            if word_width > max_width {
                if current_width > 0 {
                    lines.push(std::mem::take(&mut current_line));
                }
                let mut chunks = split_by_width(word, max_width);
                let last = chunks.pop().unwrap_or_default();
                lines.extend(chunks);
                current_width = last.width();
                current_line = last;
                continue;
            }

            if current_width == 0 {
                // First word on line
                current_line = word.to_string();
                current_width = word_width;
            } else if current_width + 1 + word_width <= max_width {
                // Word fits on current line
                current_line.push(' ');
                current_line.push_str(word);
                current_width += 1 + word_width;
            } else {
                // Word doesn't fit, start new line
                lines.push(std::mem::take(&mut current_line));
                current_line = word.to_string();
                current_width = word_width;
            }
        }

        lines.push(current_line);
    }

    lines
}

/// Split a single token into pieces no wider than `max_width` columns
fn split_by_width(word: &str, max_width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut width = 0;
    for c in word.chars() {
        let cw = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if width + cw > max_width && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            width = 0;
        }
        piece.push(c);
        width += cw;
    }
    pieces.push(piece);
    pieces
}

/// Row and display column of a byte cursor inside multi-line text
pub fn cursor_position(text: &str, cursor: usize) -> (u16, u16) {
    let before = &text[..cursor.min(text.len())];
    let row = before.matches('\n').count();
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let col = before[line_start..].width();
    (row as u16, col as u16)
}

/// Scroll offset along one axis that keeps `pos` inside a viewport of `size`
pub fn scroll_to_keep(pos: u16, size: u16) -> u16 {
    if size == 0 { pos } else { pos.saturating_sub(size - 1) }
}

/// Horizontally centered column of at most `max_width`
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = max_width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

/// Rect of the given size centered in `area`, clamped to it
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(wrap_text("rest and drink water", 9), vec!["rest and", "drink", "water"]);
    }

    #[test]
    fn wrap_keeps_paragraphs() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn wrap_hard_breaks_long_tokens() {
        assert_eq!(
            wrap_text("see https://example.org/advice now", 10),
            vec!["see", "https://ex", "ample.org/", "advice now"]
        );
    }

    #[test]
    fn wrap_long_token_continues_line() {
        assert_eq!(wrap_text("abcdefgh ij", 5), vec!["abcde", "fgh", "ij"]);
    }

    #[test]
    fn wrap_empty_is_one_line() {
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn cursor_on_second_line() {
        assert_eq!(cursor_position("ab\ncdé", 7), (1, 3));
        assert_eq!(cursor_position("ab", 0), (0, 0));
    }

    #[test]
    fn scroll_follows_cursor() {
        assert_eq!(scroll_to_keep(2, 5), 0);
        assert_eq!(scroll_to_keep(7, 5), 3);
    }

    #[test]
    fn centered_rect_is_clamped() {
        let r = centered_rect(Rect::new(0, 0, 20, 10), 50, 4);
        assert_eq!(r, Rect::new(0, 3, 20, 4));
    }
}
