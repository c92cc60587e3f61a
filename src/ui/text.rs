//! Width-aware string helpers for fixed-width cells.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `s` to at most `max` columns, ending in "..." when shortened.
pub fn truncate(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max < 4 {
        return take_columns(s, max);
    }
    let mut out = take_columns(s, max - 3);
    out.push_str("...");
    out
}

/// Pad or cut `s` to exactly `width` columns.
pub fn fit(s: &str, width: usize) -> String {
    let mut out = truncate(s, width);
    let used = out.width();
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

/// The part of `s` visible in a `width`-column field scrolled so that
/// `cursor_col` stays on screen. Returns the text and the cursor's column
/// inside the field.
pub fn scroll_window(s: &str, cursor_col: usize, width: usize) -> (String, usize) {
    if width == 0 {
        return (String::new(), 0);
    }
    let skip = cursor_col.saturating_sub(width - 1);
    let mut col = 0;
    let mut start = s.len();
    for (i, c) in s.char_indices() {
        if col >= skip {
            start = i;
            break;
        }
        col += c.width().unwrap_or(0);
    }
    (take_columns(&s[start..], width), cursor_col - col.min(cursor_col))
}

fn take_columns(s: &str, max: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Ada", 10), "Ada");
        assert_eq!(truncate("Grace Brewster Hopper", 10), "Grace B...");
        assert_eq!(truncate("Grace", 3), "Gra");
    }

    #[test]
    fn test_fit_pads() {
        assert_eq!(fit("Ada", 5), "Ada  ");
        assert_eq!(fit("Alan Turing", 6), "Ala...");
    }

    #[test]
    fn test_scroll_window_follows_cursor() {
        assert_eq!(scroll_window("short", 5, 10), ("short".to_string(), 5));
        assert_eq!(scroll_window("abcdefghij", 10, 5), ("ghij".to_string(), 4));
        assert_eq!(scroll_window("abcdefghij", 2, 5), ("abcde".to_string(), 2));
    }
}
