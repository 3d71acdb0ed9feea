//! Shared rendering utilities.
//!
//! Widths are counted in `char`s. Every glyph this plugin prints is a single
//! terminal cell wide.

use crate::ui::theme::Theme;

/// Moves the cursor to `row`, `col` (both 1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Cuts `text` to `width` cells, ending in `…` when anything was dropped.
///
/// ```
/// use talentscope::ui::helpers::truncate;
///
/// assert_eq!(truncate("Bangalore", 6), "Banga…");
/// assert_eq!(truncate("Pune", 6), "Pune");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// `text` truncated to `width` and right-padded with spaces to exactly `width`.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let cut = truncate(text, width);
    let len = cut.chars().count();
    format!("{cut}{}", " ".repeat(width.saturating_sub(len)))
}

/// Left padding that centers `len` cells in `width`.
#[must_use]
pub const fn center_offset(len: usize, width: usize) -> usize {
    width.saturating_sub(len) / 2
}

/// Greedy word wrap to `width` cells. Words longer than a line are truncated.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let word = truncate(word, width);
        let needed = if line.is_empty() {
            word.chars().count()
        } else {
            line.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Prints `text` with the character ranges in `ranges` highlighted.
///
/// Ranges are `(start, end)` char indices, sorted and non-overlapping. On a
/// selected row highlighting is skipped so the selection colors stay intact.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, is_selected: bool) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut pos = 0;
    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < pos {
            continue;
        }
        print!("{}", chars[pos..start].iter().collect::<String>());
        print!(
            "{}{}",
            Theme::fg(&theme.colors.match_highlight_fg),
            Theme::bg(&theme.colors.match_highlight_bg)
        );
        print!("{}", chars[start..end].iter().collect::<String>());
        print!("{}{}", Theme::reset(), Theme::fg(&theme.colors.text_normal));
        pos = end;
    }
    print!("{}", chars[pos..].iter().collect::<String>());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_edges() {
        assert_eq!(truncate("abc", 0), "");
        assert_eq!(truncate("abc", 1), "…");
        assert_eq!(truncate("abc", 3), "abc");
        assert_eq!(truncate("₹18 LPA", 4), "₹18…");
    }

    #[test]
    fn fit_pads_to_width() {
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(fit("abcdef", 4), "abc…");
    }

    #[test]
    fn centering() {
        assert_eq!(center_offset(4, 10), 3);
        assert_eq!(center_offset(20, 10), 0);
    }

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(
            wrap("Strong technical background in React", 16),
            vec!["Strong technical", "background in", "React"]
        );
        assert!(wrap("", 10).is_empty());
        assert_eq!(wrap("supercalifragilistic", 6), vec!["super…"]);
    }
}
