//! Page navigation bar.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PagerInfo;

/// Renders `Showing a-b of n   « ‹ 1 [2] 3 › »`.
pub fn render_pager(row: usize, pager: &PagerInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 2);
    print!("{}{}", Theme::fg(&theme.colors.text_dim), pager.range_label);

    let buttons: Vec<String> = pager
        .window
        .iter()
        .map(|&page| {
            if page == pager.current {
                format!("{}{}[{page}]{}", Theme::bold(), Theme::fg(&theme.colors.accent), Theme::fg(&theme.colors.text_dim))
            } else {
                format!(" {page} ")
            }
        })
        .collect();
    let visible_len = pager.window.iter().map(|p| p.to_string().len() + 2).sum::<usize>() + 8;

    let col = cols.saturating_sub(visible_len).max(pager.range_label.len() + 4);
    position_cursor(row, col);
    let first = if pager.current > 1 { "«" } else { " " };
    let last = if pager.current < pager.total { "»" } else { " " };
    print!("{first} ‹ {} › {last}", buttons.join(""));
    print!("{}", Theme::reset());
    row + 1
}
