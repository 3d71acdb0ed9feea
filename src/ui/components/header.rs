//! Title bar.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title on the left and the status subtitle on the right.
///
/// Returns the next free row.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = format!(" {}", header.title);
    let title_len = title.chars().count();
    let subtitle = truncate(&header.subtitle, cols.saturating_sub(title_len + 2));
    let subtitle_len = subtitle.chars().count();

    position_cursor(row, 1);
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}{}{title}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    print!("{}", Theme::reset());
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", " ".repeat(cols.saturating_sub(title_len + subtitle_len + 1)));
    print!("{}{subtitle} ", Theme::fg(&theme.colors.text_dim));
    print!("{}", Theme::reset());
    row + 1
}
