//! Keybinding hint bar.

use crate::ui::helpers::{center_offset, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the hints centered and dimmed. The text is already cut to width.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let text = &footer.keybindings;
    let len = text.chars().count().min(cols);
    let padding = center_offset(len, cols);

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}{text}", " ".repeat(padding));
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
    print!("{}", Theme::reset());
    row + 1
}
