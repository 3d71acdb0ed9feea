//! Empty, loading, banner and overlay states.

use crate::ui::helpers::{center_offset, fit, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EmptyState, LoadingOverlay};

/// Renders a centered two-line message starting two rows below `row`.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let color = if empty.is_error {
        &theme.colors.error_fg
    } else {
        &theme.colors.empty_state_fg
    };
    let message = truncate(&empty.message, cols);
    position_cursor(row + 2, center_offset(message.chars().count(), cols) + 1);
    print!("{}{}{message}{}", Theme::bold(), Theme::fg(color), Theme::reset());

    let subtitle = truncate(&empty.subtitle, cols);
    position_cursor(row + 3, center_offset(subtitle.chars().count(), cols) + 1);
    print!("{}{}{subtitle}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim), Theme::reset());
    row + 4
}

pub fn render_loading(row: usize, message: &str, theme: &Theme, cols: usize) -> usize {
    let text = format!("⋯ {message}");
    position_cursor(row + 2, center_offset(text.chars().count(), cols) + 1);
    print!("{}{text}{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
    row + 3
}

pub fn render_banner(row: usize, message: &str, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    let text = format!(" ! {message}   (Esc to dismiss)");
    print!("{}{}{}", Theme::fg(&theme.colors.error_fg), fit(&text, cols), Theme::reset());
    row + 1
}

/// A boxed message in the middle of the pane.
pub fn render_overlay(overlay: &LoadingOverlay, theme: &Theme, rows: usize, cols: usize) {
    let text = format!("  {}  ·  Esc to cancel  ", overlay.message);
    let width = text.chars().count().min(cols.saturating_sub(2));
    let col = center_offset(width + 2, cols) + 1;
    let top = (rows / 2).saturating_sub(1).max(1);
    let border = Theme::fg(&theme.colors.input_border);

    position_cursor(top, col);
    print!("{border}┌{}┐", "─".repeat(width));
    position_cursor(top + 1, col);
    print!("│{}{}{border}│", Theme::fg(&theme.colors.text_normal), fit(&text, width));
    position_cursor(top + 2, col);
    print!("└{}┘{}", "─".repeat(width), Theme::reset());
}
