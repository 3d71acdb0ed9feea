//! Framed single-line text input.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Renders a three-line input box `width` cells wide starting at `col`.
///
/// ```text
/// ┌─ Search ──────────────┐
/// │ react developers▏     │
/// └───────────────────────┘
/// ```
///
/// Returns the row after the box.
pub fn render_input(row: usize, col: usize, input: &SearchBarInfo, theme: &Theme, width: usize) -> usize {
    let inner = width.saturating_sub(2);
    let border = if input.focused {
        &theme.colors.input_border
    } else {
        &theme.colors.border
    };

    let label = format!("─ {} ", input.label);
    let label_len = label.chars().count().min(inner);
    position_cursor(row, col);
    print!("{}┌{}", Theme::fg(border), label.chars().take(label_len).collect::<String>());
    print!("{}┐{}", "─".repeat(inner.saturating_sub(label_len)), Theme::reset());

    let content_width = inner.saturating_sub(2);
    position_cursor(row + 1, col);
    print!("{}│ ", Theme::fg(border));
    if input.text.is_empty() && !input.focused {
        print!("{}{}", Theme::fg(&theme.colors.text_dim), fit(&input.placeholder, content_width));
    } else {
        // keep the tail of long input visible
        let caret = if input.focused { "▏" } else { "" };
        let shown: String = {
            let full = format!("{}{caret}", input.text);
            let len = full.chars().count();
            full.chars().skip(len.saturating_sub(content_width)).collect()
        };
        print!("{}{}", Theme::fg(&theme.colors.text_normal), fit(&shown, content_width));
    }
    print!("{} │{}", Theme::fg(border), Theme::reset());

    position_cursor(row + 2, col);
    print!("{}└{}┘{}", Theme::fg(border), "─".repeat(inner), Theme::reset());

    row + 3
}
