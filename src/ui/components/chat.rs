//! Floating chat panel, anchored bottom-right.

use super::search::render_input;
use crate::ui::helpers::{fit, position_cursor, wrap};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ChatPanel;

const PANEL_WIDTH: usize = 44;

pub fn render_chat(chat: &ChatPanel, theme: &Theme, rows: usize, cols: usize) {
    let width = PANEL_WIDTH.min(cols);
    let inner = width.saturating_sub(2);
    let col = cols.saturating_sub(width) + 1;

    let mut lines: Vec<(String, String)> = Vec::new();
    for line in &chat.lines {
        let (color, who) = if line.from_bot {
            (Theme::fg(&theme.colors.bot_fg), "Assistant")
        } else {
            (Theme::fg(&theme.colors.accent), "You")
        };
        lines.push((format!("{}{color}", Theme::bold()), format!("{who} {}", line.time)));
        for text in wrap(&line.text, inner.saturating_sub(1)) {
            lines.push((Theme::fg(&theme.colors.text_normal), format!(" {text}")));
        }
    }
    if chat.typing {
        lines.push((Theme::fg(&theme.colors.text_dim), " Assistant is typing…".to_string()));
    }

    // header and input box are outside the message area
    let height = (lines.len() + 5).min(rows.saturating_sub(4)).max(6);
    let top = rows.saturating_sub(height + 2).max(1);
    let message_rows = height.saturating_sub(5);
    let border = Theme::fg(&theme.colors.border);

    position_cursor(top, col);
    print!("{border}┌─ Assistant {}┐{}", "─".repeat(inner.saturating_sub(12)), Theme::reset());
    let skip = lines.len().saturating_sub(message_rows);
    for i in 0..message_rows {
        position_cursor(top + 1 + i, col);
        let (color, text) = lines.get(skip + i).cloned().unwrap_or_default();
        print!("{border}│{color}{}{}{border}│{}", fit(&text, inner), Theme::reset(), Theme::reset());
    }
    position_cursor(top + 1 + message_rows, col);
    print!("{border}├{}┤{}", "─".repeat(inner), Theme::reset());
    render_input(top + 2 + message_rows, col, &chat.input, theme, width);
}
