//! Candidate profile.

use super::search::render_input;
use crate::ui::helpers::{fit, position_cursor, wrap};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailView;

const LABEL_WIDTH: usize = 20;

/// Renders the profile between `row` and `bottom`, skipping the first
/// `detail.scroll` lines. The comment input, when open, is pinned to the bottom.
pub fn render_detail(row: usize, bottom: usize, detail: &DetailView, theme: &Theme, cols: usize) {
    let width = cols.saturating_sub(4);
    let normal = Theme::fg(&theme.colors.text_normal);
    let dim = Theme::fg(&theme.colors.text_dim);
    let mut lines: Vec<(String, String)> = vec![
        (format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg)), detail.name.clone()),
        (dim.clone(), detail.headline.clone()),
        (String::new(), String::new()),
    ];

    for (label, value) in &detail.fields {
        lines.push((normal.clone(), format!("{}{value}", fit(label, LABEL_WIDTH))));
    }
    lines.push((String::new(), String::new()));
    lines.push((Theme::fg(&theme.colors.accent), format!("Skills: {}", detail.skills.join(" · "))));
    lines.push((String::new(), String::new()));
    lines.push((
        format!("{}{}", Theme::bold(), normal),
        format!("Comments ({})", detail.comments.len()),
    ));
    for comment in &detail.comments {
        lines.push((Theme::fg(&theme.colors.accent), format!("{} · {}", comment.author, comment.date)));
        for line in wrap(&comment.text, width.saturating_sub(2)) {
            lines.push((normal.clone(), format!("  {line}")));
        }
    }

    let input_rows = if detail.comment_input.is_some() { 3 } else { 0 };
    let last_text_row = bottom.saturating_sub(input_rows);
    let visible = last_text_row.saturating_sub(row);
    let skip = detail.scroll.min(lines.len().saturating_sub(visible));

    for (i, (color, text)) in lines.iter().skip(skip).take(visible).enumerate() {
        position_cursor(row + i, 3);
        print!("{color}{}{}", fit(text, width), Theme::reset());
    }

    if let Some(input) = &detail.comment_input {
        render_input(last_text_row, 3, input, theme, width);
    }
}
