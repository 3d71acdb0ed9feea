//! Results listing: query summary, candidate rows and the column header.

use crate::ui::helpers::{fit, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CandidateRow, ResultsView};

const SCORE_WIDTH: usize = 10;
const PHONE_WIDTH: usize = 18;

/// Renders the query line, extracted parameters and active filter chips.
pub fn render_summary(row: usize, view: &ResultsView, theme: &Theme, cols: usize) -> usize {
    let mut current = row;

    position_cursor(current, 2);
    let sort = format!("Sort: {}", view.sort_label);
    let query_width = cols.saturating_sub(sort.chars().count() + 4);
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.text_normal));
    print!("{}", fit(&format!("Results for “{}”", view.query), query_width));
    print!("{}{} {sort}{}", Theme::reset(), Theme::fg(&theme.colors.accent), Theme::reset());
    current += 1;

    position_cursor(current, 2);
    let params = view
        .params
        .iter()
        .map(|(k, v)| format!("{k}: {v}"))
        .collect::<Vec<_>>()
        .join(" │ ");
    print!("{}{}{}", Theme::fg(&theme.colors.text_dim), truncate(&params, cols.saturating_sub(2)), Theme::reset());
    current += 1;

    if !view.chips.is_empty() || view.filters_pending {
        position_cursor(current, 2);
        let mut chips = view.chips.iter().map(|c| format!("[{c}]")).collect::<Vec<_>>().join(" ");
        if view.filters_pending {
            if !chips.is_empty() {
                chips.push(' ');
            }
            chips.push_str("(unapplied filter changes)");
        }
        print!("{}{}{}", Theme::fg(&theme.colors.accent), truncate(&chips, cols.saturating_sub(2)), Theme::reset());
        current += 1;
    }
    current
}

pub fn render_table_headers(row: usize, all_selected: bool, theme: &Theme, cols: usize) -> usize {
    let name_width = cols.saturating_sub(4 + SCORE_WIDTH + PHONE_WIDTH + 1);
    position_cursor(row, 1);
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    print!(" {} ", if all_selected { "☑" } else { "☐" });
    print!("{}", fit("CANDIDATE", name_width));
    print!("{}{}", fit("MATCH", SCORE_WIDTH), fit("PHONE", PHONE_WIDTH));
    print!("{}", Theme::reset());
    row + 1
}

pub fn render_table_rows(row: usize, rows: &[CandidateRow], theme: &Theme, cols: usize) -> usize {
    rows.iter()
        .fold(row, |current, candidate| render_table_row(current, candidate, theme, cols))
}

/// Two lines per candidate: name, score and phone, then details and skills.
fn render_table_row(row: usize, item: &CandidateRow, theme: &Theme, cols: usize) -> usize {
    let name_width = cols.saturating_sub(4 + SCORE_WIDTH + PHONE_WIDTH + 1);
    let base = if item.is_selected {
        format!("{}{}", Theme::fg(&theme.colors.selection_fg), Theme::bg(&theme.colors.selection_bg))
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    position_cursor(row, 1);
    print!("{base}");
    if item.checked && !item.is_selected {
        print!("{} ☑ {base}", Theme::fg(&theme.colors.checked_fg));
    } else {
        print!(" {} ", if item.checked { "☑" } else { "☐" });
    }
    print!("{}{}{}", Theme::bold(), fit(&item.name, name_width), Theme::reset());
    print!("{base}");
    let score = item.score.map(|s| format!("{s}% match")).unwrap_or_default();
    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.accent));
    }
    print!("{}{base}", fit(&score, SCORE_WIDTH));
    print!("{} ", fit(&item.phone, PHONE_WIDTH));
    print!("{}", Theme::reset());

    position_cursor(row + 1, 5);
    let details = format!("{} · {}", item.summary, item.employer);
    let details = truncate(&details, cols.saturating_sub(6) / 2);
    let details_len = details.chars().count();
    print!("{}{details}  ", Theme::fg(&theme.colors.text_dim));

    let mut used = 5 + details_len + 2;
    for skill in &item.skills {
        let tag = format!("{} ", skill.name);
        let len = tag.chars().count();
        if used + len > cols {
            break;
        }
        if skill.highlighted {
            print!(
                "{}{}{}{} ",
                Theme::fg(&theme.colors.match_highlight_fg),
                Theme::bg(&theme.colors.match_highlight_bg),
                skill.name,
                Theme::reset()
            );
        } else {
            print!("{}{tag}", Theme::fg(&theme.colors.text_normal));
        }
        used += len;
    }
    if item.more_skills > 0 {
        let more = format!("+{} more", item.more_skills);
        if used + more.chars().count() <= cols {
            print!("{}{more}", Theme::fg(&theme.colors.text_dim));
        }
    }
    print!("{}", Theme::reset());
    row + 2
}
