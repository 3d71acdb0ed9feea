//! Search entry screen.

use super::search::render_input;
use crate::ui::helpers::{self, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{HomeView, SuggestionItem};

const MARGIN: usize = 4;

pub fn render_home(row: usize, home: &HomeView, theme: &Theme, cols: usize) -> usize {
    let width = cols.saturating_sub(MARGIN * 2);

    position_cursor(row + 1, MARGIN + 1);
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.text_normal));
    print!("{}", truncate("Find the right candidate, describe who you need", width));
    print!("{}", Theme::reset());

    let mut current = render_input(row + 3, MARGIN + 1, &home.search, theme, width);
    current += 1;

    if home.suggestions.is_empty() {
        position_cursor(current, MARGIN + 1);
        print!("{}No matching suggestions{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
        return current + 1;
    }

    let mut last_kind = "";
    for item in &home.suggestions {
        if item.kind != last_kind {
            position_cursor(current, MARGIN + 1);
            print!("{}{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim), item.kind.to_uppercase());
            print!("{}", Theme::reset());
            current += 1;
            last_kind = item.kind;
        }
        current = render_suggestion(current, item, theme, width);
    }
    current
}

fn render_suggestion(row: usize, item: &SuggestionItem, theme: &Theme, width: usize) -> usize {
    let title = truncate(&item.title, width.saturating_sub(2));
    let title_len = title.chars().count();

    position_cursor(row, MARGIN + 1);
    if item.is_selected {
        print!("{}{}", Theme::fg(&theme.colors.selection_fg), Theme::bg(&theme.colors.selection_bg));
        print!("▸ ");
    } else {
        print!("{}  ", Theme::fg(&theme.colors.text_normal));
    }
    helpers::render_highlighted_text(&title, &item.highlight_ranges, theme, item.is_selected);
    print!("{}", " ".repeat(width.saturating_sub(title_len + 2)));
    print!("{}", Theme::reset());

    position_cursor(row + 1, MARGIN + 3);
    print!("{}{}", Theme::fg(&theme.colors.text_dim), truncate(&item.detail, width.saturating_sub(2)));
    print!("{}", Theme::reset());
    row + 2
}
