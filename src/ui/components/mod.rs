//! Screen components.
//!
//! Each component prints ANSI at absolute positions and, where it flows
//! vertically, returns the next free row. [`render_screen`] lays them out:
//!
//! ```text
//! [blank]
//! [Header]                       title · status
//! [Border]
//! [Banner]                       only when set
//! [Body]                         home / results / detail / loading / empty
//! [Border]
//! [Footer]
//! ```
//!
//! The filter sidebar, chat panel and loading overlay are drawn last, on top.

mod chat;
mod detail;
mod empty;
mod filters;
mod footer;
mod header;
mod home;
mod pager;
mod search;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, ResultsView, UIViewModel};

fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}{}{}", Theme::fg(color), "─".repeat(cols), Theme::reset());
    row + 1
}

pub fn render_screen(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let footer_row = rows.saturating_sub(1).max(1);
    let bottom_border = footer_row.saturating_sub(1);

    let mut row = header::render_header(2, &vm.header, theme, cols);
    row = render_border(row, &theme.colors.border, cols);
    if let Some(banner) = &vm.banner {
        row = empty::render_banner(row, banner, theme, cols);
    }
    let body_bottom = bottom_border.saturating_sub(1);

    match &vm.body {
        Body::Home(home) => {
            home::render_home(row, home, theme, cols);
        }
        Body::Results(results) => render_results(row, body_bottom, results, theme, cols),
        Body::Detail(detail) => detail::render_detail(row + 1, body_bottom, detail, theme, cols),
        Body::Loading(message) => {
            empty::render_loading(row, message, theme, cols);
        }
        Body::Empty(state) => {
            empty::render_empty_state(row, state, theme, cols);
        }
    }

    render_border(bottom_border, &theme.colors.border, cols);
    footer::render_footer(footer_row, &vm.footer, theme, cols);

    if let Some(chat) = &vm.chat {
        chat::render_chat(chat, theme, rows, cols);
    }
    if let Some(overlay) = &vm.overlay {
        empty::render_overlay(overlay, theme, rows, cols);
    }
}

fn render_results(row: usize, bottom: usize, view: &ResultsView, theme: &Theme, cols: usize) {
    let list_cols = if view.filter_panel.is_some() {
        cols.saturating_sub(filters::PANEL_WIDTH)
    } else {
        cols
    };

    let mut current = table::render_summary(row, view, theme, list_cols);
    if let Some(edit) = &view.edit_panel {
        current = search::render_input(current, 2, edit, theme, list_cols.saturating_sub(2));
    }
    current += 1;

    if let Some(empty_state) = &view.empty {
        empty::render_empty_state(current, empty_state, theme, list_cols);
    } else {
        current = table::render_table_headers(current, view.all_selected, theme, list_cols);
        table::render_table_rows(current, &view.rows, theme, list_cols);
        pager::render_pager(bottom, &view.pager, theme, list_cols);
    }

    if let Some(panel) = &view.filter_panel {
        filters::render_filter_panel(row, bottom, panel, theme, cols);
    }
}
