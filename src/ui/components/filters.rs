//! Filter sidebar.
//!
//! Drawn over the right edge of the results listing. Each facet takes one
//! line; the focused facet expands to show its options or range.

use crate::ui::helpers::{fit, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FacetControls, FilterPanelView, RangeView};

pub const PANEL_WIDTH: usize = 38;

pub fn render_filter_panel(top: usize, bottom: usize, panel: &FilterPanelView, theme: &Theme, cols: usize) {
    let width = PANEL_WIDTH.min(cols);
    let col = cols.saturating_sub(width) + 1;
    let inner = width.saturating_sub(2);
    let mut lines: Vec<(String, String)> = Vec::new();
    let normal = Theme::fg(&theme.colors.text_normal);
    let dim = Theme::fg(&theme.colors.text_dim);

    for facet in &panel.facets {
        let marker = if facet.focused { "▸" } else { " " };
        let summary = facet.summary.as_deref().unwrap_or("");
        let name_width = inner.saturating_sub(summary.chars().count().min(inner / 2) + 2);
        let text = format!(
            "{marker}{}{}",
            fit(&facet.name, name_width),
            truncate(summary, inner / 2)
        );
        let color = if facet.focused {
            format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent))
        } else {
            normal.clone()
        };
        lines.push((color, text));

        match &facet.controls {
            Some(FacetControls::Options(options)) => {
                for option in options {
                    let mark = if option.chosen { "●" } else { "○" };
                    let cursor = if option.focused { "›" } else { " " };
                    let color = if option.chosen {
                        Theme::fg(&theme.colors.checked_fg)
                    } else {
                        dim.clone()
                    };
                    lines.push((color, format!("  {cursor} {mark} {}", option.label)));
                }
            }
            Some(FacetControls::Range(range)) => {
                lines.push((Theme::fg(&theme.colors.checked_fg), range_line(range, inner)));
                lines.push((dim.clone(), format!("   {}{} – {}{}", range.min, range.unit, range.max, range.unit)));
            }
            None => {}
        }
    }
    let apply = if panel.can_apply {
        (Theme::fg(&theme.colors.accent), " Enter: apply   r: reset".to_string())
    } else {
        (dim.clone(), " Pick a filter to apply".to_string())
    };

    let border = Theme::fg(&theme.colors.border);
    let height = bottom.saturating_sub(top);
    position_cursor(top, col);
    print!("{border}┌─ Filters {}┐", "─".repeat(inner.saturating_sub(10)));
    for i in 1..height {
        position_cursor(top + i, col);
        let (color, text) = if i == height - 1 {
            apply.clone()
        } else {
            lines.get(i - 1).cloned().unwrap_or_default()
        };
        print!("{border}│{color}{}{}{border}│", fit(&text, inner), Theme::reset());
    }
    position_cursor(bottom, col);
    print!("{border}└{}┘{}", "─".repeat(inner), Theme::reset());
}

/// A slider like `   2 ├────■■■■■────┤ 8`.
fn range_line(range: &RangeView, inner: usize) -> String {
    let low = range.low.to_string();
    let high = range.high.to_string();
    let track = inner.saturating_sub(low.len() + high.len() + 8).max(1);
    let span = range.max.saturating_sub(range.min).max(1);
    let scale = |v: u32| {
        let offset = u64::from(v.saturating_sub(range.min));
        usize::try_from(offset * (track as u64 - 1) / u64::from(span)).unwrap_or(0)
    };
    let (a, b) = (scale(range.low), scale(range.high));
    let bar: String = (0..track)
        .map(|i| if (a..=b).contains(&i) { '■' } else { '─' })
        .collect();
    format!("   {low} ├{bar}┤ {high}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_range_fills_the_track() {
        let range = RangeView {
            min: 0,
            max: 15,
            low: 0,
            high: 15,
            unit: " yrs",
        };
        let line = range_line(&range, 30);
        assert!(!line.contains('─'));
        assert!(line.starts_with("   0 ├"));
        assert!(line.ends_with("┤ 15"));
    }

    #[test]
    fn narrowed_range_shows_gaps() {
        let range = RangeView {
            min: 5,
            max: 60,
            low: 20,
            high: 40,
            unit: " LPA",
        };
        let line = range_line(&range, 30);
        assert!(line.contains('─'));
        assert!(line.contains('■'));
    }
}
