//! Rendering entry point.

use crate::app::AppState;
use crate::ui::components;

/// Computes the view model for the pane and prints it.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_screen(&viewmodel, &state.theme, rows, cols);
}
