//! Terminal rendering.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → components → ANSI on stdout
//! ```
//!
//! - [`viewmodel`]: Display-ready state
//! - [`renderer`]: Entry point
//! - [`components`]: Per-region renderers
//! - [`helpers`]: Cursor positioning, truncation, wrapping, highlighting
//! - [`theme`]: Color themes

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{Body, UIViewModel};
