//! Color themes and ANSI escape sequences.
//!
//! Themes are TOML documents. Two are compiled in (`catppuccin-mocha`, the
//! default, and `catppuccin-latte`); any other can be loaded from a file.
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cba6f7"
//! # header_bg = "#1e1e2e"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#b4befe"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! input_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! accent = "#89b4fa"
//! checked_fg = "#a6e3a1"
//! error_fg = "#f38ba8"
//! bot_fg = "#94e2d5"
//! ```

use crate::domain::{Result, TalentscopeError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`#rrggbb`) for each UI element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Cursor row.
    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Secondary text: footer, labels, timestamps.
    pub text_dim: String,
    pub border: String,
    /// Frame of the focused text input.
    pub input_border: String,

    /// Skills matching the query.
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,
    /// Match scores, active chips, current page.
    pub accent: String,
    /// Checked rows and chosen filter options.
    pub checked_fg: String,
    /// Banners and the not-found state.
    pub error_fg: String,
    /// Chat bot messages.
    pub bot_fg: String,
}

const MOCHA: &str = include_str!("../../themes/catppuccin-mocha.toml");
const LATTE: &str = include_str!("../../themes/catppuccin-latte.toml");

impl Theme {
    /// Loads a built-in theme, `None` for unknown names.
    ///
    /// ```
    /// use talentscope::ui::Theme;
    ///
    /// assert!(Theme::from_name("catppuccin-latte").is_some());
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let source = match name {
            "catppuccin-mocha" => MOCHA,
            "catppuccin-latte" => LATTE,
            _ => return None,
        };
        toml::from_str(source).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`TalentscopeError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| TalentscopeError::Theme(format!("cannot read {}: {e}", path.display())))?;
        toml::from_str(&contents)
            .map_err(|e| TalentscopeError::Theme(format!("cannot parse {}: {e}", path.display())))
    }

    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground escape for `hex`. Malformed colors render white.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha").unwrap_or_else(|| Self {
            name: "fallback".to_string(),
            colors: ThemeColors {
                header_fg: "#ffffff".to_string(),
                header_bg: None,
                selection_fg: "#000000".to_string(),
                selection_bg: "#ffffff".to_string(),
                text_normal: "#ffffff".to_string(),
                text_dim: "#808080".to_string(),
                border: "#808080".to_string(),
                input_border: "#ffffff".to_string(),
                match_highlight_fg: "#000000".to_string(),
                match_highlight_bg: "#ffff00".to_string(),
                empty_state_fg: "#00aaff".to_string(),
                accent: "#00aaff".to_string(),
                checked_fg: "#00ff00".to_string(),
                error_fg: "#ff0000".to_string(),
                bot_fg: "#00ffff".to_string(),
            },
        })
    }
}
