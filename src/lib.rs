//! Talentscope: a Zellij plugin for searching and shortlisting candidates.
//!
//! Talentscope is a terminal recruiting front end:
//! - Natural-language search box with fuzzy-filtered suggestions
//! - Paginated, sortable, multi-selectable results with derived match scores
//! - Filter sidebar with option and range facets
//! - Candidate detail screen with local comments
//! - Floating assistant chat with delayed replies
//! - Candidate data read on a Zellij worker thread

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Router and screens                               │
//! │  - Event handling, actions                          │
//! │  - Simulated async tasks, chat                      │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Repository    │   │ Worker Layer  │
//! │ (ui/)         │   │ (repository/) │   │ (worker/)     │
//! │ - Rendering   │   │ - Fixture     │   │ - IPC bridge  │
//! │ - Theming     │   │ - JSON files  │   │ - Trace join  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Candidate model, filter/sort/paginate, selection │
//! │  - Scoring and reply strategies, errors, paths      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing, file-based export         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/talentscope.wasm" {
//!         theme "catppuccin-mocha"
//!         page_size "6"
//!         action_delay_ms "1500"
//!         reply_delay_ms "1000"
//!         candidates_file "/host/candidates.json"
//!         narrow_results "false"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use talentscope::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! for c in "react".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! let (_, actions) = handle_event(&mut state, &Event::Submit)?;
//! assert!(!actions.is_empty());
//! # Ok::<(), talentscope::TalentscopeError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod repository;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, KeyContext, Settings};
pub use domain::{Result, TalentscopeError};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from the Zellij layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a TOML theme file; see [`ui::theme`].
    pub theme_file: Option<String>,

    /// Filter directive for tracing, e.g. `debug`. Default: `info`.
    pub trace_level: Option<String>,

    /// Result rows per page. Default: 6
    pub page_size: usize,

    /// How long apply/update actions stay in the loading state.
    pub action_delay_ms: u64,

    /// How long the assistant takes to reply.
    pub reply_delay_ms: u64,

    /// JSON file with candidates; the bundled fixture is used when unset.
    pub candidates_file: Option<String>,

    /// Whether applying filters removes non-matching candidates.
    pub narrow_results: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: None,
            theme_file: None,
            trace_level: None,
            page_size: 6,
            action_delay_ms: 1500,
            reply_delay_ms: 1000,
            candidates_file: None,
            narrow_results: false,
        }
    }
}

impl Config {
    /// Parses the configuration map Zellij hands to `load`.
    ///
    /// Unparseable numbers and booleans fall back to their defaults, as does a
    /// zero page size. Blank strings count as unset.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use talentscope::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "10".to_string());
    /// map.insert("narrow_results".to_string(), "true".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.page_size, 10);
    /// assert!(config.narrow_results);
    /// assert_eq!(config.action_delay_ms, 1500);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let text = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let page_size = config
            .get("page_size")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(defaults.page_size);

        let action_delay_ms = config
            .get("action_delay_ms")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(defaults.action_delay_ms);

        let reply_delay_ms = config
            .get("reply_delay_ms")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(defaults.reply_delay_ms);

        let narrow_results = config
            .get("narrow_results")
            .and_then(|s| s.trim().parse::<bool>().ok())
            .unwrap_or(defaults.narrow_results);

        Self {
            theme_name: text("theme"),
            theme_file: text("theme_file"),
            trace_level: text("trace_level"),
            page_size,
            action_delay_ms,
            reply_delay_ms,
            candidates_file: text("candidates_file"),
            narrow_results,
        }
    }

    /// Behavior settings for the application layer.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn settings(&self) -> Settings {
        Settings {
            page_size: self.page_size,
            action_delay: self.action_delay_ms as f64 / 1000.0,
            reply_delay: self.reply_delay_ms as f64 / 1000.0,
            narrow_results: self.narrow_results,
            candidates_file: self.candidates_file.clone(),
        }
    }
}

/// Builds the initial application state, resolving the theme.
///
/// A theme file wins over a theme name; anything that fails to load falls
/// back to the default theme.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing talentscope plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(
                Theme::default,
                |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                        Theme::default()
                    })
                },
            )
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(config.settings(), theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn bad_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("page_size", "0"),
            ("action_delay_ms", "soon"),
            ("narrow_results", "yes"),
            ("candidates_file", "   "),
        ]));
        assert_eq!(config.page_size, 6);
        assert_eq!(config.action_delay_ms, 1500);
        assert!(!config.narrow_results);
        assert!(config.candidates_file.is_none());
    }

    #[test]
    fn settings_convert_milliseconds() {
        let config = Config::from_zellij(&map(&[("action_delay_ms", "250"), ("reply_delay_ms", "2000")]));
        let settings = config.settings();
        assert!((settings.action_delay - 0.25).abs() < f64::EPSILON);
        assert!((settings.reply_delay - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config {
            theme_name: Some("solarized-neon".to_string()),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, Theme::default().name);
    }

    #[test]
    fn named_theme_is_used() {
        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&config).theme.name, "catppuccin-latte");
    }
}
