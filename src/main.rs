//! Zellij plugin wrapper and entry point.
//!
//! Thin layer between the Talentscope library and the Zellij plugin system:
//! it maps Zellij events to library events, runs `handle_event`, and carries
//! out the returned actions with Zellij API calls.
//!
//! ```text
//! ┌──────────────────────────┐
//! │   Zellij Main Thread     │
//! │  ┌───────────────────┐   │
//! │  │  State (plugin)   │   │  ← UI state, event handling
//! │  └───────────────────┘   │
//! │          │ IPC           │
//! │          ▼               │
//! │  ┌───────────────────┐   │
//! │  │ TalentscopeWorker │   │  ← Candidate repository
//! │  └───────────────────┘   │
//! └──────────────────────────┘
//! ```
//!
//! # Keybindings
//!
//! Anywhere: `Ctrl+c` toggles the assistant chat.
//!
//! Search box and other text fields: type, `Backspace`, `Enter` submits,
//! `Esc` cancels. On the home screen `Tab`/`Down` moves into the suggestions.
//!
//! Suggestions: `j`/`k` move, `Enter` searches, `Tab`/`Esc` return to the box,
//! `q` closes the pane.
//!
//! Results:
//! - `j`/`k`: Move between rows
//! - `Space`/`x`: Toggle the row, `a`: Toggle the whole page
//! - `n`/`l`/`→` and `p`/`h`/`←`: Next and previous page
//! - `g`/`G`: First and last page, `1`-`9`: Jump to a page
//! - `s`/`S`: Cycle the sort order
//! - `f`: Filters, `e`: Edit search, `v`: Show phone
//! - `Enter`: Open profile, `b`/`q`/`Backspace`: Back
//!
//! Filter sidebar: `j`/`k` facets, `h`/`l` options or upper bound, `H`/`L`
//! lower bound, `Space` toggle, `x` clear facet, `r` reset, `Enter` apply,
//! `Esc`/`f` close.
//!
//! Profile: `j`/`k` scroll, `m` comment, `b`/`q`/`Esc` back.
//!
//! While an action is loading only `Esc` (cancel) is accepted.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use talentscope::worker::{TalentscopeWorker, WorkerMessage, WorkerResponse};
use talentscope::{handle_event, Action, Config, Event, KeyContext};

register_plugin!(State);
register_worker!(TalentscopeWorker, talentscope_worker, TALENTSCOPE_WORKER);

/// Plugin state wrapper.
struct State {
    app: talentscope::AppState,

    /// Worker thread identifier for IPC messaging.
    worker_name: String,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: talentscope::initialize(&default_config),
            worker_name: "talentscope".to_string(),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, builds the app state, requests permissions and
    /// subscribes to events.
    ///
    /// `ChangeApplicationState` is needed to hide the pane; `FullHdAccess` is
    /// requested only when candidates come from a host file.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        talentscope::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(config = ?config, "parsed configuration");
        self.app = talentscope::initialize(&config);

        let mut permissions = vec![PermissionType::ChangeApplicationState];
        if config.candidates_file.is_some() {
            permissions.push(PermissionType::FullHdAccess);
        }
        tracing::debug!(permissions = ?permissions, "requesting permissions");
        request_permission(&permissions);

        subscribe(&[
            EventType::Key,
            EventType::CustomMessage,
            EventType::Timer,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete");
    }

    /// Maps the Zellij event, delegates to `handle_event`, and executes the
    /// resulting actions. Returns whether to re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match self.map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::Timer(elapsed) => Event::Tick { elapsed },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => Event::PermissionsResult {
                granted: matches!(status, PermissionStatus::Granted),
            },
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                true
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        talentscope::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::Timer(_) => "Timer".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps a keypress to an application event for the current key context.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('c') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::ToggleChat);
        }

        let context = self.app.key_context();
        match context {
            KeyContext::Typing => Self::map_typing_key(key.bare_key),
            KeyContext::Busy => (key.bare_key == BareKey::Esc).then_some(Event::Escape),
            KeyContext::Suggestions => Self::map_suggestions_key(key.bare_key),
            KeyContext::ResultsList => Self::map_results_key(key.bare_key),
            KeyContext::FilterPanel => Self::map_filter_key(key.bare_key),
            KeyContext::DetailBody => Self::map_detail_key(key.bare_key),
        }
    }

    fn map_typing_key(key: BareKey) -> Option<Event> {
        Some(match key {
            BareKey::Enter => Event::Submit,
            BareKey::Esc => Event::Escape,
            BareKey::Backspace => Event::Backspace,
            BareKey::Tab => Event::FocusNext,
            BareKey::Down => Event::CursorDown,
            BareKey::Up => Event::CursorUp,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    fn map_suggestions_key(key: BareKey) -> Option<Event> {
        Some(match key {
            BareKey::Down | BareKey::Char('j') => Event::CursorDown,
            BareKey::Up | BareKey::Char('k') => Event::CursorUp,
            BareKey::Enter => Event::Submit,
            BareKey::Esc | BareKey::Tab => Event::FocusNext,
            BareKey::Char('c') => Event::ToggleChat,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    fn map_results_key(key: BareKey) -> Option<Event> {
        Some(match key {
            BareKey::Down | BareKey::Char('j') => Event::CursorDown,
            BareKey::Up | BareKey::Char('k') => Event::CursorUp,
            BareKey::Char(' ' | 'x') => Event::ToggleSelection,
            BareKey::Char('a') => Event::SelectAllOnPage,
            BareKey::Right | BareKey::Char('n' | 'l') => Event::NextPage,
            BareKey::Left | BareKey::Char('p' | 'h') => Event::PrevPage,
            BareKey::Char('g') => Event::FirstPage,
            BareKey::Char('G') => Event::LastPage,
            BareKey::Char(c @ '1'..='9') => Event::GoToPage(c.to_digit(10).map_or(1, |d| d as usize)),
            BareKey::Char('s') => Event::CycleSort,
            BareKey::Char('S') => Event::CycleSortBack,
            BareKey::Char('f') => Event::OpenFilters,
            BareKey::Char('e') => Event::EditSearch,
            BareKey::Char('v') => Event::RevealPhone,
            BareKey::Char('c') => Event::ToggleChat,
            BareKey::Enter => Event::OpenCandidate,
            BareKey::Char('b' | 'q') | BareKey::Backspace => Event::Back,
            BareKey::Esc => Event::Escape,
            _ => return None,
        })
    }

    fn map_filter_key(key: BareKey) -> Option<Event> {
        Some(match key {
            BareKey::Down | BareKey::Char('j') => Event::CursorDown,
            BareKey::Up | BareKey::Char('k') => Event::CursorUp,
            BareKey::Right | BareKey::Char('l') => Event::OptionNext,
            BareKey::Left | BareKey::Char('h') => Event::OptionPrev,
            BareKey::Char('L') => Event::RaiseLow,
            BareKey::Char('H') => Event::LowerLow,
            BareKey::Char(' ') => Event::ToggleOption,
            BareKey::Char('x') => Event::ClearFacet,
            BareKey::Char('r') => Event::ResetFilters,
            BareKey::Enter => Event::ApplyFilters,
            BareKey::Esc | BareKey::Char('f') => Event::Escape,
            _ => return None,
        })
    }

    fn map_detail_key(key: BareKey) -> Option<Event> {
        Some(match key {
            BareKey::Down | BareKey::Char('j') => Event::CursorDown,
            BareKey::Up | BareKey::Char('k') => Event::CursorUp,
            BareKey::Char('m') => Event::StartComment,
            BareKey::Char('c') => Event::ToggleChat,
            BareKey::Char('b' | 'q') | BareKey::Esc | BareKey::Backspace => Event::Back,
            _ => return None,
        })
    }

    fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<Event> {
        tracing::debug!(message_name = %message, payload_len = payload.len(), "custom message event");

        if message != self.worker_name {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }

        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => {
                tracing::debug!(response = ?response, "worker response received");
                Some(Event::WorkerResponse(response))
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    /// Serializes `message` and posts it to the worker thread.
    fn post_worker_message(&self, message: &WorkerMessage) {
        match serde_json::to_string(&message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(self.worker_name.clone()),
                    name: self.worker_name.clone(),
                    payload,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker message");
            }
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::PostToWorker(message) => {
                tracing::debug!(message = ?message, "posting to worker");
                self.post_worker_message(message);
            }
            Action::ScheduleTick { seconds } => {
                set_timeout(*seconds);
            }
        }
    }
}
