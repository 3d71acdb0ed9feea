//! Central application state.
//!
//! [`AppState`] owns the route history, the state of the mounted screen, the
//! floating chat widget and the logical clock that drives simulated delays.
//! Screens are rebuilt from defaults every time their route is mounted; only
//! the chat widget outlives navigation.

use super::actions::Action;
use super::chat::ChatState;
use super::detail::DetailState;
use super::home::HomeState;
use super::modes::{DetailFocus, HomeFocus, KeyContext, ResultsFocus, Route};
use super::results::ResultsState;
use crate::domain::{CannedResponses, RandomScoring, ResponseStrategy, ScoringStrategy};
use crate::ui::theme::Theme;
use crate::worker::WorkerMessage;

/// Seconds between timer ticks while something is pending.
pub const TICK_SECONDS: f64 = 0.25;

/// State of the mounted screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Home(HomeState),
    Results(ResultsState),
    Detail(DetailState),
}

/// Behavior knobs taken from the plugin configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Result rows per page.
    pub page_size: usize,
    /// Seconds an apply/update action stays in the loading state.
    pub action_delay: f64,
    /// Seconds before the chat bot answers.
    pub reply_delay: f64,
    /// Whether applying filters removes non-matching candidates.
    pub narrow_results: bool,
    /// Candidate JSON file; `None` uses the built-in fixture.
    pub candidates_file: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: 6,
            action_delay: 1.5,
            reply_delay: 1.0,
            narrow_results: false,
            candidates_file: None,
        }
    }
}

/// Central application state container.
///
/// Mutated by the event handler in response to user input, timer ticks and
/// worker responses. View models are computed on demand from it.
#[derive(Debug)]
pub struct AppState {
    /// State of the mounted screen.
    ///
    /// Rebuilt from defaults whenever a route is mounted, so screen state
    /// never survives navigation.
    pub screen: Screen,

    /// Route stack; the last entry is the current route and is never popped
    /// below the home route.
    history: Vec<Route>,

    /// Floating assistant chat, kept across navigation.
    pub chat: ChatState,

    /// Logical time in seconds, advanced by timer ticks.
    pub clock: f64,

    /// Whether a timer tick has been requested and not yet delivered.
    ///
    /// Keeps at most one tick outstanding.
    tick_pending: bool,

    /// Behavior knobs from the plugin configuration.
    pub settings: Settings,

    /// Color theme used by the renderer.
    pub theme: Theme,

    /// Computes a match score for each loaded candidate.
    pub(crate) scorer: Box<dyn ScoringStrategy>,

    /// Produces the assistant's replies.
    pub(crate) responder: Box<dyn ResponseStrategy>,
}

/// Current wall-clock time as Unix seconds.
#[must_use]
pub fn now_ts() -> i64 {
    chrono::Utc::now().timestamp()
}

impl AppState {
    /// State on the home route with random scoring and canned chat replies.
    #[must_use]
    pub fn new(settings: Settings, theme: Theme) -> Self {
        Self::with_strategies(
            settings,
            theme,
            Box::new(RandomScoring::new()),
            Box::new(CannedResponses::new()),
        )
    }

    #[must_use]
    pub fn with_strategies(
        settings: Settings,
        theme: Theme,
        scorer: Box<dyn ScoringStrategy>,
        responder: Box<dyn ResponseStrategy>,
    ) -> Self {
        Self {
            screen: Screen::Home(HomeState::default()),
            history: vec![Route::Home],
            chat: ChatState::new(now_ts()),
            clock: 0.0,
            tick_pending: false,
            settings,
            theme,
            scorer,
            responder,
        }
    }

    #[must_use]
    pub fn route(&self) -> &Route {
        self.history.last().unwrap_or(&Route::Home)
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    fn source(&self) -> Option<String> {
        self.settings.candidates_file.clone()
    }

    /// Pushes `route` and mounts a fresh screen for it.
    pub fn navigate(&mut self, route: Route) -> Vec<Action> {
        tracing::debug!(route = ?route, "navigate");
        self.history.push(route.clone());
        self.mount(route)
    }

    /// Returns to the previous route. Does nothing on the first route.
    pub fn back(&mut self) -> Vec<Action> {
        if self.history.len() <= 1 {
            return vec![];
        }
        self.history.pop();
        let route = self.route().clone();
        tracing::debug!(route = ?route, "back");
        self.mount(route)
    }

    fn mount(&mut self, route: Route) -> Vec<Action> {
        match route {
            Route::Home => {
                self.screen = Screen::Home(HomeState::default());
                vec![]
            }
            Route::Results { query } => {
                self.screen = Screen::Results(ResultsState::new(
                    query,
                    self.settings.page_size,
                    self.settings.narrow_results,
                ));
                vec![Action::PostToWorker(WorkerMessage::load_candidates(self.source()))]
            }
            Route::Detail { id } => {
                self.screen = Screen::Detail(DetailState::new(id.clone()));
                vec![Action::PostToWorker(WorkerMessage::get_candidate(id, self.source()))]
            }
        }
    }

    /// Rewrites the query of the current results route.
    pub(crate) fn sync_query(&mut self, query: &str) {
        if let Some(Route::Results { query: current }) = self.history.last_mut() {
            *current = query.to_string();
        }
    }

    /// How keystrokes should be read right now.
    #[must_use]
    pub fn key_context(&self) -> KeyContext {
        if self.chat.open {
            return KeyContext::Typing;
        }
        match &self.screen {
            Screen::Home(home) => match home.focus {
                HomeFocus::Query => KeyContext::Typing,
                HomeFocus::Suggestions => KeyContext::Suggestions,
            },
            Screen::Results(results) if results.task.is_loading() => KeyContext::Busy,
            Screen::Results(results) => match results.focus {
                ResultsFocus::List => KeyContext::ResultsList,
                ResultsFocus::Filters => KeyContext::FilterPanel,
                ResultsFocus::EditSearch => KeyContext::Typing,
            },
            Screen::Detail(detail) => match detail.focus {
                DetailFocus::Body => KeyContext::DetailBody,
                DetailFocus::Comment => KeyContext::Typing,
            },
        }
    }

    /// Returns whether a results action is loading.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(&self.screen, Screen::Results(r) if r.task.is_loading())
    }

    /// Returns whether anything is waiting on the clock.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.is_busy() || self.chat.has_pending()
    }

    /// Requests a timer tick when work is pending and none is outstanding.
    pub fn schedule_tick(&mut self) -> Option<Action> {
        if self.tick_pending || !self.has_pending() {
            return None;
        }
        self.tick_pending = true;
        Some(Action::ScheduleTick { seconds: TICK_SECONDS })
    }

    /// Advances the clock by `elapsed` seconds and settles whatever came due.
    pub fn on_tick(&mut self, elapsed: f64) -> bool {
        self.tick_pending = false;
        self.clock += elapsed.max(0.0);
        self.advance()
    }

    /// Settles due actions and delivers due chat replies at the current clock.
    pub fn advance(&mut self) -> bool {
        let mut changed = false;

        let mut new_query = None;
        if let Screen::Results(results) = &mut self.screen {
            if let Some(outcome) = results.task.poll(self.clock) {
                new_query = results.settle(outcome);
                changed = true;
            }
        }
        if let Some(query) = new_query {
            self.sync_query(&query);
        }

        let delivered = self
            .chat
            .deliver_due(self.clock, self.responder.as_mut(), now_ts());
        changed || delivered > 0
    }
}
