//! Event handling and state transitions.
//!
//! The plugin shim translates raw Zellij input into [`Event`]s according to
//! the current [`KeyContext`](super::modes::KeyContext). [`handle_event`] then
//! dispatches on the chat widget, the loading state and the mounted screen, and
//! returns whether to re-render along with the [`Action`]s to execute.
//!
//! # Examples
//!
//! ```
//! use talentscope::app::{handle_event, AppState, Event, Settings};
//! use talentscope::ui::Theme;
//!
//! let mut state = AppState::new(Settings::default(), Theme::default());
//! for c in "rust".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! let (render, actions) = handle_event(&mut state, &Event::Submit)?;
//! assert!(render);
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), talentscope::TalentscopeError>(())
//! ```

use super::actions::Action;
use super::modes::{DetailFocus, HomeFocus, ResultsFocus, Route};
use super::state::{now_ts, AppState, Screen};
use crate::domain::Result;
use crate::worker::WorkerResponse;

/// Input and system events understood by the application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Printable input for the focused text field.
    Char(char),
    Backspace,
    /// Enter: submit the focused field or open the focused item.
    Submit,
    /// Cancel the running action, close the open panel, or step back.
    Escape,
    CursorDown,
    CursorUp,
    /// Move focus between the query box and the suggestions.
    FocusNext,

    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    GoToPage(usize),

    ToggleSelection,
    SelectAllOnPage,
    CycleSort,
    CycleSortBack,
    /// Show or hide the phone number of the focused row.
    RevealPhone,
    OpenCandidate,
    OpenFilters,
    EditSearch,

    /// Next option, or raise the upper bound of a range facet.
    OptionNext,
    /// Previous option, or lower the upper bound of a range facet.
    OptionPrev,
    RaiseLow,
    LowerLow,
    ToggleOption,
    ClearFacet,
    ResetFilters,
    ApplyFilters,

    StartComment,
    ToggleChat,
    /// Previous route.
    Back,
    /// Hide the plugin pane.
    CloseFocus,

    /// Timer fired after `elapsed` seconds.
    Tick { elapsed: f64 },
    WorkerResponse(WorkerResponse),
    PermissionsResult { granted: bool },
}

type Handled = Result<(bool, Vec<Action>)>;

fn rendered(render: bool) -> Handled {
    Ok((render, Vec::new()))
}

/// Processes an event, mutates the state and returns the actions to execute.
///
/// A timer tick is requested whenever the event leaves work pending on the
/// logical clock.
///
/// # Errors
///
/// Returns an error when a worker response cannot be applied, such as a
/// candidate list with duplicate ids. The state is left renderable.
pub fn handle_event(state: &mut AppState, event: &Event) -> Handled {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let (render, mut actions) = dispatch(state, event)?;
    if let Some(tick) = state.schedule_tick() {
        actions.push(tick);
    }
    Ok((render, actions))
}

fn dispatch(state: &mut AppState, event: &Event) -> Handled {
    match event {
        Event::Tick { elapsed } => rendered(state.on_tick(*elapsed)),
        Event::WorkerResponse(response) => handle_worker_response(state, response),
        Event::PermissionsResult { granted } => {
            if *granted {
                tracing::debug!("permissions granted");
            } else {
                tracing::warn!("permissions denied; closing the pane is unavailable");
            }
            rendered(false)
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::ToggleChat => {
            state.chat.toggle();
            rendered(true)
        }
        _ if state.chat.open => handle_chat(state, event),
        _ if state.is_busy() => handle_busy(state, event),
        _ => match state.screen {
            Screen::Home(_) => handle_home(state, event),
            Screen::Results(_) => handle_results(state, event),
            Screen::Detail(_) => handle_detail(state, event),
        },
    }
}

fn handle_chat(state: &mut AppState, event: &Event) -> Handled {
    let chat = &mut state.chat;
    match event {
        Event::Char(c) => chat.push_char(*c),
        Event::Backspace => chat.backspace(),
        Event::Submit => return rendered(chat.send(state.clock, state.settings.reply_delay, now_ts())),
        Event::Escape => chat.open = false,
        _ => return rendered(false),
    }
    rendered(true)
}

fn handle_busy(state: &mut AppState, event: &Event) -> Handled {
    let Screen::Results(results) = &mut state.screen else {
        return rendered(false);
    };
    if *event != Event::Escape {
        tracing::debug!("ignoring input while an action is loading");
        return rendered(false);
    }
    if let Some(outcome) = results.task.cancel() {
        results.settle(outcome);
    }
    rendered(true)
}

fn handle_home(state: &mut AppState, event: &Event) -> Handled {
    let Screen::Home(home) = &mut state.screen else {
        return rendered(false);
    };
    let query = match (home.focus, event) {
        (HomeFocus::Query, Event::Char(c)) => {
            home.push_char(*c);
            return rendered(true);
        }
        (HomeFocus::Query, Event::Backspace) => {
            home.backspace();
            return rendered(true);
        }
        (HomeFocus::Query, Event::Submit) => home.submit(),
        (HomeFocus::Query, Event::Escape) => return Ok((false, vec![Action::CloseFocus])),
        (HomeFocus::Query, Event::FocusNext | Event::CursorDown) => {
            return rendered(home.focus_suggestions());
        }
        (HomeFocus::Suggestions, Event::CursorDown) => {
            home.cursor_down();
            return rendered(true);
        }
        (HomeFocus::Suggestions, Event::CursorUp) => {
            home.cursor_up();
            return rendered(true);
        }
        (HomeFocus::Suggestions, Event::FocusNext | Event::Escape) => {
            home.focus_query();
            return rendered(true);
        }
        (HomeFocus::Suggestions, Event::Submit) => home.choose(),
        _ => return rendered(false),
    };

    let Some(query) = query else {
        return rendered(false);
    };
    tracing::info!(query = %query, "search submitted");
    Ok((true, state.navigate(Route::Results { query })))
}

#[allow(clippy::too_many_lines)]
fn handle_results(state: &mut AppState, event: &Event) -> Handled {
    let clock = state.clock;
    let delay = state.settings.action_delay;
    let Screen::Results(results) = &mut state.screen else {
        return rendered(false);
    };

    match (results.focus, event) {
        (_, Event::Back) => Ok((true, state.back())),

        (ResultsFocus::List, Event::CursorDown) => {
            results.cursor_down();
            rendered(true)
        }
        (ResultsFocus::List, Event::CursorUp) => {
            results.cursor_up();
            rendered(true)
        }
        (ResultsFocus::List, Event::NextPage) => rendered(results.next_page()),
        (ResultsFocus::List, Event::PrevPage) => rendered(results.prev_page()),
        (ResultsFocus::List, Event::FirstPage) => rendered(results.first_page()),
        (ResultsFocus::List, Event::LastPage) => rendered(results.last_page()),
        (ResultsFocus::List, Event::GoToPage(page)) => rendered(results.go_to_page(*page)),
        (ResultsFocus::List, Event::ToggleSelection) => rendered(results.toggle_selection()),
        (ResultsFocus::List, Event::SelectAllOnPage) => {
            results.select_all();
            rendered(true)
        }
        (ResultsFocus::List, Event::CycleSort) => {
            results.cycle_sort(true);
            rendered(true)
        }
        (ResultsFocus::List, Event::CycleSortBack) => {
            results.cycle_sort(false);
            rendered(true)
        }
        (ResultsFocus::List, Event::RevealPhone) => rendered(results.toggle_phone()),
        (ResultsFocus::List, Event::OpenFilters) => rendered(results.open_filters()),
        (ResultsFocus::List, Event::EditSearch) => rendered(results.open_edit()),
        (ResultsFocus::List, Event::OpenCandidate | Event::Submit) => {
            let Some(candidate) = results.current() else {
                return rendered(false);
            };
            Ok((true, state.navigate(Route::Detail { id: candidate.id })))
        }
        (ResultsFocus::List, Event::Escape) => {
            if results.banner.take().is_some() {
                return rendered(true);
            }
            Ok((true, state.back()))
        }

        (ResultsFocus::Filters, Event::CursorDown) => {
            results.facet_next();
            rendered(true)
        }
        (ResultsFocus::Filters, Event::CursorUp) => {
            results.facet_prev();
            rendered(true)
        }
        (ResultsFocus::Filters, Event::OptionNext) => {
            results.option_step(true);
            rendered(true)
        }
        (ResultsFocus::Filters, Event::OptionPrev) => {
            results.option_step(false);
            rendered(true)
        }
        (ResultsFocus::Filters, Event::RaiseLow) => {
            results.low_step(true);
            rendered(true)
        }
        (ResultsFocus::Filters, Event::LowerLow) => {
            results.low_step(false);
            rendered(true)
        }
        (ResultsFocus::Filters, Event::ToggleOption) => {
            results.toggle_option();
            rendered(true)
        }
        (ResultsFocus::Filters, Event::ClearFacet) => {
            results.clear_facet();
            rendered(true)
        }
        (ResultsFocus::Filters, Event::ResetFilters) => {
            results.reset_filters();
            rendered(true)
        }
        (ResultsFocus::Filters, Event::ApplyFilters | Event::Submit) => {
            rendered(results.begin_apply(clock, delay))
        }
        (ResultsFocus::Filters, Event::Escape | Event::OpenFilters) => {
            results.close_panel();
            rendered(true)
        }

        (ResultsFocus::EditSearch, Event::Char(c)) => {
            results.draft_query.push(*c);
            rendered(true)
        }
        (ResultsFocus::EditSearch, Event::Backspace) => {
            results.draft_query.pop();
            rendered(true)
        }
        (ResultsFocus::EditSearch, Event::Submit) => rendered(results.begin_update(clock, delay)),
        (ResultsFocus::EditSearch, Event::Escape) => {
            results.close_panel();
            rendered(true)
        }

        _ => rendered(false),
    }
}

fn handle_detail(state: &mut AppState, event: &Event) -> Handled {
    let Screen::Detail(detail) = &mut state.screen else {
        return rendered(false);
    };
    match (detail.focus, event) {
        (DetailFocus::Body, Event::Back | Event::Escape) => Ok((true, state.back())),
        (DetailFocus::Body, Event::CursorDown) => {
            detail.scroll_down();
            rendered(true)
        }
        (DetailFocus::Body, Event::CursorUp) => {
            detail.scroll_up();
            rendered(true)
        }
        (DetailFocus::Body, Event::StartComment) => rendered(detail.start_comment()),
        (DetailFocus::Comment, Event::Char(c)) => {
            detail.draft.push(*c);
            rendered(true)
        }
        (DetailFocus::Comment, Event::Backspace) => {
            detail.draft.pop();
            rendered(true)
        }
        (DetailFocus::Comment, Event::Submit) => rendered(detail.add_comment(now_ts())),
        (DetailFocus::Comment, Event::Escape) => {
            detail.cancel_comment();
            rendered(true)
        }
        _ => rendered(false),
    }
}

fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) -> Handled {
    match (&mut state.screen, response) {
        (Screen::Results(results), WorkerResponse::CandidatesLoaded { candidates }) => {
            if results.is_loaded() {
                tracing::debug!("ignoring repeated candidate list");
                return rendered(false);
            }
            results.load(candidates.clone(), state.scorer.as_mut())?;
            rendered(true)
        }
        (Screen::Results(results), WorkerResponse::Error { message }) => {
            tracing::warn!(error = %message, "worker error on results screen");
            if let Some(outcome) = results.task.fail(message.clone()) {
                results.settle(outcome);
            } else if results.is_loaded() {
                results.banner = Some(message.clone());
            } else {
                results.fail_load(message.clone());
            }
            rendered(true)
        }
        (Screen::Detail(detail), WorkerResponse::CandidateFound { candidate }) => {
            rendered(detail.resolve(&candidate.id, Some(candidate.clone())))
        }
        (Screen::Detail(detail), WorkerResponse::CandidateNotFound { id }) => {
            rendered(detail.resolve(id, None))
        }
        (Screen::Detail(detail), WorkerResponse::Error { message }) => {
            tracing::warn!(error = %message, "worker error on detail screen");
            detail.view = super::detail::CandidateView::Unavailable(message.clone());
            rendered(true)
        }
        (_, other) => {
            tracing::debug!(response = ?other, "response does not apply to this screen");
            rendered(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::detail::CandidateView;
    use crate::app::state::Settings;
    use crate::domain::{Candidate, ResponseStrategy, ScoringStrategy};
    use crate::repository::fixture_candidates;
    use crate::ui::theme::Theme;

    #[derive(Debug)]
    struct Fixed;

    impl ScoringStrategy for Fixed {
        fn score(&mut self, _candidate: &Candidate) -> u8 {
            90
        }
    }

    #[derive(Debug)]
    struct Counter(u32);

    impl ResponseStrategy for Counter {
        fn reply(&mut self, _message: &str) -> String {
            self.0 += 1;
            format!("reply {}", self.0)
        }
    }

    fn state() -> AppState {
        AppState::with_strategies(
            Settings::default(),
            Theme::default(),
            Box::new(Fixed),
            Box::new(Counter(0)),
        )
    }

    fn send(state: &mut AppState, events: &[Event]) {
        for event in events {
            handle_event(state, event).expect("event handled");
        }
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            send(state, &[Event::Char(c)]);
        }
    }

    fn on_results(state: &mut AppState) {
        type_text(state, "react");
        send(
            state,
            &[
                Event::Submit,
                Event::WorkerResponse(WorkerResponse::CandidatesLoaded {
                    candidates: fixture_candidates(),
                }),
            ],
        );
    }

    fn results(state: &AppState) -> &crate::app::ResultsState {
        match &state.screen {
            Screen::Results(r) => r,
            other => panic!("not on results: {other:?}"),
        }
    }

    #[test]
    fn blank_search_stays_home() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::Submit).expect("handled");
        assert!(actions.is_empty());
        assert_eq!(state.route(), &Route::Home);
    }

    #[test]
    fn search_loads_results() {
        let mut state = state();
        on_results(&mut state);
        let r = results(&state);
        assert_eq!(r.query, "react");
        assert_eq!(r.page().len(), 6);
        assert_eq!(r.score("1"), Some(90));
    }

    #[test]
    fn apply_schedules_tick_and_blocks_input() {
        let mut state = state();
        on_results(&mut state);
        send(&mut state, &[Event::OpenFilters, Event::ToggleOption]);
        let (render, actions) = handle_event(&mut state, &Event::ApplyFilters).expect("handled");
        assert!(render);
        assert!(matches!(actions.as_slice(), [Action::ScheduleTick { .. }]));
        assert!(state.is_busy());

        let (render, _) = handle_event(&mut state, &Event::NextPage).expect("handled");
        assert!(!render);

        send(&mut state, &[Event::Tick { elapsed: 1.0 }]);
        assert!(state.is_busy());
        let (_, actions) = handle_event(&mut state, &Event::Tick { elapsed: 0.5 }).expect("handled");
        assert!(actions.is_empty());
        assert!(!state.is_busy());
        assert_eq!(results(&state).focus, ResultsFocus::List);
    }

    #[test]
    fn escape_cancels_loading() {
        let mut state = state();
        on_results(&mut state);
        send(
            &mut state,
            &[Event::OpenFilters, Event::ToggleOption, Event::ApplyFilters, Event::Escape],
        );
        assert!(!state.is_busy());
        assert_eq!(results(&state).focus, ResultsFocus::Filters);
        send(&mut state, &[Event::Tick { elapsed: 5.0 }]);
        assert_eq!(results(&state).focus, ResultsFocus::Filters);
    }

    #[test]
    fn worker_error_fails_pending_update() {
        let mut state = state();
        on_results(&mut state);
        send(&mut state, &[Event::EditSearch, Event::Char('!'), Event::Submit]);
        assert!(state.is_busy());
        send(
            &mut state,
            &[Event::WorkerResponse(WorkerResponse::Error {
                message: "boom".to_string(),
            })],
        );
        assert!(!state.is_busy());
        assert_eq!(results(&state).banner.as_deref(), Some("boom"));
        assert_eq!(results(&state).query, "react");
    }

    #[test]
    fn update_success_rewrites_route() {
        let mut state = state();
        on_results(&mut state);
        send(&mut state, &[Event::EditSearch, Event::Char('s'), Event::Submit]);
        send(&mut state, &[Event::Tick { elapsed: 2.0 }]);
        assert_eq!(
            state.route(),
            &Route::Results {
                query: "reacts".to_string()
            }
        );
    }

    #[test]
    fn open_candidate_then_back() {
        let mut state = state();
        on_results(&mut state);
        send(&mut state, &[Event::CursorDown]);
        let (_, actions) = handle_event(&mut state, &Event::OpenCandidate).expect("handled");
        assert_eq!(actions.len(), 1);
        assert_eq!(state.route(), &Route::Detail { id: "2".to_string() });

        send(
            &mut state,
            &[Event::WorkerResponse(WorkerResponse::CandidateNotFound { id: "2".to_string() })],
        );
        match &state.screen {
            Screen::Detail(d) => assert_eq!(d.view, CandidateView::NotFound),
            other => panic!("not on detail: {other:?}"),
        }

        send(&mut state, &[Event::Back]);
        assert!(matches!(state.route(), Route::Results { .. }));
    }

    #[test]
    fn chat_replies_in_order() {
        let mut state = state();
        send(&mut state, &[Event::ToggleChat]);
        type_text(&mut state, "first");
        send(&mut state, &[Event::Submit]);
        type_text(&mut state, "second");
        let (_, actions) = handle_event(&mut state, &Event::Submit).expect("handled");
        assert!(actions.is_empty(), "tick already outstanding");
        send(&mut state, &[Event::Tick { elapsed: 1.0 }]);
        let bot: Vec<&str> = state
            .chat
            .messages
            .iter()
            .skip(1)
            .filter(|m| m.from_bot)
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(bot, ["reply 1", "reply 2"]);
        assert_eq!(state.route(), &Route::Home);
    }

    #[test]
    fn duplicate_ids_surface_an_error() {
        let mut state = state();
        type_text(&mut state, "x");
        send(&mut state, &[Event::Submit]);
        let mut list = fixture_candidates();
        list.push(list[0].clone());
        let result = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::CandidatesLoaded { candidates: list }),
        );
        assert!(result.is_err());
        assert!(results(&state).is_empty());
    }
}
