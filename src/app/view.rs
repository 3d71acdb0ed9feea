//! View model computation.

use super::chat::ChatState;
use super::detail::{CandidateView, DetailState};
use super::home::{HomeState, Suggestion};
use super::modes::{DetailFocus, HomeFocus, KeyContext, ResultsFocus};
use super::results::{ResultsState, EXTRACTED_PARAMETERS};
use super::state::{AppState, Screen};
use crate::domain::{Candidate, FilterKind};
use crate::ui::viewmodel::{
    Body, CandidateRow, ChatLine, ChatPanel, CommentItem, DetailView, EmptyState, FacetControls, FacetRow,
    FilterPanelView, FooterInfo, HeaderInfo, HomeView, LoadingOverlay, OptionRow, PagerInfo, RangeView,
    ResultsView, SearchBarInfo, SkillTag, SuggestionItem, UIViewModel,
};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

const TITLE: &str = "Talentscope";
const SKILLS_PER_ROW: usize = 5;
/// Rows kept free for header, footer and chrome around the chat panel.
const CHAT_CHROME_ROWS: usize = 8;

impl AppState {
    /// Builds the view model for a `rows` × `cols` pane.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::trace_span!("compute_viewmodel", rows, cols).entered();

        let (subtitle, body, banner, overlay) = match &self.screen {
            Screen::Home(home) => (String::new(), Body::Home(home_view(home)), None, None),
            Screen::Results(results) => results_parts(results),
            Screen::Detail(detail) => (String::new(), detail_body(detail), None, None),
        };

        UIViewModel {
            header: HeaderInfo {
                title: TITLE.to_string(),
                subtitle,
            },
            body,
            footer: FooterInfo {
                keybindings: self.footer_hint(cols),
            },
            banner,
            chat: self.chat.open.then(|| chat_panel(&self.chat, rows.saturating_sub(CHAT_CHROME_ROWS))),
            overlay,
        }
    }

    fn footer_hint(&self, cols: usize) -> String {
        let full = match self.key_context() {
            KeyContext::Typing if self.chat.open => "Enter: send │ Esc: close chat",
            KeyContext::Typing => match &self.screen {
                Screen::Home(_) => "Enter: search │ Tab: suggestions │ Esc: close",
                Screen::Results(_) => "Enter: update search │ Esc: cancel",
                Screen::Detail(_) => "Enter: add comment │ Esc: cancel",
            },
            KeyContext::Suggestions => "j/k: move │ Enter: search │ Tab/Esc: back to query │ q: close",
            KeyContext::ResultsList => {
                "j/k: move │ space: select │ a: all │ h/l: page │ s: sort │ f: filters │ e: edit │ v: phone │ Enter: open │ c: chat │ b: back"
            }
            KeyContext::FilterPanel => {
                "j/k: facet │ h/l: option/max │ H/L: min │ space: pick │ x: clear │ r: reset │ Enter: apply │ Esc: close"
            }
            KeyContext::Busy => "Esc: cancel",
            KeyContext::DetailBody => "j/k: scroll │ m: comment │ c: chat │ b: back",
        };
        crate::ui::helpers::truncate(full, cols)
    }
}

fn search_bar(label: &str, text: &str, focused: bool, placeholder: &str) -> SearchBarInfo {
    SearchBarInfo {
        label: label.to_string(),
        text: text.to_string(),
        focused,
        placeholder: placeholder.to_string(),
    }
}

fn home_view(home: &HomeState) -> HomeView {
    let matcher = SkimMatcherV2::default().ignore_case();
    let needle = home.query.trim();
    let suggestions = home
        .visible_suggestions()
        .iter()
        .enumerate()
        .map(|(i, suggestion)| {
            let (kind, detail) = match suggestion {
                Suggestion::Recent { results, .. } => ("Recent", format!("{results} results")),
                Suggestion::SmartRole {
                    experience,
                    salary,
                    skills,
                    ..
                } => ("Smart role", format!("{experience} · {salary} · {}", skills.join(", "))),
            };
            let title = suggestion.query().to_string();
            let highlight_ranges = if needle.is_empty() {
                Vec::new()
            } else {
                matcher
                    .fuzzy_indices(&title, needle)
                    .map(|(_, indices)| indices.into_iter().map(|i| (i, i + 1)).collect())
                    .unwrap_or_default()
            };
            SuggestionItem {
                kind,
                title,
                detail,
                is_selected: home.focus == HomeFocus::Suggestions && i == home.cursor,
                highlight_ranges,
            }
        })
        .collect();

    HomeView {
        search: search_bar(
            "Search",
            &home.query,
            home.focus == HomeFocus::Query,
            "e.g. React developers in Bangalore with 5+ years experience",
        ),
        suggestions,
    }
}

type ResultsParts = (String, Body, Option<String>, Option<LoadingOverlay>);

fn results_parts(results: &ResultsState) -> ResultsParts {
    if !results.is_loaded() {
        return (
            String::new(),
            Body::Loading("Loading candidates…".to_string()),
            results.banner.clone(),
            None,
        );
    }

    let total = results.pagination.total_items();
    let mut subtitle = format!("{total} candidates found");
    if !results.selection.is_empty() {
        subtitle.push_str(&format!(" · {} selected", results.selection.len()));
    }

    let overlay = results.task.current().map(|kind| LoadingOverlay {
        message: kind.progress_label().to_string(),
    });

    (
        subtitle,
        Body::Results(results_view(results)),
        results.banner.clone(),
        overlay,
    )
}

fn results_view(results: &ResultsState) -> ResultsView {
    let matcher = SkimMatcherV2::default().ignore_case();
    let tokens: Vec<&str> = results
        .query
        .split_whitespace()
        .filter(|t| t.chars().count() > 1)
        .collect();

    let rows = results
        .page()
        .iter()
        .enumerate()
        .map(|(i, candidate)| candidate_row(results, candidate, i, &tokens, &matcher))
        .collect();

    let pagination = &results.pagination;
    let first = (pagination.current_page() - 1) * pagination.page_size() + 1;
    let last = (first + pagination.page_size() - 1).min(pagination.total_items());
    let range_label = if pagination.total_items() == 0 {
        "Showing 0 of 0".to_string()
    } else {
        format!("Showing {first}-{last} of {}", pagination.total_items())
    };

    let empty = results.is_empty().then(|| EmptyState {
        message: "No candidates match".to_string(),
        subtitle: "Try a broader search or reset the filters".to_string(),
        is_error: false,
    });

    ResultsView {
        query: results.query.clone(),
        chips: results
            .applied_filters()
            .chips()
            .into_iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect(),
        filters_pending: results.has_pending_filters(),
        params: EXTRACTED_PARAMETERS
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect(),
        sort_label: results.sort.label().to_string(),
        rows,
        all_selected: results.all_selected(),
        pager: PagerInfo {
            current: pagination.current_page(),
            total: pagination.total_pages(),
            window: pagination.window(),
            range_label,
        },
        filter_panel: (results.focus == ResultsFocus::Filters).then(|| filter_panel(results)),
        edit_panel: (results.focus == ResultsFocus::EditSearch)
            .then(|| search_bar("Edit search", &results.draft_query, true, "Describe the role")),
        empty,
    }
}

fn candidate_row(
    results: &ResultsState,
    candidate: &Candidate,
    index: usize,
    tokens: &[&str],
    matcher: &SkimMatcherV2,
) -> CandidateRow {
    let skills = candidate
        .skills
        .iter()
        .take(SKILLS_PER_ROW)
        .map(|skill| SkillTag {
            name: skill.clone(),
            highlighted: tokens.iter().any(|t| matcher.fuzzy_match(skill, t).is_some()),
        })
        .collect();

    CandidateRow {
        id: candidate.id.clone(),
        name: candidate.name.clone(),
        summary: format!(
            "{} yrs · {} · {}",
            candidate.experience, candidate.current_location, candidate.current_ctc
        ),
        employer: candidate.current_employer.clone(),
        skills,
        more_skills: candidate.skills.len().saturating_sub(SKILLS_PER_ROW),
        score: results.score(&candidate.id),
        phone: if results.is_revealed(&candidate.id) {
            candidate.phone.clone()
        } else {
            candidate.masked_phone()
        },
        checked: results.selection.contains(&candidate.id),
        is_selected: index == results.cursor && results.focus == ResultsFocus::List,
    }
}

fn filter_panel(results: &ResultsState) -> FilterPanelView {
    let facets = results
        .filters
        .iter()
        .enumerate()
        .map(|(i, filter)| {
            let focused = i == results.facet_cursor;
            let controls = focused.then(|| match &filter.kind {
                &FilterKind::Range {
                    min, max, low, high, ..
                } => FacetControls::Range(RangeView {
                    min,
                    max,
                    low,
                    high,
                    unit: filter.facet.unit(),
                }),
                FilterKind::Select { options, .. } | FilterKind::MultiSelect { options, .. } => {
                    FacetControls::Options(
                        options
                            .iter()
                            .enumerate()
                            .map(|(j, option)| OptionRow {
                                label: option.clone(),
                                chosen: filter.is_chosen(option),
                                focused: j == results.option_cursor,
                            })
                            .collect(),
                    )
                }
            });
            FacetRow {
                name: filter.name().to_string(),
                summary: filter.summary(),
                focused,
                controls,
            }
        })
        .collect();

    FilterPanelView {
        facets,
        can_apply: results.can_apply(),
    }
}

fn detail_body(detail: &DetailState) -> Body {
    let candidate = match &detail.view {
        CandidateView::Loading => return Body::Loading("Loading candidate…".to_string()),
        CandidateView::NotFound => {
            return Body::Empty(EmptyState {
                message: "Candidate not found".to_string(),
                subtitle: format!("No candidate with id {}. Press b to go back.", detail.id),
                is_error: true,
            })
        }
        CandidateView::Unavailable(reason) => {
            return Body::Empty(EmptyState {
                message: "Candidate unavailable".to_string(),
                subtitle: reason.clone(),
                is_error: true,
            })
        }
        CandidateView::Loaded(candidate) => candidate,
    };

    let fields = [
        ("Experience", format!("{} years", candidate.experience)),
        ("Current CTC", candidate.current_ctc.clone()),
        ("Location", candidate.current_location.clone()),
        ("Preferred location", candidate.preferred_location.clone()),
        ("Current employer", candidate.current_employer.clone()),
        ("Previous employer", candidate.previous_employer.clone()),
        ("Education", candidate.education.clone()),
        ("Last active", candidate.last_active.clone()),
        ("Phone", candidate.phone.clone()),
        ("Email", candidate.email.clone()),
        ("Resume", candidate.resume.clone()),
    ]
    .into_iter()
    .map(|(label, value)| (label.to_string(), value))
    .collect();

    Body::Detail(DetailView {
        name: candidate.name.clone(),
        headline: format!("{} at {}", candidate.degree(), candidate.current_employer),
        fields,
        skills: candidate.skills.clone(),
        comments: detail
            .comments
            .iter()
            .map(|c| CommentItem {
                author: c.author.clone(),
                date: c.date_label(),
                text: c.text.clone(),
            })
            .collect(),
        comment_input: (detail.focus == DetailFocus::Comment)
            .then(|| search_bar("Comment", &detail.draft, true, "Add a note about this candidate")),
        scroll: detail.scroll,
    })
}

fn chat_panel(chat: &ChatState, max_lines: usize) -> ChatPanel {
    let skip = chat.messages.len().saturating_sub(max_lines.max(1));
    ChatPanel {
        lines: chat
            .messages
            .iter()
            .skip(skip)
            .map(|m| ChatLine {
                from_bot: m.from_bot,
                text: m.text.clone(),
                time: chrono::DateTime::from_timestamp(m.sent_at, 0)
                    .map(|t| t.format("%H:%M").to_string())
                    .unwrap_or_default(),
            })
            .collect(),
        input: search_bar("Message", &chat.input, true, "Ask the assistant…"),
        typing: chat.has_pending(),
    }
}

#[cfg(test)]
mod tests {
    use crate::app::{handle_event, AppState, Event, Settings};
    use crate::domain::{RandomScoring, CannedResponses};
    use crate::repository::fixture_candidates;
    use crate::ui::viewmodel::{Body, ResultsView};
    use crate::ui::Theme;
    use crate::worker::WorkerResponse;

    fn results_state() -> AppState {
        let mut state = AppState::with_strategies(
            Settings::default(),
            Theme::default(),
            Box::new(RandomScoring::seeded(3)),
            Box::new(CannedResponses::seeded(3)),
        );
        for c in "react aws".chars() {
            handle_event(&mut state, &Event::Char(c)).expect("typed");
        }
        handle_event(&mut state, &Event::Submit).expect("submitted");
        handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::CandidatesLoaded {
                candidates: fixture_candidates(),
            }),
        )
        .expect("loaded");
        state
    }

    #[test]
    fn loading_until_candidates_arrive() {
        let mut state = AppState::new(Settings::default(), Theme::default());
        for c in "go".chars() {
            handle_event(&mut state, &Event::Char(c)).expect("typed");
        }
        handle_event(&mut state, &Event::Submit).expect("submitted");
        let vm = state.compute_viewmodel(40, 120);
        assert!(matches!(vm.body, Body::Loading(_)));
    }

    #[test]
    fn results_header_and_pager() {
        let state = results_state();
        let vm = state.compute_viewmodel(40, 120);
        assert_eq!(vm.header.subtitle, "8 candidates found");
        let Body::Results(view) = vm.body else {
            panic!("expected results");
        };
        assert_eq!(view.rows.len(), 6);
        assert!(view.rows[0].is_selected);
        assert_eq!(view.pager.range_label, "Showing 1-6 of 8");
        assert_eq!(view.pager.window, vec![1, 2]);
        assert!(view.chips.is_empty());
        assert!(view.rows.iter().all(|r| r.score.is_some_and(|s| (70..=97).contains(&s))));
        assert!(view.rows.iter().all(|r| r.skills.len() <= 5));
        assert!(view.rows[0].phone.contains('•'));
    }

    fn results_view_of(state: &AppState) -> ResultsView {
        let Body::Results(view) = state.compute_viewmodel(40, 120).body else {
            panic!("expected results");
        };
        view
    }

    #[test]
    fn chips_follow_applied_filters() {
        let mut state = results_state();
        for event in [Event::OpenFilters, Event::ToggleOption] {
            handle_event(&mut state, &event).expect("handled");
        }
        let view = results_view_of(&state);
        assert!(view.chips.is_empty(), "unapplied edits are not chips");
        assert!(view.filters_pending);
        let panel = view.filter_panel.expect("panel open");
        assert!(panel.can_apply);
        assert!(panel.facets[0].controls.is_some());
        assert!(panel.facets[1].controls.is_none());

        handle_event(&mut state, &Event::ApplyFilters).expect("applied");
        for _ in 0..4 {
            handle_event(&mut state, &Event::Tick { elapsed: 1.0 }).expect("ticked");
        }
        let view = results_view_of(&state);
        assert_eq!(view.chips, vec!["Location: Bangalore".to_string()]);
        assert!(!view.filters_pending);

        for event in [Event::OpenFilters, Event::ResetFilters] {
            handle_event(&mut state, &event).expect("handled");
        }
        let view = results_view_of(&state);
        assert_eq!(view.chips, vec!["Location: Bangalore".to_string()]);
        assert!(view.filters_pending);
        assert!(view.filter_panel.expect("panel open").can_apply);
    }

    #[test]
    fn query_skills_are_highlighted() {
        let state = results_state();
        let Body::Results(view) = state.compute_viewmodel(40, 120).body else {
            panic!("expected results");
        };
        let highlighted: Vec<&str> = view
            .rows
            .iter()
            .flat_map(|r| r.skills.iter())
            .filter(|s| s.highlighted)
            .map(|s| s.name.as_str())
            .collect();
        assert!(highlighted.contains(&"React"));
    }

    #[test]
    fn busy_shows_overlay() {
        let mut state = results_state();
        for event in [Event::OpenFilters, Event::ToggleOption, Event::ApplyFilters] {
            handle_event(&mut state, &event).expect("handled");
        }
        let vm = state.compute_viewmodel(40, 120);
        assert_eq!(
            vm.overlay.map(|o| o.message),
            Some("Applying filters…".to_string())
        );
        assert_eq!(vm.footer.keybindings, "Esc: cancel");
    }
}
