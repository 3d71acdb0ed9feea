//! Results screen state: the filter → sort → paginate pipeline plus the
//! selection, filter panel and edit-search panel around it.

use super::modes::ResultsFocus;
use super::task::{AsyncAction, TaskKind, TaskOutcome};
use crate::domain::{
    paginate, sort_candidates, Candidate, FilterKind, FilterSet, Pagination, Result, ScoringStrategy,
    Selection, SortOption, TalentscopeError,
};
use std::collections::{HashMap, HashSet};

/// Parameters shown as "extracted" from the query.
pub const EXTRACTED_PARAMETERS: [(&str, &str); 4] = [
    ("Skills", "React, TypeScript"),
    ("Experience", "3-5 years"),
    ("Salary", "15-25 LPA"),
    ("Company", "Product-based"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsState {
    /// Query the list was searched with.
    pub query: String,

    /// `None` until the worker answers.
    candidates: Option<Vec<Candidate>>,

    /// Filters being edited in the panel.
    pub filters: FilterSet,

    /// Filters as of the last successful apply.
    applied: FilterSet,

    /// Active sort order.
    pub sort: SortOption,

    /// Page window over the ordered list.
    pub pagination: Pagination,

    /// Checked candidate ids, kept across pages.
    pub selection: Selection,

    /// Row cursor within the current page.
    pub cursor: usize,

    /// Ids whose phone number is shown.
    revealed: HashSet<String>,

    /// Match score per candidate id, computed once on load.
    scores: HashMap<String, u8>,

    /// Which part of the screen receives keys.
    pub focus: ResultsFocus,

    /// Facet highlighted in the filter panel.
    pub facet_cursor: usize,

    /// Option highlighted within the focused facet.
    pub option_cursor: usize,

    /// Query being typed in the edit-search panel.
    pub draft_query: String,

    /// Apply or update action in flight.
    pub task: AsyncAction,

    /// Error text shown above the list.
    pub banner: Option<String>,

    /// Whether applied filters remove non-matching rows.
    narrow: bool,
}

impl ResultsState {
    #[must_use]
    pub fn new(query: impl Into<String>, page_size: usize, narrow: bool) -> Self {
        Self {
            query: query.into(),
            candidates: None,
            filters: FilterSet::standard(),
            applied: FilterSet::standard(),
            sort: SortOption::default(),
            pagination: Pagination::new(page_size),
            selection: Selection::default(),
            cursor: 0,
            revealed: HashSet::new(),
            scores: HashMap::new(),
            focus: ResultsFocus::List,
            facet_cursor: 0,
            option_cursor: 0,
            draft_query: String::new(),
            task: AsyncAction::default(),
            banner: None,
            narrow,
        }
    }

    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.candidates.is_some()
    }

    /// Installs the candidate list and scores every candidate once.
    ///
    /// # Errors
    ///
    /// Returns [`TalentscopeError::Repository`] when two candidates share an
    /// id. The screen then shows an empty list with a banner.
    pub fn load(&mut self, candidates: Vec<Candidate>, scorer: &mut dyn ScoringStrategy) -> Result<()> {
        let mut seen = HashSet::new();
        if let Some(dup) = candidates.iter().find(|c| !seen.insert(c.id.as_str())) {
            let message = format!("duplicate candidate id {}", dup.id);
            self.fail_load(message.clone());
            return Err(TalentscopeError::Repository(message));
        }

        self.scores = candidates.iter().map(|c| (c.id.clone(), scorer.score(c))).collect();
        self.candidates = Some(candidates);
        self.pagination.reset(self.ordered().len());
        self.cursor = 0;
        tracing::debug!(total = self.pagination.total_items(), "results loaded");
        Ok(())
    }

    /// Shows `message` over an empty list.
    pub fn fail_load(&mut self, message: String) {
        self.candidates = Some(Vec::new());
        self.scores.clear();
        self.pagination.reset(0);
        self.cursor = 0;
        self.banner = Some(message);
    }

    /// The full list after narrowing (when enabled) and sorting.
    #[must_use]
    pub fn ordered(&self) -> Vec<Candidate> {
        let Some(all) = self.candidates.as_deref() else {
            return Vec::new();
        };
        if self.narrow {
            let narrowed: Vec<Candidate> = all.iter().filter(|c| self.applied.matches(c)).cloned().collect();
            sort_candidates(&narrowed, self.sort)
        } else {
            sort_candidates(all, self.sort)
        }
    }

    /// Candidates on the current page.
    #[must_use]
    pub fn page(&self) -> Vec<Candidate> {
        let ordered = self.ordered();
        paginate(&ordered, self.pagination.current_page(), self.pagination.page_size())
            .0
            .to_vec()
    }

    #[must_use]
    pub fn page_ids(&self) -> Vec<String> {
        self.page().into_iter().map(|c| c.id).collect()
    }

    /// Candidate under the row cursor.
    #[must_use]
    pub fn current(&self) -> Option<Candidate> {
        self.page().into_iter().nth(self.cursor)
    }

    #[must_use]
    pub fn score(&self, id: &str) -> Option<u8> {
        self.scores.get(id).copied()
    }

    #[must_use]
    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    pub fn cursor_down(&mut self) {
        let len = self.page().len();
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    pub fn cursor_up(&mut self) {
        let len = self.page().len();
        if len > 0 {
            self.cursor = self.cursor.checked_sub(1).unwrap_or(len - 1);
        }
    }

    fn paged(&mut self, changed: bool) -> bool {
        if changed {
            self.cursor = 0;
        }
        changed
    }

    pub fn next_page(&mut self) -> bool {
        let changed = self.pagination.next();
        self.paged(changed)
    }

    pub fn prev_page(&mut self) -> bool {
        let changed = self.pagination.prev();
        self.paged(changed)
    }

    pub fn first_page(&mut self) -> bool {
        let changed = self.pagination.first();
        self.paged(changed)
    }

    pub fn last_page(&mut self) -> bool {
        let changed = self.pagination.last();
        self.paged(changed)
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        let changed = self.pagination.go_to(page);
        self.paged(changed)
    }

    /// Toggles the row under the cursor.
    pub fn toggle_selection(&mut self) -> bool {
        let Some(candidate) = self.current() else {
            return false;
        };
        self.selection.toggle(&candidate.id);
        true
    }

    pub fn select_all(&mut self) {
        let ids = self.page_ids();
        self.selection.select_all_on_page(&ids);
    }

    #[must_use]
    pub fn all_selected(&self) -> bool {
        self.selection.all_selected_on_page(&self.page_ids())
    }

    /// Steps through sort options. The page is kept; the cursor is clamped.
    pub fn cycle_sort(&mut self, forward: bool) {
        self.sort = if forward { self.sort.next() } else { self.sort.prev() };
        let len = self.page().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
        tracing::debug!(sort = self.sort.key(), "sort changed");
    }

    /// Shows or hides the phone number of the row under the cursor.
    pub fn toggle_phone(&mut self) -> bool {
        let Some(candidate) = self.current() else {
            return false;
        };
        if !self.revealed.remove(&candidate.id) {
            self.revealed.insert(candidate.id);
        }
        true
    }

    // Filter panel

    pub fn open_filters(&mut self) -> bool {
        if !self.is_loaded() || self.task.is_loading() {
            return false;
        }
        self.focus = ResultsFocus::Filters;
        true
    }

    pub fn close_panel(&mut self) {
        self.focus = ResultsFocus::List;
    }

    pub fn facet_next(&mut self) {
        let len = self.filters.len();
        if len > 0 {
            self.facet_cursor = (self.facet_cursor + 1) % len;
            self.option_cursor = 0;
        }
    }

    pub fn facet_prev(&mut self) {
        let len = self.filters.len();
        if len > 0 {
            self.facet_cursor = self.facet_cursor.checked_sub(1).unwrap_or(len - 1);
            self.option_cursor = 0;
        }
    }

    fn focused_is_range(&self) -> bool {
        self.filters
            .get(self.facet_cursor)
            .is_some_and(|f| matches!(f.kind, FilterKind::Range { .. }))
    }

    /// Moves the option cursor, or the upper bound for a range facet.
    pub fn option_step(&mut self, forward: bool) {
        let Some(filter) = self.filters.get(self.facet_cursor) else {
            return;
        };
        if self.focused_is_range() {
            let moved = filter.nudge_high(if forward { 1 } else { -1 });
            self.filters.replace(moved);
            return;
        }
        let len = filter.options().len();
        if len == 0 {
            return;
        }
        self.option_cursor = if forward {
            (self.option_cursor + 1) % len
        } else {
            self.option_cursor.checked_sub(1).unwrap_or(len - 1)
        };
    }

    /// Moves the lower bound of a range facet.
    pub fn low_step(&mut self, forward: bool) {
        if !self.focused_is_range() {
            return;
        }
        if let Some(filter) = self.filters.get(self.facet_cursor) {
            let moved = filter.nudge_low(if forward { 1 } else { -1 });
            self.filters.replace(moved);
        }
    }

    /// Picks the option under the option cursor.
    pub fn toggle_option(&mut self) {
        let Some(filter) = self.filters.get(self.facet_cursor) else {
            return;
        };
        let Some(option) = filter.options().get(self.option_cursor) else {
            return;
        };
        let toggled = filter.toggled(option);
        self.filters.replace(toggled);
    }

    pub fn clear_facet(&mut self) {
        if let Some(filter) = self.filters.get(self.facet_cursor) {
            let cleared = filter.cleared();
            self.filters.replace(cleared);
        }
    }

    pub fn reset_filters(&mut self) {
        self.filters.reset();
    }

    /// Filters the list currently reflects.
    #[must_use]
    pub const fn applied_filters(&self) -> &FilterSet {
        &self.applied
    }

    /// Whether the panel holds edits that have not been applied yet.
    #[must_use]
    pub fn has_pending_filters(&self) -> bool {
        self.filters != self.applied
    }

    /// Apply is offered while a filter is active, and also after a reset so
    /// an empty set can replace the applied one.
    fn applicable(&self) -> bool {
        self.filters.any_active() || self.has_pending_filters()
    }

    #[must_use]
    pub fn can_apply(&self) -> bool {
        !self.task.is_loading() && self.applicable()
    }

    /// Starts the apply-filters action. Returns `false` when there is nothing
    /// to apply or another action is running.
    pub fn begin_apply(&mut self, now: f64, delay: f64) -> bool {
        if !self.applicable() {
            return false;
        }
        match self.task.start(TaskKind::ApplyFilters, now, delay) {
            Ok(ticket) => {
                tracing::debug!(ticket, "apply filters started");
                true
            }
            Err(e) => {
                tracing::debug!(error = %e, "apply filters rejected");
                false
            }
        }
    }

    // Edit-search panel

    pub fn open_edit(&mut self) -> bool {
        if self.task.is_loading() {
            return false;
        }
        self.draft_query.clone_from(&self.query);
        self.focus = ResultsFocus::EditSearch;
        true
    }

    #[must_use]
    pub fn can_update(&self) -> bool {
        !self.task.is_loading() && !self.draft_query.trim().is_empty()
    }

    pub fn begin_update(&mut self, now: f64, delay: f64) -> bool {
        let query = self.draft_query.trim().to_string();
        if query.is_empty() {
            return false;
        }
        match self.task.start(TaskKind::UpdateSearch { query }, now, delay) {
            Ok(ticket) => {
                tracing::debug!(ticket, "search update started");
                true
            }
            Err(e) => {
                tracing::debug!(error = %e, "search update rejected");
                false
            }
        }
    }

    /// Applies the effect of a finished action.
    ///
    /// Returns the new query after a successful search update.
    pub fn settle(&mut self, outcome: TaskOutcome) -> Option<String> {
        tracing::debug!(outcome = ?outcome, "action settled");
        match outcome {
            TaskOutcome::Succeeded(TaskKind::ApplyFilters) => {
                self.applied = self.filters.clone();
                let ordered = self.ordered();
                if self.narrow {
                    let before = self.selection.len();
                    self.selection.retain_listed(ordered.iter().map(|c| c.id.as_str()));
                    tracing::debug!(before, after = self.selection.len(), "selection pruned to listed rows");
                }
                self.pagination.reset(ordered.len());
                self.cursor = 0;
                self.focus = ResultsFocus::List;
                None
            }
            TaskOutcome::Succeeded(TaskKind::UpdateSearch { query }) => {
                self.query.clone_from(&query);
                self.draft_query.clear();
                self.focus = ResultsFocus::List;
                Some(query)
            }
            TaskOutcome::Cancelled(_) => None,
            TaskOutcome::Failed { reason, .. } => {
                self.banner = Some(reason);
                None
            }
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.is_loaded() && self.pagination.total_items() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Facet;
    use crate::repository::fixture_candidates;

    #[derive(Debug)]
    struct Fixed(u8);

    impl ScoringStrategy for Fixed {
        fn score(&mut self, _candidate: &Candidate) -> u8 {
            self.0
        }
    }

    fn loaded(narrow: bool) -> ResultsState {
        let mut results = ResultsState::new("react", 6, narrow);
        results.load(fixture_candidates(), &mut Fixed(80)).expect("fixture loads");
        results
    }

    #[test]
    fn fixture_paginates_six_then_two() {
        let mut results = loaded(false);
        assert_eq!(results.page().len(), 6);
        assert!(results.next_page());
        assert_eq!(results.page().len(), 2);
        assert!(!results.next_page());
        assert_eq!(results.pagination.current_page(), 2);
    }

    #[test]
    fn scores_are_cached() {
        let results = loaded(false);
        assert_eq!(results.score("1"), Some(80));
        assert_eq!(results.score("missing"), None);
    }

    #[test]
    fn duplicate_ids_fail_the_load() {
        let mut list = fixture_candidates();
        list.push(list[0].clone());
        let mut results = ResultsState::new("q", 6, false);
        let err = results.load(list, &mut Fixed(70));
        assert!(matches!(err, Err(TalentscopeError::Repository(_))));
        assert!(results.is_empty());
        assert!(results.banner.is_some());
    }

    #[test]
    fn page_change_resets_cursor() {
        let mut results = loaded(false);
        results.cursor_down();
        results.cursor_down();
        assert_eq!(results.cursor, 2);
        results.next_page();
        assert_eq!(results.cursor, 0);
    }

    #[test]
    fn cursor_wraps_within_page() {
        let mut results = loaded(false);
        results.cursor_up();
        assert_eq!(results.cursor, 5);
        results.cursor_down();
        assert_eq!(results.cursor, 0);
    }

    #[test]
    fn selection_survives_sort_and_paging() {
        let mut results = loaded(false);
        results.toggle_selection();
        let picked = results.selection.clone();
        results.cycle_sort(true);
        results.next_page();
        assert_eq!(results.selection, picked);
    }

    #[test]
    fn phone_toggle_is_per_row() {
        let mut results = loaded(false);
        let id = results.current().expect("row").id;
        results.toggle_phone();
        assert!(results.is_revealed(&id));
        results.cursor_down();
        let other = results.current().expect("row").id;
        assert!(!results.is_revealed(&other));
        results.cursor_up();
        results.toggle_phone();
        assert!(!results.is_revealed(&id));
    }

    #[test]
    fn apply_needs_an_active_filter() {
        let mut results = loaded(false);
        assert!(!results.can_apply());
        assert!(!results.begin_apply(0.0, 1.5));
        results.open_filters();
        results.toggle_option();
        assert!(results.can_apply());
        assert!(results.begin_apply(0.0, 1.5));
        assert!(!results.can_apply());
    }

    #[test]
    fn apply_success_resets_page_and_closes_panel() {
        let mut results = loaded(false);
        results.next_page();
        results.open_filters();
        results.toggle_option();
        assert!(results.begin_apply(0.0, 1.5));
        let outcome = results.task.poll(1.5).expect("due");
        results.settle(outcome);
        assert_eq!(results.pagination.current_page(), 1);
        assert_eq!(results.focus, ResultsFocus::List);
        // narrowing is off: every candidate is still listed
        assert_eq!(results.pagination.total_items(), 8);
    }

    #[test]
    fn narrowing_uses_applied_filters_only() {
        let mut results = loaded(true);
        results.open_filters();
        let location = results.filters.by_facet(Facet::Location).expect("location").clone();
        let first_option = location.options()[0].clone();
        results.filters.replace(location.toggled(&first_option));
        assert_eq!(results.ordered().len(), 8);

        results.begin_apply(0.0, 0.0);
        let outcome = results.task.poll(0.0).expect("due");
        results.settle(outcome);
        assert!(results.ordered().iter().all(|c| c.current_location == first_option));
    }

    fn pick_location(results: &mut ResultsState, city: &str) {
        results.open_filters();
        results.facet_cursor = 0;
        let location = results.filters.by_facet(Facet::Location).expect("location").clone();
        results.filters.replace(location.toggled(city));
    }

    fn apply_now(results: &mut ResultsState) {
        assert!(results.begin_apply(0.0, 0.0));
        let outcome = results.task.poll(0.0).expect("due");
        results.settle(outcome);
    }

    #[test]
    fn reset_then_apply_restores_full_list() {
        let mut results = loaded(true);
        pick_location(&mut results, "Pune");
        apply_now(&mut results);
        assert_eq!(results.pagination.total_items(), 2);
        assert_eq!(results.applied_filters().chips(), vec![("Location", "Pune".to_string())]);

        results.open_filters();
        results.reset_filters();
        assert!(results.has_pending_filters());
        assert!(results.can_apply());
        // the list keeps reflecting the last apply until the reset is applied
        assert_eq!(results.ordered().len(), 2);

        apply_now(&mut results);
        assert_eq!(results.ordered().len(), 8);
        assert_eq!(results.pagination.total_items(), 8);
        assert!(results.applied_filters().chips().is_empty());
        assert!(!results.has_pending_filters());
        assert!(!results.can_apply());
    }

    #[test]
    fn reset_without_prior_apply_offers_nothing() {
        let mut results = loaded(true);
        results.open_filters();
        results.reset_filters();
        assert!(!results.can_apply());
        assert!(!results.begin_apply(0.0, 0.0));
    }

    #[test]
    fn narrowing_apply_drops_hidden_selections() {
        let mut results = loaded(true);
        results.selection.toggle("1");
        results.selection.toggle("5");
        pick_location(&mut results, "Pune");
        apply_now(&mut results);

        assert!(!results.selection.contains("1"));
        assert!(results.selection.contains("5"));
        assert_eq!(results.selection.len(), 1);
    }

    #[test]
    fn plain_apply_keeps_selection() {
        let mut results = loaded(false);
        results.selection.toggle("1");
        pick_location(&mut results, "Pune");
        apply_now(&mut results);
        assert!(results.selection.contains("1"));
    }

    #[test]
    fn update_search_replaces_query() {
        let mut results = loaded(false);
        assert!(results.open_edit());
        assert_eq!(results.draft_query, "react");
        results.draft_query = "  golang  ".to_string();
        assert!(results.begin_update(0.0, 1.5));
        let outcome = results.task.poll(2.0).expect("due");
        assert_eq!(results.settle(outcome).as_deref(), Some("golang"));
        assert_eq!(results.query, "golang");
        assert_eq!(results.focus, ResultsFocus::List);
    }

    #[test]
    fn blank_update_is_refused() {
        let mut results = loaded(false);
        results.open_edit();
        results.draft_query = "   ".to_string();
        assert!(!results.can_update());
        assert!(!results.begin_update(0.0, 1.5));
    }

    #[test]
    fn failure_shows_banner() {
        let mut results = loaded(false);
        results.open_edit();
        results.begin_update(0.0, 1.5);
        let outcome = results.task.fail("worker crashed").expect("pending");
        results.settle(outcome);
        assert_eq!(results.banner.as_deref(), Some("worker crashed"));
        assert!(!results.task.is_loading());
        assert_eq!(results.query, "react");
    }

    #[test]
    fn range_facet_moves_bounds() {
        let mut results = loaded(false);
        results.open_filters();
        while !results.focused_is_range() {
            results.facet_next();
        }
        results.option_step(false);
        results.low_step(true);
        let filter = results.filters.get(results.facet_cursor).expect("facet");
        assert!(filter.is_active());
        results.clear_facet();
        let filter = results.filters.get(results.facet_cursor).expect("facet");
        assert!(!filter.is_active());
    }
}
