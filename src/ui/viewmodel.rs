//! Display-ready view models.
//!
//! Computed by `AppState::compute_viewmodel` and consumed by the components.
//! They hold no logic: every label, highlight and flag is already decided.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub body: Body,
    pub footer: FooterInfo,
    /// Error or notice shown under the header.
    pub banner: Option<String>,
    pub chat: Option<ChatPanel>,
    pub overlay: Option<LoadingOverlay>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    /// Right-aligned status, e.g. "8 candidates found · 2 selected".
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Main content of the mounted screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Home(HomeView),
    Results(ResultsView),
    Detail(DetailView),
    /// Waiting for the worker; holds the message.
    Loading(String),
    Empty(EmptyState),
}

/// A single-line text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub label: String,
    pub text: String,
    pub focused: bool,
    /// Shown dimmed while `text` is empty.
    pub placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView {
    pub search: SearchBarInfo,
    pub suggestions: Vec<SuggestionItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionItem {
    /// "Recent" or "Smart role".
    pub kind: &'static str,
    pub title: String,
    pub detail: String,
    pub is_selected: bool,
    /// Character ranges of `title` matched by the query.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    pub query: String,
    /// "Facet: values" for each applied filter.
    pub chips: Vec<String>,
    /// Panel edits differ from what the list reflects.
    pub filters_pending: bool,
    pub params: Vec<(String, String)>,
    pub sort_label: String,
    pub rows: Vec<CandidateRow>,
    pub all_selected: bool,
    pub pager: PagerInfo,
    pub filter_panel: Option<FilterPanelView>,
    pub edit_panel: Option<SearchBarInfo>,
    pub empty: Option<EmptyState>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRow {
    pub id: String,
    pub name: String,
    /// "5 yrs · Bangalore · 18 LPA".
    pub summary: String,
    pub employer: String,
    pub skills: Vec<SkillTag>,
    /// Skills beyond the ones shown.
    pub more_skills: usize,
    pub score: Option<u8>,
    /// Masked unless revealed.
    pub phone: String,
    pub checked: bool,
    /// Under the row cursor.
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillTag {
    pub name: String,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerInfo {
    pub current: usize,
    pub total: usize,
    pub window: Vec<usize>,
    /// "Showing 1-6 of 8".
    pub range_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPanelView {
    pub facets: Vec<FacetRow>,
    pub can_apply: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetRow {
    pub name: String,
    pub summary: Option<String>,
    pub focused: bool,
    /// Expanded controls; only the focused facet has them.
    pub controls: Option<FacetControls>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacetControls {
    Options(Vec<OptionRow>),
    Range(RangeView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRow {
    pub label: String,
    pub chosen: bool,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeView {
    pub min: u32,
    pub max: u32,
    pub low: u32,
    pub high: u32,
    pub unit: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub name: String,
    pub headline: String,
    /// Label/value pairs in display order.
    pub fields: Vec<(String, String)>,
    pub skills: Vec<String>,
    pub comments: Vec<CommentItem>,
    pub comment_input: Option<SearchBarInfo>,
    /// Lines scrolled past.
    pub scroll: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentItem {
    pub author: String,
    pub date: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPanel {
    pub lines: Vec<ChatLine>,
    pub input: SearchBarInfo,
    /// A reply is on its way.
    pub typing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLine {
    pub from_bot: bool,
    pub text: String,
    /// "HH:MM" in UTC.
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingOverlay {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
    pub is_error: bool,
}
