//! Routes and per-screen focus states.
//!
//! A [`Route`] names a screen; the focus enums say which part of that screen
//! receives keystrokes. [`KeyContext`] folds both (plus the chat widget and
//! loading state) into the one value the key mapper needs.

/// A navigable screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Search entry.
    Home,
    /// Results listing for a free-text query.
    Results { query: String },
    /// Profile of a single candidate.
    Detail { id: String },
}

/// Focus on the search entry screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeFocus {
    #[default]
    Query,
    Suggestions,
}

/// Focus on the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultsFocus {
    /// Row cursor over the current page.
    #[default]
    List,
    /// Filter sidebar is open.
    Filters,
    /// Edit-search panel is open.
    EditSearch,
}

/// Focus on the detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailFocus {
    #[default]
    Body,
    /// Typing a new comment.
    Comment,
}

/// How the next keystroke should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// A text field has focus; printable keys are input.
    Typing,
    /// Moving through the home screen suggestion list.
    Suggestions,
    /// Moving through result rows.
    ResultsList,
    /// Editing filters in the sidebar.
    FilterPanel,
    /// A simulated action is running; only cancel is accepted.
    Busy,
    /// Reading a candidate profile.
    DetailBody,
}
