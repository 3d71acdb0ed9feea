//! Candidate detail screen.

use super::modes::DetailFocus;
use crate::domain::{Candidate, Comment};

/// Where the detail screen is in loading its candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateView {
    Loading,
    Loaded(Box<Candidate>),
    NotFound,
    /// The worker failed; holds its message.
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailState {
    pub id: String,
    pub view: CandidateView,
    /// Newest first.
    pub comments: Vec<Comment>,
    pub draft: String,
    pub focus: DetailFocus,
    pub scroll: usize,
    next_comment_id: u64,
}

impl DetailState {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        let comments = Comment::seeded();
        let next_comment_id = comments.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        Self {
            id: id.into(),
            view: CandidateView::Loading,
            comments,
            draft: String::new(),
            focus: DetailFocus::Body,
            scroll: 0,
            next_comment_id,
        }
    }

    /// Records the worker's answer. Answers for another id are ignored.
    pub fn resolve(&mut self, id: &str, candidate: Option<Candidate>) -> bool {
        if id != self.id {
            tracing::debug!(expected = %self.id, got = %id, "stale detail response");
            return false;
        }
        self.view = candidate.map_or(CandidateView::NotFound, |c| CandidateView::Loaded(Box::new(c)));
        true
    }

    #[must_use]
    pub fn candidate(&self) -> Option<&Candidate> {
        match &self.view {
            CandidateView::Loaded(c) => Some(c.as_ref()),
            _ => None,
        }
    }

    pub fn start_comment(&mut self) -> bool {
        if self.candidate().is_none() {
            return false;
        }
        self.focus = DetailFocus::Comment;
        true
    }

    pub fn cancel_comment(&mut self) {
        self.focus = DetailFocus::Body;
    }

    /// Prepends the draft as a comment by "You". Blank drafts are rejected.
    pub fn add_comment(&mut self, now_ts: i64) -> bool {
        let text = self.draft.trim().to_string();
        if text.is_empty() {
            return false;
        }
        self.comments.insert(
            0,
            Comment {
                id: self.next_comment_id,
                text,
                author: "You".to_string(),
                timestamp: now_ts,
            },
        );
        self.next_comment_id += 1;
        self.draft.clear();
        self.focus = DetailFocus::Body;
        true
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::fixture_candidates;

    #[test]
    fn not_found_is_a_state() {
        let mut detail = DetailState::new("999");
        assert!(detail.resolve("999", None));
        assert_eq!(detail.view, CandidateView::NotFound);
        assert!(!detail.start_comment());
    }

    #[test]
    fn stale_answer_is_ignored() {
        let mut detail = DetailState::new("1");
        let other = fixture_candidates().into_iter().nth(1);
        assert!(!detail.resolve("2", other));
        assert_eq!(detail.view, CandidateView::Loading);
    }

    #[test]
    fn comments_are_prepended() {
        let mut detail = DetailState::new("1");
        let first = fixture_candidates().into_iter().next();
        detail.resolve("1", first);
        assert_eq!(detail.comments.len(), 2);

        assert!(detail.start_comment());
        detail.draft = "  strong systems background ".to_string();
        assert!(detail.add_comment(1_720_000_000));
        assert_eq!(detail.comments.len(), 3);
        assert_eq!(detail.comments[0].author, "You");
        assert_eq!(detail.comments[0].text, "strong systems background");
        assert_eq!(detail.focus, DetailFocus::Body);
        assert!(detail.comments[0].id > detail.comments[1].id);
    }

    #[test]
    fn blank_comment_is_rejected() {
        let mut detail = DetailState::new("1");
        detail.draft = "   ".to_string();
        assert!(!detail.add_comment(0));
        assert_eq!(detail.comments.len(), 2);
    }

    #[test]
    fn scroll_stops_at_top() {
        let mut detail = DetailState::new("1");
        detail.scroll_up();
        assert_eq!(detail.scroll, 0);
        detail.scroll_down();
        assert_eq!(detail.scroll, 1);
    }
}
