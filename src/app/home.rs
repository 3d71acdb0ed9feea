//! Search entry screen.

use super::modes::HomeFocus;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// A canned suggestion shown under the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suggestion {
    /// A previously run query and how many candidates it found.
    Recent { query: &'static str, results: u32 },
    /// A role template with its usual requirements.
    SmartRole {
        title: &'static str,
        experience: &'static str,
        salary: &'static str,
        skills: &'static [&'static str],
    },
}

impl Suggestion {
    /// Query submitted when the suggestion is chosen.
    #[must_use]
    pub const fn query(&self) -> &'static str {
        match self {
            Self::Recent { query, .. } => query,
            Self::SmartRole { title, .. } => title,
        }
    }

    fn haystack(&self) -> String {
        match self {
            Self::Recent { query, .. } => (*query).to_string(),
            Self::SmartRole { title, skills, .. } => format!("{title} {}", skills.join(" ")),
        }
    }
}

pub const SUGGESTIONS: [Suggestion; 5] = [
    Suggestion::Recent {
        query: "React developers in Bangalore with 5+ years experience",
        results: 156,
    },
    Suggestion::Recent {
        query: "Java developers in Mumbai",
        results: 234,
    },
    Suggestion::Recent {
        query: "Product managers in Delhi NCR",
        results: 89,
    },
    Suggestion::SmartRole {
        title: "Senior Frontend Developer",
        experience: "5-8 years",
        salary: "25-35 LPA",
        skills: &["React", "TypeScript", "Redux", "Webpack", "Jest"],
    },
    Suggestion::SmartRole {
        title: "Full Stack Java Developer",
        experience: "3-6 years",
        salary: "18-28 LPA",
        skills: &["Java", "Spring Boot", "Microservices", "React", "AWS"],
    },
];

/// State of the search entry screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeState {
    pub query: String,
    pub focus: HomeFocus,
    /// Index into [`HomeState::visible_suggestions`].
    pub cursor: usize,
}

impl HomeState {
    /// Suggestions narrowed by the typed query, all of them when it is blank.
    #[must_use]
    pub fn visible_suggestions(&self) -> Vec<Suggestion> {
        let needle = self.query.trim();
        if needle.is_empty() {
            return SUGGESTIONS.to_vec();
        }
        let matcher = SkimMatcherV2::default().ignore_case();
        SUGGESTIONS
            .iter()
            .filter(|s| matcher.fuzzy_match(&s.haystack(), needle).is_some())
            .copied()
            .collect()
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.cursor = 0;
    }

    pub fn backspace(&mut self) {
        self.query.pop();
        self.cursor = 0;
    }

    /// Moves focus into the suggestion list when it has entries.
    pub fn focus_suggestions(&mut self) -> bool {
        if self.visible_suggestions().is_empty() {
            return false;
        }
        self.focus = HomeFocus::Suggestions;
        self.cursor = 0;
        true
    }

    pub fn focus_query(&mut self) {
        self.focus = HomeFocus::Query;
    }

    pub fn cursor_down(&mut self) {
        let len = self.visible_suggestions().len();
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    pub fn cursor_up(&mut self) {
        let len = self.visible_suggestions().len();
        if len > 0 {
            self.cursor = self.cursor.checked_sub(1).unwrap_or(len - 1);
        }
    }

    /// The trimmed query, or `None` when blank.
    #[must_use]
    pub fn submit(&self) -> Option<String> {
        let query = self.query.trim();
        (!query.is_empty()).then(|| query.to_string())
    }

    /// Query of the suggestion under the cursor.
    #[must_use]
    pub fn choose(&self) -> Option<String> {
        self.visible_suggestions()
            .get(self.cursor)
            .map(|s| s.query().to_string())
    }
}
