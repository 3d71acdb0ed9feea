//! Result ordering.

use super::candidate::Candidate;
use std::cmp::Ordering;

/// Ordering applied to the results list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    /// Repository order.
    #[default]
    Relevance,
    /// Most recently active first.
    LastActive,
    ExpHighToLow,
    ExpLowToHigh,
    CtcHighToLow,
    CtcLowToHigh,
}

impl SortOption {
    pub const ALL: [Self; 6] = [
        Self::Relevance,
        Self::LastActive,
        Self::ExpHighToLow,
        Self::ExpLowToHigh,
        Self::CtcHighToLow,
        Self::CtcLowToHigh,
    ];

    /// Parses a sort key such as `"ctcHighToLow"`; unknown keys fall back to relevance.
    #[must_use]
    pub fn parse(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|option| option.key() == key)
            .unwrap_or_default()
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::LastActive => "lastActive",
            Self::ExpHighToLow => "expHighToLow",
            Self::ExpLowToHigh => "expLowToHigh",
            Self::CtcHighToLow => "ctcHighToLow",
            Self::CtcLowToHigh => "ctcLowToHigh",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Relevance => "Relevance",
            Self::LastActive => "Last Active",
            Self::ExpHighToLow => "Experience: High to Low",
            Self::ExpLowToHigh => "Experience: Low to High",
            Self::CtcHighToLow => "CTC: High to Low",
            Self::CtcLowToHigh => "CTC: Low to High",
        }
    }

    /// The next option in menu order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|o| *o == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The previous option in menu order, wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|o| *o == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Returns `candidates` reordered by `option`.
///
/// The sort is stable. Labels without a leading number (an unparsable CTC or
/// recency) sort after every parsable one in both directions.
///
/// # Examples
///
/// ```
/// use talentscope::domain::{sort_candidates, SortOption};
/// use talentscope::repository::fixture_candidates;
///
/// let sorted = sort_candidates(&fixture_candidates(), SortOption::ExpHighToLow);
/// assert_eq!(sorted[0].name, "Neha Patel");
/// ```
#[must_use]
pub fn sort_candidates(candidates: &[Candidate], option: SortOption) -> Vec<Candidate> {
    let _span = tracing::debug_span!("sort_candidates", count = candidates.len(), sort = option.key()).entered();

    let mut sorted = candidates.to_vec();
    match option {
        SortOption::Relevance => {}
        SortOption::LastActive => {
            sorted.sort_by(|a, b| parsed_last(a.days_since_active(), b.days_since_active(), false));
        }
        SortOption::ExpHighToLow => sorted.sort_by(|a, b| b.experience.cmp(&a.experience)),
        SortOption::ExpLowToHigh => sorted.sort_by_key(|c| c.experience),
        SortOption::CtcHighToLow => sorted.sort_by(|a, b| parsed_last(a.ctc_lpa(), b.ctc_lpa(), true)),
        SortOption::CtcLowToHigh => sorted.sort_by(|a, b| parsed_last(a.ctc_lpa(), b.ctc_lpa(), false)),
    }
    sorted
}

fn parsed_last(a: Option<u32>, b: Option<u32>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) if descending => y.cmp(&x),
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make(id: &str, exp: u32, ctc: &str, last_active: &str) -> Candidate {
        Candidate {
            id: id.to_string(),
            name: format!("Candidate {id}"),
            photo_url: String::new(),
            experience: exp,
            current_ctc: ctc.to_string(),
            current_location: String::new(),
            current_employer: String::new(),
            previous_employer: String::new(),
            education: String::new(),
            preferred_location: String::new(),
            skills: vec![],
            last_active: last_active.to_string(),
            phone: String::new(),
            email: String::new(),
            resume: String::new(),
        }
    }

    fn ids(candidates: &[Candidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn relevance_keeps_input_order() {
        let input = vec![make("a", 5, "18 LPA", "2 days ago"), make("b", 1, "9 LPA", "1 day ago")];
        assert_eq!(sort_candidates(&input, SortOption::Relevance), input);
    }

    #[test]
    fn ctc_high_to_low() {
        let input = vec![
            make("a", 5, "18 LPA", ""),
            make("b", 7, "24 LPA", ""),
            make("c", 4, "15 LPA", ""),
        ];
        assert_eq!(ids(&sort_candidates(&input, SortOption::CtcHighToLow)), ["b", "a", "c"]);
        assert_eq!(ids(&sort_candidates(&input, SortOption::CtcLowToHigh)), ["c", "a", "b"]);
    }

    #[test]
    fn experience_sort_is_stable() {
        let input = vec![make("a", 6, "", ""), make("b", 8, "", ""), make("c", 6, "", "")];
        assert_eq!(ids(&sort_candidates(&input, SortOption::ExpHighToLow)), ["b", "a", "c"]);
        assert_eq!(ids(&sort_candidates(&input, SortOption::ExpLowToHigh)), ["a", "c", "b"]);
    }

    #[test]
    fn last_active_ascending_days() {
        let input = vec![
            make("a", 1, "", "3 days ago"),
            make("b", 1, "", "1 day ago"),
            make("c", 1, "", "Today"),
        ];
        assert_eq!(ids(&sort_candidates(&input, SortOption::LastActive)), ["c", "b", "a"]);
    }

    #[test]
    fn malformed_labels_go_last_both_directions() {
        let input = vec![
            make("x", 1, "n/a", ""),
            make("a", 1, "10 LPA", ""),
            make("y", 1, "", ""),
            make("b", 1, "20 LPA", ""),
        ];
        assert_eq!(ids(&sort_candidates(&input, SortOption::CtcHighToLow)), ["b", "a", "x", "y"]);
        assert_eq!(ids(&sort_candidates(&input, SortOption::CtcLowToHigh)), ["a", "b", "x", "y"]);
    }

    #[test]
    fn sorting_is_idempotent() {
        let input = vec![make("a", 3, "12 LPA", ""), make("b", 9, "30 LPA", ""), make("c", 3, "5 LPA", "")];
        for option in SortOption::ALL {
            let once = sort_candidates(&input, option);
            assert_eq!(sort_candidates(&once, option), once);
        }
    }

    #[test]
    fn unknown_key_is_relevance() {
        assert_eq!(SortOption::parse("ctcHighToLow"), SortOption::CtcHighToLow);
        assert_eq!(SortOption::parse("salary"), SortOption::Relevance);
    }

    #[test]
    fn cycling_wraps() {
        assert_eq!(SortOption::CtcLowToHigh.next(), SortOption::Relevance);
        assert_eq!(SortOption::Relevance.prev(), SortOption::CtcLowToHigh);
    }
}
