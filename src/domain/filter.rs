//! Search filters and the filter set shown in the results sidebar.
//!
//! A [`Filter`] pairs a [`Facet`] (which candidate attribute it constrains) with
//! a [`FilterKind`] (how the user picks values). Editing operations return new
//! values instead of mutating in place, so the panel can build an updated filter
//! and swap it into the [`FilterSet`] in one step.
//!
//! # Activity
//!
//! A filter is *active* when it constrains anything:
//!
//! - select: a value is chosen
//! - multiselect: at least one value is chosen
//! - range: the interval differs from the full `[min, max]` span
//!
//! The apply action in the results screen is only enabled while at least one
//! filter in the set is active.

use super::candidate::Candidate;
use std::collections::BTreeSet;

/// Candidate attribute a filter constrains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    Location,
    Experience,
    CurrentCtc,
    Skills,
    Company,
    Education,
    NoticePeriod,
    WorkMode,
    JobType,
    LastActive,
}

impl Facet {
    /// Display name, also the filter's unique name within a set.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Location => "Location",
            Self::Experience => "Experience",
            Self::CurrentCtc => "Current CTC",
            Self::Skills => "Skills",
            Self::Company => "Company",
            Self::Education => "Education",
            Self::NoticePeriod => "Notice Period",
            Self::WorkMode => "Work Mode",
            Self::JobType => "Job Type",
            Self::LastActive => "Last Active",
        }
    }

    /// Unit suffix used when rendering range bounds.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Experience => " yrs",
            Self::CurrentCtc => " LPA",
            _ => "",
        }
    }
}

/// How values are chosen for a filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterKind {
    Select {
        options: Vec<String>,
        value: Option<String>,
    },
    MultiSelect {
        options: Vec<String>,
        values: BTreeSet<String>,
    },
    Range {
        min: u32,
        max: u32,
        step: u32,
        low: u32,
        high: u32,
    },
}

/// A single named filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub facet: Facet,
    pub kind: FilterKind,
}

impl Filter {
    #[must_use]
    pub fn select(facet: Facet, options: &[&str]) -> Self {
        Self {
            facet,
            kind: FilterKind::Select {
                options: options.iter().map(ToString::to_string).collect(),
                value: None,
            },
        }
    }

    #[must_use]
    pub fn multiselect(facet: Facet, options: &[&str]) -> Self {
        Self {
            facet,
            kind: FilterKind::MultiSelect {
                options: options.iter().map(ToString::to_string).collect(),
                values: BTreeSet::new(),
            },
        }
    }

    /// A range spanning `[min, max]`, inactive until narrowed.
    #[must_use]
    pub const fn range(facet: Facet, min: u32, max: u32, step: u32) -> Self {
        Self {
            facet,
            kind: FilterKind::Range {
                min,
                max,
                step,
                low: min,
                high: max,
            },
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.facet.label()
    }

    /// Returns whether this filter constrains anything.
    ///
    /// # Examples
    ///
    /// ```
    /// use talentscope::domain::{Facet, Filter};
    ///
    /// let exp = Filter::range(Facet::Experience, 0, 15, 1);
    /// assert!(!exp.is_active());
    /// assert!(exp.with_high(8).is_active());
    /// ```
    #[must_use]
    pub fn is_active(&self) -> bool {
        match &self.kind {
            FilterKind::Select { value, .. } => value.is_some(),
            FilterKind::MultiSelect { values, .. } => !values.is_empty(),
            FilterKind::Range {
                min, max, low, high, ..
            } => low != min || high != max,
        }
    }

    /// Option labels for select and multiselect filters; empty for ranges.
    #[must_use]
    pub fn options(&self) -> &[String] {
        match &self.kind {
            FilterKind::Select { options, .. } | FilterKind::MultiSelect { options, .. } => options,
            FilterKind::Range { .. } => &[],
        }
    }

    /// Returns whether `option` is currently chosen.
    #[must_use]
    pub fn is_chosen(&self, option: &str) -> bool {
        match &self.kind {
            FilterKind::Select { value, .. } => value.as_deref() == Some(option),
            FilterKind::MultiSelect { values, .. } => values.contains(option),
            FilterKind::Range { .. } => false,
        }
    }

    /// Returns a copy with `option` picked.
    ///
    /// For select filters picking the current value unsets it. For multiselect
    /// filters the option is added or removed. Options outside the option list
    /// and range filters are left unchanged.
    #[must_use]
    pub fn toggled(&self, option: &str) -> Self {
        let kind = match &self.kind {
            FilterKind::Select { options, value } if options.iter().any(|o| o == option) => {
                let value = if value.as_deref() == Some(option) {
                    None
                } else {
                    Some(option.to_string())
                };
                FilterKind::Select {
                    options: options.clone(),
                    value,
                }
            }
            FilterKind::MultiSelect { options, values } if options.iter().any(|o| o == option) => {
                let mut values = values.clone();
                if !values.remove(option) {
                    values.insert(option.to_string());
                }
                FilterKind::MultiSelect {
                    options: options.clone(),
                    values,
                }
            }
            other => other.clone(),
        };
        Self {
            facet: self.facet,
            kind,
        }
    }

    /// Returns a copy with the upper bound moved to `high`.
    ///
    /// The bound is snapped to the step grid and clamped to `[low, max]`.
    #[must_use]
    pub fn with_high(&self, high: u32) -> Self {
        match self.kind {
            FilterKind::Range {
                min,
                max,
                step,
                low,
                ..
            } => Self {
                facet: self.facet,
                kind: FilterKind::Range {
                    min,
                    max,
                    step,
                    low,
                    high: snap(high, min, step).clamp(low, max),
                },
            },
            _ => self.clone(),
        }
    }

    /// Returns a copy with the lower bound moved to `low`, clamped to `[min, high]`.
    #[must_use]
    pub fn with_low(&self, low: u32) -> Self {
        match self.kind {
            FilterKind::Range {
                min,
                max,
                step,
                high,
                ..
            } => Self {
                facet: self.facet,
                kind: FilterKind::Range {
                    min,
                    max,
                    step,
                    low: snap(low, min, step).clamp(min, high),
                    high,
                },
            },
            _ => self.clone(),
        }
    }

    /// Moves the upper bound by `steps` grid steps (negative moves down).
    #[must_use]
    pub fn nudge_high(&self, steps: i32) -> Self {
        match self.kind {
            FilterKind::Range { high, step, .. } => self.with_high(offset(high, step, steps)),
            _ => self.clone(),
        }
    }

    /// Moves the lower bound by `steps` grid steps (negative moves down).
    #[must_use]
    pub fn nudge_low(&self, steps: i32) -> Self {
        match self.kind {
            FilterKind::Range { low, step, .. } => self.with_low(offset(low, step, steps)),
            _ => self.clone(),
        }
    }

    /// Returns this filter with nothing chosen.
    #[must_use]
    pub fn cleared(&self) -> Self {
        let kind = match &self.kind {
            FilterKind::Select { options, .. } => FilterKind::Select {
                options: options.clone(),
                value: None,
            },
            FilterKind::MultiSelect { options, .. } => FilterKind::MultiSelect {
                options: options.clone(),
                values: BTreeSet::new(),
            },
            &FilterKind::Range { min, max, step, .. } => FilterKind::Range {
                min,
                max,
                step,
                low: min,
                high: max,
            },
        };
        Self {
            facet: self.facet,
            kind,
        }
    }

    /// Human-readable summary of the chosen values, `None` when inactive.
    ///
    /// Multiselect values are listed in option order.
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        if !self.is_active() {
            return None;
        }
        let text = match &self.kind {
            FilterKind::Select { value, .. } => value.clone().unwrap_or_default(),
            FilterKind::MultiSelect { options, values } => options
                .iter()
                .filter(|o| values.contains(*o))
                .cloned()
                .collect::<Vec<_>>()
                .join(", "),
            FilterKind::Range { low, high, .. } => {
                format!("{low}–{high}{}", self.facet.unit())
            }
        };
        Some(text)
    }

    /// Returns whether `candidate` satisfies this filter.
    ///
    /// Inactive filters admit everyone. Facets the candidate record carries no
    /// data for (notice period, work mode, job type) never exclude anyone.
    #[must_use]
    pub fn admits(&self, candidate: &Candidate) -> bool {
        if !self.is_active() {
            return true;
        }
        match (&self.kind, self.facet) {
            (FilterKind::Select { value: Some(v), .. }, Facet::Location) => {
                &candidate.current_location == v
            }
            (FilterKind::Select { value: Some(v), .. }, Facet::Education) => candidate.degree() == v,
            (FilterKind::Select { value: Some(v), .. }, Facet::LastActive) => {
                match (recency_limit_days(v), candidate.days_since_active()) {
                    (Some(limit), Some(days)) => days <= limit,
                    (None, _) => true,
                    (Some(_), None) => false,
                }
            }
            (FilterKind::MultiSelect { values, .. }, Facet::Skills) => {
                candidate.skills.iter().any(|s| values.contains(s))
            }
            (FilterKind::MultiSelect { values, .. }, Facet::Company) => {
                values.contains(&candidate.current_employer)
                    || values.contains(&candidate.previous_employer)
            }
            (FilterKind::Range { low, high, .. }, Facet::Experience) => {
                (*low..=*high).contains(&candidate.experience)
            }
            (FilterKind::Range { low, high, .. }, Facet::CurrentCtc) => candidate
                .ctc_lpa()
                .is_some_and(|ctc| (*low..=*high).contains(&ctc)),
            _ => true,
        }
    }
}

fn snap(value: u32, min: u32, step: u32) -> u32 {
    if step <= 1 || value <= min {
        return value;
    }
    min + (value - min) / step * step
}

fn offset(value: u32, step: u32, steps: i32) -> u32 {
    let delta = step.saturating_mul(steps.unsigned_abs());
    if steps >= 0 {
        value.saturating_add(delta)
    } else {
        value.saturating_sub(delta)
    }
}

/// Maximum age in days for a last-active option.
fn recency_limit_days(option: &str) -> Option<u32> {
    match option {
        "Today" => Some(0),
        "Last 3 days" => Some(3),
        "Last week" => Some(7),
        "Last month" => Some(30),
        _ => None,
    }
}

/// Ordered collection of filters, one per facet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSet {
    filters: Vec<Filter>,
}

impl Default for FilterSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl FilterSet {
    /// The ten facets the results sidebar offers, all inactive.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            filters: vec![
                Filter::select(
                    Facet::Location,
                    &[
                        "Bangalore", "Mumbai", "Delhi", "Hyderabad", "Pune", "Chennai", "Kolkata",
                        "Noida", "Gurgaon",
                    ],
                ),
                Filter::range(Facet::Experience, 0, 15, 1),
                Filter::range(Facet::CurrentCtc, 5, 60, 5),
                Filter::multiselect(
                    Facet::Skills,
                    &[
                        "React", "Java", "Python", "AWS", "Docker", "Kubernetes", "Node.js",
                        "Angular", "Vue.js", "Spring Boot",
                    ],
                ),
                Filter::multiselect(
                    Facet::Company,
                    &[
                        "TCS", "Infosys", "Wipro", "Accenture", "IBM", "Microsoft", "Google",
                        "Amazon", "Meta", "Oracle",
                    ],
                ),
                Filter::select(
                    Facet::Education,
                    &["B.Tech", "M.Tech", "MCA", "BCA", "B.Sc", "M.Sc", "MBA"],
                ),
                Filter::select(
                    Facet::NoticePeriod,
                    &["Immediate", "15 Days", "30 Days", "60 Days", "90 Days"],
                ),
                Filter::select(Facet::WorkMode, &["Remote", "Hybrid", "On-site"]),
                Filter::select(Facet::JobType, &["Full Time", "Contract", "Freelance"]),
                Filter::select(
                    Facet::LastActive,
                    &["Today", "Last 3 days", "Last week", "Last month"],
                ),
            ],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Filter> {
        self.filters.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Filter> {
        self.filters.get(index)
    }

    #[must_use]
    pub fn by_facet(&self, facet: Facet) -> Option<&Filter> {
        self.filters.iter().find(|f| f.facet == facet)
    }

    /// Swaps in `filter` for the existing filter with the same facet.
    ///
    /// Filters whose facet is not part of the set are ignored.
    pub fn replace(&mut self, filter: Filter) {
        if let Some(slot) = self.filters.iter_mut().find(|f| f.facet == filter.facet) {
            *slot = filter;
        }
    }

    /// Returns whether any filter in the set is active.
    #[must_use]
    pub fn any_active(&self) -> bool {
        self.filters.iter().any(Filter::is_active)
    }

    /// Clears every filter.
    pub fn reset(&mut self) {
        self.filters = self.filters.iter().map(Filter::cleared).collect();
    }

    /// `(name, summary)` pairs for every active filter, in set order.
    #[must_use]
    pub fn chips(&self) -> Vec<(&'static str, String)> {
        self.filters
            .iter()
            .filter_map(|f| f.summary().map(|s| (f.name(), s)))
            .collect()
    }

    /// Returns whether `candidate` satisfies every active filter.
    #[must_use]
    pub fn matches(&self, candidate: &Candidate) -> bool {
        self.filters.iter().all(|f| f.admits(candidate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_candidate() -> Candidate {
        Candidate {
            id: "7".to_string(),
            name: "Deepa Mehta".to_string(),
            photo_url: String::new(),
            experience: 4,
            current_ctc: "16 LPA".to_string(),
            current_location: "Delhi".to_string(),
            current_employer: "Adobe".to_string(),
            previous_employer: "Accenture".to_string(),
            education: "B.Tech in Computer Science".to_string(),
            preferred_location: "Delhi".to_string(),
            skills: vec!["React".to_string(), "AWS".to_string()],
            last_active: "2 days ago".to_string(),
            phone: String::new(),
            email: String::new(),
            resume: String::new(),
        }
    }

    fn set_with(filter: Filter) -> FilterSet {
        let mut set = FilterSet::standard();
        set.replace(filter);
        set
    }

    #[test]
    fn fresh_set_is_inactive() {
        let set = FilterSet::standard();
        assert_eq!(set.len(), 10);
        assert!(!set.any_active());
        assert!(set.chips().is_empty());
    }

    #[test]
    fn facet_names_are_unique() {
        let set = FilterSet::standard();
        let names: BTreeSet<&str> = set.iter().map(Filter::name).collect();
        assert_eq!(names.len(), set.len());
    }

    #[test]
    fn one_active_filter_activates_set() {
        let location = FilterSet::standard()
            .by_facet(Facet::Location)
            .map(|f| f.toggled("Pune"))
            .expect("location facet");
        assert!(set_with(location).any_active());
    }

    #[test]
    fn select_toggle_same_value_unsets() {
        let f = Filter::select(Facet::WorkMode, &["Remote", "Hybrid"]);
        let picked = f.toggled("Remote");
        assert!(picked.is_chosen("Remote"));
        let again = picked.toggled("Remote");
        assert!(!again.is_active());
    }

    #[test]
    fn select_ignores_unknown_option() {
        let f = Filter::select(Facet::WorkMode, &["Remote"]);
        assert_eq!(f.toggled("Moon"), f);
    }

    #[test]
    fn multiselect_toggle_is_reversible() {
        let f = Filter::multiselect(Facet::Skills, &["React", "Java"]);
        let once = f.toggled("Java").toggled("React");
        assert!(once.is_active());
        assert_eq!(once.toggled("Java").toggled("React"), f);
    }

    #[test]
    fn range_active_only_when_narrowed() {
        let f = Filter::range(Facet::CurrentCtc, 5, 60, 5);
        assert!(!f.is_active());
        let narrowed = f.with_low(10);
        assert!(narrowed.is_active());
        assert!(!narrowed.with_low(5).is_active());
    }

    #[test]
    fn range_bounds_snap_and_clamp() {
        let f = Filter::range(Facet::CurrentCtc, 5, 60, 5);
        assert_eq!(
            f.with_high(27).kind,
            FilterKind::Range { min: 5, max: 60, step: 5, low: 5, high: 25 }
        );
        let tight = f.with_high(20).with_low(40);
        assert_eq!(
            tight.kind,
            FilterKind::Range { min: 5, max: 60, step: 5, low: 20, high: 20 }
        );
        assert_eq!(f.nudge_high(3).kind, f.kind);
        assert_eq!(f.nudge_low(-1).kind, f.kind);
    }

    #[test]
    fn cleared_resets_each_variant() {
        let set = FilterSet::standard();
        for filter in set.iter() {
            let touched = match &filter.kind {
                FilterKind::Range { .. } => filter.nudge_high(-1),
                _ => filter.toggled(&filter.options()[0]),
            };
            assert!(touched.is_active(), "{} should activate", filter.name());
            assert_eq!(&touched.cleared(), filter);
        }
    }

    #[test]
    fn reset_clears_whole_set() {
        let mut set = FilterSet::standard();
        if let Some(f) = set.by_facet(Facet::Skills).map(|f| f.toggled("AWS")) {
            set.replace(f);
        }
        set.reset();
        assert_eq!(set, FilterSet::standard());
    }

    #[test]
    fn chips_list_active_filters_in_order() {
        let mut set = FilterSet::standard();
        set.replace(Filter::range(Facet::Experience, 0, 15, 1).with_low(2).with_high(8));
        set.replace(
            Filter::multiselect(Facet::Skills, &["React", "Java", "AWS"])
                .toggled("AWS")
                .toggled("React"),
        );
        assert_eq!(
            set.chips(),
            vec![
                ("Experience", "2–8 yrs".to_string()),
                ("Skills", "React, AWS".to_string()),
            ]
        );
    }

    #[test]
    fn matches_select_location() {
        let c = make_candidate();
        let pune = Filter::select(Facet::Location, &["Delhi", "Pune"]).toggled("Pune");
        let delhi = Filter::select(Facet::Location, &["Delhi", "Pune"]).toggled("Delhi");
        assert!(!set_with(pune).matches(&c));
        assert!(set_with(delhi).matches(&c));
    }

    #[test]
    fn matches_education_by_degree() {
        let c = make_candidate();
        let btech = Filter::select(Facet::Education, &["B.Tech", "MBA"]).toggled("B.Tech");
        assert!(set_with(btech).matches(&c));
    }

    #[test]
    fn matches_multiselect_intersection() {
        let c = make_candidate();
        let skills = Filter::multiselect(Facet::Skills, &["Java", "AWS"]).toggled("Java");
        assert!(!set_with(skills.clone()).matches(&c));
        assert!(set_with(skills.toggled("AWS")).matches(&c));

        let company = Filter::multiselect(Facet::Company, &["Accenture", "IBM"]).toggled("Accenture");
        assert!(set_with(company).matches(&c));
    }

    #[test]
    fn matches_range_containment() {
        let c = make_candidate();
        assert!(set_with(Filter::range(Facet::Experience, 0, 15, 1).with_low(4)).matches(&c));
        assert!(!set_with(Filter::range(Facet::Experience, 0, 15, 1).with_low(5)).matches(&c));
        assert!(set_with(Filter::range(Facet::CurrentCtc, 5, 60, 5).with_high(20)).matches(&c));
        assert!(!set_with(Filter::range(Facet::CurrentCtc, 5, 60, 5).with_high(15)).matches(&c));
    }

    #[test]
    fn malformed_ctc_fails_active_range() {
        let mut c = make_candidate();
        c.current_ctc = "undisclosed".to_string();
        assert!(FilterSet::standard().matches(&c));
        assert!(!set_with(Filter::range(Facet::CurrentCtc, 5, 60, 5).with_high(30)).matches(&c));
    }

    #[test]
    fn matches_last_active_window() {
        let c = make_candidate();
        let options = ["Today", "Last 3 days", "Last week"];
        assert!(!set_with(Filter::select(Facet::LastActive, &options).toggled("Today")).matches(&c));
        assert!(set_with(Filter::select(Facet::LastActive, &options).toggled("Last 3 days")).matches(&c));
    }

    #[test]
    fn facets_without_data_never_exclude() {
        let c = make_candidate();
        let remote = Filter::select(Facet::WorkMode, &["Remote"]).toggled("Remote");
        assert!(set_with(remote).matches(&c));
    }
}
