//! Candidate and comment domain models.
//!
//! A [`Candidate`] is immutable for the lifetime of a screen. Two of its fields,
//! compensation and last-active, are free text ("18 LPA", "2 days ago"); the
//! sort and filter layers read them through [`leading_number`], which never
//! fails loudly on malformed input.

use serde::{Deserialize, Serialize};

/// Number of trailing digits left visible by [`Candidate::masked_phone`].
const VISIBLE_PHONE_DIGITS: usize = 4;

/// A job candidate profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub photo_url: String,
    /// Years of professional experience.
    pub experience: u32,
    /// Current compensation label, e.g. `"18 LPA"`.
    pub current_ctc: String,
    pub current_location: String,
    pub current_employer: String,
    pub previous_employer: String,
    pub education: String,
    pub preferred_location: String,
    /// Skills in the order the candidate listed them.
    pub skills: Vec<String>,
    /// Recency label, e.g. `"2 days ago"`.
    pub last_active: String,
    pub phone: String,
    pub email: String,
    pub resume: String,
}

impl Candidate {
    /// Compensation in lakhs per annum, parsed from the CTC label.
    ///
    /// Returns `None` when the label does not start with a number.
    ///
    /// # Examples
    ///
    /// ```
    /// # use talentscope::domain::Candidate;
    /// # let mut c = talentscope::repository::fixture_candidates().remove(0);
    /// c.current_ctc = "24 LPA".to_string();
    /// assert_eq!(c.ctc_lpa(), Some(24));
    /// c.current_ctc = "negotiable".to_string();
    /// assert_eq!(c.ctc_lpa(), None);
    /// ```
    #[must_use]
    pub fn ctc_lpa(&self) -> Option<u32> {
        leading_number(&self.current_ctc)
    }

    /// Days since the candidate was last active, parsed from the recency label.
    ///
    /// `"today"` counts as zero days.
    #[must_use]
    pub fn days_since_active(&self) -> Option<u32> {
        if self.last_active.trim().eq_ignore_ascii_case("today") {
            return Some(0);
        }
        leading_number(&self.last_active)
    }

    /// Degree abbreviation, the first word of the education field.
    ///
    /// `"B.Tech in Computer Science"` yields `"B.Tech"`.
    #[must_use]
    pub fn degree(&self) -> &str {
        self.education.split_whitespace().next().unwrap_or("")
    }

    /// Phone number with everything but the last few digits hidden.
    #[must_use]
    pub fn masked_phone(&self) -> String {
        let digit_count = self.phone.chars().filter(char::is_ascii_digit).count();
        let hide = digit_count.saturating_sub(VISIBLE_PHONE_DIGITS);

        let mut seen = 0;
        self.phone
            .chars()
            .map(|c| {
                if c.is_ascii_digit() {
                    seen += 1;
                    if seen <= hide {
                        return '•';
                    }
                }
                c
            })
            .collect()
    }
}

/// Parses the leading integer of a free-text label.
///
/// Only the first whitespace-separated token is considered, and only its
/// leading ASCII digits. `"18 LPA"` and `"18LPA"` both give `Some(18)`;
/// `"Today"` and `""` give `None`.
#[must_use]
pub fn leading_number(label: &str) -> Option<u32> {
    let token = label.split_whitespace().next()?;
    let digits: String = token.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// A recruiter note attached to a candidate on the detail screen.
///
/// Comments live only as long as the detail screen that created them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: u64,
    pub text: String,
    pub author: String,
    /// Unix timestamp in seconds.
    pub timestamp: i64,
}

impl Comment {
    /// Formats the comment date as `"10 Mar 2024"`.
    #[must_use]
    pub fn date_label(&self) -> String {
        chrono::DateTime::from_timestamp(self.timestamp, 0)
            .map(|dt| dt.format("%d %b %Y").to_string())
            .unwrap_or_default()
    }

    /// Notes every detail screen starts with.
    #[must_use]
    pub fn seeded() -> Vec<Self> {
        vec![
            Self {
                id: 1,
                text: "Excellent communication skills during the initial screening.".to_string(),
                author: "Rahul Kumar".to_string(),
                timestamp: 1_710_066_600,
            },
            Self {
                id: 2,
                text: "Strong technical background, particularly in React ecosystem.".to_string(),
                author: "Anjali Desai".to_string(),
                timestamp: 1_709_999_100,
            },
        ]
    }
}
