//! Built-in mock candidates compiled into the plugin.

use super::backend::CandidateRepository;
use super::models::decode_candidates;
use crate::domain::error::Result;
use crate::domain::Candidate;

const FIXTURE: &str = include_str!("../../candidates/mock-candidates.json");

/// Repository over the eight bundled mock profiles.
#[derive(Debug, Clone)]
pub struct FixtureRepository {
    candidates: Vec<Candidate>,
}

impl FixtureRepository {
    /// Decodes the bundled fixture.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled JSON is malformed.
    pub fn new() -> Result<Self> {
        let candidates = decode_candidates(FIXTURE, "built-in fixture")?;
        tracing::debug!(count = candidates.len(), "fixture candidates decoded");
        Ok(Self { candidates })
    }
}

impl CandidateRepository for FixtureRepository {
    fn list(&self) -> Result<Vec<Candidate>> {
        Ok(self.candidates.clone())
    }

    fn describe(&self) -> String {
        "built-in fixture".to_string()
    }
}

/// The bundled candidates, or an empty list if the fixture fails to decode.
#[must_use]
pub fn fixture_candidates() -> Vec<Candidate> {
    match FixtureRepository::new().and_then(|repo| repo.list()) {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::error!(error = %e, "bundled fixture is unreadable");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_has_eight_candidates() {
        let candidates = fixture_candidates();
        assert_eq!(candidates.len(), 8);
        assert_eq!(candidates[0].name, "Priya Sharma");
        assert_eq!(candidates[7].current_ctc, "25 LPA");
        assert!(candidates.iter().all(|c| c.skills.len() == 10));
    }

    #[test]
    fn lookup_by_id() {
        let repo = FixtureRepository::new().expect("fixture decodes");
        let found = repo.get_by_id("4").expect("readable");
        assert_eq!(found.map(|c| c.name), Some("Arjun Reddy".to_string()));
        assert!(repo.get_by_id("99").expect("readable").is_none());
        assert!(repo.require("99").is_err());
    }
}
