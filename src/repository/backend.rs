//! Candidate repository abstraction.
//!
//! The worker owns one repository at a time and answers plugin requests from
//! it. Implementations only need to list their candidates; lookups by id have a
//! default linear scan.

use crate::domain::error::{Result, TalentscopeError};
use crate::domain::Candidate;

/// Read-only source of candidate profiles.
///
/// # Implementations
///
/// - [`FixtureRepository`](super::FixtureRepository): built-in mock data
/// - [`JsonFileRepository`](super::JsonFileRepository): a user-supplied JSON file
pub trait CandidateRepository: Send {
    /// Returns every candidate in repository order.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source cannot be read.
    fn list(&self) -> Result<Vec<Candidate>>;

    /// Returns the candidate with `id`, or `Ok(None)` if there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source cannot be read.
    fn get_by_id(&self, id: &str) -> Result<Option<Candidate>> {
        Ok(self.list()?.into_iter().find(|c| c.id == id))
    }

    /// Like [`get_by_id`](Self::get_by_id) but treats a miss as an error.
    ///
    /// # Errors
    ///
    /// Returns [`TalentscopeError::CandidateNotFound`] when no candidate has `id`.
    fn require(&self, id: &str) -> Result<Candidate> {
        self.get_by_id(id)?
            .ok_or_else(|| TalentscopeError::CandidateNotFound(id.to_string()))
    }

    /// Short description for logs.
    fn describe(&self) -> String;
}
