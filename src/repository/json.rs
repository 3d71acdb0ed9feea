//! Candidates loaded from a user-supplied JSON file.
//!
//! The file is read once when the repository is opened; edits made while the
//! plugin runs are picked up the next time the worker reopens it.

use super::backend::CandidateRepository;
use super::models::decode_candidates;
use crate::domain::error::Result;
use crate::domain::Candidate;
use std::path::{Path, PathBuf};

/// Repository backed by a JSON file on the host.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    file_path: PathBuf,
    candidates: Vec<Candidate>,
}

impl JsonFileRepository {
    /// Reads and decodes the candidate file at `file_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid candidate
    /// JSON, or repeats an id.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use talentscope::repository::{CandidateRepository, JsonFileRepository};
    ///
    /// let repo = JsonFileRepository::open("/host/candidates.json")?;
    /// println!("{} candidates", repo.list()?.len());
    /// # Ok::<(), talentscope::TalentscopeError>(())
    /// ```
    pub fn open(file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref().to_path_buf();
        tracing::debug!(path = ?file_path, "opening candidate file");

        let contents = std::fs::read_to_string(&file_path)?;
        let candidates = decode_candidates(&contents, &file_path.display().to_string())?;

        tracing::debug!(count = candidates.len(), "candidate file decoded");
        Ok(Self {
            file_path,
            candidates,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl CandidateRepository for JsonFileRepository {
    fn list(&self) -> Result<Vec<Candidate>> {
        Ok(self.candidates.clone())
    }

    fn describe(&self) -> String {
        self.file_path.display().to_string()
    }
}
