//! Candidate data sources.
//!
//! # Modules
//!
//! - `backend`: the [`CandidateRepository`] trait
//! - `fixture`: bundled mock candidates
//! - `json`: candidates read from a JSON file
//! - `models`: on-disk record format and decoding

pub mod backend;
pub mod fixture;
pub mod json;
pub mod models;

pub use backend::CandidateRepository;
pub use fixture::{fixture_candidates, FixtureRepository};
pub use json::JsonFileRepository;
pub use models::{decode_candidates, CandidateRecord};

use crate::domain::error::Result;
use crate::infrastructure::expand_tilde;

/// Opens the repository for `source`: the JSON file it names, or the bundled
/// fixture when `source` is `None` or blank.
///
/// # Errors
///
/// Returns an error if the named file cannot be opened or decoded.
pub fn open(source: Option<&str>) -> Result<Box<dyn CandidateRepository>> {
    match source.map(str::trim).filter(|s| !s.is_empty()) {
        Some(path) => Ok(Box::new(JsonFileRepository::open(expand_tilde(path))?)),
        None => Ok(Box::new(FixtureRepository::new()?)),
    }
}
