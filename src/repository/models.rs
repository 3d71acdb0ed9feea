//! On-disk candidate record format.
//!
//! Candidate files use camelCase keys (`photoUrl`, `currentCTC`). A file is
//! either a versioned document or a bare array of records:
//!
//! ```json
//! { "version": 1, "candidates": [ { "id": "1", "name": "Priya Sharma", ... } ] }
//! ```

use crate::domain::error::{Result, TalentscopeError};
use crate::domain::Candidate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One candidate as stored in a JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub photo_url: String,
    pub experience: u32,
    #[serde(rename = "currentCTC")]
    pub current_ctc: String,
    pub current_location: String,
    pub current_employer: String,
    #[serde(default)]
    pub previous_employer: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub preferred_location: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub last_active: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub resume: String,
}

impl From<CandidateRecord> for Candidate {
    fn from(record: CandidateRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            photo_url: record.photo_url,
            experience: record.experience,
            current_ctc: record.current_ctc,
            current_location: record.current_location,
            current_employer: record.current_employer,
            previous_employer: record.previous_employer,
            education: record.education,
            preferred_location: record.preferred_location,
            skills: record.skills,
            last_active: record.last_active,
            phone: record.phone,
            email: record.email,
            resume: record.resume,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CandidateDocument {
    Versioned {
        #[allow(dead_code)]
        version: u32,
        candidates: Vec<CandidateRecord>,
    },
    Bare(Vec<CandidateRecord>),
}

/// Decodes a candidate document and checks that ids are unique.
///
/// `origin` names the source in error messages.
///
/// # Errors
///
/// Returns [`TalentscopeError::Repository`] when the JSON is malformed or two
/// records share an id.
pub fn decode_candidates(text: &str, origin: &str) -> Result<Vec<Candidate>> {
    let document: CandidateDocument = serde_json::from_str(text)
        .map_err(|e| TalentscopeError::Repository(format!("{origin}: {e}")))?;

    let records = match document {
        CandidateDocument::Versioned { candidates, .. } => candidates,
        CandidateDocument::Bare(candidates) => candidates,
    };

    let mut seen = HashSet::new();
    if let Some(dup) = records.iter().find(|r| !seen.insert(r.id.as_str())) {
        return Err(TalentscopeError::Repository(format!(
            "{origin}: duplicate candidate id {}",
            dup.id
        )));
    }

    Ok(records.into_iter().map(Candidate::from).collect())
}
