//! Worker thread that serves candidate data.
//!
//! Zellij runs the worker on its own thread. It owns the candidate repository,
//! answers plugin requests from it, and joins the plugin's trace through the
//! context each request carries.

use crate::domain::error::{Result, TalentscopeError};
use crate::repository::{self, CandidateRepository};
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker thread state.
///
/// The repository is opened lazily for the source named by the first request
/// and reopened whenever a request names a different source.
#[derive(Serialize, Deserialize, Default)]
pub struct TalentscopeWorker {
    #[serde(skip)]
    repository: Option<Box<dyn CandidateRepository>>,

    /// Source the open repository was built from.
    #[serde(skip)]
    source: Option<String>,
}

impl TalentscopeWorker {
    /// Returns the repository for `source`, opening it if the cached one was
    /// built from somewhere else.
    fn repository_for(&mut self, source: Option<&str>, reload: bool) -> Result<&dyn CandidateRepository> {
        let stale = reload || self.repository.is_none() || self.source.as_deref() != source;
        if stale {
            let opened = repository::open(source)?;
            tracing::debug!(repository = %opened.describe(), "candidate repository opened");
            self.repository = Some(opened);
            self.source = source.map(str::to_string);
        }

        self.repository
            .as_deref()
            .ok_or_else(|| TalentscopeError::Worker("Repository not initialized".to_string()))
    }

    fn handle_db_result<T, F>(operation: &str, result: Result<T>, on_success: F) -> WorkerResponse
    where
        F: FnOnce(T) -> WorkerResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation = operation, "repository operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::debug!(operation = operation, error = %e, "repository operation failed");
                WorkerResponse::Error {
                    message: format!("{operation}: {e}"),
                }
            }
        }
    }

    /// Re-reads the source so edits to a candidate file show up on reload.
    fn handle_load_candidates(&mut self, source: Option<&str>) -> WorkerResponse {
        Self::handle_db_result(
            "load candidates",
            self.repository_for(source, true).and_then(|repo| repo.list()),
            |candidates| {
                tracing::debug!(candidate_count = candidates.len(), "candidates loaded");
                WorkerResponse::CandidatesLoaded { candidates }
            },
        )
    }

    fn handle_get_candidate(&mut self, id: String, source: Option<&str>) -> WorkerResponse {
        match self.repository_for(source, false).and_then(|repo| repo.require(&id)) {
            Err(TalentscopeError::CandidateNotFound(_)) => {
                tracing::debug!(candidate_id = %id, "candidate not found");
                WorkerResponse::CandidateNotFound { id }
            }
            result => Self::handle_db_result("get candidate", result, |candidate| {
                WorkerResponse::CandidateFound { candidate }
            }),
        }
    }

    /// Links spans created here to the plugin span that sent `message`.
    ///
    /// The returned guard must be held while the message is processed.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;

        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);

        Some(otel_context.attach())
    }

    /// Processes one request and returns the response to send back.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);

        let span = tracing::debug_span!("worker_handle_message", message_type = message.name());
        let _guard = span.entered();

        match message {
            WorkerMessage::LoadCandidates { source, .. } => self.handle_load_candidates(source.as_deref()),
            WorkerMessage::GetCandidate { id, source, .. } => self.handle_get_candidate(id, source.as_deref()),
        }
    }
}

/// Sets up the same tracing output as the plugin thread.
fn init_worker_tracing() {
    use crate::observability;
    use crate::Config;

    let config = Config::default();
    observability::init_tracing(&config);
}

static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

impl ZellijWorker<'_> for TalentscopeWorker {
    /// Decodes `payload` as a [`WorkerMessage`], handles it, and posts the
    /// response back to the plugin under the same message name.
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.load(std::sync::atomic::Ordering::Relaxed) {
            init_worker_tracing();
            WORKER_TRACING_INITIALIZED.store(true, std::sync::atomic::Ordering::Relaxed);
        }

        let response = match serde_json::from_str::<WorkerMessage>(&payload) {
            Ok(worker_message) => self.handle_message(worker_message),
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                WorkerResponse::Error {
                    message: format!("Malformed request: {e}"),
                }
            }
        };

        match serde_json::to_string(&response) {
            Ok(payload) => {
                let plugin_message = PluginMessage {
                    name: message,
                    payload,
                    worker_name: None,
                };
                post_message_to_plugin(plugin_message);
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker response");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn candidate_file(body: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(body.as_bytes()).expect("write");
        file
    }

    const TWO_CANDIDATES: &str = r#"[
        {"id": "a1", "name": "Asha Rao", "photoUrl": "", "experience": 4,
         "currentCTC": "12 LPA", "currentLocation": "Chennai", "currentEmployer": "Acme",
         "previousEmployer": "Initech", "education": "B.Tech", "preferredLocation": "Chennai",
         "skills": ["Rust"], "lastActive": "1 day ago", "phone": "+91 90000 00001",
         "email": "asha@example.com", "resume": "asha.pdf"},
        {"id": "b2", "name": "Vikram Shah", "photoUrl": "", "experience": 9,
         "currentCTC": "30 LPA", "currentLocation": "Mumbai", "currentEmployer": "Globex",
         "previousEmployer": "Hooli", "education": "M.Tech", "preferredLocation": "Pune",
         "skills": ["Go", "Kubernetes"], "lastActive": "2 weeks ago", "phone": "+91 90000 00002",
         "email": "vikram@example.com", "resume": "vikram.pdf"}
    ]"#;

    #[test]
    fn loads_fixture_without_source() {
        let mut worker = TalentscopeWorker::default();
        match worker.handle_message(WorkerMessage::load_candidates(None)) {
            WorkerResponse::CandidatesLoaded { candidates } => assert_eq!(candidates.len(), 8),
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn finds_and_misses_by_id() {
        let mut worker = TalentscopeWorker::default();
        assert!(worker.repository.is_none());

        match worker.handle_message(WorkerMessage::get_candidate("3".to_string(), None)) {
            WorkerResponse::CandidateFound { candidate } => assert_eq!(candidate.id, "3"),
            other => panic!("unexpected response: {other:?}"),
        }
        assert_eq!(worker.source, None);
        assert!(worker.repository.is_some());

        assert_eq!(
            worker.handle_message(WorkerMessage::get_candidate("999".to_string(), None)),
            WorkerResponse::CandidateNotFound { id: "999".to_string() }
        );
    }

    #[test]
    fn switches_to_json_source() {
        let file = candidate_file(TWO_CANDIDATES);
        let source = file.path().display().to_string();
        let mut worker = TalentscopeWorker::default();

        worker.handle_message(WorkerMessage::load_candidates(None));
        match worker.handle_message(WorkerMessage::load_candidates(Some(source.clone()))) {
            WorkerResponse::CandidatesLoaded { candidates } => {
                let ids: Vec<_> = candidates.iter().map(|c| c.id.as_str()).collect();
                assert_eq!(ids, ["a1", "b2"]);
            }
            other => panic!("unexpected response: {other:?}"),
        }

        match worker.handle_message(WorkerMessage::get_candidate("b2".to_string(), Some(source))) {
            WorkerResponse::CandidateFound { candidate } => assert_eq!(candidate.name, "Vikram Shah"),
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn unreadable_source_becomes_error_response() {
        let mut worker = TalentscopeWorker::default();
        let response = worker.handle_message(WorkerMessage::load_candidates(Some(
            "/nonexistent/talentscope/candidates.json".to_string(),
        )));
        match response {
            WorkerResponse::Error { message } => assert!(message.starts_with("load candidates:")),
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn malformed_file_becomes_error_response() {
        let file = candidate_file("{ not json");
        let mut worker = TalentscopeWorker::default();
        let response = worker.handle_message(WorkerMessage::get_candidate(
            "1".to_string(),
            Some(file.path().display().to_string()),
        ));
        assert!(matches!(response, WorkerResponse::Error { .. }));
    }
}
