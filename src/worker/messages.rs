//! Worker message protocol.
//!
//! Requests travel from the plugin to the background worker, responses travel
//! back. Both sides exchange JSON through Zellij's custom message channel. Every
//! request carries the caller's trace context so worker spans join the plugin's
//! trace.

use crate::domain::Candidate;
use serde::{Deserialize, Serialize};

/// Trace and span ids of the span that sent a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as 32 hex digits.
    pub trace_id: String,

    /// Sending span's ID as 16 hex digits.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the context of the current tracing span.
    ///
    /// Returns `None` when no OpenTelemetry layer is installed or the span is
    /// not sampled.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Generates `WorkerMessage` constructors that stamp the current trace context.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Creates a `", stringify!($variant), "` request with the current trace context.")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    load_candidates(LoadCandidates { source: Option<String> }),
    get_candidate(GetCandidate { id: String, source: Option<String> }),
}

/// Requests sent from the plugin to the worker.
///
/// `source` names a JSON file to read candidates from. `None` selects the
/// built-in fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// List every candidate.
    LoadCandidates {
        source: Option<String>,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Look up one candidate by id.
    GetCandidate {
        id: String,
        source: Option<String>,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Message name used on the Zellij custom message channel.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::LoadCandidates { .. } => "load_candidates",
            Self::GetCandidate { .. } => "get_candidate",
        }
    }

    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::LoadCandidates { trace_context, .. } | Self::GetCandidate { trace_context, .. } => {
                trace_context.as_ref()
            }
        }
    }
}

/// Responses sent from the worker back to the plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The full candidate list, in repository order.
    CandidatesLoaded { candidates: Vec<Candidate> },

    CandidateFound { candidate: Candidate },

    /// No candidate has the requested id.
    CandidateNotFound { id: String },

    /// The request failed; `message` is shown to the user.
    Error { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_fill_fields() {
        let msg = WorkerMessage::get_candidate("4".to_string(), None);
        match msg {
            WorkerMessage::GetCandidate { id, source, .. } => {
                assert_eq!(id, "4");
                assert!(source.is_none());
            }
            WorkerMessage::LoadCandidates { .. } => panic!("wrong variant"),
        }
    }

    #[test]
    fn no_subscriber_means_no_trace_context() {
        let msg = WorkerMessage::load_candidates(Some("/tmp/c.json".to_string()));
        assert!(msg.trace_context().is_none());
        assert_eq!(msg.name(), "load_candidates");
    }

    #[test]
    fn request_without_trace_context_decodes() {
        let json = r#"{"LoadCandidates":{"source":null}}"#;
        let msg: WorkerMessage = serde_json::from_str(json).expect("decodes");
        assert_eq!(
            msg,
            WorkerMessage::LoadCandidates {
                source: None,
                trace_context: None
            }
        );
    }
}
