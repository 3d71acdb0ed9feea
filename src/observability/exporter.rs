//! OpenTelemetry span exporter that writes JSON lines to a rotating file.
//!
//! Each exported span becomes one compact JSON object:
//!
//! ```json
//! {"service":"talentscope","name":"handle_event","traceId":"…","spanId":"…",
//!  "parentSpanId":"…","startUnixNano":1710066600000000000,"durationMicros":412,
//!  "attributes":{"event_type":"NextPage"},"status":"unset"}
//! ```

use super::rotating::RotatingFile;
use futures_util::future::BoxFuture;
use opentelemetry::trace::{SpanId, Status, TraceError};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use serde_json::{json, Map, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, SystemTime};

#[derive(Debug)]
struct JsonLinesExporter {
    file: RotatingFile,
    service: String,
    stopped: AtomicBool,
}

impl SpanExporter for JsonLinesExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.stopped.load(Ordering::SeqCst) {
            return Box::pin(std::future::ready(Err(TraceError::from("exporter stopped"))));
        }

        let result = batch
            .iter()
            .map(|span| span_record(span, &self.service).to_string())
            .try_for_each(|line| self.file.append_line(&line))
            .map_err(|e| TraceError::from(e.to_string()));

        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.stopped.store(true, Ordering::SeqCst);
    }
}

fn unix_nanos(at: SystemTime) -> u128 {
    at.duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_nanos()
}

fn span_record(span: &SpanData, service: &str) -> Value {
    let attributes: Map<String, Value> = span
        .attributes
        .iter()
        .map(|kv| (kv.key.as_str().to_string(), Value::String(kv.value.to_string())))
        .collect();

    let status = match &span.status {
        Status::Unset => "unset".to_string(),
        Status::Ok => "ok".to_string(),
        Status::Error { description } => format!("error: {description}"),
    };

    let parent = if span.parent_span_id == SpanId::INVALID {
        Value::Null
    } else {
        Value::String(format!("{:016x}", span.parent_span_id))
    };

    let duration = span
        .end_time
        .duration_since(span.start_time)
        .unwrap_or(Duration::ZERO);

    json!({
        "service": service,
        "name": span.name.as_ref(),
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent,
        "startUnixNano": unix_nanos(span.start_time).to_string(),
        "durationMicros": u64::try_from(duration.as_micros()).unwrap_or(u64::MAX),
        "attributes": attributes,
        "status": status,
    })
}

/// Builds a tracer provider that exports every finished span to `file`.
pub fn create_tracer_provider(file: RotatingFile, service: &str) -> TracerProvider {
    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        service.to_string(),
    )]);

    let exporter = JsonLinesExporter {
        file,
        service: service.to_string(),
        stopped: AtomicBool::new(false),
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
