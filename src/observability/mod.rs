//! Tracing pipeline for the plugin and its worker.
//!
//! ```text
//! tracing spans → tracing-opentelemetry → SDK tracer → JSON-lines exporter → rotating file
//! ```
//!
//! Traces land in `~/.local/share/zellij/talentscope/talentscope-traces.jsonl`
//! (sandbox path `/host/.local/share/zellij/talentscope`), capped at 5 MB with
//! two numbered backups. The level comes from the `trace_level` plugin option.

mod exporter;
mod init;
pub mod rotating;

pub use init::init_tracing;
