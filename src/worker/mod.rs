//! Background worker that reads candidate data off the render thread.
//!
//! - `messages`: Request/response protocol with trace context propagation
//! - `handler`: Worker state and message processing

pub mod handler;
pub mod messages;

pub use handler::TalentscopeWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
