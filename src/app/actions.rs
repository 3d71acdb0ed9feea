//! Side effects requested by the event handler.
//!
//! The handler never talks to Zellij directly. It returns a list of
//! [`Action`]s and the plugin shim in `main.rs` carries them out in order.

use crate::worker::WorkerMessage;

/// A side effect for the plugin runtime to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Sends a request to the background worker.
    PostToWorker(WorkerMessage),

    /// Asks Zellij for a timer event after `seconds`.
    ///
    /// Timer events advance the logical clock that drives delayed task
    /// completion and chat replies.
    ScheduleTick { seconds: f64 },
}
