//! Cancellable simulated actions.
//!
//! The results screen runs at most one "apply filters" or "update search"
//! action at a time. Each action sits in the loading state until the logical
//! clock reaches its due time, the user cancels it, or the worker reports a
//! failure, and then yields exactly one [`TaskOutcome`].

use thiserror::Error;

/// What a pending action will do when it completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    ApplyFilters,
    UpdateSearch { query: String },
}

impl TaskKind {
    /// Message shown by the loading overlay.
    #[must_use]
    pub const fn progress_label(&self) -> &'static str {
        match self {
            Self::ApplyFilters => "Applying filters…",
            Self::UpdateSearch { .. } => "Updating search…",
        }
    }
}

/// How a pending action ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    Succeeded(TaskKind),
    Cancelled(TaskKind),
    Failed { kind: TaskKind, reason: String },
}

/// Returned when an action is started while another is loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("another action is already in progress")]
pub struct Busy;

#[derive(Debug, Clone, PartialEq)]
struct Pending {
    ticket: u64,
    kind: TaskKind,
    due_at: f64,
}

/// Idle/loading state machine for one screen's simulated actions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AsyncAction {
    pending: Option<Pending>,
    issued: u64,
}

impl AsyncAction {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// The kind of the action currently loading.
    #[must_use]
    pub fn current(&self) -> Option<&TaskKind> {
        self.pending.as_ref().map(|p| &p.kind)
    }

    /// Starts `kind`, due `delay` seconds after `now`. Returns its ticket.
    ///
    /// # Errors
    ///
    /// Returns [`Busy`] if an action is already loading; the running action is
    /// left untouched.
    pub fn start(&mut self, kind: TaskKind, now: f64, delay: f64) -> Result<u64, Busy> {
        if self.pending.is_some() {
            return Err(Busy);
        }
        self.issued += 1;
        self.pending = Some(Pending {
            ticket: self.issued,
            kind,
            due_at: now + delay.max(0.0),
        });
        Ok(self.issued)
    }

    /// Completes the pending action if it is due at `now`.
    pub fn poll(&mut self, now: f64) -> Option<TaskOutcome> {
        let due = self.pending.as_ref().is_some_and(|p| now >= p.due_at);
        if !due {
            return None;
        }
        self.pending.take().map(|p| TaskOutcome::Succeeded(p.kind))
    }

    /// Abandons the pending action.
    pub fn cancel(&mut self) -> Option<TaskOutcome> {
        self.pending.take().map(|p| TaskOutcome::Cancelled(p.kind))
    }

    /// Ends the pending action with an error.
    pub fn fail(&mut self, reason: impl Into<String>) -> Option<TaskOutcome> {
        let reason = reason.into();
        self.pending.take().map(|p| TaskOutcome::Failed { kind: p.kind, reason })
    }

    /// Ticket of the pending action.
    #[must_use]
    pub fn ticket(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completes_at_due_time() {
        let mut task = AsyncAction::default();
        task.start(TaskKind::ApplyFilters, 0.0, 1.5).expect("idle");
        assert!(task.is_loading());
        assert_eq!(task.poll(1.25), None);
        assert_eq!(task.poll(1.5), Some(TaskOutcome::Succeeded(TaskKind::ApplyFilters)));
        assert!(!task.is_loading());
        assert_eq!(task.poll(10.0), None);
    }

    #[test]
    fn second_start_is_rejected() {
        let mut task = AsyncAction::default();
        let first = task.start(TaskKind::ApplyFilters, 0.0, 1.5).expect("idle");
        let query = TaskKind::UpdateSearch { query: "rust".to_string() };
        assert_eq!(task.start(query, 0.5, 1.5), Err(Busy));
        assert_eq!(task.ticket(), Some(first));
        assert_eq!(task.current(), Some(&TaskKind::ApplyFilters));
    }

    #[test]
    fn cancel_yields_single_outcome() {
        let mut task = AsyncAction::default();
        task.start(TaskKind::ApplyFilters, 0.0, 1.5).expect("idle");
        assert_eq!(task.cancel(), Some(TaskOutcome::Cancelled(TaskKind::ApplyFilters)));
        assert_eq!(task.poll(5.0), None);
        assert_eq!(task.cancel(), None);
    }

    #[test]
    fn failure_carries_reason() {
        let mut task = AsyncAction::default();
        let kind = TaskKind::UpdateSearch { query: "go".to_string() };
        task.start(kind.clone(), 2.0, 1.0).expect("idle");
        assert_eq!(
            task.fail("disk on fire"),
            Some(TaskOutcome::Failed { kind, reason: "disk on fire".to_string() })
        );
        assert!(!task.is_loading());
    }

    #[test]
    fn tickets_increase() {
        let mut task = AsyncAction::default();
        let a = task.start(TaskKind::ApplyFilters, 0.0, 0.0).expect("idle");
        task.poll(0.0);
        let b = task.start(TaskKind::ApplyFilters, 0.0, 0.0).expect("idle");
        assert!(b > a);
    }
}
