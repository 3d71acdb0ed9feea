//! Application layer: routes, screen state, events and actions.
//!
//! ```text
//! Zellij input → Event → handle_event → AppState mutations → Actions → shim
//!                  ↑                                            │
//!                  └────────── worker responses, timer ticks ───┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effects requested from the plugin shim
//! - [`handler`]: Event dispatch
//! - [`modes`]: Routes, focus states and key contexts
//! - [`state`]: Router, logical clock and strategies
//! - [`home`], [`results`], [`detail`], [`chat`]: Per-screen and widget state
//! - [`task`]: Cancellable simulated actions
//! - `view`: View model computation

pub mod actions;
pub mod chat;
pub mod detail;
pub mod handler;
pub mod home;
pub mod modes;
pub mod results;
pub mod state;
pub mod task;
mod view;

pub use actions::Action;
pub use chat::{ChatMessage, ChatState};
pub use detail::{CandidateView, DetailState};
pub use handler::{handle_event, Event};
pub use home::{HomeState, Suggestion, SUGGESTIONS};
pub use modes::{DetailFocus, HomeFocus, KeyContext, ResultsFocus, Route};
pub use results::{ResultsState, EXTRACTED_PARAMETERS};
pub use state::{AppState, Screen, Settings, TICK_SECONDS};
pub use task::{AsyncAction, Busy, TaskKind, TaskOutcome};
