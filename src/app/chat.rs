//! Floating assistant chat widget.
//!
//! Bot replies are scheduled on the logical clock and produced by a
//! [`ResponseStrategy`] when due. Several replies may be pending at once; they
//! are delivered in the order the messages were sent.

use crate::domain::{ResponseStrategy, CHAT_GREETING};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub from_bot: bool,
    /// Unix seconds.
    pub sent_at: i64,
}

#[derive(Debug, Clone, PartialEq)]
struct PendingReply {
    due_at: f64,
    prompt: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatState {
    pub open: bool,
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pending: Vec<PendingReply>,
    next_id: u64,
}

impl ChatState {
    /// A closed widget holding only the greeting.
    #[must_use]
    pub fn new(now_ts: i64) -> Self {
        Self {
            open: false,
            messages: vec![ChatMessage {
                id: 1,
                text: CHAT_GREETING.to_string(),
                from_bot: true,
                sent_at: now_ts,
            }],
            input: String::new(),
            pending: Vec::new(),
            next_id: 2,
        }
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Sends the current input and schedules a reply `delay` seconds after
    /// `clock`. Blank input is ignored and left in place.
    pub fn send(&mut self, clock: f64, delay: f64, now_ts: i64) -> bool {
        let text = self.input.trim().to_string();
        if text.is_empty() {
            return false;
        }
        self.input.clear();
        self.push_message(text.clone(), false, now_ts);
        self.pending.push(PendingReply {
            due_at: clock + delay.max(0.0),
            prompt: text,
        });
        tracing::debug!(pending = self.pending.len(), "chat message sent");
        true
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Appends every reply due at `clock`. Returns how many arrived.
    pub fn deliver_due(
        &mut self,
        clock: f64,
        responder: &mut dyn ResponseStrategy,
        now_ts: i64,
    ) -> usize {
        let (due, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|p| clock >= p.due_at);
        self.pending = waiting;
        for reply in &due {
            let text = responder.reply(&reply.prompt);
            self.push_message(text, true, now_ts);
        }
        due.len()
    }

    fn push_message(&mut self, text: String, from_bot: bool, sent_at: i64) {
        self.messages.push(ChatMessage {
            id: self.next_id,
            text,
            from_bot,
            sent_at,
        });
        self.next_id += 1;
    }
}
