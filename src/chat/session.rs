//! Chat widget conversation log.
//!
//! The session records messages and the "typing" indicator. Replies are
//! computed immediately but handed back as a [`PendingReply`] carrying the
//! delay after which the presentation layer should deliver it; the session
//! itself never waits.

use super::responder;
use chrono::{DateTime, Utc};
use rand::Rng;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

/// A bot reply waiting out its typing delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub text: String,
    pub deliver_after: Duration,
}

/// Message log plus typing state for one open chat window.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    typing: bool,
    reply_delay: Duration,
    greeting_delay: Duration,
    next_id: u64,
}

impl ChatSession {
    /// Creates an empty session whose replies are delayed by `reply_delay`.
    ///
    /// The opening greeting uses two thirds of that delay, matching the
    /// widget's shorter pause before its first line.
    #[must_use]
    pub fn new(reply_delay: Duration) -> Self {
        Self {
            messages: Vec::new(),
            typing: false,
            reply_delay,
            greeting_delay: reply_delay * 2 / 3,
            next_id: 1,
        }
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Whether a bot reply is pending.
    #[must_use]
    pub const fn is_typing(&self) -> bool {
        self.typing
    }

    /// Window opened. Queues a greeting the first time only.
    pub fn open<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<PendingReply> {
        if !self.messages.is_empty() || self.typing {
            return None;
        }
        self.typing = true;
        Some(PendingReply {
            text: responder::greeting(rng).to_string(),
            deliver_after: self.greeting_delay,
        })
    }

    /// Records a user message and queues the bot's answer.
    ///
    /// Blank input (empty or whitespace only) is ignored and returns `None`.
    pub fn send<R: Rng + ?Sized>(&mut self, text: &str, rng: &mut R) -> Option<PendingReply> {
        if text.trim().is_empty() {
            return None;
        }

        let _span = tracing::debug_span!("chat_send", input_len = text.len()).entered();

        self.push(text.to_string(), Sender::User);
        self.typing = true;

        Some(PendingReply {
            text: responder::respond(text, rng).to_string(),
            deliver_after: self.reply_delay,
        })
    }

    /// Appends a bot reply once its delay has elapsed.
    ///
    /// Replies are appended in the order they are delivered, which is not
    /// necessarily the order they were queued.
    pub fn deliver(&mut self, reply: PendingReply) -> &ChatMessage {
        self.typing = false;
        self.push(reply.text, Sender::Bot)
    }

    fn push(&mut self, content: String, sender: Sender) -> &ChatMessage {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            content,
            sender,
            timestamp: Utc::now(),
        });
        &self.messages[self.messages.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Topic;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn greets_only_once() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = ChatSession::new(Duration::from_millis(1500));

        let hello = session.open(&mut rng).unwrap();
        assert_eq!(hello.deliver_after, Duration::from_millis(1000));
        assert!(session.is_typing());
        assert!(session.open(&mut rng).is_none());

        session.deliver(hello);
        assert!(session.open(&mut rng).is_none());
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = ChatSession::new(Duration::ZERO);
        assert!(session.send("   ", &mut rng).is_none());
        assert!(session.messages().is_empty());
        assert!(!session.is_typing());
    }

    #[test]
    fn send_then_deliver_logs_both_sides() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut session = ChatSession::new(Duration::from_millis(1500));

        let pending = session.send("What armor do I need?", &mut rng).unwrap();
        assert_eq!(pending.deliver_after, Duration::from_millis(1500));
        assert!(Topic::Equipment.responses().contains(&pending.text.as_str()));

        let delivered = session.deliver(pending).clone();
        assert_eq!(delivered.sender, Sender::Bot);
        assert!(!session.is_typing());

        let senders: Vec<Sender> = session.messages().iter().map(|m| m.sender).collect();
        assert_eq!(senders, vec![Sender::User, Sender::Bot]);
        assert_eq!(session.messages()[0].id + 1, session.messages()[1].id);
    }
}
