//! Scripted chat assistant.
//!
//! - [`responder`]: stateless keyword matcher mapping input to canned replies
//! - [`session`]: the widget's message log, greeting and typing indicator

pub mod responder;
pub mod session;

pub use responder::{classify, greeting, respond, Topic};
pub use session::{ChatMessage, ChatSession, PendingReply, Sender};
