//! Chat transcript lines.

use crate::chat::{ChatMessage, Sender};

pub fn transcript(out: &mut String, messages: &[ChatMessage]) {
    for message in messages {
        let who = match message.sender {
            Sender::User => "You",
            Sender::Bot => "Legio",
        };
        out.push_str(&format!(
            "[{}] {who}: {}\n",
            message.timestamp.format("%H:%M"),
            message.content
        ));
    }
}
