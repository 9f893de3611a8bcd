//! Conversation starters: who breaks a long silence.

use chrono::TimeDelta;

use crate::Message;
use crate::metrics::{NamedCount, Tally};

/// Counts, per sender, the conversations they opened.
///
/// The first message always opens a conversation. After that, a message
/// sent more than `gap` after the previous one opens a new conversation.
/// Output follows the order in which senders first started one.
pub fn conversation_starters(messages: &[Message], gap: TimeDelta) -> Vec<NamedCount> {
    let mut tally: Tally<&str> = Tally::new();

    if let Some(first) = messages.first() {
        tally.add(first.sender());
    }
    for pair in messages.windows(2) {
        if pair[1].timestamp - pair[0].timestamp > gap {
            tally.add(pair[1].sender());
        }
    }

    tally
        .into_entries()
        .into_iter()
        .map(|(name, count)| NamedCount {
            name: name.to_string(),
            count,
        })
        .collect()
}
