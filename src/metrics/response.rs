//! Mean reply latency per sender.

use std::collections::HashMap;

use serde::Serialize;

use crate::Message;

/// Mean time a sender took to answer someone else.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseTime {
    /// Responding sender
    pub name: String,
    /// Mean elapsed seconds since the previous message
    pub seconds: f64,
}

/// Averages, per sender, the time since the previous message whenever the
/// sender changes.
///
/// The first message is never a response. Senders who never take over the
/// conversation are omitted. Output follows the order in which senders
/// first responded.
pub fn average_response_times(messages: &[Message]) -> Vec<ResponseTime> {
    let mut totals: Vec<(&str, f64, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for pair in messages.windows(2) {
        let (prev, msg) = (&pair[0], &pair[1]);
        if msg.sender == prev.sender {
            continue;
        }
        let elapsed = (msg.timestamp - prev.timestamp).num_seconds() as f64;
        let pos = *index.entry(msg.sender()).or_insert_with(|| {
            totals.push((msg.sender(), 0.0, 0));
            totals.len() - 1
        });
        totals[pos].1 += elapsed;
        totals[pos].2 += 1;
    }

    totals
        .into_iter()
        .map(|(name, sum, count)| ResponseTime {
            name: name.to_string(),
            seconds: sum / count as f64,
        })
        .collect()
}
