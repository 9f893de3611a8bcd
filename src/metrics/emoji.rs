//! Emoji frequency across all message bodies.

use serde::Serialize;

use crate::Message;
use crate::metrics::Tally;

/// One emoji and how often it appeared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiCount {
    /// The emoji character
    pub emoji: String,
    /// Occurrences across all messages
    pub count: usize,
}

/// Regional indicator letters; a pair of them renders as a flag.
const REGIONAL_INDICATORS: std::ops::RangeInclusive<char> = '\u{1F1E6}'..='\u{1F1FF}';

/// Fitzpatrick skin-tone modifiers.
const SKIN_TONES: std::ops::RangeInclusive<char> = '\u{1F3FB}'..='\u{1F3FF}';

/// Returns `true` if `c` on its own is a Unicode emoji.
///
/// Works per code point, so a flag counts as its two regional indicators
/// and a toned emoji counts as the base plus the skin tone. Joiners and
/// variation selectors are never counted.
pub fn is_emoji(c: char) -> bool {
    if REGIONAL_INDICATORS.contains(&c) || SKIN_TONES.contains(&c) {
        return true;
    }
    let mut buf = [0u8; 4];
    emojis::get(c.encode_utf8(&mut buf)).is_some()
}

/// Counts every emoji character and returns the `top_n` most frequent.
pub fn emoji_frequency(messages: &[Message], top_n: usize) -> Vec<EmojiCount> {
    messages
        .iter()
        .flat_map(|m| m.text.chars())
        .filter(|&c| is_emoji(c))
        .collect::<Tally<char>>()
        .most_common(top_n)
        .into_iter()
        .map(|(emoji, count)| EmojiCount {
            emoji: emoji.to_string(),
            count,
        })
        .collect()
}
