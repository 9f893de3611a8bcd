//! Word frequencies for the word cloud.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::Message;
use crate::config::StopWords;
use crate::metrics::Tally;

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\b").expect("word pattern is valid"));

/// One word-cloud entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    /// Lower-case word
    pub text: String,
    /// Occurrences
    pub value: usize,
}

/// Splits lower-cased text into word tokens.
///
/// ```rust
/// use chatpulse::metrics::tokenize;
///
/// let words: Vec<_> = tokenize("don't stop-believing").collect();
/// assert_eq!(words, vec!["don", "t", "stop", "believing"]);
/// ```
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    WORD_RE.find_iter(text).map(|m| m.as_str())
}

/// Returns the `top_n` most frequent words of at least `min_len` characters
/// that are not stop words.
pub fn word_cloud(
    messages: &[Message],
    stop_words: &StopWords,
    min_len: usize,
    top_n: usize,
) -> Vec<WordCount> {
    let text = messages
        .iter()
        .map(|m| m.text())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    tokenize(&text)
        .filter(|word| !stop_words.contains(word))
        .filter(|word| word.chars().count() >= min_len)
        .collect::<Tally<&str>>()
        .most_common(top_n)
        .into_iter()
        .map(|(word, value)| WordCount {
            text: word.to_string(),
            value,
        })
        .collect()
}
