//! Text polarity scoring.
//!
//! The pipeline only relies on the [`PolarityScorer`] contract: a
//! deterministic function from text to a number in `[-1.0, 1.0]`. The
//! bundled [`LexiconScorer`] is a small word-list scorer for casual chat;
//! plug in anything better through the trait.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Deterministic text polarity.
///
/// Implementations must return a value in `[-1.0, 1.0]` and must return
/// the same value for the same text. Closures implement the trait, which
/// is handy for tests:
///
/// ```rust
/// use chatpulse::sentiment::PolarityScorer;
///
/// let always_sad = |_: &str| -0.5;
/// assert_eq!(always_sad.polarity("anything"), -0.5);
/// ```
pub trait PolarityScorer: Send + Sync {
    /// Scores `text`.
    fn polarity(&self, text: &str) -> f64;
}

impl<F> PolarityScorer for F
where
    F: Fn(&str) -> f64 + Send + Sync,
{
    fn polarity(&self, text: &str) -> f64 {
        self(text)
    }
}

/// Factor applied to a sentiment word preceded by a negation.
const NEGATION_FACTOR: f64 = -0.5;

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w']+").expect("word pattern is valid"));

/// Word-list polarity scorer.
///
/// Each sentiment word contributes its lexicon value, scaled by a directly
/// preceding intensifier ("very good") and flipped and damped by a
/// preceding negation ("not good"). Emoji carry their own values. The
/// score is the mean of all contributions, `0.0` when none were found.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    words: HashMap<&'static str, f64>,
    intensifiers: HashMap<&'static str, f64>,
    negations: Vec<&'static str>,
    emoji: HashMap<char, f64>,
}

impl LexiconScorer {
    /// Creates a scorer with the built-in English chat lexicon.
    pub fn new() -> Self {
        Self {
            words: Self::build_word_lexicon(),
            intensifiers: Self::build_intensifiers(),
            negations: vec![
                "not", "no", "never", "don't", "dont", "doesn't", "didn't", "isn't", "wasn't",
                "aren't", "can't", "cant", "won't", "nothing", "hardly",
            ],
            emoji: Self::build_emoji_lexicon(),
        }
    }

    fn build_word_lexicon() -> HashMap<&'static str, f64> {
        [
            // Positive
            ("good", 0.7),
            ("great", 0.8),
            ("awesome", 1.0),
            ("amazing", 0.6),
            ("excellent", 1.0),
            ("fantastic", 0.4),
            ("wonderful", 1.0),
            ("perfect", 1.0),
            ("best", 1.0),
            ("better", 0.5),
            ("nice", 0.6),
            ("cool", 0.35),
            ("fun", 0.3),
            ("funny", 0.25),
            ("happy", 0.8),
            ("glad", 0.5),
            ("love", 0.5),
            ("loved", 0.7),
            ("lovely", 0.5),
            ("like", 0.2),
            ("thanks", 0.2),
            ("thank", 0.2),
            ("beautiful", 0.85),
            ("excited", 0.4),
            ("exciting", 0.3),
            ("yay", 0.5),
            ("congrats", 0.6),
            ("congratulations", 0.6),
            ("proud", 0.8),
            ("sweet", 0.35),
            ("brilliant", 0.9),
            ("enjoy", 0.4),
            ("enjoyed", 0.4),
            ("welcome", 0.8),
            ("haha", 0.2),
            ("lol", 0.8),
            ("correct", 0.4),
            ("easy", 0.43),
            ("safe", 0.5),
            ("calm", 0.3),
            ("kind", 0.6),
            ("cute", 0.5),
            // Negative
            ("bad", -0.7),
            ("terrible", -1.0),
            ("awful", -1.0),
            ("horrible", -1.0),
            ("worst", -1.0),
            ("worse", -0.4),
            ("hate", -0.8),
            ("hated", -0.9),
            ("sad", -0.5),
            ("angry", -0.5),
            ("mad", -0.6),
            ("annoying", -0.8),
            ("annoyed", -0.4),
            ("upset", -0.5),
            ("sorry", -0.5),
            ("wrong", -0.5),
            ("stupid", -0.8),
            ("boring", -1.0),
            ("tired", -0.4),
            ("sick", -0.7),
            ("hurt", -0.5),
            ("ugly", -0.7),
            ("disappointed", -0.75),
            ("disappointing", -0.6),
            ("worried", -0.4),
            ("scared", -0.6),
            ("afraid", -0.6),
            ("lonely", -0.5),
            ("miserable", -1.0),
            ("pathetic", -1.0),
            ("disgusting", -1.0),
            ("useless", -0.5),
            ("fail", -0.5),
            ("failed", -0.5),
            ("problem", -0.3),
            ("ugh", -0.5),
            ("damn", -0.4),
            ("crap", -0.8),
            ("hard", -0.3),
            ("difficult", -0.5),
            ("late", -0.3),
            ("cry", -0.5),
            ("crying", -0.5),
        ]
        .into_iter()
        .collect()
    }

    fn build_intensifiers() -> HashMap<&'static str, f64> {
        [
            ("very", 1.3),
            ("really", 1.3),
            ("so", 1.2),
            ("super", 1.3),
            ("extremely", 1.5),
            ("totally", 1.3),
            ("absolutely", 1.5),
            ("incredibly", 1.5),
            ("quite", 1.1),
            ("pretty", 1.1),
            ("too", 1.2),
        ]
        .into_iter()
        .collect()
    }

    fn build_emoji_lexicon() -> HashMap<char, f64> {
        [
            ('😀', 0.6),
            ('😃', 0.6),
            ('😄', 0.6),
            ('😁', 0.6),
            ('😂', 0.5),
            ('🤣', 0.5),
            ('😊', 0.7),
            ('🙂', 0.3),
            ('😍', 0.9),
            ('🥰', 0.9),
            ('😘', 0.7),
            ('❤', 0.8),
            ('💕', 0.8),
            ('👍', 0.5),
            ('🎉', 0.7),
            ('🔥', 0.4),
            ('😢', -0.6),
            ('😭', -0.7),
            ('😞', -0.6),
            ('😔', -0.5),
            ('🙁', -0.4),
            ('☹', -0.5),
            ('😠', -0.7),
            ('😡', -0.8),
            ('🤬', -0.9),
            ('💔', -0.7),
            ('👎', -0.5),
            ('😒', -0.4),
        ]
        .into_iter()
        .collect()
    }

    /// Collects every scored contribution in `text`.
    fn contributions(&self, text: &str) -> Vec<f64> {
        let lower = text.to_lowercase();
        let mut scores = Vec::new();
        let mut negated = false;
        let mut boost = 1.0;

        for token in WORD_RE.find_iter(&lower).map(|m| m.as_str()) {
            if self.negations.iter().any(|&n| n == token) {
                negated = true;
                continue;
            }
            if let Some(&factor) = self.intensifiers.get(token) {
                boost *= factor;
                continue;
            }
            if let Some(&value) = self.words.get(token) {
                let mut score = value * boost;
                if negated {
                    score *= NEGATION_FACTOR;
                }
                scores.push(score.clamp(-1.0, 1.0));
            }
            negated = false;
            boost = 1.0;
        }

        scores.extend(text.chars().filter_map(|c| self.emoji.get(&c).copied()));
        scores
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f64 {
        let scores = self.contributions(text);
        if scores.is_empty() {
            return 0.0;
        }
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}
