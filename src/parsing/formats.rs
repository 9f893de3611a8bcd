//! Chat export line shapes and the priority-ordered line classifier.
//!
//! Supported formats, tried in this order:
//! - Bracketed ISO: `[2024-01-15, 10:30:45] Sender: Message`
//! - Half-bracketed ISO: `2024-01-15, 10:30:45] Sender: Message`
//! - US dash: `1/15/24, 10:30 AM - Sender: Message`
//!
//! The first pattern whose shape matches wins. Each line is classified on
//! its own; the classifier never locks onto one format for a whole file.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDateTime};
use regex::Regex;

/// A recognized line shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatPattern {
    /// `[YYYY-MM-DD, HH:MM:SS] Sender: body`
    BracketedIso,
    /// `YYYY-MM-DD, HH:MM:SS] Sender: body` (leading bracket lost)
    HalfBracketedIso,
    /// `M/D/YY, H:MM AM - Sender: body`
    UsDash,
}

impl FormatPattern {
    /// Returns the regex for this line shape.
    ///
    /// Captures: 1 = date, 2 = time, 3 = sender, 4 = body.
    pub fn pattern(self) -> &'static str {
        match self {
            // [2024-01-15, 10:30:45] Alice: Hello
            FormatPattern::BracketedIso => {
                r"^\[(\d{4}-\d{2}-\d{2}),\s*(\d{2}:\d{2}:\d{2})\]\s*([^:]+):\s*(.*)"
            }
            // 2024-01-15, 10:30:45] Alice: Hello
            FormatPattern::HalfBracketedIso => {
                r"^(\d{4}-\d{2}-\d{2}),\s*(\d{2}:\d{2}:\d{2})\]\s*([^:]+):\s*(.*)"
            }
            // 1/15/24, 10:30 AM - Alice: Hello
            FormatPattern::UsDash => {
                r"^(\d{1,2}/\d{1,2}/\d{2,4}),\s*(\d{1,2}:\d{2}(?:\s*[AP]M)?)\s*-\s*([^:]+):\s*(.*)"
            }
        }
    }

    /// Returns all patterns in priority order.
    pub fn all() -> &'static [FormatPattern] {
        &[
            FormatPattern::BracketedIso,
            FormatPattern::HalfBracketedIso,
            FormatPattern::UsDash,
        ]
    }
}

impl std::fmt::Display for FormatPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatPattern::BracketedIso => write!(f, "bracketed ISO"),
            FormatPattern::HalfBracketedIso => write!(f, "half-bracketed ISO"),
            FormatPattern::UsDash => write!(f, "US dash"),
        }
    }
}

/// Parse rule for dates containing `/`: 12-hour clock, 2-digit year.
const SLASH_DATE_FORMAT: &str = "%m/%d/%y %I:%M %p";

/// Parse rule for every other date: 24-hour clock, ISO date.
const ISO_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Two-digit years up to this value belong to the 2000s, later ones to
/// the 1900s.
const TWO_DIGIT_YEAR_PIVOT: i32 = 68;

/// Parses the date and time tokens captured from a header line.
///
/// The rule is picked from the date token itself: a `/` selects
/// `month/day/yy hour:minute AM|PM`, anything else selects
/// `year-month-day hour:minute:second`. Returns `None` when the tokens do
/// not form a valid point in time.
///
/// In the slash rule the meridiem must be separated from the minutes by
/// whitespace (`9:05 PM`, not `9:05PM`), and `69`..`99` are 1969..1999.
pub fn parse_timestamp(date: &str, time: &str) -> Option<NaiveDateTime> {
    if date.contains('/') {
        parse_slash_timestamp(date, time)
    } else {
        NaiveDateTime::parse_from_str(&format!("{date} {time}"), ISO_DATE_FORMAT).ok()
    }
}

fn parse_slash_timestamp(date: &str, time: &str) -> Option<NaiveDateTime> {
    let clock = time.strip_suffix("AM").or_else(|| time.strip_suffix("PM"))?;
    if !clock.ends_with(char::is_whitespace) {
        return None;
    }

    let ts = NaiveDateTime::parse_from_str(&format!("{date} {time}"), SLASH_DATE_FORMAT).ok()?;
    // chrono keeps 69 in the 2000s
    if ts.year() > 2000 + TWO_DIGIT_YEAR_PIVOT {
        ts.with_year(ts.year() - 100)
    } else {
        Some(ts)
    }
}

/// Fields captured from a line that matched one of the formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMatch<'a> {
    /// Which shape matched
    pub pattern: FormatPattern,
    /// Raw date token
    pub date: &'a str,
    /// Raw time token (may include AM/PM)
    pub time: &'a str,
    /// Sender, trimmed
    pub sender: &'a str,
    /// Body on the header line, trimmed
    pub body: &'a str,
}

impl LineMatch<'_> {
    /// Parses the captured date and time.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        parse_timestamp(self.date, self.time)
    }
}

/// Compiled matcher for one [`FormatPattern`].
#[derive(Debug, Clone)]
struct FormatMatcher {
    pattern: FormatPattern,
    regex: Regex,
}

impl FormatMatcher {
    fn new(pattern: FormatPattern) -> Self {
        Self {
            pattern,
            regex: Regex::new(pattern.pattern()).expect("built-in format pattern is valid"),
        }
    }

    fn captures<'a>(&self, line: &'a str) -> Option<LineMatch<'a>> {
        let caps = self.regex.captures(line)?;
        let field = |i: usize| caps.get(i).map_or("", |m| m.as_str());
        Some(LineMatch {
            pattern: self.pattern,
            date: field(1),
            time: field(2),
            sender: field(3).trim(),
            body: field(4).trim(),
        })
    }
}

static STANDARD: LazyLock<LineClassifier> =
    LazyLock::new(|| LineClassifier::with_patterns(FormatPattern::all()));

/// Priority-ordered list of line matchers.
///
/// # Example
///
/// ```rust
/// use chatpulse::parsing::{FormatPattern, LineClassifier};
///
/// let classifier = LineClassifier::standard();
/// let m = classifier.classify("[2024-01-01, 10:00:00] Alice: hi").unwrap();
///
/// assert_eq!(m.pattern, FormatPattern::BracketedIso);
/// assert_eq!(m.sender, "Alice");
/// assert_eq!(m.body, "hi");
/// assert!(classifier.classify("just some text").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct LineClassifier {
    matchers: Vec<FormatMatcher>,
}

impl LineClassifier {
    /// Returns the shared classifier for all supported formats.
    pub fn standard() -> &'static LineClassifier {
        &STANDARD
    }

    /// Builds a classifier that tries `patterns` in the given order.
    pub fn with_patterns(patterns: &[FormatPattern]) -> Self {
        Self {
            matchers: patterns.iter().map(|&p| FormatMatcher::new(p)).collect(),
        }
    }

    /// Returns the patterns in the order they are tried.
    pub fn patterns(&self) -> impl Iterator<Item = FormatPattern> + '_ {
        self.matchers.iter().map(|m| m.pattern)
    }

    /// Returns the first matching format with its captured fields.
    pub fn classify<'a>(&self, line: &'a str) -> Option<LineMatch<'a>> {
        self.matchers.iter().find_map(|m| m.captures(line))
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        LineClassifier::standard().clone()
    }
}
