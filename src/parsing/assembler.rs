//! Sequential assembly of messages from classified lines.
//!
//! Assembly is a fold over the input lines. The accumulator holds the
//! message currently being extended plus every message already finalized:
//!
//! - a header line with a valid timestamp finalizes `current` and starts a
//!   new message
//! - a header line whose timestamp does not parse is dropped and leaves
//!   `current` untouched
//! - any other non-blank line is appended to `current`, or discarded when
//!   there is no `current` yet
//! - blank lines are always discarded

use tracing::debug;

use crate::Message;
use crate::parsing::formats::LineClassifier;
use crate::parsing::system::is_system_notice;

/// Options controlling assembly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssemblyOptions {
    /// Treat service notices as boundaries instead of messages
    pub skip_system_messages: bool,
}

/// Counters describing how the input lines were consumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Physical lines seen
    pub lines: usize,
    /// Blank lines discarded
    pub blank_lines: usize,
    /// Header lines that started a message
    pub headers: usize,
    /// Lines appended to the current message
    pub continuation_lines: usize,
    /// Non-blank lines seen before any message started
    pub orphan_lines: usize,
    /// Header lines whose date/time did not parse
    pub rejected_dates: usize,
    /// Service notices skipped
    pub system_lines: usize,
}

/// Fold accumulator: the in-progress message and the finalized ones.
#[derive(Debug, Clone, Default)]
pub struct AssemblerState {
    current: Option<Message>,
    finished: Vec<Message>,
    skipping_notice: bool,
    stats: ParseStats,
}

impl AssemblerState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the message currently being extended, if any.
    pub fn current(&self) -> Option<&Message> {
        self.current.as_ref()
    }

    /// Returns the messages finalized so far.
    pub fn finished(&self) -> &[Message] {
        &self.finished
    }

    /// Returns the line counters so far.
    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    /// Consumes one line and returns the next state.
    #[must_use]
    pub fn step(mut self, line: &str, classifier: &LineClassifier, options: AssemblyOptions) -> Self {
        self.stats.lines += 1;

        if line.trim().is_empty() {
            self.stats.blank_lines += 1;
            return self;
        }

        let Some(header) = classifier.classify(line) else {
            let continuation = line.trim();
            match self.current.as_mut() {
                Some(current) => {
                    current.append_line(continuation);
                    self.stats.continuation_lines += 1;
                }
                None if self.skipping_notice => self.stats.system_lines += 1,
                None => self.stats.orphan_lines += 1,
            }
            return self;
        };

        let Some(timestamp) = header.timestamp() else {
            debug!(
                line = self.stats.lines,
                format = %header.pattern,
                date = header.date,
                time = header.time,
                "dropping line with unparseable timestamp"
            );
            self.stats.rejected_dates += 1;
            return self;
        };

        self.finalize_current();

        if options.skip_system_messages && is_system_notice(header.sender, header.body) {
            self.stats.system_lines += 1;
            self.skipping_notice = true;
            return self;
        }

        self.skipping_notice = false;
        self.stats.headers += 1;
        self.current = Some(Message::new(timestamp, header.sender, header.body));
        self
    }

    /// Finalizes the in-progress message and returns the result.
    pub fn finish(mut self) -> Assembly {
        self.finalize_current();
        Assembly {
            messages: self.finished,
            stats: self.stats,
        }
    }

    fn finalize_current(&mut self) {
        if let Some(done) = self.current.take() {
            self.finished.push(done);
        }
    }
}

/// Result of assembling a whole export.
#[derive(Debug, Clone, Default)]
pub struct Assembly {
    /// Messages in input order
    pub messages: Vec<Message>,
    /// How the lines were consumed
    pub stats: ParseStats,
}

/// Returns `true` for every character Python-style `splitlines` breaks on.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Splits export text into physical lines.
///
/// `\r\n` yields an extra empty line, which assembly discards as blank.
pub fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    content.split(is_line_break)
}

/// Assembles every message in `content`.
///
/// # Example
///
/// ```rust
/// use chatpulse::parsing::{AssemblyOptions, LineClassifier, assemble};
///
/// let text = "[2024-01-01, 10:00:00] Alice: first\nstill first\n\n[2024-01-01, 10:01:00] Bob: second";
/// let assembly = assemble(text, LineClassifier::standard(), AssemblyOptions::default());
///
/// assert_eq!(assembly.messages.len(), 2);
/// assert_eq!(assembly.messages[0].text(), "first\nstill first");
/// assert_eq!(assembly.stats.blank_lines, 1);
/// ```
pub fn assemble(content: &str, classifier: &LineClassifier, options: AssemblyOptions) -> Assembly {
    split_lines(content)
        .fold(AssemblerState::new(), |state, line| {
            state.step(line, classifier, options)
        })
        .finish()
}
