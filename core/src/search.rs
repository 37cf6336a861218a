//! # Regex Search
//!
//! Line-oriented search over a [`Document`] using the `grep` matcher and
//! searcher, plus [`SearchState`], which holds the prompt buffer, the
//! committed pattern and the cursor into its results.
//!
//! Patterns never match across lines. Every non-empty occurrence on a line is
//! a separate [`Match`], so `n` visits repeated hits on one line one by one.

use std::io;
use std::ops::Range;

use grep::matcher::Matcher;
use grep::regex::{RegexMatcher, RegexMatcherBuilder};
use grep::searcher::SearcherBuilder;
use grep::searcher::sinks::Lossy;
use peruse_common::error::{PagerError, Result};
use peruse_common::text::{Match, Position};
use tracing::debug;

use crate::document::Document;

fn compile(pattern: &str) -> Result<RegexMatcher> {
    RegexMatcherBuilder::new()
        .line_terminator(Some(b'\n'))
        .build(pattern)
        .map_err(|e| PagerError::Pattern {
            pattern: pattern.to_string(),
            message: summarize_error(&e.to_string()),
        })
}

/// Regex parse errors come as a multi-line diagram ending in
/// `error: <reason>`. The prompt row only has room for the reason.
fn summarize_error(text: &str) -> String {
    let reason = text
        .lines()
        .map(str::trim)
        .rev()
        .find(|line| !line.is_empty())
        .unwrap_or("invalid regex");
    reason.strip_prefix("error: ").unwrap_or(reason).to_string()
}

/// Finds every occurrence of `pattern` in `document`, in document order.
pub fn search(document: &Document, pattern: &str) -> Result<Vec<Match>> {
    let matcher = compile(pattern)?;
    let mut matches: Vec<Match> = Vec::new();
    let mut searcher = SearcherBuilder::new().line_number(true).build();

    searcher
        .search_reader(
            &matcher,
            document.reader(),
            Lossy(|lnum, line| {
                let line_idx = lnum.saturating_sub(1) as usize;
                let text = line.trim_end_matches(['\n', '\r']);
                matcher
                    .find_iter(text.as_bytes(), |m| {
                        if m.start() < m.end() {
                            let col = char_index(text, m.start());
                            let len = char_index(text, m.end()) - col;
                            matches.push(Match::new(line_idx, col, len));
                        }
                        true
                    })
                    .map_err(|e| io::Error::other(e.to_string()))?;
                Ok(true)
            }),
        )
        .map_err(|e| PagerError::Search(e.to_string()))?;

    debug!(pattern, hits = matches.len(), "search finished");
    Ok(matches)
}

/// Number of chars in the first `byte_offset` bytes of `text`.
fn char_index(text: &str, byte_offset: usize) -> usize {
    text.get(..byte_offset)
        .map_or(byte_offset, |prefix| prefix.chars().count())
}

#[derive(Debug, Default)]
pub struct SearchState {
    /// What the user is typing after `/`.
    input: String,
    pattern: Option<String>,
    matches: Vec<Match>,
    current: Option<usize>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn push(&mut self, c: char) {
        self.input.push(c);
    }

    /// Deletes the last typed char. Returns `false` when the buffer was empty.
    pub fn pop(&mut self) -> bool {
        self.input.pop().is_some()
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Runs the typed pattern and selects the first hit at or after `from`,
    /// wrapping around to the top of the document.
    ///
    /// An empty buffer clears the active search. If the pattern fails to
    /// compile the previous search stays active.
    pub fn commit(&mut self, document: &Document, from: Position) -> Result<Option<Match>> {
        let pattern = std::mem::take(&mut self.input);
        if pattern.is_empty() {
            self.reset();
            return Ok(None);
        }

        let matches = search(document, &pattern)?;
        self.pattern = Some(pattern);
        self.matches = matches;
        self.current = None;

        let idx = self.matches.partition_point(|m| m.start < from);
        Ok(self.select(idx))
    }

    /// First hit strictly after `from`, wrapping to the first hit.
    pub fn next(&mut self, from: Position) -> Option<Match> {
        let idx = self.matches.partition_point(|m| m.start <= from);
        self.select(idx)
    }

    /// Last hit strictly before `from`, wrapping to the last hit.
    pub fn previous(&mut self, from: Position) -> Option<Match> {
        let idx = self.matches.partition_point(|m| m.start < from);
        match idx {
            0 => self.select(self.matches.len().saturating_sub(1)),
            n => self.select(n - 1),
        }
    }

    /// Char ranges of hits on document line `line`.
    pub fn highlights(&self, line: usize) -> Vec<Range<usize>> {
        let first = self.matches.partition_point(|m| m.line() < line);
        self.matches[first..]
            .iter()
            .take_while(|m| m.line() == line)
            .map(|m| m.col()..m.col() + m.len)
            .collect()
    }

    pub fn reset(&mut self) {
        self.input.clear();
        self.pattern = None;
        self.matches.clear();
        self.current = None;
    }

    fn select(&mut self, idx: usize) -> Option<Match> {
        if self.matches.is_empty() {
            self.current = None;
            return None;
        }
        let idx = if idx >= self.matches.len() { 0 } else { idx };
        self.current = Some(idx);
        Some(self.matches[idx])
    }
}
