use std::fmt;

/// A character position in a document.
///
/// Ordering is lexicographic: earlier lines sort first, then earlier columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.col + 1)
    }
}

/// A single search hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Match {
    pub start: Position,
    /// Length of the hit in characters.
    pub len: usize,
}

impl Match {
    pub fn new(line: usize, col: usize, len: usize) -> Self {
        Self {
            start: Position::new(line, col),
            len,
        }
    }

    pub fn line(&self) -> usize {
        self.start.line
    }

    pub fn col(&self) -> usize {
        self.start.col
    }
}
