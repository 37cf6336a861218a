//! # Document Storage
//!
//! An immutable view of the text being paged.
//!
//! Text is decoded lossily, so a file with stray invalid bytes still opens.
//! Only `\n` terminates a line (`\r\n` is accepted and the `\r` is dropped from
//! [`Document::line_text`]), which keeps line numbering identical to the
//! searcher's.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use peruse_common::error::Result;
use ropey::Rope;
use tracing::debug;

mod layout;
mod reader;

pub use layout::Cell;
pub use reader::RopeReader;

pub struct Document {
    name: String,
    text: Rope,
    line_count: usize,
}

impl Document {
    /// Reads a whole file into memory.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let mut document = Self::from_reader(file)?;
        document.name = path.display().to_string();
        Ok(document)
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Self::from_bytes(&bytes))
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_text(&String::from_utf8_lossy(bytes))
    }

    pub fn from_text(text: &str) -> Self {
        let text = Rope::from_str(text);
        let line_count = count_lines(&text);
        debug!(lines = line_count, chars = text.len_chars(), "document loaded");

        Self {
            name: String::from("(stdin)"),
            text,
            line_count,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn is_empty(&self) -> bool {
        self.line_count == 0
    }

    /// Line `idx` without its terminator. Out of range lines are empty.
    pub fn line_text(&self, idx: usize) -> String {
        if idx >= self.line_count {
            return String::new();
        }
        let mut line = String::from(self.text.line(idx));
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        line
    }

    /// Character count of line `idx` once trailing whitespace is stripped.
    pub fn line_width(&self, idx: usize) -> usize {
        self.line_text(idx).trim_end().chars().count()
    }

    /// Terminal cell at which character `col` of line `idx` starts.
    ///
    /// Columns past the end of the line keep advancing one cell per column.
    pub fn screen_col(&self, idx: usize, col: usize, tab_width: usize) -> usize {
        let line = self.line_text(idx);
        let mut cells = 0;
        let mut chars = 0;
        for c in line.chars().take(col) {
            cells += layout::char_cells(c, cells, tab_width);
            chars += 1;
        }
        cells + (col - chars)
    }

    /// Display cells of line `idx`, tabs expanded and control characters
    /// replaced.
    pub fn layout_line(&self, idx: usize, tab_width: usize) -> Vec<Cell> {
        layout::layout(&self.line_text(idx), tab_width)
    }

    /// Streams the raw text, terminators included.
    pub fn reader(&self) -> RopeReader<'_> {
        RopeReader::new(self.text.chunks())
    }
}

fn count_lines(text: &Rope) -> usize {
    let chars = text.len_chars();
    if chars == 0 {
        return 0;
    }
    let lines = text.len_lines();
    if text.char(chars - 1) == '\n' { lines - 1 } else { lines }
}
