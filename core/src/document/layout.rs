use unicode_width::UnicodeWidthChar;

/// One glyph as it will be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    /// Index of the source character within the line.
    pub source: usize,
    /// Terminal cells occupied (0 for combining marks, 2 for wide glyphs).
    pub width: usize,
}

/// Cells taken by `c` when it starts at screen column `at`.
pub(crate) fn char_cells(c: char, at: usize, tab_width: usize) -> usize {
    if c == '\t' {
        let tab = tab_width.max(1);
        return tab - at % tab;
    }
    if c.is_control() {
        return 1;
    }
    c.width().unwrap_or(1)
}

pub(crate) fn layout(line: &str, tab_width: usize) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(line.len());
    let mut at = 0;

    for (source, c) in line.chars().enumerate() {
        let width = char_cells(c, at, tab_width);
        if c == '\t' {
            cells.extend((0..width).map(|_| Cell {
                ch: ' ',
                source,
                width: 1,
            }));
        } else {
            let ch = if c.is_control() { '?' } else { c };
            cells.push(Cell { ch, source, width });
        }
        at += width;
    }
    cells
}
