//! # Viewport
//!
//! Tracks which document lines are on screen and where the cursor sits.
//!
//! The cursor is stored relative to the viewport: `row` is a screen row and
//! `col` a character column of the current line. `want_col` remembers the
//! column the user last chose with a horizontal motion so vertical motions
//! through short lines can restore it.

use std::ops::Range;

use peruse_common::text::Position;
use tracing::debug;

use crate::document::Document;

/// Rows reserved under the text: the status line and the search line.
pub const RESERVED_ROWS: u16 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    top: usize,
    height: usize,
    width: usize,
    left: usize,
    row: usize,
    col: usize,
    want_col: usize,
    tab_width: usize,
}

impl Viewport {
    pub fn new(rows: u16, cols: u16, tab_width: usize) -> Self {
        Self {
            top: 0,
            height: text_rows(rows),
            width: usize::from(cols).max(1),
            left: 0,
            row: 0,
            col: 0,
            want_col: 0,
            tab_width,
        }
    }

    pub fn top(&self) -> usize {
        self.top
    }

    /// Number of text rows.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Horizontal scroll, in terminal cells.
    pub fn left(&self) -> usize {
        self.left
    }

    pub fn cursor_row(&self) -> usize {
        self.row
    }

    pub fn cursor_col(&self) -> usize {
        self.col
    }

    pub fn want_col(&self) -> usize {
        self.want_col
    }

    pub fn tab_width(&self) -> usize {
        self.tab_width
    }

    pub fn current_line(&self) -> usize {
        self.top + self.row
    }

    pub fn position(&self) -> Position {
        Position::new(self.current_line(), self.col)
    }

    /// Document lines currently on screen.
    pub fn visible_lines(&self, doc: &Document) -> Range<usize> {
        let end = (self.top + self.height).min(doc.line_count());
        self.top.min(end)..end
    }

    /// Screen cell of the cursor relative to the left edge of the viewport.
    pub fn cursor_screen_col(&self, doc: &Document) -> usize {
        doc.screen_col(self.current_line(), self.col, self.tab_width)
            .saturating_sub(self.left)
    }

    pub fn move_down(&mut self, doc: &Document) -> bool {
        if self.current_line() + 1 >= doc.line_count() {
            return false;
        }
        if self.row + 1 < self.height {
            self.row += 1;
        } else {
            self.top += 1;
        }
        self.snap_col(doc);
        true
    }

    pub fn move_up(&mut self, doc: &Document) -> bool {
        if self.current_line() == 0 {
            return false;
        }
        if self.row > 0 {
            self.row -= 1;
        } else {
            self.top -= 1;
        }
        self.snap_col(doc);
        true
    }

    pub fn move_left(&mut self, doc: &Document) -> bool {
        if self.col == 0 {
            return false;
        }
        self.col -= 1;
        self.want_col = self.col;
        self.follow_cursor(doc);
        true
    }

    pub fn move_right(&mut self, doc: &Document) -> bool {
        if self.col >= last_col(doc, self.current_line()) {
            return false;
        }
        self.col += 1;
        self.want_col = self.col;
        self.follow_cursor(doc);
        true
    }

    pub fn line_start(&mut self, doc: &Document) -> bool {
        let before = self.screen_state();
        self.col = 0;
        self.want_col = 0;
        self.follow_cursor(doc);
        before != self.screen_state()
    }

    /// Moves to the last char of the line and sticks there on vertical moves.
    pub fn line_end(&mut self, doc: &Document) -> bool {
        let before = self.screen_state();
        self.want_col = usize::MAX;
        self.snap_col(doc);
        before != self.screen_state()
    }

    /// Moves the cursor `n` lines down and scrolls the text by as much as the
    /// end of the document allows.
    pub fn scroll_down(&mut self, doc: &Document, n: usize) -> bool {
        let count = doc.line_count();
        if count == 0 {
            return false;
        }
        let line = self.current_line();
        let target = (line + n).min(count - 1);
        let top = (self.top + n).min(self.max_top(doc));

        let moved = target != line || top != self.top;
        self.top = top;
        self.row = target - top;
        self.snap_col(doc);
        debug!(from = line, to = target, top, "scroll down");
        moved
    }

    pub fn scroll_up(&mut self, doc: &Document, n: usize) -> bool {
        if doc.line_count() == 0 {
            return false;
        }
        let line = self.current_line();
        let target = line.saturating_sub(n);
        let top = self.top.saturating_sub(n);

        let moved = target != line || top != self.top;
        self.top = top;
        self.row = target - top;
        self.snap_col(doc);
        debug!(from = line, to = target, top, "scroll up");
        moved
    }

    pub fn page_down(&mut self, doc: &Document) -> bool {
        self.scroll_down(doc, self.height)
    }

    pub fn page_up(&mut self, doc: &Document) -> bool {
        self.scroll_up(doc, self.height)
    }

    pub fn go_top(&mut self, doc: &Document) -> bool {
        let before = self.screen_state();
        self.top = 0;
        self.row = 0;
        self.snap_col(doc);
        before != self.screen_state()
    }

    pub fn go_bottom(&mut self, doc: &Document) -> bool {
        let count = doc.line_count();
        if count == 0 {
            return false;
        }
        let before = self.screen_state();
        self.top = self.max_top(doc);
        self.row = count - 1 - self.top;
        self.snap_col(doc);
        before != self.screen_state()
    }

    /// Brings `pos` to the top row, or as close to it as the end of the
    /// document allows, and puts the cursor on it.
    pub fn jump_to(&mut self, doc: &Document, pos: Position) {
        let count = doc.line_count();
        if count == 0 {
            return;
        }
        let line = pos.line.min(count - 1);
        self.top = line.min(self.max_top(doc));
        self.row = line - self.top;
        self.col = pos.col.min(last_col(doc, line));
        self.want_col = self.col;
        self.follow_cursor(doc);
        debug!(line, col = pos.col, top = self.top, "jump");
    }

    /// Adapts to a new terminal size while keeping the current line on screen.
    pub fn resize(&mut self, doc: &Document, rows: u16, cols: u16) {
        self.height = text_rows(rows);
        self.width = usize::from(cols).max(1);

        let count = doc.line_count();
        if count == 0 {
            self.top = 0;
            self.row = 0;
        } else {
            let line = self.current_line().min(count - 1);
            let mut top = self.top.min(self.max_top(doc)).min(line);
            if line - top >= self.height {
                top = line + 1 - self.height;
            }
            self.top = top;
            self.row = line - top;
        }
        self.follow_cursor(doc);
    }

    /// What a redraw depends on: `(top, row, col, left)`.
    fn screen_state(&self) -> (usize, usize, usize, usize) {
        (self.top, self.row, self.col, self.left)
    }

    fn max_top(&self, doc: &Document) -> usize {
        doc.line_count().saturating_sub(self.height)
    }

    fn snap_col(&mut self, doc: &Document) {
        self.col = self.want_col.min(last_col(doc, self.current_line()));
        self.follow_cursor(doc);
    }

    fn follow_cursor(&mut self, doc: &Document) {
        let cell = doc.screen_col(self.current_line(), self.col, self.tab_width);
        if cell < self.left {
            self.left = cell;
        } else if cell >= self.left + self.width {
            self.left = cell + 1 - self.width;
        }
    }
}

fn text_rows(rows: u16) -> usize {
    usize::from(rows.saturating_sub(RESERVED_ROWS)).max(1)
}

fn last_col(doc: &Document, line: usize) -> usize {
    doc.line_width(line).saturating_sub(1)
}
