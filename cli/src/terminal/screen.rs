//! Draws a [`Pager`] onto any [`Write`] sink.
//!
//! Every call to [`Screen::draw`] repaints the whole screen: text rows, then
//! the status line, then the search line, then parks the cursor.

use std::io::{self, Write};
use std::ops::Range;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor},
    terminal::{Clear, ClearType},
};
use peruse_core::document::Cell;
use peruse_core::pager::{Mode, Pager};
use unicode_width::UnicodeWidthStr;

use crate::terminal::format;

const FILLER: &str = "~";

pub struct Screen<W: Write> {
    out: W,
}

impl<W: Write> Screen<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn draw(&mut self, pager: &Pager) -> io::Result<()> {
        queue!(self.out, Hide)?;
        self.draw_text(pager)?;
        self.draw_status(pager)?;
        self.draw_search_line(pager)?;
        self.place_cursor(pager)?;
        queue!(self.out, Show)?;
        self.out.flush()
    }

    fn draw_text(&mut self, pager: &Pager) -> io::Result<()> {
        let doc = pager.document();
        let vp = pager.viewport();

        for row in 0..vp.height() {
            let line = vp.top() + row;
            queue!(self.out, MoveTo(0, to_u16(row)))?;
            if line < doc.line_count() {
                let cells = doc.layout_line(line, vp.tab_width());
                let highlights = pager.search().highlights(line);
                for (highlighted, text) in visible_segments(&cells, &highlights, vp.left(), vp.width()) {
                    if highlighted {
                        queue!(
                            self.out,
                            SetAttribute(Attribute::Reverse),
                            Print(text),
                            SetAttribute(Attribute::NoReverse)
                        )?;
                    } else {
                        queue!(self.out, Print(text))?;
                    }
                }
            } else {
                queue!(self.out, Print(FILLER))?;
            }
            queue!(self.out, Clear(ClearType::UntilNewLine))?;
        }
        Ok(())
    }

    fn draw_status(&mut self, pager: &Pager) -> io::Result<()> {
        let vp = pager.viewport();
        let line = format::status_line(&pager.status(), vp.width());
        queue!(
            self.out,
            MoveTo(0, to_u16(vp.height())),
            SetBackgroundColor(Color::Blue),
            Print(line),
            ResetColor
        )
    }

    fn draw_search_line(&mut self, pager: &Pager) -> io::Result<()> {
        let vp = pager.viewport();
        queue!(
            self.out,
            MoveTo(0, to_u16(vp.height() + 1)),
            Clear(ClearType::CurrentLine)
        )?;

        let width = vp.width();
        match (pager.mode(), pager.message(), pager.search().pattern()) {
            (Mode::SearchInput, _, _) => {
                let prompt = format::one_line(&format!("/{}", pager.search().input()));
                queue!(self.out, Print(format::truncate(&prompt, width)))
            }
            (Mode::Normal, Some(message), _) => {
                let message = format::one_line(message);
                queue!(
                    self.out,
                    SetAttribute(Attribute::Reverse),
                    Print(format::truncate(&message, width)),
                    SetAttribute(Attribute::NoReverse)
                )
            }
            (Mode::Normal, None, Some(pattern)) => {
                let active = format::one_line(&format!("/{pattern}"));
                queue!(self.out, Print(format::truncate(&active, width)))
            }
            (Mode::Normal, None, None) => Ok(()),
        }
    }

    fn place_cursor(&mut self, pager: &Pager) -> io::Result<()> {
        let vp = pager.viewport();
        let last_col = vp.width().saturating_sub(1);

        let (col, row) = match pager.mode() {
            Mode::SearchInput => {
                let typed = 1 + format::one_line(pager.search().input()).width();
                (typed.min(last_col), vp.height() + 1)
            }
            Mode::Normal => (
                vp.cursor_screen_col(pager.document()).min(last_col),
                vp.cursor_row(),
            ),
        };
        queue!(self.out, MoveTo(to_u16(col), to_u16(row)))
    }
}

/// Splits the cells falling inside `[left, left + width)` into runs of
/// equally highlighted text.
pub fn visible_segments(
    cells: &[Cell],
    highlights: &[Range<usize>],
    left: usize,
    width: usize,
) -> Vec<(bool, String)> {
    let right = left + width;
    let mut segments: Vec<(bool, String)> = Vec::new();
    let mut at = 0;

    for cell in cells {
        let start = at;
        let end = at + cell.width;
        at = end;

        if start < left {
            // A wide glyph cut by the left edge leaves blank cells behind.
            if end > left {
                push_segment(&mut segments, false, &" ".repeat(end - left));
            }
            continue;
        }
        if end > right {
            break;
        }

        let highlighted = highlights.iter().any(|r| r.contains(&cell.source));
        let mut buf = [0u8; 4];
        push_segment(&mut segments, highlighted, cell.ch.encode_utf8(&mut buf));
    }
    segments
}

fn push_segment(segments: &mut Vec<(bool, String)>, highlighted: bool, text: &str) {
    match segments.last_mut() {
        Some((h, run)) if *h == highlighted => run.push_str(text),
        _ => segments.push((highlighted, text.to_string())),
    }
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
