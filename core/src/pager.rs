//! # Pager State Machine
//!
//! Owns the document, the viewport and the search state and applies
//! [`Action`]s to them. A [`Pager`] never touches the terminal; the caller
//! draws it whenever a handled event returns [`Flow::Continue`].

use crossterm::event::Event;
use peruse_common::config::Config;
use peruse_common::error::Result;
use peruse_common::text::Match;
use tracing::{debug, info, warn};

use crate::document::Document;
use crate::keymap::Action;
use crate::search::SearchState;
use crate::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    /// Typing a pattern after `/`.
    SearchInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// State changed; the screen needs a redraw.
    Continue,
    /// Nothing visible changed.
    Unchanged,
    Quit,
}

/// Figures shown on the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    /// 1-based current line, 0 for an empty document.
    pub line: usize,
    pub total: usize,
    pub percent: usize,
    /// 1-based cursor column.
    pub col: usize,
    pub debug: Option<String>,
}

pub struct Pager {
    document: Document,
    viewport: Viewport,
    search: SearchState,
    mode: Mode,
    message: Option<String>,
    config: Config,
}

impl Pager {
    pub fn new(document: Document, config: Config, rows: u16, cols: u16) -> Self {
        info!(
            document = document.name(),
            lines = document.line_count(),
            rows,
            cols,
            "pager started"
        );
        Self {
            viewport: Viewport::new(rows, cols, config.tab_width),
            document,
            search: SearchState::new(),
            mode: Mode::Normal,
            message: None,
            config,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn handle_event(&mut self, event: &Event) -> Result<Flow> {
        match Action::from_event(self.mode, event) {
            Some(action) => self.handle(action),
            None => Ok(Flow::Unchanged),
        }
    }

    pub fn handle(&mut self, action: Action) -> Result<Flow> {
        if let Action::Resize { cols, rows } = action {
            self.viewport.resize(&self.document, rows, cols);
            return Ok(Flow::Continue);
        }

        match self.mode {
            Mode::Normal => self.handle_normal(action),
            Mode::SearchInput => {
                self.handle_search_input(action)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn handle_normal(&mut self, action: Action) -> Result<Flow> {
        let had_message = self.message.take().is_some();
        let doc = &self.document;
        let vp = &mut self.viewport;

        let changed = match action {
            Action::Quit => {
                debug!("exit");
                return Ok(Flow::Quit);
            }
            Action::Down => vp.move_down(doc),
            Action::Up => vp.move_up(doc),
            Action::Left => vp.move_left(doc),
            Action::Right => vp.move_right(doc),
            Action::LineStart => vp.line_start(doc),
            Action::LineEnd => vp.line_end(doc),
            Action::HalfPageDown => vp.scroll_down(doc, self.config.jump_lines),
            Action::HalfPageUp => vp.scroll_up(doc, self.config.jump_lines),
            Action::PageDown => vp.page_down(doc),
            Action::PageUp => vp.page_up(doc),
            Action::Top => vp.go_top(doc),
            Action::Bottom => vp.go_bottom(doc),
            Action::StartSearch => {
                self.search.clear_input();
                self.mode = Mode::SearchInput;
                true
            }
            Action::SearchNext => self.repeat_search(true),
            Action::SearchPrevious => self.repeat_search(false),
            Action::Input(_)
            | Action::Backspace
            | Action::Submit
            | Action::Cancel
            | Action::Resize { .. } => false,
        };

        if changed || had_message {
            Ok(Flow::Continue)
        } else {
            Ok(Flow::Unchanged)
        }
    }

    fn handle_search_input(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Input(c) => self.search.push(c),
            Action::Backspace => _ = self.search.pop(),
            Action::Cancel => {
                self.search.clear_input();
                self.mode = Mode::Normal;
            }
            Action::Submit => {
                self.mode = Mode::Normal;
                self.submit_search()?;
            }
            _ => {}
        }
        Ok(())
    }

    fn submit_search(&mut self) -> Result<()> {
        let from = self.viewport.position();
        match self.search.commit(&self.document, from) {
            Ok(Some(hit)) => self.jump(hit),
            Ok(None) => {
                if let Some(pattern) = self.search.pattern() {
                    self.message = Some(format!("Pattern not found: {pattern}"));
                }
            }
            Err(e) if e.is_user_error() => {
                warn!("{e}");
                self.message = Some(e.to_string());
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    /// Returns `true` when the screen changed: a jump or a new message.
    fn repeat_search(&mut self, forward: bool) -> bool {
        let Some(pattern) = self.search.pattern() else {
            self.message = Some(String::from("No previous search pattern"));
            return true;
        };
        if !self.search.has_matches() {
            self.message = Some(format!("Pattern not found: {pattern}"));
            return true;
        }

        let from = self.viewport.position();
        let hit = if forward {
            self.search.next(from)
        } else {
            self.search.previous(from)
        };
        match hit {
            Some(hit) => {
                self.jump(hit);
                true
            }
            None => false,
        }
    }

    fn jump(&mut self, hit: Match) {
        debug!(
            line = hit.line(),
            col = hit.col(),
            idx = ?self.search.current_index(),
            "search hit"
        );
        self.viewport.jump_to(&self.document, hit.start);
    }

    pub fn status(&self) -> Status {
        let total = self.document.line_count();
        let line = if total == 0 {
            0
        } else {
            self.viewport.current_line() + 1
        };
        let percent = if total == 0 { 100 } else { line * 100 / total };

        let debug = self.config.debug_status.then(|| {
            let vp = &self.viewport;
            let want = match vp.want_col() {
                usize::MAX => String::from("$"),
                col => col.to_string(),
            };
            format!(
                "top={} rows={} cursor=({}, {}) want={} left={} search={:?} hits={} current={:?}",
                vp.top(),
                vp.height(),
                vp.cursor_row(),
                vp.cursor_col(),
                want,
                vp.left(),
                self.search.pattern().unwrap_or_default(),
                self.search.match_count(),
                self.search.current_index(),
            )
        });

        Status {
            line,
            total,
            percent,
            col: self.viewport.cursor_col() + 1,
            debug,
        }
    }
}
