pub const DEFAULT_JUMP_LINES: usize = 30;
pub const DEFAULT_TAB_WIDTH: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Lines moved by a half-page scroll (Ctrl-d / Ctrl-u).
    pub jump_lines: usize,
    /// Distance between tab stops when a line is drawn.
    pub tab_width: usize,
    /// Appends viewport and search internals to the status line.
    pub debug_status: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            jump_lines: DEFAULT_JUMP_LINES,
            tab_width: DEFAULT_TAB_WIDTH,
            debug_status: false,
        }
    }
}
