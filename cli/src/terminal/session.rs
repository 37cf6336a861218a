use std::io::{self, stdout};

use crossterm::{
    cursor::{DisableBlinking, EnableBlinking, Show},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use tracing::debug;

/// Raw mode plus the alternate screen for as long as the value lives.
///
/// Dropping it restores the terminal, also when the pager exits through an
/// error.
pub struct TerminalSession {
    _private: (),
}

impl TerminalSession {
    pub fn start() -> io::Result<Self> {
        enable_raw_mode()?;
        let session = Self { _private: () };
        execute!(stdout(), EnterAlternateScreen, DisableBlinking)?;
        debug!("terminal session started");
        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(stdout(), EnableBlinking, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        debug!("terminal restored");
    }
}
