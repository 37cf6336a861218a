use std::io::{self, IsTerminal, Write};
use std::path::Path;

use anyhow::Context;
use crossterm::event::{self, Event};
use peruse_common::error::PagerError;
use peruse_core::document::Document;
use peruse_core::pager::{Flow, Pager};
use tracing::info;

use crate::commands::CommandLine;
use crate::terminal::screen::Screen;
use crate::terminal::session::TerminalSession;

/// Opens `path`, or reads standard input when there is none.
pub fn load_document(path: Option<&Path>) -> anyhow::Result<Document> {
    if let Some(path) = path {
        return Document::open(path).with_context(|| format!("unable to open {}", path.display()));
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(PagerError::NoInput.into());
    }
    Document::from_reader(stdin.lock()).context("unable to read standard input")
}

/// Waits for events and applies them until the pager asks to quit. The
/// screen is repainted only when an event changed something.
pub fn event_loop<W, F>(pager: &mut Pager, screen: &mut Screen<W>, mut next_event: F) -> anyhow::Result<()>
where
    W: Write,
    F: FnMut() -> io::Result<Event>,
{
    screen.draw(pager).context("unable to draw screen")?;
    loop {
        let event = next_event().context("unable to read terminal event")?;
        match pager.handle_event(&event)? {
            Flow::Quit => break,
            Flow::Unchanged => {}
            Flow::Continue => screen.draw(pager).context("unable to draw screen")?,
        }
    }
    Ok(())
}

pub fn run(commands: &CommandLine) -> anyhow::Result<()> {
    let document = load_document(commands.input_path())?;
    let (cols, rows) = crossterm::terminal::size().context("unable to query terminal size")?;
    let mut pager = Pager::new(document, commands.config(), rows, cols);

    let _session = TerminalSession::start().context("unable to prepare terminal")?;
    let mut screen = Screen::new(io::stdout());
    event_loop(&mut pager, &mut screen, event::read)?;

    info!("pager closed");
    Ok(())
}
