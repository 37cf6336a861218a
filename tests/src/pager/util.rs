use std::collections::VecDeque;
use std::io;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use peruse_cli::app;
use peruse_cli::terminal::screen::Screen;
use peruse_common::config::Config;
use peruse_core::document::Document;
use peruse_core::pager::Pager;

pub fn key(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

pub fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

pub fn code(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// `/pattern` followed by Enter.
pub fn search(pattern: &str) -> Vec<Event> {
    let mut events = vec![key('/')];
    events.extend(pattern.chars().map(key));
    events.push(code(KeyCode::Enter));
    events
}

pub fn numbered(n: usize) -> String {
    (1..=n).map(|i| format!("line {i}\n")).collect()
}

/// A pager on a 24x80 terminal (22 text rows).
pub fn pager(text: &str) -> Pager {
    Pager::new(Document::from_text(text), Config::default(), 24, 80)
}

/// Feeds `events` through the real event loop, then quits with `q`.
///
/// Returns everything the screen wrote.
pub fn drive(pager: &mut Pager, events: Vec<Event>) -> anyhow::Result<String> {
    let mut queue: VecDeque<Event> = events.into();
    queue.push_back(key('q'));

    let mut screen = Screen::new(Vec::new());
    app::event_loop(pager, &mut screen, || {
        queue
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "out of events"))
    })?;

    Ok(String::from_utf8_lossy(&screen.into_inner()).into_owned())
}
