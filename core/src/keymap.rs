//! Key bindings.
//!
//! Normal mode follows `less`/vi conventions; search-input mode is a
//! one-line editor for the pattern typed after `/`.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::pager::Mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Down,
    Up,
    Left,
    Right,
    LineStart,
    LineEnd,
    HalfPageDown,
    HalfPageUp,
    PageDown,
    PageUp,
    Top,
    Bottom,
    StartSearch,
    SearchNext,
    SearchPrevious,
    /// A char typed into the search prompt.
    Input(char),
    Backspace,
    Submit,
    Cancel,
    Resize { cols: u16, rows: u16 },
}

impl Action {
    pub fn from_event(mode: Mode, event: &Event) -> Option<Action> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match mode {
                Mode::Normal => normal_key(key),
                Mode::SearchInput => search_key(key),
            },
            Event::Resize(cols, rows) => Some(Action::Resize {
                cols: *cols,
                rows: *rows,
            }),
            _ => None,
        }
    }
}

fn normal_key(key: &KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    let action = match (key.code, ctrl) {
        (KeyCode::Char('c'), true) => Action::Quit,
        (KeyCode::Char('d'), true) => Action::HalfPageDown,
        (KeyCode::Char('u'), true) => Action::HalfPageUp,
        (KeyCode::Char('f'), true) => Action::PageDown,
        (KeyCode::Char('b'), true) => Action::PageUp,
        (_, true) => return None,
        (KeyCode::Esc | KeyCode::Char('q'), _) => Action::Quit,
        (KeyCode::Char('j') | KeyCode::Down, _) => Action::Down,
        (KeyCode::Char('k') | KeyCode::Up, _) => Action::Up,
        (KeyCode::Char('h') | KeyCode::Left, _) => Action::Left,
        (KeyCode::Char('l') | KeyCode::Right, _) => Action::Right,
        (KeyCode::Char('0') | KeyCode::Home, _) => Action::LineStart,
        (KeyCode::Char('$') | KeyCode::End, _) => Action::LineEnd,
        (KeyCode::Char(' ') | KeyCode::PageDown, _) => Action::PageDown,
        (KeyCode::Char('b') | KeyCode::PageUp, _) => Action::PageUp,
        (KeyCode::Char('g'), _) => Action::Top,
        (KeyCode::Char('G'), _) => Action::Bottom,
        (KeyCode::Char('/'), _) => Action::StartSearch,
        (KeyCode::Char('n'), _) => Action::SearchNext,
        (KeyCode::Char('N'), _) => Action::SearchPrevious,
        _ => return None,
    };
    Some(action)
}

fn search_key(key: &KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => Some(Action::Cancel),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Backspace | KeyCode::Delete => Some(Action::Backspace),
        KeyCode::Char(c) if !ctrl && !c.is_control() => Some(Action::Input(c)),
        _ => None,
    }
}
