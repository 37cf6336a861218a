#![cfg(test)]
use crossterm::event::{Event, KeyCode};
use peruse_common::text::Position;
use peruse_core::pager::Mode;

use super::util::{code, ctrl, drive, key, numbered, pager, search};

#[test]
fn quits_on_q_and_esc() {
    let mut p = pager(&numbered(3));
    assert!(drive(&mut p, vec![]).is_ok());

    let mut p = pager(&numbered(3));
    assert!(drive(&mut p, vec![code(KeyCode::Esc)]).is_ok());
}

#[test]
fn running_out_of_events_is_an_error() {
    let mut p = pager(&numbered(3));
    let events = vec![key('/')];
    // `q` lands in the search prompt, so the loop asks for more input.
    let err = drive(&mut p, events).unwrap_err();
    assert!(format!("{err:#}").contains("out of events"));
}

#[test]
fn first_screen_shows_top_of_document() {
    let mut p = pager(&numbered(100));
    let out = drive(&mut p, vec![]).unwrap();
    assert!(out.contains("line 1"));
    assert!(out.contains("line 22"));
    assert!(!out.contains("line 23"));
    assert!(out.contains("1/100(  1%)"));
}

#[test]
fn vi_navigation_moves_cursor_and_scrolls() {
    let mut p = pager(&numbered(100));
    let mut events: Vec<Event> = std::iter::repeat_n(key('j'), 25).collect();
    events.extend([key('l'), key('l'), key('k')]);
    drive(&mut p, events).unwrap();

    assert_eq!(p.viewport().position(), Position::new(24, 2));
    assert_eq!(p.viewport().top(), 4);
}

#[test]
fn ctrl_d_and_ctrl_u_jump_thirty_lines() {
    let mut p = pager(&numbered(200));
    drive(&mut p, vec![ctrl('d'), ctrl('d')]).unwrap();
    assert_eq!(p.viewport().current_line(), 60);
    assert_eq!(p.viewport().top(), 60);

    drive(&mut p, vec![ctrl('u')]).unwrap();
    assert_eq!(p.viewport().current_line(), 30);
}

#[test]
fn ctrl_d_stops_at_last_screenful() {
    let mut p = pager(&numbered(40));
    drive(&mut p, vec![ctrl('d'), ctrl('d')]).unwrap();
    assert_eq!(p.viewport().top(), 18);
    assert_eq!(p.viewport().current_line(), 39);
    assert_eq!(p.status().percent, 100);
}

#[test]
fn search_jumps_and_highlights() {
    let mut p = pager(&numbered(100));
    let out = drive(&mut p, search("line 5[0-9]")).unwrap();

    assert_eq!(p.mode(), Mode::Normal);
    assert_eq!(p.viewport().position(), Position::new(49, 0));
    assert_eq!(p.search().match_count(), 10);
    assert!(out.contains("/line 5[0-9]"));
    assert!(out.contains("\u{1b}[7m"));
}

#[test]
fn n_cycles_and_wraps() {
    let mut p = pager(&numbered(60));
    let mut events = search("line 1$");
    events.push(key('n'));
    drive(&mut p, events).unwrap();
    assert_eq!(p.viewport().current_line(), 0);

    let mut p = pager("alpha\nbeta\nalpha beta\n");
    let mut events = search("beta");
    events.extend([key('n'), key('n')]);
    drive(&mut p, events).unwrap();
    assert_eq!(p.viewport().position(), Position::new(1, 0));

    drive(&mut p, vec![key('N')]).unwrap();
    assert_eq!(p.viewport().position(), Position::new(2, 6));
}

#[test]
fn bad_regex_shows_message_and_keeps_running() {
    let mut p = pager(&numbered(10));
    let out = drive(&mut p, search("[unterminated")).unwrap();
    assert!(out.contains("invalid pattern"));
    assert_eq!(p.mode(), Mode::Normal);
    assert_eq!(p.viewport().position(), Position::default());
}

#[test]
fn esc_in_prompt_cancels_without_quitting() {
    let mut p = pager(&numbered(10));
    let events = vec![key('j'), key('/'), key('x'), code(KeyCode::Esc)];
    drive(&mut p, events).unwrap();
    assert_eq!(p.mode(), Mode::Normal);
    assert_eq!(p.search().pattern(), None);
    assert_eq!(p.viewport().current_line(), 1);
}

#[test]
fn backspace_edits_the_prompt() {
    let mut p = pager("cat\ncar\n");
    let mut events = vec![key('/'), key('c'), key('a'), key('t')];
    events.extend([code(KeyCode::Backspace), key('r'), code(KeyCode::Enter)]);
    drive(&mut p, events).unwrap();
    assert_eq!(p.search().pattern(), Some("car"));
    assert_eq!(p.viewport().current_line(), 1);
}

#[test]
fn resize_event_reflows_viewport() {
    let mut p = pager(&numbered(100));
    let mut events: Vec<Event> = std::iter::repeat_n(key('j'), 20).collect();
    events.push(Event::Resize(80, 10));
    drive(&mut p, events).unwrap();
    assert_eq!(p.viewport().height(), 8);
    assert_eq!(p.viewport().current_line(), 20);
    assert_eq!(p.viewport().cursor_row(), 7);
}

#[test]
fn empty_input_is_viewable() {
    let mut p = pager("");
    let out = drive(&mut p, vec![key('j'), key('G'), ctrl('d'), key('n')]).unwrap();
    assert!(out.contains("0/0(100%)"));
    assert!(out.contains("No previous search pattern"));
}

#[test]
fn document_from_file_round_trip() {
    let path = std::env::temp_dir().join(format!("peruse-it-{}.log", std::process::id()));
    std::fs::write(&path, "error: one\ninfo: two\nerror: three\n").unwrap();

    let doc = peruse_cli::app::load_document(Some(&path)).unwrap();
    std::fs::remove_file(&path).unwrap();

    let mut p = peruse_core::pager::Pager::new(doc, Default::default(), 24, 80);
    let mut events = search("^error");
    events.push(key('n'));
    drive(&mut p, events).unwrap();
    assert_eq!(p.viewport().current_line(), 2);
}

#[test]
fn missing_file_reports_path() {
    let err = peruse_cli::app::load_document(Some(std::path::Path::new("/no/such/file.txt")))
        .err()
        .unwrap();
    assert!(format!("{err:#}").contains("/no/such/file.txt"));
}

#[test]
fn blocked_keys_do_not_repaint() {
    let mut p = pager(&numbered(3));
    let out = drive(&mut p, vec![key('k'), key('g'), key('h'), key('0')]).unwrap();
    assert_eq!(out.matches("1/3( 33%)").count(), 1);

    let mut p = pager(&numbered(3));
    let out = drive(&mut p, vec![key('j'), key('k')]).unwrap();
    assert_eq!(out.matches("1/3( 33%)").count(), 2);
    assert_eq!(out.matches("2/3( 66%)").count(), 1);
}

#[test]
fn search_hit_in_trailing_whitespace_keeps_cursor_on_text() {
    let mut p = pager("abc   \nxyz\n");
    let out = drive(&mut p, search(" +")).unwrap();
    assert!(!out.contains("Pattern not found"));
    assert_eq!(p.viewport().position(), Position::new(0, 2));
    assert_eq!(p.status().col, 3);
}
