use colored::Colorize;
use peruse_core::pager::Status;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn status_left(status: &Status) -> String {
    let base = format!("{}/{}({:3}%)", status.line, status.total, status.percent);
    match &status.debug {
        Some(details) => format!("{base} {details}"),
        None => base,
    }
}

pub fn status_right(status: &Status) -> String {
    format!("{}:{}", status.line, status.col)
}

/// The full status bar: position on the left, `line:col` flush right,
/// exactly `width` cells wide.
pub fn status_line(status: &Status, width: usize) -> String {
    let right = status_right(status);
    let right_width = right.width();
    if right_width >= width {
        return fit(&right, width);
    }

    let left = fit(&status_left(status), width - right_width);
    format!("{left}{right}")
}

/// Cuts `text` to at most `width` cells, never splitting a wide char.
pub fn truncate(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (idx, c) in text.char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            return &text[..idx];
        }
        used += w;
    }
    text
}

/// Truncates and pads `text` to exactly `width` cells.
pub fn fit(text: &str, width: usize) -> String {
    let cut = truncate(text, width);
    let pad = width.saturating_sub(cut.width());
    format!("{cut}{}", " ".repeat(pad))
}

/// Replaces control chars (newlines, tabs, escapes) with spaces so `text`
/// prints as a single row without moving the cursor.
pub fn one_line(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// The line printed to stderr when the pager cannot start or dies.
pub fn error_line(err: &anyhow::Error) -> String {
    format!("{} {err:#}", "[-]".red().bold())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(line: usize, total: usize, percent: usize, col: usize) -> Status {
        Status {
            line,
            total,
            percent,
            col,
            debug: None,
        }
    }

    #[test]
    fn left_side_shows_progress() {
        assert_eq!(status_left(&status(2, 4, 50, 1)), "2/4( 50%)");
        assert_eq!(status_left(&status(4, 4, 100, 1)), "4/4(100%)");
    }

    #[test]
    fn debug_details_follow_progress() {
        let mut s = status(1, 1, 100, 1);
        s.debug = Some(String::from("top=0"));
        assert_eq!(status_left(&s), "1/1(100%) top=0");
    }

    #[test]
    fn status_line_is_exactly_width_cells() {
        let line = status_line(&status(12, 300, 4, 7), 30);
        assert_eq!(line.width(), 30);
        assert!(line.starts_with("12/300(  4%)"));
        assert!(line.ends_with("12:7"));
    }

    #[test]
    fn status_line_on_narrow_terminal_keeps_right_side() {
        assert_eq!(status_line(&status(12, 300, 4, 7), 4), "12:7");
        assert_eq!(status_line(&status(12, 300, 4, 7), 3), "12:");
        assert_eq!(status_line(&status(12, 300, 4, 7), 8), "12/312:7");
    }

    #[test]
    fn truncate_respects_wide_chars() {
        assert_eq!(truncate("日本語", 5), "日本");
        assert_eq!(truncate("abc", 10), "abc");
        assert_eq!(fit("日本語", 5), "日本 ");
    }

    #[test]
    fn one_line_blanks_control_chars() {
        assert_eq!(one_line("a\nb\tc\x1b[2J"), "a b c [2J");
        assert_eq!(one_line("日本"), "日本");
    }

    #[test]
    fn error_line_shows_the_whole_context_chain() {
        let err = anyhow::anyhow!("No such file or directory").context("unable to open 'missing.txt'");
        let line = error_line(&err);
        assert!(line.contains("[-]"));
        assert!(line.ends_with(" unable to open 'missing.txt': No such file or directory"));
    }
}
