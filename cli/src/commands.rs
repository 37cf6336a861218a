use std::path::{Path, PathBuf};

use clap::Parser;
use peruse_common::config::{Config, DEFAULT_JUMP_LINES, DEFAULT_TAB_WIDTH};

#[derive(Parser, Debug)]
#[command(name = "peruse", version)]
#[command(about = "A small pager with vi keys and regex search.")]
pub struct CommandLine {
    /// File to view; standard input is read when omitted or "-"
    pub file: Option<PathBuf>,

    /// Lines moved by Ctrl-d / Ctrl-u
    #[arg(long, env = "PERUSE_JUMP_LINES", default_value_t = DEFAULT_JUMP_LINES)]
    pub jump_lines: usize,

    /// Columns between tab stops
    #[arg(long, env = "PERUSE_TAB_WIDTH", default_value_t = DEFAULT_TAB_WIDTH)]
    pub tab_width: usize,

    /// Show viewport and search internals on the status line
    #[arg(long, env = "PERUSE_DEBUG_STATUS")]
    pub debug_status: bool,

    /// Where log events go when RUST_LOG is set
    #[arg(long, env = "PERUSE_LOG_FILE", default_value = "peruse.log")]
    pub log_file: PathBuf,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The file to open, or `None` for standard input.
    pub fn input_path(&self) -> Option<&Path> {
        self.file.as_deref().filter(|path| *path != Path::new("-"))
    }

    pub fn config(&self) -> Config {
        Config {
            jump_lines: self.jump_lines,
            tab_width: self.tab_width,
            debug_status: self.debug_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_config_defaults() {
        let cmd = CommandLine::try_parse_from(["peruse", "notes.txt"]).unwrap();
        assert_eq!(cmd.config(), Config::default());
        assert_eq!(cmd.input_path(), Some(Path::new("notes.txt")));
        assert_eq!(cmd.log_file, PathBuf::from("peruse.log"));
    }

    #[test]
    fn dash_and_nothing_mean_stdin() {
        let cmd = CommandLine::try_parse_from(["peruse", "-"]).unwrap();
        assert_eq!(cmd.input_path(), None);
        let cmd = CommandLine::try_parse_from(["peruse"]).unwrap();
        assert_eq!(cmd.input_path(), None);
    }

    #[test]
    fn flags_map_into_config() {
        let cmd = CommandLine::try_parse_from([
            "peruse",
            "--jump-lines",
            "10",
            "--tab-width",
            "4",
            "--debug-status",
            "log.txt",
        ])
        .unwrap();
        let cfg = cmd.config();
        assert_eq!(cfg.jump_lines, 10);
        assert_eq!(cfg.tab_width, 4);
        assert!(cfg.debug_status);
    }

    #[test]
    fn rejects_non_numeric_jump() {
        assert!(CommandLine::try_parse_from(["peruse", "--jump-lines", "many"]).is_err());
    }

    #[test]
    fn command_definition_is_valid() {
        use clap::CommandFactory;
        CommandLine::command().debug_assert();
    }
}
