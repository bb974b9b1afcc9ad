//! Runtime configuration
//!
//! Resolved once at startup from command-line flags and environment fallbacks, then passed
//! down explicitly.

use crate::puzzle::{Calendar, DEFAULT_START_DATE};
use crate::storage::FileStore;
use crate::wordlists::{WordListError, WordLists};
use chrono::NaiveDate;
use std::env;
use std::path::{Path, PathBuf};

/// Directory under `$HOME` holding the state file
pub const STATE_DIR: &str = ".quadrasexordle";
/// Default state file name
pub const STATE_FILE: &str = "state.json";
/// Log file written by the TUI when no `--log-file` is given
pub const TUI_LOG_FILE: &str = "quadrasexordle.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub state_file: PathBuf,
    pub start_date: NaiveDate,
    pub targets_file: Option<PathBuf>,
    pub guesses_file: Option<PathBuf>,
    /// `EnvFilter` directive; `RUST_LOG` applies when unset
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_file: default_state_file(),
            start_date: DEFAULT_START_DATE,
            targets_file: None,
            guesses_file: None,
            log_level: None,
            log_file: None,
        }
    }
}

impl Config {
    #[must_use]
    pub const fn calendar(&self) -> Calendar {
        Calendar::new(self.start_date)
    }

    #[must_use]
    pub fn store(&self) -> FileStore {
        FileStore::new(&self.state_file)
    }

    /// Load the dictionaries, applying any file overrides
    ///
    /// # Errors
    /// See `WordLists::with_overrides`.
    pub fn word_lists(&self) -> Result<WordLists, WordListError> {
        WordLists::with_overrides(self.targets_file.as_deref(), self.guesses_file.as_deref())
    }

    /// Where the TUI sends its logs: `--log-file`, else next to the state file
    #[must_use]
    pub fn tui_log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| self.state_file.with_file_name(TUI_LOG_FILE))
    }
}

/// `$HOME/.quadrasexordle/state.json`, or `state.json` in the working directory without a home
#[must_use]
pub fn default_state_file() -> PathBuf {
    state_file_under(env::var_os("HOME").map(PathBuf::from).as_deref())
}

fn state_file_under(home: Option<&Path>) -> PathBuf {
    match home {
        Some(home) if !home.as_os_str().is_empty() => home.join(STATE_DIR).join(STATE_FILE),
        _ => PathBuf::from(STATE_FILE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_file_lives_under_home() {
        assert_eq!(
            state_file_under(Some(Path::new("/home/player"))),
            PathBuf::from("/home/player/.quadrasexordle/state.json")
        );
    }

    #[test]
    fn state_file_falls_back_to_working_directory() {
        assert_eq!(state_file_under(None), PathBuf::from("state.json"));
        assert_eq!(state_file_under(Some(Path::new(""))), PathBuf::from("state.json"));
    }

    #[test]
    fn tui_log_defaults_next_to_state() {
        let config = Config {
            state_file: PathBuf::from("/tmp/q/state.json"),
            ..Config::default()
        };
        assert_eq!(config.tui_log_path(), PathBuf::from("/tmp/q/quadrasexordle.log"));

        let config = Config {
            log_file: Some(PathBuf::from("/var/log/q.log")),
            ..config
        };
        assert_eq!(config.tui_log_path(), PathBuf::from("/var/log/q.log"));
    }

    #[test]
    fn calendar_uses_start_date() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let config = Config {
            start_date: start,
            ..Config::default()
        };
        assert_eq!(config.calendar().start(), start);
        assert_eq!(Config::default().calendar(), Calendar::default());
    }

    #[test]
    fn default_word_lists_load() {
        let lists = Config::default().word_lists().unwrap();
        assert_eq!(lists.targets().len(), crate::wordlists::TARGETS_COUNT);
    }
}
