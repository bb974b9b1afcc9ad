//! Word lists
//!
//! The target dictionary (words that can be drawn as answers) and the guess dictionary
//! (every accepted input). Both are embedded at build time and can be replaced from files.

mod embedded;
pub mod loader;

pub use embedded::{GUESSES, GUESSES_COUNT, TARGETS, TARGETS_COUNT};

use crate::core::Word;
use crate::game::NUM_BOARDS;
use rustc_hash::FxHashSet;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Errors raised while assembling the dictionaries
#[derive(Debug)]
pub enum WordListError {
    /// Fewer distinct targets than boards in a puzzle
    TooFewTargets { found: usize, required: usize },
    /// A word list file could not be read
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewTargets { found, required } => write!(
                f,
                "Target list has {found} distinct words, at least {required} are required"
            ),
            Self::Io { path, source } => {
                write!(f, "Failed to read word list {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::TooFewTargets { .. } => None,
        }
    }
}

/// Immutable dictionaries shared by puzzle generation and guess validation
#[derive(Debug, Clone)]
pub struct WordLists {
    targets: Vec<Word>,
    guesses: FxHashSet<Word>,
}

impl WordLists {
    /// Build dictionaries from target and guess words
    ///
    /// Duplicate targets are dropped (first occurrence wins, so draw order is stable) and
    /// every target is also accepted as a guess.
    ///
    /// # Errors
    /// Returns `WordListError::TooFewTargets` if there are not enough distinct targets to
    /// fill every board of a puzzle.
    pub fn new(targets: Vec<Word>, guesses: Vec<Word>) -> Result<Self, WordListError> {
        let mut seen = FxHashSet::default();
        let targets: Vec<Word> = targets
            .into_iter()
            .filter(|word| seen.insert(word.clone()))
            .collect();

        if targets.len() < NUM_BOARDS {
            return Err(WordListError::TooFewTargets {
                found: targets.len(),
                required: NUM_BOARDS,
            });
        }

        let mut guesses: FxHashSet<Word> = guesses.into_iter().collect();
        guesses.extend(targets.iter().cloned());

        Ok(Self { targets, guesses })
    }

    /// Dictionaries compiled into the binary
    ///
    /// # Errors
    /// Only fails if the embedded target list is too short, which is a build defect.
    pub fn embedded() -> Result<Self, WordListError> {
        Self::new(
            loader::words_from_slice(TARGETS),
            loader::words_from_slice(GUESSES),
        )
    }

    /// Embedded dictionaries with optional file overrides
    ///
    /// # Errors
    /// Returns an error if an override file cannot be read or the resulting target list is
    /// too short.
    pub fn with_overrides(
        targets_path: Option<&Path>,
        guesses_path: Option<&Path>,
    ) -> Result<Self, WordListError> {
        let targets = match targets_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading target list override");
                read_list(path)?
            }
            None => loader::words_from_slice(TARGETS),
        };
        let guesses = match guesses_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading guess list override");
                read_list(path)?
            }
            None => loader::words_from_slice(GUESSES),
        };
        Self::new(targets, guesses)
    }

    /// Target words in draw order
    #[must_use]
    pub fn targets(&self) -> &[Word] {
        &self.targets
    }

    /// Whether `word` is an accepted guess
    #[must_use]
    pub fn is_valid_guess(&self, word: &Word) -> bool {
        self.guesses.contains(word)
    }

    /// Number of accepted guesses
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }
}

fn read_list(path: &Path) -> Result<Vec<Word>, WordListError> {
    loader::load_from_file(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_count_matches_const() {
        assert_eq!(TARGETS.len(), TARGETS_COUNT);
    }

    #[test]
    fn guesses_count_matches_const() {
        assert_eq!(GUESSES.len(), GUESSES_COUNT);
    }

    #[test]
    fn embedded_words_are_well_formed() {
        for &word in TARGETS.iter().chain(GUESSES) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_targets_are_distinct_and_guessable() {
        let lists = WordLists::embedded().unwrap();
        assert_eq!(lists.targets().len(), TARGETS_COUNT);

        let guess_set: FxHashSet<&str> = GUESSES.iter().copied().collect();
        for &target in TARGETS {
            assert!(guess_set.contains(target), "Target '{target}' not in guess list");
        }
        assert_eq!(lists.guess_count(), GUESSES_COUNT);
    }

    #[test]
    fn guess_validation_is_case_insensitive() {
        let lists = WordLists::embedded().unwrap();
        assert!(lists.is_valid_guess(&Word::new("crane").unwrap()));
        assert!(lists.is_valid_guess(&Word::new("CrAnE").unwrap()));
        assert!(lists.is_valid_guess(&Word::new("aahed").unwrap()));
        assert!(!lists.is_valid_guess(&Word::new("xqzvk").unwrap()));
    }

    #[test]
    fn too_few_targets_rejected() {
        let targets = loader::words_from_slice(&TARGETS[..NUM_BOARDS - 1]);
        let err = WordLists::new(targets, Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            WordListError::TooFewTargets {
                found: 63,
                required: 64
            }
        ));
    }

    #[test]
    fn duplicate_targets_do_not_count() {
        let mut targets = loader::words_from_slice(&TARGETS[..NUM_BOARDS - 1]);
        targets.push(targets[0].clone());
        assert!(WordLists::new(targets, Vec::new()).is_err());
    }

    #[test]
    fn targets_are_accepted_as_guesses() {
        let targets = loader::words_from_slice(&TARGETS[..NUM_BOARDS]);
        let lists = WordLists::new(targets.clone(), Vec::new()).unwrap();
        assert!(targets.iter().all(|t| lists.is_valid_guess(t)));
    }

    #[test]
    fn missing_override_file_is_io_error() {
        let err = WordLists::with_overrides(Some(Path::new("/no/such/targets.txt")), None)
            .unwrap_err();
        assert!(matches!(err, WordListError::Io { .. }));
    }
}
