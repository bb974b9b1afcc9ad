//! Persistence of the current game
//!
//! One slot holds one serialized `GameState`. `Session` decides on open whether the stored
//! game may be resumed and writes the state back after every change.

mod format;
mod session;
mod store;

pub use format::{FORMAT_VERSION, SerializedState, deserialize, is_serialized, serialize};
pub use session::Session;
pub use store::{FileStore, MemoryStore, StateStore};

use std::fmt;
use std::io;

/// Error type for storage operations
#[derive(Debug)]
pub enum StorageError {
    /// Stored blob does not describe a game
    InvalidFormat(String),
    Io(io::Error),
    Encode(serde_json::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(reason) => write!(f, "Invalid saved game: {reason}"),
            Self::Io(e) => write!(f, "Storage I/O failed: {e}"),
            Self::Encode(e) => write!(f, "Could not encode game: {e}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidFormat(_) => None,
            Self::Io(e) => Some(e),
            Self::Encode(e) => Some(e),
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
