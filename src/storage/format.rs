//! Persisted game format
//!
//! ```json
//! { "version": 1, "id": 12, "practice": false, "targets": [64 words], "guesses": ["CRANE"] }
//! ```
//!
//! Blobs are checked structurally with `is_serialized` before they are decoded, so a
//! malformed slot is reported as `InvalidFormat` instead of surfacing a decoder error.

use super::StorageError;
use crate::core::Word;
use crate::game::{GameState, NUM_BOARDS};
use crate::puzzle::PuzzleId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Current format marker
pub const FORMAT_VERSION: u32 = 1;

const fn format_version() -> u32 {
    FORMAT_VERSION
}

/// Stored form of a `GameState`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedState {
    /// Missing in blobs written before the marker existed; those are version 1
    #[serde(default = "format_version")]
    pub version: u32,
    pub id: PuzzleId,
    pub practice: bool,
    pub targets: Vec<String>,
    pub guesses: Vec<String>,
}

impl SerializedState {
    /// Encode as a JSON blob
    ///
    /// # Errors
    /// Returns `StorageError::Encode` if serialization fails.
    pub fn to_json(&self) -> Result<String, StorageError> {
        serde_json::to_string(self).map_err(StorageError::Encode)
    }

    /// Convert back into a playable state
    ///
    /// # Errors
    /// Returns `StorageError::InvalidFormat` if a word is malformed, or the target or guess
    /// counts are out of range.
    pub fn into_state(self) -> Result<GameState, StorageError> {
        let targets = parse_words(&self.targets, "target")?;
        let guesses = parse_words(&self.guesses, "guess")?;
        let guess_count = guesses.len();

        GameState::from_parts(self.id, self.practice, targets, guesses).ok_or_else(|| {
            StorageError::InvalidFormat(format!(
                "{} targets and {guess_count} guesses is not a valid game",
                self.targets.len()
            ))
        })
    }
}

fn parse_words(words: &[String], kind: &str) -> Result<Vec<Word>, StorageError> {
    words
        .iter()
        .map(|text| {
            Word::new(text)
                .map_err(|e| StorageError::InvalidFormat(format!("bad {kind} {text:?}: {e}")))
        })
        .collect()
}

/// Stored form of `state`
#[must_use]
pub fn serialize(state: &GameState) -> SerializedState {
    SerializedState {
        version: FORMAT_VERSION,
        id: state.id(),
        practice: state.is_practice(),
        targets: state.targets().iter().map(|w| w.text().to_string()).collect(),
        guesses: state.guesses().iter().map(|w| w.text().to_string()).collect(),
    }
}

/// Decode a JSON blob
///
/// # Errors
/// Returns `StorageError::InvalidFormat` if the blob is not JSON or fails `is_serialized`.
pub fn deserialize(blob: &str) -> Result<SerializedState, StorageError> {
    let value: Value = serde_json::from_str(blob)
        .map_err(|e| StorageError::InvalidFormat(format!("not JSON: {e}")))?;

    if !is_serialized(&value) {
        return Err(StorageError::InvalidFormat(
            "stored state has the wrong shape".to_string(),
        ));
    }

    serde_json::from_value(value).map_err(|e| StorageError::InvalidFormat(e.to_string()))
}

/// Structural check of a decoded blob
///
/// Requires an object with an integer `id` that fits a puzzle ID, a boolean `practice`,
/// exactly one string target per board, a string array of guesses, and a matching
/// `version` if one is present.
///
/// # Examples
/// ```
/// use quadrasexordle::storage::is_serialized;
/// use serde_json::json;
///
/// assert!(!is_serialized(&json!({ "id": 1, "practice": false, "guesses": [] })));
/// ```
#[must_use]
pub fn is_serialized(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };

    let id_ok = obj
        .get("id")
        .and_then(Value::as_u64)
        .is_some_and(|id| PuzzleId::try_from(id).is_ok());
    let practice_ok = obj.get("practice").is_some_and(Value::is_boolean);
    let targets_ok = obj
        .get("targets")
        .and_then(Value::as_array)
        .is_some_and(|targets| {
            targets.len() == NUM_BOARDS && targets.iter().all(Value::is_string)
        });
    let guesses_ok = obj
        .get("guesses")
        .and_then(Value::as_array)
        .is_some_and(|guesses| guesses.iter().all(Value::is_string));
    let version_ok = obj
        .get("version")
        .is_none_or(|v| v.as_u64() == Some(u64::from(FORMAT_VERSION)));

    id_ok && practice_ok && targets_ok && guesses_ok && version_ok
}
