//! Per-letter feedback calculation and representation
//!
//! A pattern encodes the feedback for one guess against one target using base-3 digits:
//! - 0 = Absent (letter not in the target, or every copy already accounted for)
//! - 1 = Present (letter in the target, wrong position)
//! - 2 = Correct (letter in the correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::{WORD_LENGTH, Word};

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    Correct,
    Present,
    Absent,
}

impl LetterStatus {
    const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Square emoji used in share text and history views
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback pattern for one guess against one target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

impl Pattern {
    /// All letters correct
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if every letter is correct
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// Duplicate letters are credited at most as many times as they occur in the target.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches Correct and remove them from the letter pool
    /// 2. Second pass: mark Present from whatever is left in the pool, otherwise Absent
    /// 3. Encode as base-3 number
    ///
    /// # Examples
    /// ```
    /// use quadrasexordle::core::{LetterStatus, Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("slate").unwrap();
    /// let pattern = Pattern::calculate(&guess, &target);
    ///
    /// // C(absent) R(absent) A(correct) N(absent) E(correct)
    /// assert_eq!(pattern.value(), 180);
    /// assert_eq!(pattern.status_at(2), LetterStatus::Correct);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut result = [LetterStatus::Absent; WORD_LENGTH];
        let mut target_available = target.char_counts();

        // Allow: Index needed to access guess[i], target[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.char_at(i) == target.char_at(i) {
                result[i] = LetterStatus::Correct;

                if let Some(count) = target_available.get_mut(&guess.char_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Allow: Index needed to access guess[i] and check/set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == LetterStatus::Correct {
                continue;
            }
            if let Some(count) = target_available.get_mut(&guess.char_at(i))
                && *count > 0
            {
                result[i] = LetterStatus::Present;
                *count -= 1;
            }
        }

        Self::from_statuses(result)
    }

    /// Encode per-letter statuses into a pattern
    #[must_use]
    pub fn from_statuses(statuses: [LetterStatus; WORD_LENGTH]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for status in statuses {
            pattern += status.digit() * multiplier;
            multiplier *= 3;
        }
        Self(pattern)
    }

    /// Status of the letter at `position` (0-4)
    #[must_use]
    pub fn status_at(self, position: usize) -> LetterStatus {
        debug_assert!(position < WORD_LENGTH);
        let mut val = self.0;
        for _ in 0..position {
            val /= 3;
        }
        LetterStatus::from_digit(val % 3)
    }

    /// Decode into per-letter statuses
    #[must_use]
    pub fn statuses(self) -> [LetterStatus; WORD_LENGTH] {
        let mut result = [LetterStatus::Absent; WORD_LENGTH];
        let mut val = self.0;
        for status in &mut result {
            *status = LetterStatus::from_digit(val % 3);
            val /= 3;
        }
        result
    }

    /// Convert pattern to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.statuses().iter().map(|s| s.emoji()).collect()
    }
}

/// Per-letter feedback for `guess` against `target`
///
/// # Examples
/// ```
/// use quadrasexordle::core::{evaluate, LetterStatus::*, Word};
///
/// let guess = Word::new("rance").unwrap();
/// let target = Word::new("crane").unwrap();
/// assert_eq!(evaluate(&guess, &target), [Present, Present, Present, Present, Correct]);
/// ```
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> [LetterStatus; WORD_LENGTH] {
    Pattern::calculate(guess, target).statuses()
}
