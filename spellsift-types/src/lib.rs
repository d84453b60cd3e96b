//! Core types shared across the spellsift crates.
//!
//! This crate holds the pieces every other crate agrees on:
//!
//! - **Error kinds**: [`CheckError`], returned by every precondition check
//! - **Default alphabet**: the ASCII punctuation and letter sets used when the
//!   caller does not configure their own
//!
//! It has no dependencies so the CLI, the core and any future front end can
//! share it without pulling in the analyzer.

#![warn(missing_docs)]

use core::fmt;

/// Default punctuation set: every printable ASCII character that is neither
/// a letter, a digit nor a space.
pub const DEFAULT_PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Default word-character set: the ASCII letters, lowercase first.
pub const DEFAULT_WORD_CHARACTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Suffix removed from document words before punctuation stripping
/// (`Michael's` becomes `Michael`).
pub const POSSESSIVE_SUFFIX: &str = "'s";

/// Marker that joins a word to the next one when it ends a token
/// (`th-\nis` becomes `this`).
pub const CONTINUATION_MARKER: char = '-';

/// Errors raised when the inputs to a check are unusable.
///
/// Both kinds are detected before any tokenization or matching starts, so a
/// check either returns its full result or one of these, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckError {
    /// The document is not text.
    InvalidDocument {
        /// Description of what was wrong with the document.
        reason: &'static str,
    },
    /// The dictionary is missing, empty, or holds an entry that is not text.
    InvalidDictionary {
        /// Description of what was wrong with the dictionary.
        reason: &'static str,
    },
}

impl CheckError {
    /// Returns the human-readable reason attached to the error.
    #[inline]
    pub const fn reason(&self) -> &'static str {
        match self {
            CheckError::InvalidDocument { reason } | CheckError::InvalidDictionary { reason } => {
                reason
            }
        }
    }

    /// True for errors caused by the dictionary input.
    #[inline]
    pub const fn is_dictionary(&self) -> bool {
        matches!(self, CheckError::InvalidDictionary { .. })
    }
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::InvalidDocument { reason } => write!(f, "invalid document: {}", reason),
            CheckError::InvalidDictionary { reason } => {
                write!(f, "invalid dictionary: {}", reason)
            }
        }
    }
}

impl core::error::Error for CheckError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_punctuation_is_ascii_punctuation() {
        let expected: String = (0u8..128)
            .filter(u8::is_ascii_punctuation)
            .map(char::from)
            .collect();
        assert_eq!(DEFAULT_PUNCTUATION, expected);
    }

    #[test]
    fn default_word_characters_are_ascii_letters() {
        assert_eq!(DEFAULT_WORD_CHARACTERS.len(), 52);
        assert!(DEFAULT_WORD_CHARACTERS
            .bytes()
            .all(|b| b.is_ascii_alphabetic()));
    }

    #[test]
    fn default_sets_are_disjoint() {
        assert!(!DEFAULT_PUNCTUATION
            .chars()
            .any(|c| DEFAULT_WORD_CHARACTERS.contains(c)));
    }

    #[test]
    fn suffix_markers_are_punctuation_led() {
        assert!(DEFAULT_PUNCTUATION.contains(CONTINUATION_MARKER));
        assert!(POSSESSIVE_SUFFIX.starts_with('\''));
    }

    #[test]
    fn display_names_the_input() {
        let doc = CheckError::InvalidDocument {
            reason: "not valid UTF-8",
        };
        let dict = CheckError::InvalidDictionary {
            reason: "dictionary is empty",
        };
        assert_eq!(doc.to_string(), "invalid document: not valid UTF-8");
        assert_eq!(dict.to_string(), "invalid dictionary: dictionary is empty");
    }

    #[test]
    fn reason_and_kind_accessors() {
        let err = CheckError::InvalidDictionary { reason: "missing" };
        assert_eq!(err.reason(), "missing");
        assert!(err.is_dictionary());
        assert!(!CheckError::InvalidDocument { reason: "x" }.is_dictionary());
    }
}
