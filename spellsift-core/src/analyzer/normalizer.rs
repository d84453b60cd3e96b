//! Token normalization.
//!
//! The normalizer owns the per-token transformations of the pipeline:
//!
//! - **Edge trim**: drop punctuation from both ends (`"(word)"` → `word`)
//! - **Possessive strip**: drop one trailing `'s` (`Michael's` → `Michael`)
//! - **Punctuation strip**: drop punctuation anywhere (`don't` → `dont`)
//! - **Word filter**: reject tokens without a single word character (`42`, `$`)
//!
//! Document tokens go through all four, in that order. Dictionary entries only
//! go through the last two via [`Normalizer::clean`], since hyphenation and
//! possessives are artifacts of running text, not of word lists.
//!
//! Cleaning is idempotent: a cleaned token has no punctuation left to strip
//! and already holds a word character, so cleaning it again returns it as is.

use crate::analyzer::alphabet::Alphabet;
use spellsift_types::POSSESSIVE_SUFFIX;

/// Applies the configured [`Alphabet`] to raw tokens.
///
/// # Examples
///
/// ```
/// use spellsift_core::Normalizer;
///
/// let normalizer = Normalizer::default();
/// assert_eq!(normalizer.clean_token("can't"), Some("cant".to_string()));
/// assert_eq!(normalizer.clean_token("-5+"), None);
///
/// let cleaned = normalizer.clean(["4-7", "well-known", "", "C3PO"]);
/// assert_eq!(cleaned, vec!["wellknown", "C3PO"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    alphabet: Alphabet,
}

impl Normalizer {
    /// Creates a normalizer for the given alphabet.
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Strips punctuation from both ends of `token`.
    #[inline]
    pub fn trim_edges<'t>(&self, token: &'t str) -> &'t str {
        token.trim_matches(|c: char| self.alphabet.is_punctuation(c))
    }

    /// Removes every punctuation character from `token` into `out`.
    ///
    /// Clears `out` first and reuses its capacity.
    #[inline]
    pub fn strip_punctuation_into(&self, token: &str, out: &mut String) {
        out.clear();
        out.reserve(token.len());
        out.extend(token.chars().filter(|&c| !self.alphabet.is_punctuation(c)));
    }

    /// Returns `true` if `token` holds at least one word character.
    #[inline]
    pub fn is_word(&self, token: &str) -> bool {
        token.chars().any(|c| self.alphabet.is_word_character(c))
    }

    /// Strips punctuation from `token` into `out` and reports whether the
    /// result survives the word filter.
    ///
    /// When this returns `false` the contents of `out` are unspecified.
    #[inline]
    pub fn clean_into(&self, token: &str, out: &mut String) -> bool {
        self.strip_punctuation_into(token, out);
        !out.is_empty() && self.is_word(out)
    }

    /// Cleans a single token, returning `None` if nothing word-like remains.
    pub fn clean_token(&self, token: &str) -> Option<String> {
        let mut out = String::with_capacity(token.len());
        self.clean_into(token, &mut out).then_some(out)
    }

    /// Cleans a list of raw entries, keeping their order and dropping the
    /// ones that do not survive.
    pub fn clean<I, S>(&self, words: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut buf = String::new();
        words
            .into_iter()
            .filter_map(|word| {
                if self.clean_into(word.as_ref(), &mut buf) {
                    Some(buf.clone())
                } else {
                    None
                }
            })
            .collect()
    }
}

/// Removes a single trailing `'s`.
///
/// Only the exact lowercase suffix matches, and only one copy is removed.
#[inline]
pub fn strip_possessive(token: &str) -> &str {
    token.strip_suffix(POSSESSIVE_SUFFIX).unwrap_or(token)
}
