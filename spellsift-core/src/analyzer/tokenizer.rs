//! Document Tokenizer Module
//!
//! This module turns a raw document into the list of words that get checked
//! against the dictionary. It's the first stage of the pipeline, working on
//! text exactly as it was read from disk.
//!
//! ## What It Does
//!
//! Given a document like `"Is th-\nis (Michael's) 3rd test? 42"`, it emits:
//!
//! ```ignore
//! "Is"
//! "this"      // "th-" joined with the token on the next line
//! "Michael"   // brackets trimmed, possessive removed
//! "3rd"       // holds a word character, so it is kept whole
//! "test"
//! ```
//!
//! `42` is dropped: after punctuation stripping it has no word character.
//!
//! ## The Pipeline
//!
//! Each whitespace-separated token goes through, in order:
//!
//! 1. **Continuation join**: a token ending in `-` absorbs the next token
//! 2. **Edge trim**: punctuation is removed from both ends
//! 3. **Possessive strip**: one trailing `'s` is removed
//! 4. **Punctuation strip**: punctuation is removed everywhere
//! 5. **Word filter**: tokens without a word character are dropped
//!
//! Steps 2 to 5 live on [`Normalizer`]; the order matters for tokens like
//! `(Michael's)`, where trimming has to happen before the suffix check.
//!
//! ## Continuation Rules
//!
//! The join is a single left-to-right pass. A joined token is not looked at
//! again, and the token it absorbed is never examined on its own:
//!
//! - `th- is` → `this`
//! - `a- b- c` → `ab-`, `c` (the leftover `-` is trimmed later)
//! - `end-` as the last token stays `end-`
//!
//! ## Usage
//!
//! ```rust
//! use spellsift_core::Tokenizer;
//!
//! let tokenizer = Tokenizer::default();
//!
//! let mut words = Vec::new();
//! tokenizer.tokenize("It's a well-\nknown fact.", |word| words.push(word.to_string()));
//!
//! assert_eq!(words, ["It", "a", "wellknown", "fact"]);
//! ```

use std::borrow::Cow;
use std::str::SplitWhitespace;

use crate::analyzer::alphabet::Alphabet;
use crate::analyzer::normalizer::{strip_possessive, Normalizer};
use spellsift_types::CONTINUATION_MARKER;

/// Splits a document on whitespace and joins hyphen-broken tokens.
///
/// Yields borrowed slices of the document except where two tokens had to be
/// joined.
#[derive(Debug, Clone)]
pub struct JoinedTokens<'d> {
    raw: SplitWhitespace<'d>,
}

impl<'d> Iterator for JoinedTokens<'d> {
    type Item = Cow<'d, str>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.raw.next()?;

        let Some(head) = token.strip_suffix(CONTINUATION_MARKER) else {
            return Some(Cow::Borrowed(token));
        };

        match self.raw.next() {
            Some(tail) => {
                let mut joined = String::with_capacity(head.len() + tail.len());
                joined.push_str(head);
                joined.push_str(tail);
                Some(Cow::Owned(joined))
            }
            // Nothing to join with; the marker stays.
            None => Some(Cow::Borrowed(token)),
        }
    }
}

/// Returns the raw tokens of `document` with continuations joined.
///
/// ```
/// use spellsift_core::analyzer::tokenizer::join_continuations;
///
/// let tokens: Vec<_> = join_continuations("Is th-\nis a-").collect();
/// assert_eq!(tokens, ["Is", "this", "a-"]);
/// ```
#[inline]
pub fn join_continuations(document: &str) -> JoinedTokens<'_> {
    JoinedTokens {
        raw: document.split_whitespace(),
    }
}

/// Document tokenizer - turns raw text into checkable words.
///
/// Words are emitted through a callback, in document order, with their
/// original casing. A single scratch buffer is reused for every word, so the
/// callback receives a `&str` that is only valid for the duration of the call.
///
/// The tokenizer holds the [`Normalizer`] (and through it the [`Alphabet`])
/// that the rest of a check uses, so dictionary cleaning and document
/// tokenization always agree on what punctuation is.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    normalizer: Normalizer,
}

impl Tokenizer {
    /// Creates a tokenizer for the given alphabet.
    pub fn new(alphabet: Alphabet) -> Self {
        Self::with_normalizer(Normalizer::new(alphabet))
    }

    pub fn with_normalizer(normalizer: Normalizer) -> Self {
        Self { normalizer }
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Tokenizes `document` and emits every surviving word.
    pub fn tokenize<F>(&self, document: &str, mut emit: F)
    where
        F: FnMut(&str),
    {
        let mut scratch = String::new();

        for token in join_continuations(document) {
            let trimmed = self.normalizer.trim_edges(&token);
            let stem = strip_possessive(trimmed);

            if self.normalizer.clean_into(stem, &mut scratch) {
                emit(scratch.as_str());
            }
        }
    }

    /// Tokenizes `document` into an owned list of words.
    pub fn tokenize_to_vec(&self, document: &str) -> Vec<String> {
        let mut words = Vec::new();
        self.tokenize(document, |word| words.push(word.to_owned()));
        words
    }
}
