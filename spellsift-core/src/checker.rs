//! Public API for checking documents against a dictionary.

use crate::analyzer::{Alphabet, Tokenizer};
use crate::matcher::Matcher;
use crate::stats::CheckStats;
use spellsift_types::CheckError;

const EMPTY_DICTIONARY: CheckError = CheckError::InvalidDictionary {
    reason: "dictionary is missing or empty",
};

const DICTIONARY_NOT_TEXT: CheckError = CheckError::InvalidDictionary {
    reason: "dictionary entries must be valid UTF-8 text",
};

const DOCUMENT_NOT_TEXT: CheckError = CheckError::InvalidDocument {
    reason: "document must be valid UTF-8 text",
};

/// A cleaned dictionary plus the tokenizer that goes with it.
///
/// Building a checker validates and cleans the dictionary once; every call to
/// [`SpellChecker::check`] then only tokenizes and matches the document.
/// A checker is never mutated after construction.
///
/// # Examples
///
/// ```
/// use spellsift_core::SpellChecker;
///
/// let checker = SpellChecker::new(&["this", "is", "a", "test"]).unwrap();
/// assert_eq!(checker.check("This is a tset."), ["tset"]);
/// assert!(checker.check("").is_empty());
///
/// assert!(SpellChecker::new::<&str>(&[]).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct SpellChecker {
    tokenizer: Tokenizer,
    matcher: Matcher,
    dictionary_entries: usize,
    dictionary_words: usize,
}

impl SpellChecker {
    /// Creates a checker using the default ASCII alphabet.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::InvalidDictionary` if `dictionary` is empty.
    pub fn new<S: AsRef<str>>(dictionary: &[S]) -> Result<Self, CheckError> {
        Self::with_alphabet(dictionary, Alphabet::default())
    }

    /// Creates a checker with a custom alphabet.
    ///
    /// Dictionary entries that hold no word character after punctuation is
    /// stripped are dropped silently.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::InvalidDictionary` if `dictionary` is empty.
    pub fn with_alphabet<S: AsRef<str>>(
        dictionary: &[S],
        alphabet: Alphabet,
    ) -> Result<Self, CheckError> {
        if dictionary.is_empty() {
            return Err(EMPTY_DICTIONARY);
        }

        let tokenizer = Tokenizer::new(alphabet);
        let cleaned = tokenizer.normalizer().clean(dictionary);
        let matcher = Matcher::new(&cleaned);

        Ok(Self {
            tokenizer,
            matcher,
            dictionary_entries: dictionary.len(),
            dictionary_words: cleaned.len(),
        })
    }

    /// Creates a checker from raw byte entries, such as lines read from disk.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::InvalidDictionary` if `dictionary` is empty or any
    /// entry is not valid UTF-8. Nothing is cleaned until every entry passes.
    pub fn from_bytes<B: AsRef<[u8]>>(
        dictionary: &[B],
        alphabet: Alphabet,
    ) -> Result<Self, CheckError> {
        if dictionary.is_empty() {
            return Err(EMPTY_DICTIONARY);
        }

        let entries = dictionary
            .iter()
            .map(|entry| core::str::from_utf8(entry.as_ref()))
            .collect::<Result<Vec<&str>, _>>()
            .map_err(|_| DICTIONARY_NOT_TEXT)?;

        Self::with_alphabet(&entries, alphabet)
    }

    pub fn alphabet(&self) -> &Alphabet {
        self.tokenizer.normalizer().alphabet()
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Returns the words of `document` that are not in the dictionary.
    ///
    /// Order and casing follow the document; repeated misses are repeated.
    #[inline(never)]
    pub fn check(&self, document: &str) -> Vec<String> {
        let mut unmatched = Vec::new();
        self.tokenizer.tokenize(document, |word| {
            if !self.matcher.contains(word) {
                unmatched.push(word.to_owned());
            }
        });
        unmatched
    }

    /// Like [`SpellChecker::check`], for a document that has not been decoded yet.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::InvalidDocument` if `document` is not valid UTF-8.
    pub fn check_bytes(&self, document: &[u8]) -> Result<Vec<String>, CheckError> {
        let document = core::str::from_utf8(document).map_err(|_| DOCUMENT_NOT_TEXT)?;
        Ok(self.check(document))
    }

    /// Checks `document` and reports what the check looked at.
    pub fn check_with_stats(&self, document: &str) -> (Vec<String>, CheckStats) {
        let mut unmatched = Vec::new();
        let mut document_words = 0usize;

        self.tokenizer.tokenize(document, |word| {
            document_words += 1;
            if !self.matcher.contains(word) {
                unmatched.push(word.to_owned());
            }
        });

        let stats = CheckStats {
            dictionary_entries: self.dictionary_entries,
            dictionary_words: self.dictionary_words,
            distinct_words: self.matcher.len(),
            document_words,
            unmatched: unmatched.len(),
        };

        (unmatched, stats)
    }
}

/// Checks `document` against `dictionary` with the default alphabet.
///
/// # Errors
///
/// Returns `CheckError::InvalidDictionary` if `dictionary` is empty.
///
/// # Examples
///
/// ```
/// let dictionary = ["this", "is", "a", "test", "document", "it", "contains",
///                   "many", "interesting", "difficult", "problem"];
/// let document = "This is a test documnt. It contains many, interesting words. \
///                 Is this a difficlt problem?";
///
/// let unmatched = spellsift_core::check(document, &dictionary).unwrap();
/// assert_eq!(unmatched, ["documnt", "words", "difficlt"]);
/// ```
pub fn check<S: AsRef<str>>(document: &str, dictionary: &[S]) -> Result<Vec<String>, CheckError> {
    check_with(document, dictionary, &Alphabet::default())
}

/// Checks `document` against `dictionary` with a custom alphabet.
///
/// # Errors
///
/// Returns `CheckError::InvalidDictionary` if `dictionary` is empty.
pub fn check_with<S: AsRef<str>>(
    document: &str,
    dictionary: &[S],
    alphabet: &Alphabet,
) -> Result<Vec<String>, CheckError> {
    let checker = SpellChecker::with_alphabet(dictionary, alphabet.clone())?;
    Ok(checker.check(document))
}

/// Checks raw, undecoded inputs.
///
/// The document is validated first, then the dictionary; no work is done
/// unless both are usable.
///
/// # Errors
///
/// Returns `CheckError::InvalidDocument` if `document` is not valid UTF-8, and
/// `CheckError::InvalidDictionary` if `dictionary` is empty or holds an entry
/// that is not valid UTF-8.
pub fn check_bytes<B: AsRef<[u8]>>(
    document: &[u8],
    dictionary: &[B],
    alphabet: &Alphabet,
) -> Result<Vec<String>, CheckError> {
    let document = core::str::from_utf8(document).map_err(|_| DOCUMENT_NOT_TEXT)?;
    let checker = SpellChecker::from_bytes(dictionary, alphabet.clone())?;
    Ok(checker.check(document))
}
