//! Case-insensitive dictionary matching.
//!
//! The dictionary is folded to lowercase once and kept in a hash set, so each
//! document word costs one fold and one lookup. Only membership matters:
//! dictionary order and duplicates never change the outcome.

use std::borrow::Cow;

use rustc_hash::FxHashSet;

/// Lowercases `word`, borrowing when it has nothing to fold.
#[inline]
pub fn fold(word: &str) -> Cow<'_, str> {
    if word.chars().any(char::is_uppercase) {
        Cow::Owned(word.to_lowercase())
    } else {
        Cow::Borrowed(word)
    }
}

/// A folded, deduplicated view of a cleaned dictionary.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    words: FxHashSet<Box<str>>,
}

impl Matcher {
    /// Builds a matcher from already-cleaned dictionary words.
    pub fn new<I, S>(dictionary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = dictionary
            .into_iter()
            .map(|word| fold(word.as_ref()).into_owned().into_boxed_str())
            .collect();
        Self { words }
    }

    /// Returns `true` if `word` is in the dictionary, ignoring case.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&*fold(word))
    }

    /// Number of distinct folded words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the words missing from the dictionary.
    ///
    /// Input order and casing are kept, and a word that appears twice is
    /// reported twice.
    pub fn find_unmatched<S>(&self, words: &[S]) -> Vec<String>
    where
        S: AsRef<str>,
    {
        words
            .iter()
            .map(AsRef::as_ref)
            .filter(|word| !self.contains(word))
            .map(str::to_owned)
            .collect()
    }
}

/// One-shot form of [`Matcher::find_unmatched`].
///
/// ```
/// use spellsift_core::find_unmatched;
///
/// let unmatched = find_unmatched(&["The", "cat", "Sat", "cat"], &["the", "SAT"]);
/// assert_eq!(unmatched, ["cat", "cat"]);
/// ```
pub fn find_unmatched<W, D>(words: &[W], dictionary: &[D]) -> Vec<String>
where
    W: AsRef<str>,
    D: AsRef<str>,
{
    Matcher::new(dictionary).find_unmatched(words)
}
