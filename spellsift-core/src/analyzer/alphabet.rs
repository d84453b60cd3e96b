//! Character classes that drive normalization.
//!
//! An [`Alphabet`] pairs two [`CharClass`]es: the punctuation that gets stripped
//! from tokens, and the word characters that make a token count as a word.
//! Both are plain configuration handed to the analyzer at construction time.

use smallvec::SmallVec;
use spellsift_types::{DEFAULT_PUNCTUATION, DEFAULT_WORD_CHARACTERS};

/// A set of characters with a constant-time ASCII path.
///
/// ASCII members live in a 128-entry table. Anything outside ASCII is kept
/// sorted inline and found by binary search; configured alphabets rarely have
/// more than a handful of those.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharClass {
    ascii: [bool; 128],
    extra: SmallVec<[char; 8]>,
}

impl CharClass {
    /// Builds a class from every character in `members`. Duplicates are ignored.
    pub fn new(members: &str) -> Self {
        let mut ascii = [false; 128];
        let mut extra: SmallVec<[char; 8]> = SmallVec::new();

        for c in members.chars() {
            if c.is_ascii() {
                ascii[c as usize] = true;
            } else {
                extra.push(c);
            }
        }

        extra.sort_unstable();
        extra.dedup();

        Self { ascii, extra }
    }

    /// Returns `true` if `c` belongs to the class.
    #[inline(always)]
    pub fn contains(&self, c: char) -> bool {
        if c.is_ascii() {
            self.ascii[c as usize]
        } else {
            self.extra.binary_search(&c).is_ok()
        }
    }

    /// Number of distinct characters in the class.
    pub fn len(&self) -> usize {
        self.ascii.iter().filter(|&&b| b).count() + self.extra.len()
    }

    /// Returns `true` if the class has no members.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Punctuation and word-character configuration for one checker.
///
/// # Examples
///
/// ```
/// use spellsift_core::Alphabet;
///
/// let alphabet = Alphabet::default();
/// assert!(alphabet.is_punctuation('!'));
/// assert!(alphabet.is_word_character('q'));
/// assert!(!alphabet.is_word_character('7'));
///
/// // Treat digits as word characters and only strip periods.
/// let custom = Alphabet::new(".", "0123456789");
/// assert!(custom.is_word_character('7'));
/// assert!(!custom.is_punctuation('!'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    punctuation: CharClass,
    word_characters: CharClass,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new(DEFAULT_PUNCTUATION, DEFAULT_WORD_CHARACTERS)
    }
}

impl Alphabet {
    /// Creates an alphabet from the characters of `punctuation` and `word_characters`.
    pub fn new(punctuation: &str, word_characters: &str) -> Self {
        Self {
            punctuation: CharClass::new(punctuation),
            word_characters: CharClass::new(word_characters),
        }
    }

    #[inline(always)]
    pub fn is_punctuation(&self, c: char) -> bool {
        self.punctuation.contains(c)
    }

    #[inline(always)]
    pub fn is_word_character(&self, c: char) -> bool {
        self.word_characters.contains(c)
    }

    pub fn punctuation(&self) -> &CharClass {
        &self.punctuation
    }

    pub fn word_characters(&self) -> &CharClass {
        &self.word_characters
    }
}
