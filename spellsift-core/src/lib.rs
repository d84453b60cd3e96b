//! Word-list spell checking.
//!
//! `spellsift-core` finds the words of a document that are missing from a
//! reference word list. Both sides are brought to a common form first:
//!
//! - **Analyzer**: splits the document, joins hyphen-broken words, trims
//!   punctuation and possessives, and drops tokens that are not words
//! - **Matcher**: compares the result against the cleaned dictionary,
//!   ignoring case
//! - **Source**: optional helpers that load both inputs from disk
//!
//! Everything except [`source`] is pure: no I/O, no logging and no shared
//! state, so a [`SpellChecker`] can be shared freely between threads.
//!
//! ```
//! use spellsift_core::{Alphabet, SpellChecker};
//!
//! let checker = SpellChecker::with_alphabet(&["it", "is", "fine"], Alphabet::default())?;
//! assert_eq!(checker.check("It's fnie."), ["fnie"]);
//! # Ok::<(), spellsift_core::CheckError>(())
//! ```

pub mod analyzer;
pub mod checker;
pub mod error;
pub mod matcher;
pub mod source;
pub mod stats;

pub use analyzer::{Alphabet, CharClass, Normalizer, Tokenizer};
pub use checker::{check, check_bytes, check_with, SpellChecker};
pub use error::{Error, Input};
pub use matcher::{find_unmatched, Matcher};
pub use source::{check_files, read_dictionary, read_document};
pub use stats::CheckStats;
pub use spellsift_types::CheckError;
