//! Loading documents and dictionaries from disk.
//!
//! These helpers are the only part of the crate that touches the filesystem.
//! Open and read failures become [`Error::Io`]; contents that are not text
//! become the matching [`CheckError`] kind.

use std::fs;
use std::path::Path;

use memchr::memchr2_iter;

use crate::analyzer::Alphabet;
use crate::checker::SpellChecker;
use crate::error::{Error, Input};
use spellsift_types::CheckError;

/// Splits `bytes` into lines.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. A final terminator does not
/// produce a trailing empty line, and an empty input has no lines.
///
/// ```
/// use spellsift_core::source::split_lines;
///
/// let lines = split_lines(b"one\r\ntwo\n\nthree\rfour\n");
/// assert_eq!(lines, [&b"one"[..], b"two", b"", b"three", b"four"]);
/// ```
pub fn split_lines(bytes: &[u8]) -> Vec<&[u8]> {
    let mut lines = Vec::new();
    let mut start = 0usize;

    for i in memchr2_iter(b'\n', b'\r', bytes) {
        // The `\n` of a `\r\n` pair was consumed with its `\r`.
        if i < start {
            continue;
        }

        lines.push(&bytes[start..i]);
        start = if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
            i + 2
        } else {
            i + 1
        };
    }

    if start < bytes.len() {
        lines.push(&bytes[start..]);
    }

    lines
}

fn read(path: &Path, input: Input) -> Result<Vec<u8>, Error> {
    fs::read(path).map_err(|source| Error::Io {
        input,
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a whole document into a string.
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be read and
/// `CheckError::InvalidDocument` if it is not valid UTF-8.
pub fn read_document(path: impl AsRef<Path>) -> Result<String, Error> {
    let bytes = read(path.as_ref(), Input::Document)?;
    String::from_utf8(bytes).map_err(|_| {
        Error::Check(CheckError::InvalidDocument {
            reason: "document file is not valid UTF-8",
        })
    })
}

/// Reads a dictionary file, one entry per line, in file order.
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be read and
/// `CheckError::InvalidDictionary` if any line is not valid UTF-8.
pub fn read_dictionary(path: impl AsRef<Path>) -> Result<Vec<String>, Error> {
    let bytes = read(path.as_ref(), Input::Dictionary)?;

    split_lines(&bytes)
        .into_iter()
        .map(|line| {
            core::str::from_utf8(line)
                .map(str::to_owned)
                .map_err(|_| {
                    Error::Check(CheckError::InvalidDictionary {
                        reason: "dictionary file has a line that is not valid UTF-8",
                    })
                })
        })
        .collect()
}

/// Reads both files and checks the document against the dictionary.
///
/// The dictionary is read first, then the document.
///
/// # Errors
///
/// Any error from [`read_dictionary`], [`read_document`] or
/// [`SpellChecker::with_alphabet`].
pub fn check_files(
    document: impl AsRef<Path>,
    dictionary: impl AsRef<Path>,
    alphabet: &Alphabet,
) -> Result<Vec<String>, Error> {
    let dictionary = read_dictionary(dictionary)?;
    let document = read_document(document)?;

    let checker = SpellChecker::with_alphabet(&dictionary, alphabet.clone())?;
    Ok(checker.check(&document))
}
