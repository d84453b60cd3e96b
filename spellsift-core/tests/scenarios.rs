//! End-to-end scenarios for spellsift-core.

use std::fs;
use std::path::PathBuf;

use spellsift_core::{
    check, check_bytes, check_files, read_dictionary, read_document, Alphabet, CheckError, Error,
    Input, Normalizer, SpellChecker,
};
use tempfile::{tempdir, TempDir};

const DOCUMENT: &str =
    "This is a test documnt. It contains many, interesting words. Is this a difficlt problem?";

const DICTIONARY: [&str; 11] = [
    "this",
    "is",
    "a",
    "test",
    "document",
    "it",
    "contains",
    "many",
    "interesting",
    "difficult",
    "problem",
];

const EXPECTED: [&str; 3] = ["documnt", "words", "difficlt"];

/// Writes `contents` to `name` inside `dir` and returns the path.
fn fixture(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("should write fixture");
    path
}

fn assert_expected(document: &str, dictionary: &[&str]) {
    let unmatched = check(document, dictionary).expect("inputs should be valid");
    assert_eq!(unmatched, EXPECTED, "document: {document:?}");
}

#[test]
fn files_load_as_document_and_dictionary() {
    let dir = tempdir().expect("should create temp dir");
    let dictionary = fixture(&dir, "DictionaryFile", DICTIONARY.join("\n").as_bytes());
    let document = fixture(&dir, "InputFile", DOCUMENT.as_bytes());

    assert_eq!(read_dictionary(&dictionary).unwrap(), DICTIONARY);
    assert_eq!(read_document(&document).unwrap(), DOCUMENT);
}

#[test]
fn empty_document_and_dictionary_fail() {
    assert!(check::<&str>("", &[]).is_err());
}

#[test]
fn empty_document_yields_nothing() {
    assert!(check("", &DICTIONARY).unwrap().is_empty());
}

#[test]
fn empty_dictionary_fails() {
    let err = check::<&str>(DOCUMENT, &[]).unwrap_err();
    assert!(matches!(err, CheckError::InvalidDictionary { .. }));
}

#[test]
fn plain_document() {
    assert_expected(DOCUMENT, &DICTIONARY);
}

#[test]
fn document_with_numbers() {
    assert_expected(
        "This is a 3 test documnt -4. It contains many, 7 interesting words. \
         Is -9 this a difficlt 10 problem?",
        &DICTIONARY,
    );
}

#[test]
fn dictionary_with_numbers() {
    assert_expected(
        DOCUMENT,
        &[
            "this", "is", "a", "test", "4", "7", "document", "it", "contains", "many",
            "interesting", "-5", "difficult", "problem",
        ],
    );
}

#[test]
fn document_with_symbols() {
    assert_expected(
        "This is a 3 test documnt -4$. It contains many, %7 interesting words. \
         Is -#9 this a difficlt !10 problem?",
        &DICTIONARY,
    );
}

#[test]
fn dictionary_with_symbols() {
    assert_expected(
        DOCUMENT,
        &[
            "this", "is", "a", "test", "4-7", "7-7", "document", "it", "contains", "many",
            "interesting", "-5+", "difficult", "problem",
        ],
    );
}

#[test]
fn dictionary_with_empty_entry() {
    assert_expected(
        DOCUMENT,
        &[
            "this", "is", "a", "test", "document", "it", "contains", "many", "interesting", "",
            "difficult", "problem",
        ],
    );
}

#[test]
fn dictionary_with_non_text_entry() {
    let mut dictionary: Vec<&[u8]> = DICTIONARY.iter().map(|w| w.as_bytes()).collect();
    dictionary.insert(6, &[0x37, 0xff]);

    let err = check_bytes(DOCUMENT.as_bytes(), &dictionary, &Alphabet::default()).unwrap_err();
    assert!(err.is_dictionary());
}

#[test]
fn hyphen_across_lines() {
    assert_expected(
        "This is a test documnt. It contains many, interesting words. Is th-\nis a difficlt problem?",
        &DICTIONARY,
    );
}

#[test]
fn hyphens_at_document_edges() {
    assert_expected(
        "-This is a test documnt. It contains many, interesting words. Is this a difficlt problem?-",
        &DICTIONARY,
    );
}

#[test]
fn possessive_suffixes() {
    assert_expected(
        "This is a test documnt. It's contains many's, interesting words. \
         Is this a difficlt problem's?.",
        &DICTIONARY,
    );
}

#[test]
fn single_missing_word_in_order() {
    assert_eq!(check("a b c", &["a", "c"]).unwrap(), ["b"]);
}

#[test]
fn duplicates_reported_each_time() {
    let unmatched = check("Teh cat and teh dog. TEH!", &["cat", "and", "dog"]).unwrap();
    assert_eq!(unmatched, ["Teh", "teh", "TEH"]);
}

#[test]
fn dictionary_case_does_not_matter() {
    for (i, entry) in DICTIONARY.iter().enumerate() {
        for variant in [entry.to_uppercase(), entry.to_lowercase()] {
            let mut dictionary: Vec<String> = DICTIONARY.iter().map(|w| w.to_string()).collect();
            dictionary[i] = variant;
            assert_eq!(check(DOCUMENT, &dictionary).unwrap(), EXPECTED);
        }
    }
}

#[test]
fn cleaning_is_idempotent() {
    let normalizer = Normalizer::default();
    let raw = [
        "this", "4-7", "-5+", "", "it's", "(paren)", "mp3", "  ", "well-known", "?!",
    ];
    let once = normalizer.clean(raw);
    assert_eq!(normalizer.clean(&once), once);
}

#[test]
fn check_files_end_to_end() {
    let dir = tempdir().expect("should create temp dir");
    let dictionary = fixture(&dir, "words.txt", b"this\r\nis\r\na\r\ntest\r\n");
    let document = fixture(&dir, "doc.txt", b"This is a tset,\nis it-\nnot?\n");

    let unmatched = check_files(&document, &dictionary, &Alphabet::default()).unwrap();
    assert_eq!(unmatched, ["tset", "itnot"]);
}

#[test]
fn check_files_reads_dictionary_first() {
    let dir = tempdir().expect("should create temp dir");
    let missing_doc = dir.path().join("missing-doc.txt");
    let missing_dict = dir.path().join("missing-dict.txt");

    let err = check_files(&missing_doc, &missing_dict, &Alphabet::default()).unwrap_err();
    assert_eq!(err.input(), Input::Dictionary);
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn empty_dictionary_file_fails() {
    let dir = tempdir().expect("should create temp dir");
    let dictionary = fixture(&dir, "empty.txt", b"");
    let document = fixture(&dir, "doc.txt", DOCUMENT.as_bytes());

    let err = check_files(&document, &dictionary, &Alphabet::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::Check(CheckError::InvalidDictionary { .. })
    ));
}

#[test]
fn non_utf8_document_file_fails() {
    let dir = tempdir().expect("should create temp dir");
    let dictionary = fixture(&dir, "words.txt", b"word\n");
    let document = fixture(&dir, "doc.bin", b"word \xff\xfe");

    let err = check_files(&document, &dictionary, &Alphabet::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::Check(CheckError::InvalidDocument { .. })
    ));
}

#[test]
fn checker_shared_across_threads() {
    let checker = SpellChecker::new(&DICTIONARY).unwrap();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| checker.check(DOCUMENT)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), EXPECTED);
        }
    });
}
