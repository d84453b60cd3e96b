//! Errors surfaced by the file-level API.

use std::fmt;
use std::io;
use std::path::PathBuf;

use spellsift_types::CheckError;

/// Which input a failure relates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Document,
    Dictionary,
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Document => f.write_str("document"),
            Input::Dictionary => f.write_str("dictionary"),
        }
    }
}

/// Errors from loading inputs or checking them.
#[derive(Debug)]
pub enum Error {
    /// The inputs were read but are unusable.
    Check(CheckError),
    /// An input file could not be opened or read.
    Io {
        input: Input,
        path: PathBuf,
        source: io::Error,
    },
}

impl Error {
    /// The input responsible for the failure.
    pub fn input(&self) -> Input {
        match self {
            Error::Check(CheckError::InvalidDocument { .. }) => Input::Document,
            Error::Check(CheckError::InvalidDictionary { .. }) => Input::Dictionary,
            Error::Io { input, .. } => *input,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Check(err) => write!(f, "{}", err),
            Error::Io {
                input,
                path,
                source,
            } => write!(
                f,
                "could not read {} file {}: {}",
                input,
                path.display(),
                source
            ),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Error::Check(err) => Some(err),
            Error::Io { source, .. } => Some(source),
        }
    }
}

impl From<CheckError> for Error {
    fn from(err: CheckError) -> Self {
        Error::Check(err)
    }
}
