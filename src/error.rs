//! Errors raised while loading vocabularies.

use std::{io, path::PathBuf, string::String};
use thiserror::Error;

/// An error loading a [`Vocabulary`](crate::Vocabulary).
///
/// Building and scanning automata never fail; only the I/O around them can.
#[derive(Debug, Error)]
pub enum Error {
    /// The vocabulary file could not be opened or read.
    #[error("failed to read vocabulary file {}", .path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A vocabulary could not be read from its reader.
    #[error("failed to read vocabulary `{name}`")]
    Read {
        /// The name given to the vocabulary.
        name: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// No vocabulary name could be derived from the file path.
    #[error("cannot derive a vocabulary name from {}", .path.display())]
    Unnamed {
        /// The path without a usable file stem.
        path: PathBuf,
    },
}

/// A `Result` alias where the `Err` case is [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
