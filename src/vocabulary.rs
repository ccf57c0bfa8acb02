//! Loading of vocabularies from line-oriented word lists.
//!
//! A word list holds one word per line. Lines may end in `\n` or `\r\n`, and blank lines are
//! skipped, so a trailing newline at the end of a file does not add an empty word. Everything else
//! on a line is kept verbatim: characters outside the alphabet are left for the
//! [builder](crate::builder) to drop.

use crate::{
    builder::build,
    dfa::Dfa,
    error::{Error, Result},
};
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
    string::String,
    vec::Vec,
};

/// Read one word per line from `reader`, skipping blank lines.
fn read_words<R>(reader: R) -> io::Result<Vec<String>>
where
    R: BufRead,
{
    reader
        .lines()
        .filter(|line| line.as_ref().map_or(true, |line| !line.is_empty()))
        .collect()
}

/// A named, ordered list of words.
///
/// # Example
/// ```
/// use word_class::Vocabulary;
///
/// let vocabulary = Vocabulary::from_reader("conjunctions", "and\nbut\nor\n".as_bytes()).unwrap();
/// let dfa = vocabulary.build();
///
/// assert_eq!(vocabulary.name(), "conjunctions");
/// assert_eq!(vocabulary.len(), 3);
/// assert_eq!(dfa.scan("salt and pepper or sugar"), ["and", "or"]);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Vocabulary {
    name: String,
    words: Vec<String>,
}

impl Vocabulary {
    /// Creates a vocabulary from words already in memory.
    pub fn new<N, I, W>(name: N, words: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        Self {
            name: name.into(),
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Read a vocabulary from `reader`, one word per line.
    pub fn from_reader<N, R>(name: N, reader: R) -> Result<Self>
    where
        N: Into<String>,
        R: BufRead,
    {
        let name = name.into();
        match read_words(reader) {
            Ok(words) => {
                log::debug!("read {} words for vocabulary `{}`", words.len(), name);
                Ok(Self { name, words })
            }
            Err(source) => Err(Error::Read { name, source }),
        }
    }

    /// Read a vocabulary from the file at `path`, one word per line.
    ///
    /// The vocabulary is named after the file stem, so `language/adverbs.txt` becomes `adverbs`.
    pub fn from_path<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| Error::Unnamed {
                path: path.to_path_buf(),
            })?;
        Self::from_named_path(name, path)
    }

    /// Read a vocabulary called `name` from the file at `path`, one word per line.
    pub fn from_named_path<N, P>(name: N, path: P) -> Result<Self>
    where
        N: Into<String>,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let words = File::open(path)
            .map(BufReader::new)
            .and_then(read_words)
            .map_err(|source| Error::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let name = name.into();
        log::debug!(
            "read {} words for vocabulary `{}` from {}",
            words.len(),
            name,
            path.display()
        );
        Ok(Self { name, words })
    }

    /// Returns the vocabulary's name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the words, in the order they were read.
    #[inline]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns the number of words, counting duplicates.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns whether the vocabulary has no words.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Build the automaton recognizing this vocabulary.
    pub fn build(&self) -> Dfa {
        build(&self.words)
    }
}
