//! Parsing of `--vocabulary` arguments.

use std::{convert::Infallible, path::PathBuf, str::FromStr};

/// Where to load a vocabulary from, optionally overriding its name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct VocabularySource {
    pub(crate) name: Option<String>,
    pub(crate) path: PathBuf,
}

impl FromStr for VocabularySource {
    type Err = Infallible;

    /// Parses `NAME=PATH`, or a bare `PATH` when there is no `=` or nothing precedes it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.split_once('=') {
            Some((name, path)) if !name.is_empty() => VocabularySource {
                name: Some(name.to_owned()),
                path: PathBuf::from(path),
            },
            _ => VocabularySource {
                name: None,
                path: PathBuf::from(s),
            },
        })
    }
}
