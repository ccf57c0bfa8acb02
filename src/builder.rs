//! Construction of a [`Dfa`] from a word list.
//!
//! Words are threaded into the automaton one at a time from the start state. A word that shares a
//! prefix with an earlier word follows that word's path for the length of the prefix and branches
//! off into fresh states from there; the state reached after the last symbol is marked accepting.
//!
//! Characters outside the [`Alphabet`] are dropped as if they were not part of the word at all, so
//! `"don't"` contributes the same path as `"dont"`.
//!
//! [`Alphabet`]: crate::Alphabet

use crate::dfa::Dfa;
use alloc::{
    string::{String, ToString},
    vec::Vec,
};

/// Thread `word` into `dfa`, returning the number of characters dropped along the way.
fn add_word(dfa: &mut Dfa, word: &str) -> usize {
    let alphabet = dfa.alphabet();
    let mut state = Dfa::START;
    let mut dropped = 0;
    for c in word.chars() {
        if !alphabet.contains_char(c) {
            log::trace!("dropping {:?} outside the alphabet in {:?}", c, word);
            dropped += 1;
            continue;
        }
        state = dfa.extend(state, c);
    }
    if state == Dfa::START {
        log::warn!(
            "{:?} has no symbols within the alphabet; the start state is now accepting",
            word
        );
    }
    dfa.accept(state);
    dropped
}

/// Build an automaton recognizing exactly `words`.
///
/// Word order only affects state numbering: states are allocated in the order their symbols are
/// first seen. Repeated words leave the automaton unchanged.
///
/// # Example
/// ```
/// use word_class::build;
///
/// let dfa = build(&["new", "newly"]);
///
/// assert!(dfa.accepts("new"));
/// assert!(dfa.accepts("newly"));
/// assert_eq!(dfa.scan("newly arrives"), ["newly"]);
/// ```
pub fn build<I>(words: I) -> Dfa
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut dfa = Dfa::empty();
    let mut count = 0;
    let mut dropped = 0;
    for word in words {
        dropped += add_word(&mut dfa, word.as_ref());
        count += 1;
    }
    log::debug!(
        "built automaton from {} words: {} states, {} accepting, {} characters dropped",
        count,
        dfa.state_count(),
        dfa.accepting_count(),
        dropped
    );
    dfa
}

/// A builder for constructing a [`Dfa`].
///
/// Words are collected first and threaded into the automaton, in the order they were given, when
/// [`build()`](DfaBuilder::build) is called. The builder can therefore be cloned and extended to
/// derive related vocabularies.
///
/// # Example
/// ```
/// use word_class::DfaBuilder;
///
/// let dfa = DfaBuilder::new().word("and").words(&["but", "or"]).build();
///
/// assert_eq!(dfa.scan("this or that but not both"), ["or", "but"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DfaBuilder {
    words: Vec<String>,
}

impl DfaBuilder {
    /// Creates a new builder with no words.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single word.
    #[inline]
    pub fn word<S>(&mut self, word: &S) -> &mut Self
    where
        S: ToString + ?Sized,
    {
        self.words.push(word.to_string());
        self
    }

    /// Add words.
    #[inline]
    pub fn words<I, S>(&mut self, words: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.words.extend(words.into_iter().map(|s| s.to_string()));
        self
    }

    /// Build the automaton from the words added so far.
    ///
    /// The builder is left untouched and can be built again.
    #[inline]
    pub fn build(&self) -> Dfa {
        build(&self.words)
    }
}
