//! Whole-word scanning of text through a [`Dfa`].
//!
//! [`Matches`] walks its input once, left to right, carrying two cursors: the scan position and
//! the start of the current candidate word. The automaton is stepped along each symbol until it
//! has no transition for the next character. At that point the candidate is reported only if the
//! automaton is in an accepting state *and* the character is a space; either way, scanning resumes
//! after the next space. A candidate that runs into the end of the input is reported if the
//! automaton is accepting.
//!
//! Since a candidate is only ever confirmed at a boundary, a vocabulary word is never found inside
//! a longer token. Recovery skips to the next token instead of backtracking, so a token that fails
//! to match is discarded entirely and the scan stays linear in the length of the input.
//!
//! [`Dfa`]: crate::Dfa

use crate::dfa::{Dfa, StateId};

/// The token separator. It is also the only boundary a match can be confirmed on before the end of
/// the input.
const SPACE: u8 = b' ';

/// An iterator over the whole-word matches of a [`Dfa`] within some input.
///
/// Matches are yielded as slices of the input, in input order. Repeated occurrences of a word are
/// each yielded.
///
/// This `struct` is created by [`Dfa::find()`].
///
/// # Example
/// ```
/// use word_class::build;
///
/// let dfa = build(&["do", "does"]);
/// let mut matches = dfa.find("he does it and so do i");
///
/// assert_eq!(matches.next(), Some("does"));
/// assert_eq!(matches.next(), Some("do"));
/// assert_eq!(matches.next(), None);
/// ```
#[derive(Clone, Debug)]
pub struct Matches<'a> {
    dfa: &'a Dfa,
    input: &'a str,
    /// The current scan position, as a byte index.
    ///
    /// This only ever rests on a character boundary: it advances by one over symbols, which are
    /// all ASCII, or to just past a space.
    position: usize,
    /// The byte index where the current candidate started.
    candidate_start: usize,
    state: StateId,
    finished: bool,
}

impl<'a> Matches<'a> {
    pub(crate) fn new(dfa: &'a Dfa, input: &'a str) -> Self {
        Self {
            dfa,
            input,
            position: 0,
            candidate_start: 0,
            state: Dfa::START,
            finished: false,
        }
    }

    /// Returns the current candidate, if it is not empty.
    ///
    /// A candidate can only be empty if the start state is accepting, which an empty vocabulary
    /// word causes. Such candidates are never reported.
    #[inline]
    fn candidate(&self) -> Option<&'a str> {
        let input = self.input;
        if self.candidate_start < self.position {
            Some(&input[self.candidate_start..self.position])
        } else {
            None
        }
    }

    /// Abandon the current candidate and move to the start of the next token.
    ///
    /// The next token begins just after the first space at or after the current position. If no
    /// space remains, the position moves to the end of the input.
    fn skip_token(&mut self) {
        self.position = match self.input.as_bytes()[self.position..]
            .iter()
            .position(|&b| b == SPACE)
        {
            Some(offset) => self.position + offset + 1,
            None => self.input.len(),
        };
        self.candidate_start = self.position;
        self.state = Dfa::START;
    }
}

impl<'a> Iterator for Matches<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let input = self.input;
        let bytes = input.as_bytes();
        let alphabet = self.dfa.alphabet();
        loop {
            if self.position == bytes.len() {
                self.finished = true;
                if self.dfa.is_accepting(self.state) {
                    return self.candidate();
                }
                return None;
            }

            // Non-ASCII bytes are never symbols, so viewing each byte as a `char` is enough to
            // tell symbols apart from everything else.
            let c = bytes[self.position] as char;
            if !alphabet.contains_char(c) {
                log::trace!(
                    "byte {:#04x} at {} is outside the alphabet; skipping token",
                    bytes[self.position],
                    self.position
                );
                self.skip_token();
                continue;
            }

            match self.dfa.next_state(self.state, c) {
                Some(state) => {
                    self.state = state;
                    self.position += 1;
                }
                None => {
                    let found = if c == ' ' && self.dfa.is_accepting(self.state) {
                        self.candidate()
                    } else {
                        log::trace!(
                            "no transition from state {} on {:?} at {}; skipping token",
                            self.state,
                            c,
                            self.position
                        );
                        None
                    };
                    self.skip_token();
                    if found.is_some() {
                        return found;
                    }
                }
            }
        }
    }
}

impl core::iter::FusedIterator for Matches<'_> {}

/// Collect every whole-word match of `dfa` within `text`, in input order and with duplicates.
///
/// `text` is expected to be normalized already: lowercase, with punctuation removed (see
/// [`normalize()`](crate::normalize)). Any other character outside the alphabet causes the token it
/// appears in to be skipped.
///
/// # Example
/// ```
/// use word_class::{build, scan};
///
/// let dfa = build(&["fast"]);
///
/// assert_eq!(scan(&dfa, "run fast"), ["fast"]);
/// assert!(scan(&dfa, "").is_empty());
/// ```
#[inline]
pub fn scan<'a>(dfa: &'a Dfa, text: &'a str) -> alloc::vec::Vec<&'a str> {
    dfa.scan(text)
}
