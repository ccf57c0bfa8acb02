//! The deterministic finite automaton encoding one vocabulary.
//!
//! A [`Dfa`] is a tree of states rooted at [`Dfa::START`]. Each state owns its outgoing
//! transitions, keyed by symbol, and a state is accepting if the path from the root to it spells a
//! complete vocabulary word. Since construction never merges paths, the graph never contains a
//! cycle, and every state is the end of a prefix of at least one word.
//!
//! Automata are only created through the [`builder`](crate::builder) and are immutable afterward.

use crate::{alphabet::Alphabet, matches::Matches};
use alloc::vec::Vec;
use core::fmt;
use hashbrown::{HashMap, HashSet};

/// Identifier of a state within a single [`Dfa`].
///
/// Identifiers are dense: a `Dfa` with `n` states uses exactly the identifiers `0..n`, allocated
/// in the order the states were created.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct StateId(usize);

impl StateId {
    /// Returns the numeric index of this state.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single state's outgoing transitions.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct State {
    /// Direct symbol transitions.
    ///
    /// Each symbol can only transition to one other state.
    pub(crate) transitions: HashMap<char, StateId>,
}

/// A deterministic finite automaton recognizing the words of one vocabulary.
///
/// `Dfa` is read-only once built, so a single automaton can be scanned from any number of threads
/// at once.
///
/// # Example
/// ```
/// use word_class::build;
///
/// let dfa = build(&["do", "does"]);
///
/// assert_eq!(dfa.state_count(), 5);
/// assert!(dfa.accepts("do"));
/// assert!(dfa.accepts("does"));
/// assert!(!dfa.accepts("doe"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Dfa {
    alphabet: Alphabet,
    states: Vec<State>,
    accepting: HashSet<StateId>,
}

impl Dfa {
    /// The start state of every automaton.
    pub const START: StateId = StateId(0);

    /// Creates an automaton consisting of only a non-accepting start state.
    pub(crate) fn empty() -> Self {
        Self {
            alphabet: Alphabet::STANDARD,
            states: alloc::vec![State::default()],
            accepting: HashSet::new(),
        }
    }

    /// Follow or create the transition from `from` on `symbol`, returning the target state.
    ///
    /// `symbol` must already be known to be within the alphabet.
    pub(crate) fn extend(&mut self, from: StateId, symbol: char) -> StateId {
        debug_assert!(self.alphabet.contains_char(symbol));
        if let Some(to) = self.next_state(from, symbol) {
            return to;
        }
        let to = StateId(self.states.len());
        self.states.push(State::default());
        self.states[from.0].transitions.insert(symbol, to);
        to
    }

    /// Mark `state` as accepting.
    #[inline]
    pub(crate) fn accept(&mut self, state: StateId) {
        self.accepting.insert(state);
    }

    /// Returns the alphabet this automaton is built over.
    #[inline]
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Returns the start state.
    #[inline]
    pub fn start(&self) -> StateId {
        Self::START
    }

    /// Returns the number of states, including the start state.
    #[inline]
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Iterate over every state, in allocation order.
    pub fn states(&self) -> impl Iterator<Item = StateId> {
        (0..self.states.len()).map(StateId)
    }

    /// Returns the number of accepting states.
    #[inline]
    pub fn accepting_count(&self) -> usize {
        self.accepting.len()
    }

    /// Returns whether `state` is accepting.
    #[inline]
    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting.contains(&state)
    }

    /// Look up the transition from `state` on `symbol`.
    ///
    /// Returns `None` both when `symbol` is outside the alphabet and when the state simply has no
    /// edge for it. The two are not distinguished.
    #[inline]
    pub fn next_state(&self, state: StateId, symbol: char) -> Option<StateId> {
        self.states
            .get(state.0)
            .and_then(|state| state.transitions.get(&symbol))
            .copied()
    }

    /// Returns the outgoing transitions of `state`, sorted by symbol.
    pub fn transitions(&self, state: StateId) -> Vec<(char, StateId)> {
        let mut transitions = self
            .states
            .get(state.0)
            .map(|state| {
                state
                    .transitions
                    .iter()
                    .map(|(symbol, to)| (*symbol, *to))
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();
        transitions.sort_unstable();
        transitions
    }

    /// Returns whether the whole of `word` is a word of this automaton's vocabulary.
    ///
    /// No boundary handling is done here: `word` must match a complete path exactly.
    pub fn accepts(&self, word: &str) -> bool {
        word.chars()
            .try_fold(Self::START, |state, c| self.next_state(state, c))
            .map_or(false, |state| self.is_accepting(state))
    }

    /// Iterate over the whole-word matches within `input`, in input order.
    ///
    /// See [`Matches`] for the exact boundary rules.
    ///
    /// # Example
    /// ```
    /// use word_class::build;
    ///
    /// let dfa = build(&["and", "or"]);
    ///
    /// assert_eq!(dfa.find("cats and dogs or fish").collect::<Vec<_>>(), ["and", "or"]);
    /// ```
    #[inline]
    pub fn find<'a>(&'a self, input: &'a str) -> Matches<'a> {
        Matches::new(self, input)
    }

    /// Collect every whole-word match within `input`, in input order and with duplicates.
    ///
    /// # Example
    /// ```
    /// use word_class::build;
    ///
    /// let dfa = build(&["the"]);
    ///
    /// assert_eq!(dfa.scan("the cat and the dog"), ["the", "the"]);
    /// ```
    #[inline]
    pub fn scan<'a>(&'a self, input: &'a str) -> Vec<&'a str> {
        self.find(input).collect()
    }
}

/// Writes the transition table, one state per line.
///
/// ```text
/// 0 -> ['d' -> 1]
/// 1 -> ['o' -> 2]
/// 2 -> [] -- accepting
/// ```
impl fmt::Display for Dfa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for state in self.states() {
            write!(f, "{} -> [", state)?;
            for (i, (symbol, to)) in self.transitions(state).into_iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{:?} -> {}", symbol, to)?;
            }
            f.write_str("]")?;
            if self.is_accepting(state) {
                f.write_str(" -- accepting")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
