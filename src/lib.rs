//! Whole-word classification of text against closed vocabularies.
//!
//! Each vocabulary (a list of adjectives, of conjunctions, and so on) is compiled into its own
//! deterministic finite automaton, a [`Dfa`]. Text is then scanned through the automaton left to
//! right, and every token that spells a complete vocabulary word is reported. Matching is strictly
//! whole-word: a vocabulary word appearing inside a longer token is never reported.
//!
//! Automata are built over a fixed [`Alphabet`] of lowercase ASCII letters and the space character.
//! Raw text should be passed through [`normalize()`] before scanning; any character still outside
//! the alphabet causes the token containing it to be skipped.
//!
//! # Example
//! ```
//! use word_class::{build, normalize, scan};
//!
//! let conjunctions = build(&["and", "but", "or"]);
//! let text = normalize("Cats AND dogs, or... fish?");
//!
//! assert_eq!(scan(&conjunctions, &text), ["and", "or"]);
//! ```
//!
//! Several vocabularies can be scanned together through a [`Classifier`]. With the `std` feature
//! (enabled by default), vocabularies can be loaded from word-list files as a [`Vocabulary`].
//!
//! # Features
//! - **`std`** (default): [`Vocabulary`] loading and the [`Error`] type. Without it, the crate is
//!   `no_std` and only requires `alloc`.

#![no_std]
#![warn(missing_docs)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod alphabet;
pub mod builder;
pub mod classifier;
pub mod dfa;
#[cfg(feature = "std")]
mod error;
pub mod matches;
mod normalize;
#[cfg(feature = "std")]
mod vocabulary;

pub use alphabet::Alphabet;
pub use builder::{build, DfaBuilder};
pub use classifier::{Classification, Classifier};
pub use dfa::{Dfa, StateId};
#[cfg(feature = "std")]
pub use error::{Error, Result};
pub use matches::{scan, Matches};
pub use normalize::{normalize, PUNCTUATION};
#[cfg(feature = "std")]
pub use vocabulary::Vocabulary;
