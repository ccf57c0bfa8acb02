//! The fixed symbol set that automata are built over.
//!
//! Every [`Dfa`] consumes the same 27 symbols: the lowercase ASCII letters `a` through `z` and the
//! space character. Symbols are stored as a bit set, one bit per symbol, with letters occupying
//! bits 0 through 25 in alphabetical order and the space occupying bit 26.
//!
//! [`Dfa`]: crate::Dfa

use bitflags::bitflags;

/// Bit index of the space symbol.
const SPACE_BIT: u32 = 26;

bitflags! {
    /// A set of symbols an automaton can process.
    ///
    /// Characters outside the set are never given transitions: they are dropped when building an
    /// automaton and act as token boundaries when scanning.
    pub struct Alphabet: u32 {
        /// The lowercase letters `a` through `z`.
        const LOWERCASE = 0x03ff_ffff;
        /// The space character.
        const SPACE = 1 << SPACE_BIT;

        /// Lowercase letters plus space. This is the alphabet of every built automaton.
        const STANDARD = Self::LOWERCASE.bits() | Self::SPACE.bits();
    }
}

impl Alphabet {
    /// Returns the single-symbol set for `c`, or `None` if `c` cannot be a symbol at all.
    #[inline]
    fn symbol(c: char) -> Option<Self> {
        match c {
            'a'..='z' => Some(Self::from_bits_truncate(1 << (c as u32 - 'a' as u32))),
            ' ' => Some(Self::SPACE),
            _ => None,
        }
    }

    /// Returns whether `c` is a symbol within this alphabet.
    ///
    /// # Example
    /// ```
    /// use word_class::Alphabet;
    ///
    /// assert!(Alphabet::STANDARD.contains_char('q'));
    /// assert!(Alphabet::STANDARD.contains_char(' '));
    /// assert!(!Alphabet::STANDARD.contains_char('Q'));
    /// assert!(!Alphabet::LOWERCASE.contains_char(' '));
    /// ```
    #[inline]
    pub fn contains_char(&self, c: char) -> bool {
        match Self::symbol(c) {
            Some(symbol) => self.contains(symbol),
            None => false,
        }
    }

    /// Iterate over the symbols of this alphabet, letters first in alphabetical order and space
    /// last.
    pub fn symbols(self) -> impl Iterator<Item = char> {
        ('a'..='z')
            .chain(core::iter::once(' '))
            .filter(move |c| self.contains_char(*c))
    }
}

impl Default for Alphabet {
    #[inline]
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use crate::alphabet::Alphabet;
    use alloc::{string::String, vec::Vec};

    #[test]
    fn standard_contains_letters_and_space() {
        for c in "abcdefghijklmnopqrstuvwxyz ".chars() {
            assert!(Alphabet::STANDARD.contains_char(c), "{:?}", c);
        }
    }

    #[test]
    fn standard_excludes_everything_else() {
        for c in "ABZ09\t\n\r-'.ãé\0".chars() {
            assert!(!Alphabet::STANDARD.contains_char(c), "{:?}", c);
        }
    }

    #[test]
    fn symbols_in_order() {
        assert_eq!(
            Alphabet::STANDARD.symbols().collect::<String>(),
            "abcdefghijklmnopqrstuvwxyz "
        );
        assert_eq!(Alphabet::SPACE.symbols().collect::<Vec<_>>(), [' ']);
        assert_eq!(Alphabet::empty().symbols().count(), 0);
    }

    #[test]
    fn standard_is_default() {
        assert_eq!(Alphabet::default(), Alphabet::LOWERCASE | Alphabet::SPACE);
        assert_eq!(Alphabet::STANDARD.bits().count_ones(), 27);
    }
}
