//! Classification of text against several vocabularies at once.
//!
//! A [`Classifier`] owns one automaton per word class. Classifying a text scans it once through
//! each automaton, independently and in the order the classes were added.

use crate::dfa::Dfa;
#[cfg(feature = "std")]
use crate::vocabulary::Vocabulary;
use alloc::{string::String, vec::Vec};
use hashbrown::HashMap;

/// The words of one class detected within a text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Classification<'a> {
    class: &'a str,
    words: Vec<&'a str>,
}

impl<'a> Classification<'a> {
    /// Returns the name of the class.
    #[inline]
    pub fn class(&self) -> &'a str {
        self.class
    }

    /// Returns every detected word, in input order and with duplicates.
    #[inline]
    pub fn words(&self) -> &[&'a str] {
        &self.words
    }

    /// Returns whether no words of this class were detected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns each distinct detected word along with its number of occurrences.
    ///
    /// Words are listed in the order of their first occurrence.
    ///
    /// # Example
    /// ```
    /// use word_class::{build, Classifier};
    ///
    /// let mut classifier = Classifier::new();
    /// classifier.add_class("articles", build(&["a", "an", "the"]));
    /// let classifications = classifier.classify("the cat and the dog saw a bird");
    ///
    /// assert_eq!(classifications[0].counts(), [("the", 2), ("a", 1)]);
    /// ```
    pub fn counts(&self) -> Vec<(&'a str, usize)> {
        let mut indices = HashMap::new();
        let mut counts: Vec<(&'a str, usize)> = Vec::new();
        for word in &self.words {
            let index = *indices.entry(*word).or_insert_with(|| {
                counts.push((*word, 0));
                counts.len() - 1
            });
            counts[index].1 += 1;
        }
        counts
    }
}

/// A set of named word classes, each recognized by its own automaton.
///
/// # Example
/// ```
/// use word_class::{build, normalize, Classifier};
///
/// let mut classifier = Classifier::new();
/// classifier
///     .add_class("adverbs", build(&["quickly", "very"]))
///     .add_class("conjunctions", build(&["and", "but", "or"]));
///
/// let text = normalize("Very quickly, and QUIETLY.");
/// let classifications = classifier.classify(&text);
///
/// assert_eq!(classifications[0].class(), "adverbs");
/// assert_eq!(classifications[0].words(), ["very", "quickly"]);
/// assert_eq!(classifications[1].class(), "conjunctions");
/// assert_eq!(classifications[1].words(), ["and"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Classifier {
    classes: Vec<(String, Dfa)>,
}

impl Classifier {
    /// Creates a classifier with no classes.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class named `name`, recognized by `dfa`.
    ///
    /// Classes with the same name are kept separately.
    pub fn add_class<S>(&mut self, name: S, dfa: Dfa) -> &mut Self
    where
        S: Into<String>,
    {
        self.classes.push((name.into(), dfa));
        self
    }

    /// Add a class built from `vocabulary`, named after it.
    #[cfg(feature = "std")]
    pub fn add_vocabulary(&mut self, vocabulary: &Vocabulary) -> &mut Self {
        self.add_class(vocabulary.name(), vocabulary.build())
    }

    /// Iterate over the classes, in the order they were added.
    pub fn classes(&self) -> impl Iterator<Item = (&str, &Dfa)> {
        self.classes.iter().map(|(name, dfa)| (name.as_str(), dfa))
    }

    /// Returns the number of classes.
    #[inline]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns whether there are no classes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Scan `text` once per class, returning one [`Classification`] per class in the order the
    /// classes were added.
    ///
    /// `text` is scanned as given; use [`normalize()`](crate::normalize) first on raw input.
    pub fn classify<'a>(&'a self, text: &'a str) -> Vec<Classification<'a>> {
        self.classes
            .iter()
            .map(|(name, dfa)| {
                let words = dfa.scan(text);
                log::debug!("detected {} words of class `{}`", words.len(), name);
                Classification {
                    class: name.as_str(),
                    words,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::{build, Classifier};
    use alloc::vec::Vec;

    fn classifier() -> Classifier {
        let mut classifier = Classifier::new();
        classifier
            .add_class("adjectives", build(&["quick", "brown", "lazy"]))
            .add_class("adverbs", build(&["very", "quickly"]))
            .add_class("conjunctions", build(&["and", "or", "but"]));
        classifier
    }

    #[test]
    fn classes_in_insertion_order() {
        let classifier = classifier();

        assert_eq!(
            classifier.classes().map(|(name, _)| name).collect::<Vec<_>>(),
            ["adjectives", "adverbs", "conjunctions"]
        );
        assert_eq!(classifier.len(), 3);
    }

    #[test]
    fn classify() {
        let classifier = classifier();
        let classifications =
            classifier.classify("the quick brown fox and the very lazy dog or cat");

        assert_eq!(classifications.len(), 3);
        assert_eq!(classifications[0].class(), "adjectives");
        assert_eq!(classifications[0].words(), ["quick", "brown", "lazy"]);
        assert_eq!(classifications[1].words(), ["very"]);
        assert_eq!(classifications[2].words(), ["and", "or"]);
    }

    #[test]
    fn classes_scanned_independently() {
        let mut classifier = Classifier::new();
        classifier
            .add_class("short", build(&["do"]))
            .add_class("long", build(&["does"]));
        let classifications = classifier.classify("he does");

        assert!(classifications[0].is_empty());
        assert_eq!(classifications[1].words(), ["does"]);
    }

    #[test]
    fn no_classes() {
        let classifier = Classifier::new();

        assert!(classifier.is_empty());
        assert!(classifier.classify("anything").is_empty());
    }

    #[test]
    fn counts_in_first_occurrence_order() {
        let mut classifier = Classifier::new();
        classifier.add_class("conjunctions", build(&["and", "or", "but"]));
        let classifications = classifier.classify("or and but and or and");

        assert_eq!(
            classifications[0].counts(),
            [("or", 2), ("and", 3), ("but", 1)]
        );
    }

    #[test]
    fn counts_empty() {
        let classifier = classifier();

        assert!(classifier.classify("")[0].counts().is_empty());
    }

    #[cfg(feature = "std")]
    #[test]
    fn add_vocabulary() {
        let vocabulary = crate::Vocabulary::new("conjunctions", ["and", "or"].iter().copied());
        let mut classifier = Classifier::new();
        classifier.add_vocabulary(&vocabulary);

        let classifications = classifier.classify("this and that");
        assert_eq!(classifications[0].class(), "conjunctions");
        assert_eq!(classifications[0].words(), ["and"]);
    }
}
