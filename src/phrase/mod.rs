//! The human readable form of entropy.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// An ordered sequence of dictionary words representing a piece of entropy.
///
/// Word order is significant: the least significant digit of the underlying
/// bijective integer comes first. Most typically a phrase is shown to the
/// user via its `Display` impl, which joins the words with single spaces.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Phrase(Vec<String>);

impl Phrase {
    /// Create an empty phrase.
    pub fn new() -> Self {
        Phrase(Vec::new())
    }

    /// The words of the phrase, least significant first.
    pub fn words(&self) -> &[String] {
        &self.0
    }

    /// Number of words in the phrase.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the phrase contains no words.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

impl From<Vec<String>> for Phrase {
    fn from(words: Vec<String>) -> Self {
        Phrase(words)
    }
}

impl<S: Into<String>> FromIterator<S> for Phrase {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Phrase(iter.into_iter().map(Into::into).collect())
    }
}

impl FromStr for Phrase {
    type Err = Infallible;

    /// Split a transcribed phrase on whitespace. No normalization is
    /// applied; an empty or all-whitespace string yields an empty phrase.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.split_whitespace().collect())
    }
}
