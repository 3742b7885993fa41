//! Per-language word tables and the registry that holds them.
//!
//! A dictionary is an ordered list of exactly [`DICTIONARY_SIZE`] words
//! together with the language's unique prefix length: the number of leading
//! characters sufficient to tell any word apart from every other word in
//! the list. Reverse lookup keys on that prefix, so trailing typos or
//! punctuation past the prefix do not prevent a match. Prefixes are
//! measured in `char`s (Unicode scalar values), not bytes, so dictionaries
//! may contain multi-byte words.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::LazyLock;

use crate::codec;
use crate::error::{DictionaryError, MnemonicsError};
use crate::phrase::Phrase;

mod english;
mod german;

/// Number of words in every dictionary.
///
/// All dictionaries share the same size so that the same entropy always
/// produces the same phrase length regardless of language.
pub const DICTIONARY_SIZE: usize = 1626;

/// Unique prefix length of the built-in English dictionary, in `char`s.
pub const ENGLISH_UNIQUE_PREFIX_LEN: usize = 3;

/// Unique prefix length of the built-in German dictionary, in `char`s.
pub const GERMAN_UNIQUE_PREFIX_LEN: usize = 4;

/// The built-in English language identifier.
pub const ENGLISH: Language = Language(Cow::Borrowed("english"));

/// The built-in German language identifier.
pub const GERMAN: Language = Language(Cow::Borrowed("german"));

/// A type-safe identifier naming which dictionary to use.
///
/// Languages are opaque lookup keys: constructing one for an unregistered
/// language is fine and surfaces as `UnknownLanguage` at conversion time.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Language(Cow<'static, str>);

impl Language {
    /// Create a language identifier from an arbitrary name.
    pub fn new(name: impl Into<String>) -> Self {
        Language(Cow::Owned(name.into()))
    }

    /// The language name as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Language {
    fn from(name: &str) -> Self {
        Language::new(name)
    }
}

/// A validated, fixed-size word list for one language.
#[derive(Clone, Debug)]
pub struct Dictionary {
    words: Vec<String>,
    unique_prefix_len: usize,
}

impl Dictionary {
    /// Validate a word list and its unique prefix length.
    ///
    /// The list must contain exactly [`DICTIONARY_SIZE`] words, every word
    /// must be at least `unique_prefix_len` `char`s long, and no two words
    /// may share their first `unique_prefix_len` `char`s. A violation is a
    /// data error in the supplied table, not a runtime input error.
    ///
    /// # Arguments
    /// * `words` - The full word list in digit order.
    /// * `unique_prefix_len` - Disambiguating prefix length, in `char`s.
    ///
    /// # Returns
    /// `Ok(Dictionary)` on success, or the first invariant violation found.
    pub fn new<S: AsRef<str>>(
        words: &[S],
        unique_prefix_len: usize,
    ) -> Result<Self, DictionaryError> {
        if words.len() != DICTIONARY_SIZE {
            return Err(DictionaryError::WrongSize {
                expected: DICTIONARY_SIZE,
                got: words.len(),
            });
        }

        let mut prefixes = HashSet::with_capacity(DICTIONARY_SIZE);
        for (index, word) in words.iter().enumerate() {
            let word = word.as_ref();
            let prefix: String = word.chars().take(unique_prefix_len).collect();
            if prefix.chars().count() < unique_prefix_len {
                return Err(DictionaryError::ShortWord {
                    word: word.to_owned(),
                    index,
                });
            }
            if !prefixes.insert(prefix.clone()) {
                return Err(DictionaryError::PrefixConflict { prefix, index });
            }
        }

        Ok(Dictionary {
            words: words.iter().map(|w| w.as_ref().to_owned()).collect(),
            unique_prefix_len,
        })
    }

    /// The word at a dictionary index.
    ///
    /// # Panics
    /// Panics if `index >= DICTIONARY_SIZE`.
    pub fn word(&self, index: usize) -> &str {
        &self.words[index]
    }

    /// All words in index order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// This dictionary's unique prefix length, in `char`s.
    pub fn unique_prefix_len(&self) -> usize {
        self.unique_prefix_len
    }

    /// Find the index of the entry whose unique prefix matches `word`.
    ///
    /// Both sides are compared on their first `unique_prefix_len` `char`s;
    /// the construction invariant guarantees at most one match. Returns
    /// `None` for an unmatched word, including words shorter than the
    /// prefix length.
    pub fn lookup_prefix(&self, word: &str) -> Option<usize> {
        let n = self.unique_prefix_len;
        let prefix: Vec<char> = word.chars().take(n).collect();
        if prefix.len() < n {
            return None;
        }
        self.words
            .iter()
            .position(|w| w.chars().take(n).eq(prefix.iter().copied()))
    }
}

/// Holds one dictionary per supported language.
///
/// A registry is immutable once populated and may be shared by any number
/// of concurrent callers; no conversion path mutates it.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    dictionaries: HashMap<Language, Dictionary>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Registry::default()
    }

    /// Register a dictionary for a language, replacing any previous entry.
    pub fn register(&mut self, language: Language, dictionary: Dictionary) {
        self.dictionaries.insert(language, dictionary);
    }

    /// Look up the dictionary registered for a language.
    pub fn get(&self, language: &Language) -> Option<&Dictionary> {
        self.dictionaries.get(language)
    }

    /// The shared registry holding the built-in dictionaries.
    ///
    /// Built lazily on first use and read-only thereafter. The embedded
    /// word tables satisfy the construction invariants; this is re-verified
    /// by the dictionary tests.
    pub fn builtin() -> &'static Registry {
        static BUILTIN: LazyLock<Registry> = LazyLock::new(|| {
            let mut registry = Registry::new();
            let english = Dictionary::new(&english::WORDS, ENGLISH_UNIQUE_PREFIX_LEN)
                .expect("built-in english dictionary is well formed");
            let german = Dictionary::new(&german::WORDS, GERMAN_UNIQUE_PREFIX_LEN)
                .expect("built-in german dictionary is well formed");
            registry.register(ENGLISH, english);
            registry.register(GERMAN, german);
            registry
        });
        &BUILTIN
    }

    /// Convert entropy to a human-friendly phrase using one of this
    /// registry's dictionaries. The conversion is reversible.
    pub fn to_phrase(
        &self,
        entropy: &[u8],
        language: &Language,
    ) -> Result<Phrase, MnemonicsError> {
        if entropy.is_empty() {
            return Err(MnemonicsError::EmptyInput);
        }
        let dictionary = self
            .get(language)
            .ok_or_else(|| MnemonicsError::UnknownLanguage(language.to_string()))?;
        Ok(codec::int_to_phrase(codec::bytes_to_int(entropy), dictionary))
    }

    /// Convert a phrase back to the original entropy bytes.
    pub fn from_phrase(
        &self,
        phrase: &Phrase,
        language: &Language,
    ) -> Result<Vec<u8>, MnemonicsError> {
        if phrase.is_empty() {
            return Err(MnemonicsError::EmptyInput);
        }
        let dictionary = self
            .get(language)
            .ok_or_else(|| MnemonicsError::UnknownLanguage(language.to_string()))?;
        Ok(codec::int_to_bytes(codec::phrase_to_int(phrase, dictionary)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A synthetic but well-formed word list: 1626 distinct three-letter
    /// stems with a constant suffix.
    fn synthetic_words() -> Vec<String> {
        let mut words = Vec::with_capacity(DICTIONARY_SIZE);
        'outer: for a in b'a'..=b'z' {
            for b in b'a'..=b'z' {
                for c in b'a'..=b'z' {
                    words.push(format!("{}{}{}ish", a as char, b as char, c as char));
                    if words.len() == DICTIONARY_SIZE {
                        break 'outer;
                    }
                }
            }
        }
        words
    }

    #[test]
    fn test_english_dictionary_well_formed() {
        let dict = Dictionary::new(&english::WORDS, ENGLISH_UNIQUE_PREFIX_LEN).unwrap();
        assert_eq!(dict.words().len(), DICTIONARY_SIZE);
        assert_eq!(dict.unique_prefix_len(), 3);
        assert_eq!(ENGLISH.as_str(), "english");
    }

    #[test]
    fn test_german_dictionary_well_formed() {
        let dict = Dictionary::new(&german::WORDS, GERMAN_UNIQUE_PREFIX_LEN).unwrap();
        assert_eq!(dict.words().len(), DICTIONARY_SIZE);
        assert_eq!(dict.unique_prefix_len(), 4);
        assert_eq!(GERMAN.as_str(), "german");
    }

    #[test]
    fn test_german_dictionary_has_multibyte_prefixes() {
        // The prefix window of the german table must exercise non-ASCII
        // chars, otherwise char-unit matching degenerates to byte matching.
        let multibyte = german::WORDS
            .iter()
            .filter(|w| w.chars().take(GERMAN_UNIQUE_PREFIX_LEN).any(|c| !c.is_ascii()))
            .count();
        assert!(multibyte > 0);
    }

    #[test]
    fn test_lookup_prefix_exact_word() {
        let registry = Registry::builtin();
        let dict = registry.get(&ENGLISH).unwrap();
        for index in [0, 1, 255, 256, 1625] {
            assert_eq!(dict.lookup_prefix(dict.word(index)), Some(index));
        }
    }

    #[test]
    fn test_lookup_prefix_ignores_trailing_characters() {
        let dict = Registry::builtin().get(&ENGLISH).unwrap();
        let mangled = format!("{}zzz!", dict.word(42));
        assert_eq!(dict.lookup_prefix(&mangled), Some(42));
    }

    #[test]
    fn test_lookup_prefix_multibyte_chars() {
        let dict = Registry::builtin().get(&GERMAN).unwrap();
        let (index, word) = german::WORDS
            .iter()
            .enumerate()
            .find(|(_, w)| w.chars().take(GERMAN_UNIQUE_PREFIX_LEN).any(|c| !c.is_ascii()))
            .unwrap();
        // Exactly the four-char prefix must be enough, counted in chars.
        let prefix: String = word.chars().take(GERMAN_UNIQUE_PREFIX_LEN).collect();
        assert_eq!(dict.lookup_prefix(&prefix), Some(index));
    }

    #[test]
    fn test_lookup_prefix_short_word_matches_nothing() {
        let dict = Registry::builtin().get(&ENGLISH).unwrap();
        assert_eq!(dict.lookup_prefix("ab"), None);
        assert_eq!(dict.lookup_prefix(""), None);
    }

    #[test]
    fn test_dictionary_rejects_wrong_size() {
        let err = Dictionary::new(&["abc", "def"], 3).unwrap_err();
        assert!(matches!(
            err,
            DictionaryError::WrongSize { expected: DICTIONARY_SIZE, got: 2 }
        ));
    }

    #[test]
    fn test_dictionary_rejects_short_word() {
        let mut words = synthetic_words();
        words[7] = "xy".to_owned();
        let err = Dictionary::new(&words, 3).unwrap_err();
        assert!(matches!(err, DictionaryError::ShortWord { index: 7, .. }));
    }

    #[test]
    fn test_dictionary_rejects_prefix_conflict() {
        let mut words = synthetic_words();
        // Same three-char stem as index 3, different suffix.
        words[9] = format!("{}ward", &words[3][..3]);
        let err = Dictionary::new(&words, 3).unwrap_err();
        assert!(matches!(err, DictionaryError::PrefixConflict { index: 9, .. }));
    }

    #[test]
    fn test_registry_with_synthetic_dictionary_roundtrip() {
        let mut registry = Registry::new();
        let language = Language::new("synthetic");
        registry.register(language.clone(), Dictionary::new(&synthetic_words(), 3).unwrap());

        let entropy = [0u8, 7, 255, 0, 0, 128];
        let phrase = registry.to_phrase(&entropy, &language).unwrap();
        let recovered = registry.from_phrase(&phrase, &language).unwrap();
        assert_eq!(recovered, entropy);
    }

    #[test]
    fn test_empty_registry_knows_no_language() {
        let registry = Registry::new();
        let err = registry.to_phrase(&[1], &ENGLISH).unwrap_err();
        assert!(matches!(err, MnemonicsError::UnknownLanguage(_)));
    }
}
